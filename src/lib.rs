//! Procedurally drawn launcher icon: a tractor inside a circular badge.

pub mod config;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod render;
pub mod writer;

pub use config::IconConfig;
pub use error::{IconError, Result};
pub use render::render_icon;
pub use writer::write_png;

/// Render the icon described by `config` and write it to `config.output`.
pub fn generate(config: &IconConfig) -> Result<()> {
    let pixmap = render_icon(config)?;
    write_png(&pixmap, &config.output)
}
