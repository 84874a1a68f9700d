use std::path::PathBuf;

/// Everything that can go wrong while producing the icon.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Cannot allocate a {size}x{size} canvas")]
    Canvas { size: u32 },
    #[error("Degenerate shape: {0}")]
    Shape(&'static str),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;
