use tiny_skia::{FillRule, Path, Pixmap, Stroke, Transform};

use crate::config::IconConfig;
use crate::error::{IconError, Result};
use crate::geometry::{Badge, Disc, RoundedRect, TractorLayout, Wheel};
use crate::palette::{self, Rgb};

/// Draw the tractor badge onto a fresh transparent canvas.
pub fn render_icon(config: &IconConfig) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(config.size, config.size)
        .ok_or(IconError::Canvas { size: config.size })?;

    let badge = Badge::new(config.size, config.margin, config.border_width);
    let layout = TractorLayout::new(config.size);
    log::debug!("Badge: {:?}", badge);
    log::debug!("Tractor layout: {:?}", layout);

    // Back to front
    fill_disc(&mut pixmap, &badge.disc, palette::BADGE, "badge")?;
    stroke_disc(&mut pixmap, &badge.border_circle(), badge.border_width, palette::BORDER)?;

    fill_rounded(&mut pixmap, &layout.body, palette::BODY, "body")?;
    fill_rounded(&mut pixmap, &layout.cab, palette::CAB, "cab")?;
    fill_rounded(&mut pixmap, &layout.window, palette::WINDOW, "window")?;

    let grille = layout.grille.to_rect().ok_or(IconError::Shape("grille"))?;
    pixmap.fill_rect(grille, &palette::TIRE.paint(), Transform::identity(), None);

    draw_wheel(&mut pixmap, &layout.rear_wheel, "rear wheel")?;
    draw_wheel(&mut pixmap, &layout.front_wheel, "front wheel")?;

    fill_disc(&mut pixmap, &layout.headlight, palette::HEADLIGHT, "headlight")?;

    Ok(pixmap)
}

/// Tire disc with its hub on top.
pub fn draw_wheel(pixmap: &mut Pixmap, wheel: &Wheel, name: &'static str) -> Result<()> {
    fill_disc(pixmap, &wheel.tire, palette::TIRE, name)?;
    fill_disc(pixmap, &wheel.hub(), palette::HUB, name)
}

fn fill_disc(pixmap: &mut Pixmap, disc: &Disc, color: Rgb, name: &'static str) -> Result<()> {
    let path = disc.to_path().ok_or(IconError::Shape(name))?;
    fill(pixmap, &path, color);
    Ok(())
}

fn fill_rounded(
    pixmap: &mut Pixmap,
    rect: &RoundedRect,
    color: Rgb,
    name: &'static str,
) -> Result<()> {
    let path = rect.to_path().ok_or(IconError::Shape(name))?;
    fill(pixmap, &path, color);
    Ok(())
}

fn stroke_disc(pixmap: &mut Pixmap, disc: &Disc, width: f32, color: Rgb) -> Result<()> {
    let path = disc.to_path().ok_or(IconError::Shape("border"))?;
    let stroke = Stroke {
        width,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &color.paint(), &stroke, Transform::identity(), None);
    Ok(())
}

fn fill(pixmap: &mut Pixmap, path: &Path, color: Rgb) {
    pixmap.fill_path(path, &color.paint(), FillRule::Winding, Transform::identity(), None);
}
