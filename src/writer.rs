use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tiny_skia::Pixmap;

use crate::error::{IconError, Result};

/// Copy the canvas into a straight-alpha RGBA image.
pub fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    // Buffer length always matches width * height * 4
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .unwrap_or_else(|| RgbaImage::new(pixmap.width(), pixmap.height()))
}

pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    to_rgba_image(pixmap).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode the canvas and write it to `path`, creating parent directories.
///
/// The bytes go to a hidden sibling first and are renamed into place, so the
/// destination holds either the old file or the complete new one.
pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| IconError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let bytes = encode_png(pixmap)?;
    let tmp = temp_path(path);
    log::debug!("Writing {} bytes via {}", bytes.len(), tmp.display());

    let result = fs::write(&tmp, &bytes).and_then(|_| fs::rename(&tmp, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp);
        return Err(IconError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    log::info!("Wrote {}", path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}
