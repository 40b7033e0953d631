//! In-place raster format conversion.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{PanoramaError, Result};

/// Format the imagery provider returns.
pub const SOURCE_FORMAT: ImageFormat = ImageFormat::Jpeg;
/// Format the title screen loads.
pub const TARGET_FORMAT: ImageFormat = ImageFormat::Png;

/// Primary file extension for a format (`jpg`, `png`).
pub fn extension_of(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("bin")
}

/// Whether `path` carries one of `format`'s extensions (case-insensitive).
pub fn has_format_extension(path: &Path, format: ImageFormat) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            format
                .extensions_str()
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Convert every `from` image in `dir` to `to`, deleting each source after
/// its replacement is written.
///
/// Files with other extensions are left alone. Returns how many files were
/// converted, so a second pass over the same directory returns 0.
pub fn normalize_dir(dir: &Path, from: ImageFormat, to: ImageFormat) -> Result<usize> {
    let mut sources: Vec<PathBuf> = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| PanoramaError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| PanoramaError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && has_format_extension(&path, from) {
            sources.push(path);
        }
    }

    for source in &sources {
        let target = source.with_extension(extension_of(to));
        convert_file(source, &target, from, to)?;
        std::fs::remove_file(source).map_err(|e| PanoramaError::io(source, e))?;
        tracing::debug!("Converted {} -> {}", source.display(), target.display());
    }

    Ok(sources.len())
}

/// Decode `source` strictly as `from` and write it to `target` as `to`.
fn convert_file(source: &Path, target: &Path, from: ImageFormat, to: ImageFormat) -> Result<()> {
    let bytes = std::fs::read(source).map_err(|e| PanoramaError::io(source, e))?;
    let img = image::load_from_memory_with_format(&bytes, from)
        .map_err(|e| PanoramaError::decode(source, e))?;
    img.save_with_format(target, to)
        .map_err(|e| PanoramaError::encode(target, e))
}
