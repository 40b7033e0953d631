//! Zip output for an assembled pack directory.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::{PanoramaError, Result};

/// Zip the contents of `src_dir` (not the directory itself) into
/// `archive_path`, replacing any existing file.
///
/// Entries are written in sorted order with `/`-separated names relative to
/// `src_dir`; directories get their own entries.
pub fn write_zip(src_dir: &Path, archive_path: &Path) -> Result<()> {
    let file = File::create(archive_path).map_err(|e| PanoramaError::io(archive_path, e))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0usize;
    for entry in WalkDir::new(src_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src_dir).to_path_buf();
            PanoramaError::io(path, e.into())
        })?;
        let name = entry_name(src_dir, entry.path());

        if entry.file_type().is_dir() {
            zip.add_directory(format!("{}/", name), options)?;
        } else if entry.file_type().is_file() {
            zip.start_file(name, options)?;
            let bytes = std::fs::read(entry.path())
                .map_err(|e| PanoramaError::io(entry.path(), e))?;
            zip.write_all(&bytes)
                .map_err(|e| PanoramaError::io(archive_path, e))?;
            entries += 1;
        }
    }

    zip.finish()?;
    tracing::info!("Wrote {} ({} files)", archive_path.display(), entries);
    Ok(())
}

/// Archive name for `path` relative to `root`, always `/`-separated.
fn entry_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
