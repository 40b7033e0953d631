//! End-to-end run: fetch → normalize → assemble → archive → cleanup.

use std::path::{Path, PathBuf};

use crate::acquire::{self, ImageSource};
use crate::archive;
use crate::error::{PanoramaError, Result};
use crate::pack;
use crate::workdir;

/// User input for a single run.
#[derive(Debug, Clone)]
pub struct PackRequest {
    /// Place name or `lat, lng` pair, anything the provider accepts.
    pub location: String,
    /// Archive base name; the output is `<pack_name>.zip`.
    pub pack_name: String,
    /// In-game description, may be empty.
    pub description: String,
}

impl PackRequest {
    /// File name of the produced archive.
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", self.pack_name)
    }

    /// Reject names that are empty or would escape the output directory.
    pub fn validate(&self) -> Result<()> {
        let name = self.pack_name.as_str();
        if name.trim().is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(PanoramaError::InvalidPackName(self.pack_name.clone()));
        }
        Ok(())
    }
}

/// Run the whole pipeline, using `output_dir` for both scratch directories
/// and the final archive. Returns the archive path.
///
/// Every step must succeed before the next runs. Scratch directories are
/// only removed on the success path: a failed fetch leaves its working
/// directory, a failed archive step leaves the pack directory.
pub fn run(source: &dyn ImageSource, request: &PackRequest, output_dir: &Path) -> Result<PathBuf> {
    request.validate()?;

    let image_dir = acquire::fetch_cube_map(source, &request.location, output_dir)?;
    let pack_dir = pack::assemble_pack(&request.description, &image_dir, output_dir)?;

    let archive_path = output_dir.join(request.archive_file_name());
    if let Err(e) = archive::write_zip(&pack_dir, &archive_path) {
        tracing::warn!(
            "Archiving failed; leaving {} for inspection",
            pack_dir.display()
        );
        return Err(e);
    }

    workdir::remove_dir(&pack_dir)?;
    Ok(archive_path)
}
