//! Resource pack assembly
//!
//! Lays out a directory the game loads as a resource pack:
//!
//! ```text
//! pack.mcmeta
//! assets/minecraft/textures/gui/title/background/panorama_0.png ... panorama_5.png
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PanoramaError, Result};
use crate::workdir;

/// Metadata file name at the pack root.
pub const METADATA_FILE: &str = "pack.mcmeta";

/// Where the title screen looks for its panorama faces.
pub const BACKGROUND_PATH: [&str; 6] = [
    "assets",
    "minecraft",
    "textures",
    "gui",
    "title",
    "background",
];

/// Declared pack format.
pub const PACK_FORMAT: u32 = 34;
/// Lowest supported pack format.
pub const MIN_FORMAT: u32 = 1;
/// Highest supported pack format.
pub const MAX_FORMAT: u32 = 75;

/// Contents of `pack.mcmeta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackMetadata {
    pub pack: PackSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackSection {
    pub pack_format: u32,
    pub min_format: u32,
    pub max_format: u32,
    pub supported_formats: SupportedFormats,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedFormats {
    pub min_inclusive: u32,
    pub max_inclusive: u32,
}

impl PackMetadata {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            pack: PackSection {
                pack_format: PACK_FORMAT,
                min_format: MIN_FORMAT,
                max_format: MAX_FORMAT,
                supported_formats: SupportedFormats {
                    min_inclusive: MIN_FORMAT,
                    max_inclusive: MAX_FORMAT,
                },
                description: description.into(),
            },
        }
    }

    /// Serialized form. The description is escaped, so any text is safe.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `<pack_dir>/assets/minecraft/textures/gui/title/background`
pub fn background_dir(pack_dir: &Path) -> PathBuf {
    BACKGROUND_PATH
        .iter()
        .fold(pack_dir.to_path_buf(), |p, c| p.join(c))
}

/// Build a pack directory under `base_dir` from the images in `image_dir`,
/// then delete `image_dir`.
///
/// Two phases, not atomic: every regular file is copied first, and the source
/// directory is removed only once all copies succeeded. A failed copy leaves
/// both directories in place.
pub fn assemble_pack(description: &str, image_dir: &Path, base_dir: &Path) -> Result<PathBuf> {
    let pack_dir = workdir::create_unique_dir(base_dir)?;
    tracing::info!("Assembling pack in {}", pack_dir.display());

    let dest = background_dir(&pack_dir);
    std::fs::create_dir_all(&dest).map_err(|e| PanoramaError::io(&dest, e))?;

    let metadata_path = pack_dir.join(METADATA_FILE);
    let json = PackMetadata::new(description).to_json()?;
    std::fs::write(&metadata_path, json).map_err(|e| PanoramaError::io(&metadata_path, e))?;

    let copied = copy_images(image_dir, &dest)?;
    tracing::debug!("Copied {} images into {}", copied, dest.display());

    workdir::remove_dir(image_dir)?;

    Ok(pack_dir)
}

/// Copy regular files from `src` to `dest`, keeping names. Sub-directories
/// are skipped.
fn copy_images(src: &Path, dest: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(src).map_err(|e| PanoramaError::io(src, e))?;
    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| PanoramaError::io(src, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let target = dest.join(entry.file_name());
        std::fs::copy(&path, &target).map_err(|e| PanoramaError::io(&path, e))?;
        copied += 1;
    }
    Ok(copied)
}
