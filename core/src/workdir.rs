//! Uniquely named scratch directories.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::{PanoramaError, Result};

/// Prefix shared by every scratch directory.
pub const TEMP_PREFIX: &str = "temp_";

/// Attempts before giving up on finding an unused name.
const MAX_ATTEMPTS: usize = 16;

/// Create a fresh `temp_<8 hex>` directory under `base`.
///
/// Uses `create_dir` so an existing directory is never reused; on a name
/// collision a new random suffix is drawn.
pub fn create_unique_dir(base: &Path) -> Result<PathBuf> {
    let mut rng = rand::rng();
    for _ in 0..MAX_ATTEMPTS {
        let suffix: u32 = rng.random();
        let path = base.join(format!("{}{:08x}", TEMP_PREFIX, suffix));
        match std::fs::create_dir(&path) {
            Ok(()) => {
                tracing::debug!("Created scratch directory {}", path.display());
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(PanoramaError::io(&path, e)),
        }
    }
    let exhausted = std::io::Error::new(ErrorKind::AlreadyExists, "no free scratch name");
    Err(PanoramaError::io(base, exhausted))
}

/// Recursively delete a scratch directory.
pub fn remove_dir(path: &Path) -> Result<()> {
    std::fs::remove_dir_all(path).map_err(|e| PanoramaError::io(path, e))?;
    tracing::debug!("Removed {}", path.display());
    Ok(())
}
