//! Cube-map download from the Street View Static API
//!
//! Six requests, one per [`Side`], issued strictly one after another. Each
//! response body is written verbatim to `<key>.jpg` in a fresh scratch
//! directory, which is then normalized to PNG in place.

use std::path::{Path, PathBuf};

use crate::config::StreetViewConfig;
use crate::error::{PanoramaError, Result};
use crate::normalize::{self, SOURCE_FORMAT, TARGET_FORMAT};
use crate::side::{SIDES, Side};
use crate::workdir;

/// Anything that can produce the raw image for one face of a location.
pub trait ImageSource {
    /// Fetch the source-format bytes for `side` at `location`.
    ///
    /// Must fail rather than return placeholder imagery.
    fn fetch(&self, location: &str, side: &Side) -> Result<Vec<u8>>;
}

/// Blocking Street View client.
///
/// Owns a current-thread runtime so callers stay synchronous; every request
/// is driven to completion before the next one starts.
pub struct StreetViewClient {
    config: StreetViewConfig,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl StreetViewClient {
    pub fn new(config: StreetViewConfig) -> Result<Self> {
        if config.api_key.as_deref().is_none_or(str::is_empty) {
            tracing::warn!(
                "No imagery API key configured (set {}); requests will be rejected",
                crate::config::API_KEY_ENV
            );
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(PanoramaError::Runtime)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            config,
            client,
            runtime,
        })
    }

    /// Query parameters for one face, in the order the provider documents them.
    pub fn query_params(&self, location: &str, side: &Side) -> Vec<(&'static str, String)> {
        vec![
            ("size", self.config.size_param()),
            ("location", location.to_string()),
            ("fov", self.config.fov.to_string()),
            ("heading", side.heading.to_string()),
            ("pitch", side.pitch.to_string()),
            ("key", self.config.api_key.clone().unwrap_or_default()),
        ]
    }

    async fn fetch_async(&self, location: &str, side: &Side) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&self.query_params(location, side))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PanoramaError::Provider {
                side: side.name,
                status,
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

impl ImageSource for StreetViewClient {
    fn fetch(&self, location: &str, side: &Side) -> Result<Vec<u8>> {
        tracing::debug!(
            "Requesting {} (heading {}, pitch {})",
            side.name,
            side.heading,
            side.pitch
        );
        self.runtime.block_on(self.fetch_async(location, side))
    }
}

/// Download all six faces for `location` into a new scratch directory under
/// `base_dir` and convert them to the target format.
///
/// On failure the scratch directory is left behind as-is; callers get its
/// path only on success.
pub fn fetch_cube_map(
    source: &dyn ImageSource,
    location: &str,
    base_dir: &Path,
) -> Result<PathBuf> {
    let dir = workdir::create_unique_dir(base_dir)?;
    tracing::info!(
        "Fetching panorama for '{}' into {}",
        location,
        dir.display()
    );

    if let Err(e) = populate(source, location, &dir) {
        tracing::warn!("Acquisition failed; leaving {} in place", dir.display());
        return Err(e);
    }

    Ok(dir)
}

/// Download, check and normalize the six faces inside `dir`.
fn populate(source: &dyn ImageSource, location: &str, dir: &Path) -> Result<()> {
    download_sides(source, location, dir)?;

    let found = count_source_images(dir)?;
    if found != SIDES.len() {
        return Err(PanoramaError::MissingImages {
            expected: SIDES.len(),
            found,
        });
    }

    let converted = normalize::normalize_dir(dir, SOURCE_FORMAT, TARGET_FORMAT)?;
    tracing::info!("Normalized {} images", converted);
    Ok(())
}

fn download_sides(source: &dyn ImageSource, location: &str, dir: &Path) -> Result<()> {
    let ext = normalize::extension_of(SOURCE_FORMAT);
    for side in &SIDES {
        let bytes = source.fetch(location, side)?;
        let path = dir.join(format!("{}.{}", side.key, ext));
        std::fs::write(&path, &bytes).map_err(|e| PanoramaError::io(&path, e))?;
        tracing::debug!("Saved {} ({} bytes)", path.display(), bytes.len());
    }
    Ok(())
}

fn count_source_images(dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir).map_err(|e| PanoramaError::io(dir, e))?;
    let mut count = 0;
    for entry in entries {
        let path = entry.map_err(|e| PanoramaError::io(dir, e))?.path();
        if path.is_file() && normalize::has_format_extension(&path, SOURCE_FORMAT) {
            count += 1;
        }
    }
    Ok(count)
}
