//! Shared test utilities for integration and unit tests

use std::cell::RefCell;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use crate::acquire::ImageSource;
use crate::error::{PanoramaError, Result};
use crate::side::Side;

// ============================================================================
// Image sources
// ============================================================================

/// Encode a small JPEG whose colour depends on `seed`.
pub fn sample_jpeg(seed: u8) -> Vec<u8> {
    let img = RgbImage::from_fn(16, 16, |x, y| Rgb([seed, (x * 15) as u8, (y * 15) as u8]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .expect("in-memory JPEG encode");
    buf
}

/// Serves a generated JPEG for every side and records what was asked for.
#[derive(Default)]
pub struct JpegSource {
    body: Option<Vec<u8>>,
    requests: RefCell<Vec<&'static str>>,
}

impl JpegSource {
    /// Serve `body` verbatim instead of a generated image.
    pub fn with_body(body: Vec<u8>) -> Self {
        Self {
            body: Some(body),
            requests: RefCell::default(),
        }
    }

    /// Side keys requested so far, in order.
    pub fn requests(&self) -> Vec<&'static str> {
        self.requests.borrow().clone()
    }
}

impl ImageSource for JpegSource {
    fn fetch(&self, _location: &str, side: &Side) -> Result<Vec<u8>> {
        let mut requests = self.requests.borrow_mut();
        requests.push(side.key);
        Ok(match &self.body {
            Some(body) => body.clone(),
            None => sample_jpeg(requests.len() as u8 * 40),
        })
    }
}

/// Succeeds until the `fail_at`-th request (0-based), which is rejected
/// with HTTP 403.
pub struct FailingSource {
    fail_at: usize,
    served: RefCell<usize>,
}

impl FailingSource {
    pub fn on(fail_at: usize) -> Self {
        Self {
            fail_at,
            served: RefCell::new(0),
        }
    }
}

impl ImageSource for FailingSource {
    fn fetch(&self, _location: &str, side: &Side) -> Result<Vec<u8>> {
        let mut served = self.served.borrow_mut();
        if *served == self.fail_at {
            return Err(PanoramaError::Provider {
                side: side.name,
                status: reqwest::StatusCode::FORBIDDEN,
            });
        }
        *served += 1;
        Ok(sample_jpeg(*served as u8))
    }
}

// ============================================================================
// Filesystem helpers
// ============================================================================

/// Sorted entry names of a directory.
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read_dir")
        .map(|e| e.expect("dir entry").file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
