//! Panopack Core - street-level panorama to resource pack pipeline
//!
//! Turns a location into a Minecraft resource pack whose title-screen
//! background is a 360° view of that place.
//!
//! # Architecture
//!
//! - [`acquire`] - Six-face cube-map download through an [`ImageSource`]
//! - [`normalize`] - In-place JPEG → PNG conversion
//! - [`pack`] - Resource pack directory layout and `pack.mcmeta`
//! - [`archive`] - Zip output
//! - [`pipeline`] - The linear run tying the stages together

pub mod acquire;
pub mod archive;
pub mod config;
pub mod error;
#[cfg(test)]
mod integration;
pub mod normalize;
pub mod pack;
pub mod pipeline;
pub mod side;
#[cfg(test)]
pub mod test_utils;
pub mod workdir;

pub use acquire::{ImageSource, StreetViewClient, fetch_cube_map};
pub use config::{Config, StreetViewConfig};
pub use error::{PanoramaError, Result};
pub use pack::{PackMetadata, assemble_pack};
pub use pipeline::{PackRequest, run};
pub use side::{SIDES, Side};
