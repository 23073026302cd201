//! The GeoJSON boundary of the crate.
//!
//! Text is parsed into `serde_json::Value` and converted into [`crate::GeoCollection`],
//! [`crate::GeoFeature`] and [`crate::Geometry`] by explicit functions; every failure surfaces as a
//! [`crate::GeoError::Parse`] or, for structurally invalid geometry, a
//! [`crate::GeoError::InvalidGeometry`]. The reverse direction lives on the model types (`to_json`).

mod parse;
mod read;

pub use parse::*;
pub use read::*;
