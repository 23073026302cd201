//! GeoJSON feature collections and the small layer of operations built on them.
//!
//! The crate holds the data model ([`GeoCollection`], [`GeoFeature`], [`Geometry`], [`GeoValue`]),
//! typed views of a collection by geometry type, property access on single features and the
//! GeoJSON boundary that converts text into the model and back.

mod error;
mod model;
pub mod geojson;

pub use error::*;
pub use model::*;
pub use geojson::*;
