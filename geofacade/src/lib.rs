//! A capability-scoped facade over GeoJSON feature collections.
//!
//! The data model, classification and property access live in [`geofacade_geometry`]. This
//! crate adds measurement, transformation, predicate and clustering capabilities as traits, a
//! default [`GeoBackend`] implementing them, and a [`Facade`] that binds a backend to a
//! [`FacadeConfig`].

mod backend;
mod clustering;
mod config;
mod facade;
mod measurement;
mod predicates;
mod transformation;
pub mod units;

pub use backend::*;
pub use clustering::*;
pub use config::*;
pub use facade::*;
pub use measurement::*;
pub use predicates::*;
pub use transformation::*;
pub use units::Units;

pub use geofacade_geometry as geometry;
