#![allow(clippy::module_inception)]

mod classify;
mod collection;
mod crs;
mod feature;
mod geometry;
mod properties;
mod property_access;
mod types;
mod value;

pub use classify::*;
pub use collection::*;
pub use crs::*;
pub use feature::*;
pub use geometry::*;
pub use properties::*;
pub use types::*;
pub use value::*;
