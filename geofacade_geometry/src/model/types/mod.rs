// Geometric building blocks of a feature: positions, rings and the six GeoJSON geometry kinds.
// They share `GeometryTrait` (validation, coordinate JSON, bounds, projection) and
// `CompositeGeometryTrait` (vector-like access to their parts), and convert to and from the
// `geo` crate types used by the measurement and transformation backends.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
