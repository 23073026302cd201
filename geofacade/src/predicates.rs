use crate::GeoBackend;
use geo::Intersects;
use geofacade_geometry::{Geometry, PointGeometry};

/// Spatial relationships between geometries.
pub trait Predicates {
	/// Whether the point lies inside or on the boundary of a polygon or multi polygon, or of any
	/// such member of a geometry collection. Holes are outside. Always `false` for non-areal
	/// geometry.
	fn point_in_polygon(&self, point: &PointGeometry, geometry: &Geometry) -> bool;

	fn intersects(&self, a: &Geometry, b: &Geometry) -> bool;
}

impl Predicates for GeoBackend {
	fn point_in_polygon(&self, point: &PointGeometry, geometry: &Geometry) -> bool {
		let p = point.to_geo();
		match geometry {
			Geometry::Polygon(g) => g.to_geo().intersects(&p),
			Geometry::MultiPolygon(g) => g.to_geo().intersects(&p),
			Geometry::Collection(members) => members.iter().any(|m| self.point_in_polygon(point, m)),
			_ => false,
		}
	}

	fn intersects(&self, a: &Geometry, b: &Geometry) -> bool {
		a.to_geo().intersects(&b.to_geo())
	}
}
