use crate::GeoBackend;
use anyhow::Result;
use geo::{Buffer, ConvexHull, CoordsIter, Simplify, unary_union};
use geofacade_geometry::{GeoCollection, GeoError, Geometry, LineStringGeometry, MultiLineStringGeometry};

/// Operations that derive new geometry from existing geometry.
pub trait Transformation {
	/// Smallest convex polygon containing every position of every feature. `None` for an empty
	/// collection.
	fn convex_hull(&self, collection: &GeoCollection) -> Option<Geometry>;

	/// Merges polygons and multi polygons into one multi polygon. Any other geometry type fails
	/// with [`GeoError::InvalidGeometry`].
	fn union(&self, geometries: &[&Geometry]) -> Result<Geometry>;

	/// Projects WGS84 longitude/latitude into spherical web mercator meters.
	fn to_mercator(&self, geometry: &Geometry) -> Geometry;

	/// Ramer-Douglas-Peucker simplification of lines and rings with a tolerance in coordinate
	/// units. Points are returned unchanged.
	fn simplify(&self, geometry: &Geometry, epsilon: f64) -> Geometry;

	/// The area within `distance` coordinate units of the geometry, as a multi polygon. A negative
	/// distance shrinks polygons.
	fn buffer(&self, geometry: &Geometry, distance: f64) -> Geometry;
}

fn simplify_geometry(geometry: &Geometry, epsilon: f64) -> Geometry {
	match geometry {
		Geometry::Point(_) | Geometry::MultiPoint(_) => geometry.clone(),
		Geometry::LineString(g) => Geometry::LineString(LineStringGeometry::from(g.to_geo().simplify(epsilon))),
		Geometry::MultiLineString(g) => Geometry::MultiLineString(MultiLineStringGeometry(
			g.0.iter()
				.map(|l| LineStringGeometry::from(l.to_geo().simplify(epsilon)))
				.collect(),
		)),
		Geometry::Polygon(g) => Geometry::from(g.to_geo().simplify(epsilon)),
		Geometry::MultiPolygon(g) => Geometry::from(g.to_geo().simplify(epsilon)),
		Geometry::Collection(members) => {
			Geometry::Collection(members.iter().map(|m| simplify_geometry(m, epsilon)).collect())
		}
	}
}

impl Transformation for GeoBackend {
	fn convex_hull(&self, collection: &GeoCollection) -> Option<Geometry> {
		let coords: Vec<geo::Coord> = collection
			.iter()
			.filter_map(|f| f.geometry.as_ref())
			.flat_map(|g| g.to_geo().coords_iter().collect::<Vec<_>>())
			.collect();
		if coords.is_empty() {
			return None;
		}
		Some(Geometry::from(geo::MultiPoint::from(coords).convex_hull()))
	}

	fn union(&self, geometries: &[&Geometry]) -> Result<Geometry> {
		let mut polygons: Vec<geo::Polygon> = Vec::new();
		for geometry in geometries {
			match geometry {
				Geometry::Polygon(g) => polygons.push(g.to_geo()),
				Geometry::MultiPolygon(g) => polygons.extend(g.to_geo()),
				other => {
					return Err(GeoError::invalid_geometry(format!("cannot union a {}", other.type_name())).into());
				}
			}
		}
		Ok(Geometry::from(unary_union(&polygons)))
	}

	fn to_mercator(&self, geometry: &Geometry) -> Geometry {
		geometry.to_mercator()
	}

	fn simplify(&self, geometry: &Geometry, epsilon: f64) -> Geometry {
		simplify_geometry(geometry, epsilon)
	}

	fn buffer(&self, geometry: &Geometry, distance: f64) -> Geometry {
		Geometry::from(geometry.to_geo().buffer(distance))
	}
}
