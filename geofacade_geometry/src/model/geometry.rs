use super::*;
use anyhow::Result;
use serde_json::Value;
use std::fmt::{Debug, Display};

/// The geometry tag: which GeoJSON kind a geometry is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeometryType {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	/// The six kinds with a typed view on [`GeoCollection`].
	pub const SIMPLE: [GeometryType; 6] = [
		GeometryType::Point,
		GeometryType::MultiPoint,
		GeometryType::LineString,
		GeometryType::MultiLineString,
		GeometryType::Polygon,
		GeometryType::MultiPolygon,
	];

	pub const ALL: [GeometryType; 7] = [
		GeometryType::Point,
		GeometryType::MultiPoint,
		GeometryType::LineString,
		GeometryType::MultiLineString,
		GeometryType::Polygon,
		GeometryType::MultiPolygon,
		GeometryType::GeometryCollection,
	];

	/// The GeoJSON `type` string.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::LineString => "LineString",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
		}
	}

	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		GeometryType::ALL.into_iter().find(|t| t.as_str() == name)
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	Collection(Vec<Geometry>),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: Vec<Vec<Vec<T>>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	#[must_use]
	pub fn new_collection(members: Vec<Geometry>) -> Self {
		Self::Collection(members)
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
			Geometry::Collection(_) => GeometryType::GeometryCollection,
		}
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.geometry_type().as_str()
	}

	/// Polygons with more than one ring, and multi polygons with at least one such face. Members
	/// of a collection are not looked at.
	#[must_use]
	pub fn has_holes(&self) -> bool {
		match self {
			Geometry::Polygon(g) => g.has_holes(),
			Geometry::MultiPolygon(g) => g.has_holes(),
			_ => false,
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::Collection(members) => members.iter().try_for_each(Geometry::verify),
		}
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
			Geometry::Collection(members) => members
				.iter()
				.filter_map(Geometry::compute_bounds)
				.reduce(|a, b| [a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]),
		}
	}

	#[must_use]
	pub fn to_mercator(&self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::Point(g.to_mercator()),
			Geometry::LineString(g) => Geometry::LineString(g.to_mercator()),
			Geometry::Polygon(g) => Geometry::Polygon(g.to_mercator()),
			Geometry::MultiPoint(g) => Geometry::MultiPoint(g.to_mercator()),
			Geometry::MultiLineString(g) => Geometry::MultiLineString(g.to_mercator()),
			Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.to_mercator()),
			Geometry::Collection(members) => Geometry::Collection(members.iter().map(Geometry::to_mercator).collect()),
		}
	}

	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_)
			| Geometry::MultiLineString(_)
			| Geometry::MultiPolygon(_)
			| Geometry::Collection(_) => self,
		}
	}

	/// The GeoJSON geometry object `{"type": ..., "coordinates": ...}`, or
	/// `{"type": "GeometryCollection", "geometries": [...]}` for a collection.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let coordinates = match self {
			Geometry::Collection(members) => {
				return serde_json::json!({
					"type": self.type_name(),
					"geometries": members.iter().map(|g| g.to_json(precision)).collect::<Vec<_>>(),
				});
			}
			Geometry::Point(g) => g.to_coord_json(precision),
			Geometry::LineString(g) => g.to_coord_json(precision),
			Geometry::Polygon(g) => g.to_coord_json(precision),
			Geometry::MultiPoint(g) => g.to_coord_json(precision),
			Geometry::MultiLineString(g) => g.to_coord_json(precision),
			Geometry::MultiPolygon(g) => g.to_coord_json(precision),
		};
		serde_json::json!({
			"type": self.type_name(),
			"coordinates": coordinates,
		})
	}

	#[must_use]
	pub fn to_geo(&self) -> geo::Geometry<f64> {
		match self {
			Geometry::Point(g) => geo::Geometry::Point(g.to_geo()),
			Geometry::LineString(g) => geo::Geometry::LineString(g.to_geo()),
			Geometry::Polygon(g) => geo::Geometry::Polygon(g.to_geo()),
			Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(g.to_geo()),
			Geometry::MultiLineString(g) => geo::Geometry::MultiLineString(g.to_geo()),
			Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(g.to_geo()),
			Geometry::Collection(members) => {
				geo::Geometry::GeometryCollection(geo::GeometryCollection(members.iter().map(Geometry::to_geo).collect()))
			}
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]]],
		])
	}
}

impl From<geo::Polygon<f64>> for Geometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		Geometry::Polygon(PolygonGeometry::from(geometry))
	}
}

impl From<geo::MultiPolygon<f64>> for Geometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		Geometry::MultiPolygon(MultiPolygonGeometry::from(geometry))
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::Collection(members) => members,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
