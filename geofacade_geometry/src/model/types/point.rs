use super::{Coordinates, GeometryTrait, MultiPointGeometry, traits::SingleGeometryTrait};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A single position.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
	#[must_use]
	pub fn to_geo(&self) -> geo::Point<f64> {
		geo::Point::from(geo::Coord::from(&self.0))
	}
}

impl GeometryTrait for PointGeometry {
	fn verify(&self) -> Result<()> {
		self.0.verify()
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		self.0.to_json(precision)
	}

	fn to_mercator(&self) -> PointGeometry {
		PointGeometry(self.0.to_mercator())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.0.x(), self.0.y(), self.0.x(), self.0.y()])
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
