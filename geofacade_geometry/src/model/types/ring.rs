use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, traits::merge_bounds};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A closed loop of positions bounding one side of a polygon face.
/// The first and last positions must be identical.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	#[must_use]
	pub fn to_geo(&self) -> geo::LineString<f64> {
		geo::LineString(self.0.iter().map(geo::Coord::from).collect())
	}
}

impl GeometryTrait for RingGeometry {
	/// A valid ring has at least 4 positions (3 distinct plus the closing one) and is closed.
	fn verify(&self) -> Result<()> {
		crate::ensure_geometry!(self.0.len() >= 4, "Ring must have at least 4 points");
		crate::ensure_geometry!(self.0.first() == self.0.last(), "Ring must be closed");
		for c in &self.0 {
			c.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|coord| coord.to_json(precision)).collect::<Vec<_>>())
	}

	fn to_mercator(&self) -> RingGeometry {
		RingGeometry(self.0.iter().map(Coordinates::to_mercator).collect())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(|c| Some([c.x(), c.y(), c.x(), c.y()])))
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}
