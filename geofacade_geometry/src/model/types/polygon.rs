use super::*;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A polygon face: the first ring is the exterior boundary, every further ring is a hole.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}

	/// A polygon has holes when it consists of more than one ring.
	#[must_use]
	pub fn has_holes(&self) -> bool {
		self.0.len() > 1
	}

	#[must_use]
	pub fn to_geo(&self) -> geo::Polygon<f64> {
		let exterior = self.exterior().map(RingGeometry::to_geo).unwrap_or_else(|| geo::LineString(vec![]));
		geo::Polygon::new(exterior, self.holes().iter().map(RingGeometry::to_geo).collect())
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		crate::ensure_geometry!(!self.0.is_empty(), "Polygon must have at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|r| r.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn to_mercator(&self) -> PolygonGeometry {
		PolygonGeometry(self.0.iter().map(RingGeometry::to_mercator).collect())
	}

	/// Bounds of the exterior ring; holes lie inside it.
	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.exterior().and_then(RingGeometry::compute_bounds)
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}
