use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry, traits::merge_bounds};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A collection of polygon faces, each with an exterior ring and optional holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	/// True if at least one face has a hole.
	#[must_use]
	pub fn has_holes(&self) -> bool {
		self.0.iter().any(PolygonGeometry::has_holes)
	}

	#[must_use]
	pub fn to_geo(&self) -> geo::MultiPolygon<f64> {
		geo::MultiPolygon(self.0.iter().map(PolygonGeometry::to_geo).collect())
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(
			self
				.0
				.iter()
				.map(|poly| poly.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn to_mercator(&self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(self.0.iter().map(PolygonGeometry::to_mercator).collect())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(PolygonGeometry::compute_bounds))
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.0.into_iter().map(PolygonGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn has_holes_if_any_face_has_one() {
		let solid = MultiPolygonGeometry::from(&[
			[[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]],
			[[[20, 0], [30, 0], [30, 10], [20, 10], [20, 0]]],
		]);
		assert!(!solid.has_holes());

		let mut holed = solid.clone();
		holed.0[1]
			.0
			.push(crate::RingGeometry::from(&[[22, 2], [22, 4], [24, 4], [24, 2], [22, 2]]));
		assert!(holed.has_holes());
		assert!(!MultiPolygonGeometry::new().has_holes());
	}

	#[test]
	fn compute_bounds() {
		let multi = MultiPolygonGeometry::from(&[
			[[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]],
			[[[20, 5], [30, 5], [30, 15], [20, 15], [20, 5]]],
		]);
		assert_eq!(multi.compute_bounds(), Some([0.0, 0.0, 30.0, 15.0]));
		assert_eq!(MultiPolygonGeometry::new().compute_bounds(), None);
	}

	#[test]
	fn to_mercator() {
		let multi = MultiPolygonGeometry::from(&[[[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]]);
		let mercator = multi.to_mercator();
		assert_eq!(mercator.0.len(), 1);
		assert!(mercator.0[0].0[0].0[0].x().abs() < 1.0);
		assert!(mercator.0[0].0[0].0[1].x().abs() > 100_000.0);
	}
}
