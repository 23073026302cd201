use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry, traits::merge_bounds};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A set of discrete positions.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl MultiPointGeometry {
	#[must_use]
	pub fn to_geo(&self) -> geo::MultiPoint<f64> {
		geo::MultiPoint(self.0.iter().map(PointGeometry::to_geo).collect())
	}
}

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<()> {
		for point in &self.0 {
			point.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(
			self
				.0
				.iter()
				.map(|point| point.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn to_mercator(&self) -> MultiPointGeometry {
		MultiPointGeometry(self.0.iter().map(PointGeometry::to_mercator).collect())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(PointGeometry::compute_bounds))
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);
