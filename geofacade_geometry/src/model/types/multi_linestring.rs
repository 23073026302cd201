use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry, traits::merge_bounds};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl MultiLineStringGeometry {
	#[must_use]
	pub fn to_geo(&self) -> geo::MultiLineString<f64> {
		geo::MultiLineString(self.0.iter().map(LineStringGeometry::to_geo).collect())
	}
}

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<()> {
		for line in &self.0 {
			line.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(
			self
				.0
				.iter()
				.map(|line| line.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn to_mercator(&self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(self.0.iter().map(LineStringGeometry::to_mercator).collect())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(LineStringGeometry::compute_bounds))
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
