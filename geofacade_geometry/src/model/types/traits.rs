use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Common interface of all geometric primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Verifies the structural validity of the geometry: enough positions, closed rings,
	/// finite coordinates. Fails with [`crate::GeoError::InvalidGeometry`].
	fn verify(&self) -> Result<()>;

	/// Converts the geometry into the GeoJSON `coordinates` array.
	/// Optionally rounds coordinate values to the given number of decimals.
	fn to_coord_json(&self, precision: Option<u8>) -> Value;

	/// Transform this geometry from WGS84 longitude/latitude to Web Mercator meters.
	fn to_mercator(&self) -> Self;

	/// Returns `[x_min, y_min, x_max, y_max]`, or `None` if the geometry has no positions.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

/// Geometries that can be wrapped into their multi-geometry counterpart.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	fn into_multi(self) -> Multi;
}

/// Composite geometries made of simpler elements: a polygon is made of rings,
/// a multi line string of line strings, and so on.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Merges bounding boxes of the given parts.
pub(crate) fn merge_bounds(bounds: impl Iterator<Item = Option<[f64; 4]>>) -> Option<[f64; 4]> {
	bounds.flatten().reduce(|a, b| {
		[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
	})
}
