use super::{Crs, FeatureId, GeoFeature};
use crate::geojson::{parse_geojson, read_geojson_file};
use anyhow::Result;
use log::{debug, trace};
use serde_json::{Map, Value};
use std::path::Path;

/// An ordered sequence of features plus an optional coordinate reference system.
///
/// Insertion order is preserved and observable; identifiers need not be unique.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
	pub crs: Option<Crs>,
}

impl GeoCollection {
	/// An empty collection. The CRS is whatever the caller states, there is no implicit default.
	#[must_use]
	pub fn new(crs: Option<Crs>) -> Self {
		Self {
			features: Vec::new(),
			crs,
		}
	}

	/// Parses GeoJSON text. Malformed text fails with [`crate::GeoError::Parse`].
	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_geojson(json_str)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		read_geojson_file(path)
	}

	#[must_use]
	pub fn crs(&self) -> Option<&str> {
		self.crs.as_ref().map(Crs::name)
	}

	pub fn set_crs(&mut self, crs: Option<Crs>) {
		self.crs = crs;
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}

	/// Appends a feature. Identifiers are not checked for uniqueness.
	pub fn add_feature(&mut self, feature: GeoFeature) {
		trace!("adding {:?} feature with id {:?}", feature.geometry_type(), feature.id);
		self.features.push(feature);
	}

	/// Removes the first feature whose identifier equals `feature.id`.
	///
	/// Only identifiers are compared, never geometry or properties. A feature without an
	/// identifier matches nothing.
	pub fn delete_feature(&mut self, feature: &GeoFeature) -> bool {
		match &feature.id {
			Some(id) => self.delete_feature_by_id(id),
			None => {
				debug!("cannot delete a feature without id");
				false
			}
		}
	}

	/// Removes the first feature with the given identifier. Returns `false` if none matched.
	pub fn delete_feature_by_id(&mut self, id: &FeatureId) -> bool {
		match self.features.iter().position(|f| f.id.as_ref() == Some(id)) {
			Some(index) => {
				self.features.remove(index);
				trace!("deleted feature {id} at index {index}");
				true
			}
			None => {
				debug!("no feature with id {id} to delete");
				false
			}
		}
	}

	/// The GeoJSON `FeatureCollection` object.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut obj = Map::new();
		obj.insert("type".to_string(), Value::from("FeatureCollection"));
		if let Some(crs) = &self.crs {
			obj.insert("crs".to_string(), crs.to_json());
		}
		obj.insert(
			"features".to_string(),
			Value::Array(self.features.iter().map(|f| f.to_json(precision)).collect()),
		);
		Value::Object(obj)
	}

	#[must_use]
	pub fn stringify(&self, precision: Option<u8>) -> String {
		self.to_json(precision).to_string()
	}
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self { features, crs: None }
	}
}

impl<'a> IntoIterator for &'a GeoCollection {
	type Item = &'a GeoFeature;
	type IntoIter = std::slice::Iter<'a, GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}
