use super::*;
use anyhow::Result;
use serde_json::{Map, Value};
use std::fmt::Display;

/// Identifier of a feature, compared by value.
///
/// Integer ids are kept exactly, so ids beyond 2^53 stay distinct. A whole-valued float within
/// the exactly representable range becomes an [`FeatureId::Integer`], which makes `13` and `13.0`
/// the same id.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureId {
	String(String),
	Integer(i128),
	Number(f64),
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl FeatureId {
	#[must_use]
	pub fn to_json(&self) -> Value {
		match self {
			FeatureId::String(s) => Value::from(s.as_str()),
			FeatureId::Integer(n) => {
				if let Ok(v) = u64::try_from(*n) {
					Value::from(v)
				} else if let Ok(v) = i64::try_from(*n) {
					Value::from(v)
				} else {
					Value::from(n.to_string())
				}
			}
			FeatureId::Number(n) => GeoValue::Double(*n).to_json(),
		}
	}
}

impl Display for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FeatureId::String(s) => f.write_str(s),
			FeatureId::Integer(n) => write!(f, "{n}"),
			FeatureId::Number(n) => write!(f, "{n}"),
		}
	}
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		FeatureId::String(value.to_string())
	}
}

impl From<String> for FeatureId {
	fn from(value: String) -> Self {
		FeatureId::String(value)
	}
}

impl From<u64> for FeatureId {
	fn from(value: u64) -> Self {
		FeatureId::Integer(i128::from(value))
	}
}

impl From<i64> for FeatureId {
	fn from(value: i64) -> Self {
		FeatureId::Integer(i128::from(value))
	}
}

impl From<f64> for FeatureId {
	#[allow(clippy::cast_possible_truncation)]
	fn from(value: f64) -> Self {
		if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
			FeatureId::Integer(value as i128)
		} else {
			FeatureId::Number(value)
		}
	}
}

/// At most one geometry with an optional identifier and free-form properties.
///
/// `geometry` is `None` for GeoJSON features whose `geometry` member is `null` or absent. Such
/// features belong to the collection but to none of its typed views.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<FeatureId>,
	pub geometry: Option<Geometry>,
	pub properties: GeoProperties,
}

impl GeoFeature {
	/// Wraps a geometry without validating it.
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry: Some(geometry),
			properties: GeoProperties::new(),
		}
	}

	/// A feature with no location, written as `"geometry": null`.
	#[must_use]
	pub fn without_geometry() -> Self {
		Self {
			id: None,
			geometry: None,
			properties: GeoProperties::new(),
		}
	}

	/// Wraps a geometry after checking it with [`Geometry::verify`].
	pub fn new_verified(geometry: Geometry) -> Result<Self> {
		geometry.verify()?;
		Ok(Self::new(geometry))
	}

	#[must_use]
	pub fn with_id(mut self, id: impl Into<FeatureId>) -> Self {
		self.id = Some(id.into());
		self
	}

	#[must_use]
	pub fn with_properties(mut self, properties: GeoProperties) -> Self {
		self.properties = properties;
		self
	}

	pub fn set_id(&mut self, id: impl Into<FeatureId>) {
		self.id = Some(id.into());
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	#[must_use]
	pub fn geometry_type(&self) -> Option<GeometryType> {
		self.geometry.as_ref().map(Geometry::geometry_type)
	}

	/// The GeoJSON `Feature` object.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut obj = Map::new();
		obj.insert("type".to_string(), Value::from("Feature"));
		if let Some(id) = &self.id {
			obj.insert("id".to_string(), id.to_json());
		}
		let geometry = self.geometry.as_ref().map_or(Value::Null, |g| g.to_json(precision));
		obj.insert("geometry".to_string(), geometry);
		obj.insert("properties".to_string(), self.properties.to_json());
		Value::Object(obj)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some(FeatureId::from(13u64)),
			geometry: Some(Geometry::new_example()),
			properties: GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348085)),
				("is_nice", GeoValue::from(true)),
			]),
		}
	}
}

impl From<Geometry> for GeoFeature {
	fn from(geometry: Geometry) -> Self {
		GeoFeature::new(geometry)
	}
}
