use serde_json::{Value, json};
use std::fmt::Display;

/// A named coordinate reference system, e.g. `EPSG:4326`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crs(String);

impl Crs {
	pub const WGS84_NAME: &'static str = "EPSG:4326";

	pub fn new(name: impl Into<String>) -> Self {
		Crs(name.into())
	}

	/// WGS84 longitude/latitude.
	#[must_use]
	pub fn wgs84() -> Self {
		Crs::new(Crs::WGS84_NAME)
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.0
	}

	/// The named-CRS member of a GeoJSON document.
	#[must_use]
	pub fn to_json(&self) -> Value {
		json!({
			"type": "name",
			"properties": { "name": self.0 },
		})
	}

	/// Reads `crs.properties.name`. Returns `None` for any other shape.
	#[must_use]
	pub fn from_json(value: &Value) -> Option<Self> {
		value
			.get("properties")
			.and_then(|p| p.get("name"))
			.and_then(Value::as_str)
			.map(Crs::new)
	}
}

impl Display for Crs {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn json_round_trip() {
		let crs = Crs::wgs84();
		assert_eq!(crs.name(), "EPSG:4326");
		assert_eq!(Crs::from_json(&crs.to_json()), Some(crs));
	}

	#[test]
	fn from_json_ignores_other_shapes() {
		assert_eq!(Crs::from_json(&json!({"type": "link", "properties": {"href": "x"}})), None);
		assert_eq!(Crs::from_json(&json!("EPSG:4326")), None);
	}
}
