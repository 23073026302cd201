//! Read and write access to the property map of a single feature.
//!
//! Two lookup policies are offered side by side: [`GeoFeature::get_property_or_fail`] treats a
//! missing key as an error, [`GeoFeature::get_property_optional`] treats it as a normal outcome.

use super::{GeoFeature, GeoProperties, GeoValue};
use crate::GeoError;
use anyhow::Result;

impl GeoFeature {
	#[must_use]
	pub fn properties(&self) -> &GeoProperties {
		&self.properties
	}

	/// Mutable access to the feature's own map; changes are visible on the feature.
	pub fn properties_mut(&mut self) -> &mut GeoProperties {
		&mut self.properties
	}

	#[must_use]
	pub fn property_names(&self) -> Vec<&str> {
		self.properties.keys().map(String::as_str).collect()
	}

	#[must_use]
	pub fn has_property(&self, name: &str) -> bool {
		self.properties.contains_key(name)
	}

	/// Fails with [`GeoError::PropertyNotFound`] if `name` is absent.
	pub fn get_property_or_fail(&self, name: &str) -> Result<&GeoValue> {
		self.properties.get(name).ok_or_else(|| {
			GeoError::PropertyNotFound {
				key: name.to_string(),
			}
			.into()
		})
	}

	#[must_use]
	pub fn get_property_optional(&self, name: &str) -> Option<&GeoValue> {
		self.properties.get(name)
	}

	/// Inserts or overwrites `name`. No check against the type of a previous value.
	pub fn set_property<T>(&mut self, name: impl Into<String>, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(name.into(), GeoValue::from(value));
	}
}
