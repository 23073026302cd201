use super::GeoValue;
use serde_json::{Map, Value};
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// The free-form property map of a feature. Keys iterate in sorted order.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, GeoValue>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	/// Inserts or overwrites an entry, returning the previous value.
	pub fn insert(&mut self, key: String, value: GeoValue) -> Option<GeoValue> {
		self.properties.insert(key, value)
	}
	/// Copies every entry of `new_properties` into this map, overwriting existing keys.
	pub fn update(&mut self, new_properties: &GeoProperties) {
		for (k, v) in new_properties.iter() {
			self.properties.insert(k.to_string(), v.clone());
		}
	}
	pub fn remove(&mut self, key: &str) -> Option<GeoValue> {
		self.properties.remove(key)
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.get(key)
	}
	pub fn get_mut(&mut self, key: &str) -> Option<&mut GeoValue> {
		self.properties.get_mut(key)
	}
	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.properties.contains_key(key)
	}
	pub fn keys(&self) -> btree_map::Keys<'_, String, GeoValue> {
		self.properties.keys()
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, GeoValue> {
		self.properties.iter()
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	#[must_use]
	pub fn to_json(&self) -> Value {
		Value::Object(
			self
				.properties
				.iter()
				.map(|(k, v)| (k.clone(), v.to_json()))
				.collect::<Map<String, Value>>(),
		)
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = btree_map::IntoIter<String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl<'a> IntoIterator for &'a GeoProperties {
	type Item = (&'a String, &'a GeoValue);
	type IntoIter = btree_map::Iter<'a, String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl From<Vec<(&str, &str)>> for GeoProperties {
	fn from(value: Vec<(&str, &str)>) -> Self {
		GeoProperties {
			properties: value
				.into_iter()
				.map(|(k, v)| (k.to_string(), GeoValue::from(v)))
				.collect(),
		}
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
