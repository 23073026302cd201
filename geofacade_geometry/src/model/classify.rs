use super::{GeoCollection, GeoFeature, Geometry, GeometryType};
use std::{collections::BTreeMap, fmt::Display};

/// Coarse value type of a property column, as inferred by [`GeoCollection::property_types`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyType {
	Number,
	String,
}

impl PropertyType {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			PropertyType::Number => "number",
			PropertyType::String => "string",
		}
	}
}

impl Display for PropertyType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Typed views of a collection. None of these mutate the collection; every view keeps the
/// collection's order and is empty when nothing matches. Features without geometry and geometry
/// collections appear in none of the six named views.
impl GeoCollection {
	#[must_use]
	pub fn features_of_type(&self, geometry_type: GeometryType) -> Vec<&GeoFeature> {
		self.filter(|g| g.geometry_type() == geometry_type)
	}

	#[must_use]
	pub fn points(&self) -> Vec<&GeoFeature> {
		self.features_of_type(GeometryType::Point)
	}

	#[must_use]
	pub fn multi_points(&self) -> Vec<&GeoFeature> {
		self.features_of_type(GeometryType::MultiPoint)
	}

	#[must_use]
	pub fn line_strings(&self) -> Vec<&GeoFeature> {
		self.features_of_type(GeometryType::LineString)
	}

	#[must_use]
	pub fn multi_line_strings(&self) -> Vec<&GeoFeature> {
		self.features_of_type(GeometryType::MultiLineString)
	}

	#[must_use]
	pub fn polygons(&self) -> Vec<&GeoFeature> {
		self.features_of_type(GeometryType::Polygon)
	}

	#[must_use]
	pub fn multi_polygons(&self) -> Vec<&GeoFeature> {
		self.features_of_type(GeometryType::MultiPolygon)
	}

	/// Polygons with more than one ring.
	#[must_use]
	pub fn polygons_with_holes(&self) -> Vec<&GeoFeature> {
		self.filter(|g| matches!(g, Geometry::Polygon(p) if p.has_holes()))
	}

	/// Multi polygons where at least one face has more than one ring.
	#[must_use]
	pub fn multi_polygons_with_holes(&self) -> Vec<&GeoFeature> {
		self.filter(|g| matches!(g, Geometry::MultiPolygon(mp) if mp.has_holes()))
	}

	/// Infers a type per property key from the first feature that carries it.
	///
	/// Later features never change a key's type, so a column whose first value is text stays
	/// `String` even if every following value is numeric.
	#[must_use]
	pub fn property_types(&self) -> BTreeMap<String, PropertyType> {
		let mut types = BTreeMap::new();
		for feature in &self.features {
			for (key, value) in feature.properties.iter() {
				types.entry(key.clone()).or_insert(if value.is_numeric() {
					PropertyType::Number
				} else {
					PropertyType::String
				});
			}
		}
		types
	}

	fn filter(&self, predicate: impl Fn(&Geometry) -> bool) -> Vec<&GeoFeature> {
		self
			.features
			.iter()
			.filter(|f| f.geometry.as_ref().is_some_and(&predicate))
			.collect()
	}
}
