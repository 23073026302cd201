use crate::{
	Coordinates, Crs, FeatureId, GeoCollection, GeoError, GeoFeature, GeoProperties, GeoValue, Geometry,
	GeometryType, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry,
	PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;

/// Controls how strictly GeoJSON input is converted into the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
	/// Run [`Geometry::verify`] on every parsed geometry (closed rings, enough positions, finite
	/// coordinates).
	pub verify_geometry: bool,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self { verify_geometry: true }
	}
}

fn parse_error(msg: impl Into<String>) -> anyhow::Error {
	GeoError::parse(msg).into()
}

fn parse_text(json: &str) -> Result<Value> {
	serde_json::from_str(json).map_err(|e| parse_error(e.to_string()))
}

pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	parse_geojson_with(json, ParseOptions::default())
}

pub fn parse_geojson_with(json: &str, options: ParseOptions) -> Result<GeoCollection> {
	let collection = collection_from_json(&parse_text(json)?, options)?;
	debug!("parsed feature collection with {} features", collection.len());
	Ok(collection)
}

pub fn parse_geojson_feature(json: &str, options: ParseOptions) -> Result<GeoFeature> {
	feature_from_json(&parse_text(json)?, options)
}

fn check_type(value: &Value, name: &str) -> Result<()> {
	let object_type = value
		.get("type")
		.ok_or_else(|| parse_error(format!("{name} must have a type")))?;
	if object_type.as_str() != Some(name) {
		return Err(parse_error(format!("type must be '{name}', found {object_type}")));
	}
	Ok(())
}

pub fn collection_from_json(value: &Value, options: ParseOptions) -> Result<GeoCollection> {
	check_type(value, "FeatureCollection")?;

	let crs = value.get("crs").and_then(Crs::from_json);

	let features = match value.get("features") {
		None | Some(Value::Null) => Vec::new(),
		Some(Value::Array(list)) => list
			.iter()
			.enumerate()
			.map(|(index, f)| feature_from_json(f, options).with_context(|| format!("feature {index}")))
			.collect::<Result<Vec<_>>>()?,
		Some(other) => return Err(parse_error(format!("'features' must be an array, found {other}"))),
	};

	Ok(GeoCollection { features, crs })
}

pub fn feature_from_json(value: &Value, options: ParseOptions) -> Result<GeoFeature> {
	check_type(value, "Feature")?;

	let id = match value.get("id") {
		None | Some(Value::Null) => None,
		Some(Value::String(s)) => Some(FeatureId::from(s.as_str())),
		Some(Value::Number(n)) => n
			.as_u64()
			.map(FeatureId::from)
			.or_else(|| n.as_i64().map(FeatureId::from))
			.or_else(|| n.as_f64().map(FeatureId::from)),
		Some(other) => return Err(parse_error(format!("expected a string or number as id, found {other}"))),
	};

	let geometry = match value.get("geometry") {
		None | Some(Value::Null) => None,
		Some(g) => Some(geometry_from_json(g)?),
	};
	if options.verify_geometry && let Some(g) = &geometry {
		g.verify()?;
	}

	let properties = match value.get("properties") {
		None | Some(Value::Null) => GeoProperties::new(),
		Some(Value::Object(map)) => map
			.iter()
			.map(|(k, v)| (k.clone(), GeoValue::from_json(v)))
			.collect(),
		Some(other) => return Err(parse_error(format!("'properties' must be an object, found {other}"))),
	};

	Ok(GeoFeature { id, geometry, properties })
}

pub fn geometry_from_json(value: &Value) -> Result<Geometry> {
	let name = value
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| parse_error("geometry must have a type"))?;
	let geometry_type =
		GeometryType::from_name(name).ok_or_else(|| parse_error(format!("unknown geometry type '{name}'")))?;
	Ok(match geometry_type {
		GeometryType::Point => Geometry::Point(PointGeometry(position(coordinates(value)?)?)),
		GeometryType::MultiPoint => Geometry::MultiPoint(MultiPointGeometry(
			positions(coordinates(value)?)?.into_iter().map(PointGeometry).collect(),
		)),
		GeometryType::LineString => Geometry::LineString(LineStringGeometry(positions(coordinates(value)?)?)),
		GeometryType::MultiLineString => Geometry::MultiLineString(MultiLineStringGeometry(list(
			coordinates(value)?,
			|l| positions(l).map(LineStringGeometry),
		)?)),
		GeometryType::Polygon => Geometry::Polygon(polygon(coordinates(value)?)?),
		GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry(list(coordinates(value)?, polygon)?)),
		GeometryType::GeometryCollection => {
			let members = value
				.get("geometries")
				.ok_or_else(|| parse_error("geometry collection must have geometries"))?;
			Geometry::Collection(list(members, geometry_from_json)?)
		}
	})
}

fn coordinates(value: &Value) -> Result<&Value> {
	value
		.get("coordinates")
		.ok_or_else(|| parse_error("geometry must have coordinates"))
}

fn list<T>(value: &Value, item: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
	value
		.as_array()
		.ok_or_else(|| parse_error(format!("expected an array while parsing coordinates, found {value}")))?
		.iter()
		.map(item)
		.collect()
}

fn position(value: &Value) -> Result<Coordinates> {
	let numbers = list(value, |v| {
		v.as_f64()
			.ok_or_else(|| parse_error(format!("expected a number in a position, found {v}")))
	})?;
	match numbers.as_slice() {
		[x, y] => Ok(Coordinates::new(*x, *y)),
		[x, y, z] => Ok(Coordinates::new_3d(*x, *y, *z)),
		_ => Err(parse_error(format!(
			"a position must have two or three values, found {}",
			numbers.len()
		))),
	}
}

fn positions(value: &Value) -> Result<Vec<Coordinates>> {
	list(value, position)
}

fn polygon(value: &Value) -> Result<PolygonGeometry> {
	list(value, |r| positions(r).map(RingGeometry)).map(PolygonGeometry)
}
