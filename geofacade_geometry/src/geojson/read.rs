use super::{ParseOptions, parse_geojson_feature, parse_geojson_with};
use crate::{GeoCollection, GeoFeature};
use anyhow::{Context, Result};
use log::debug;
use std::{
	fs::File,
	io::{BufRead, BufReader, Read},
	path::Path,
};

pub fn read_geojson(reader: impl Read) -> Result<GeoCollection> {
	read_geojson_with(reader, ParseOptions::default())
}

pub fn read_geojson_with(mut reader: impl Read, options: ParseOptions) -> Result<GeoCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer).context("reading GeoJSON")?;
	parse_geojson_with(&buffer, options)
}

pub fn read_geojson_file(path: &Path) -> Result<GeoCollection> {
	read_geojson_file_with(path, ParseOptions::default())
}

pub fn read_geojson_file_with(path: &Path, options: ParseOptions) -> Result<GeoCollection> {
	debug!("reading GeoJSON file {path:?}");
	let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
	read_geojson_with(BufReader::new(file), options).with_context(|| format!("parsing {path:?}"))
}

fn process_line(line: std::io::Result<String>, index: usize, options: ParseOptions) -> Result<Option<GeoFeature>> {
	let line = line.with_context(|| format!("line {}", index + 1))?;
	if line.trim().is_empty() {
		return Ok(None);
	}
	parse_geojson_feature(&line, options)
		.map(Some)
		.with_context(|| format!("line {}", index + 1))
}

/// Reads newline-delimited GeoJSON, one `Feature` per line. Blank lines are skipped and errors
/// name the 1-based line they occurred on.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoFeature>> {
	read_ndgeojson_iter_with(reader, ParseOptions::default())
}

pub fn read_ndgeojson_iter_with(
	reader: impl BufRead,
	options: ParseOptions,
) -> impl Iterator<Item = Result<GeoFeature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(move |(index, line)| process_line(line, index, options).transpose())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoError, GeometryType};
	use pretty_assertions::assert_eq;
	use std::io::{BufReader, Cursor, Write};

	const POINT: &str = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"properties":{}}"#;

	#[test]
	fn read_geojson_basic() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let collection = read_geojson(Cursor::new(json))?;
		assert_eq!(collection.features.len(), 1);
		assert_eq!(collection.features[0].geometry_type(), Some(GeometryType::Point));
		Ok(())
	}

	#[test]
	fn read_ndgeojson_iter_with_empty_lines() {
		let input = format!("{POINT}\n\n   \n{POINT}\n");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 2);
		for res in results {
			assert_eq!(res.unwrap().geometry_type(), Some(GeometryType::Point));
		}
	}

	#[test]
	fn read_ndgeojson_iter_reports_line() {
		let input = format!("{POINT}\n\n{{\"type\":\"Feature\"\n");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 2);
		assert!(results[0].is_ok());

		let err = results[1].as_ref().unwrap_err();
		assert_eq!(err.to_string(), "line 3");
		assert!(matches!(err.downcast_ref::<GeoError>(), Some(GeoError::Parse(_))));
	}

	#[test]
	fn read_ndgeojson_iter_honours_options() {
		let open = r#"{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1]]]}}"#;
		let input = format!("{open}\n{POINT}\n");

		let strict: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input.clone()))).collect();
		let err = strict[0].as_ref().unwrap_err();
		assert_eq!(err.to_string(), "line 1");
		assert!(matches!(err.downcast_ref::<GeoError>(), Some(GeoError::InvalidGeometry(_))));

		let lenient: Vec<_> =
			read_ndgeojson_iter_with(BufReader::new(Cursor::new(input)), ParseOptions { verify_geometry: false })
				.collect::<Result<_>>()
				.unwrap();
		assert_eq!(lenient.len(), 2);
		assert_eq!(lenient[0].geometry_type(), Some(GeometryType::Polygon));
	}

	#[test]
	fn read_file() -> Result<()> {
		let mut file = tempfile::NamedTempFile::new()?;
		write!(
			file,
			r#"{{
				"type": "FeatureCollection",
				"crs": {{ "type": "name", "properties": {{ "name": "EPSG:4326" }} }},
				"features": [
					{{
						"type": "Feature",
						"id": "parcel-1",
						"geometry": {{ "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]] }},
						"properties": {{ "DIST_FEED": 3778.194, "PDT_OWNER": "Unknown" }}
					}}
				]
			}}"#
		)?;

		let collection = read_geojson_file(file.path())?;
		assert_eq!(collection.crs(), Some("EPSG:4326"));
		assert_eq!(collection.polygons().len(), 1);

		let feature = collection.polygons()[0];
		assert_eq!(feature.get_property_or_fail("DIST_FEED")?.as_f64(), Some(3778.194));
		assert_eq!(feature.get_property_optional("PDT_OWNER").and_then(|v| v.as_str()), Some("Unknown"));
		Ok(())
	}

	#[test]
	fn missing_file() {
		let err = read_geojson_file(Path::new("/does/not/exist.geojson")).unwrap_err();
		assert!(err.to_string().starts_with("opening"));
	}
}
