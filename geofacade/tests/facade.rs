use anyhow::Result;
use approx::assert_relative_eq;
use geofacade::{
	Facade, FacadeConfig, Units,
	geometry::{GeoError, GeoFeature, GeoValue, Geometry, PointGeometry, PropertyType},
};
use pretty_assertions::assert_eq;
use std::{fs, path::Path};

const PARCELS: &str = r#"{
	"type": "FeatureCollection",
	"crs": { "type": "name", "properties": { "name": "EPSG:4326" } },
	"features": [
		{
			"type": "Feature",
			"id": "parcel-1",
			"geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]] },
			"properties": { "DIST_FEED": 3778.194, "PDT_OWNER": "Unknown" }
		},
		{
			"type": "Feature",
			"id": "parcel-2",
			"geometry": { "type": "Polygon", "coordinates": [
				[[2, 0], [4, 0], [4, 2], [2, 2], [2, 0]],
				[[2.5, 0.5], [2.5, 1.5], [3.5, 1.5], [3.5, 0.5], [2.5, 0.5]]
			] },
			"properties": { "DIST_FEED": "n/a", "PDT_OWNER": "City" }
		},
		{
			"type": "Feature",
			"id": 3,
			"geometry": { "type": "Point", "coordinates": [0.5, 0.5] },
			"properties": { "label": "well" }
		}
	]
}"#;

fn write(dir: &Path, name: &str, content: &str) -> Result<std::path::PathBuf> {
	let path = dir.join(name);
	fs::write(&path, content)?;
	Ok(path)
}

#[test]
fn load_classify_and_measure() -> Result<()> {
	let dir = tempfile::tempdir()?;
	let config = write(dir.path(), "facade.yml", "units: meters\nverify_geometry: true\n")?;
	let data = write(dir.path(), "parcels.geojson", PARCELS)?;

	let facade = Facade::from_config_path(&config)?;
	let collection = facade.load_path(&data)?;

	assert_eq!(collection.crs(), Some("EPSG:4326"));
	assert_eq!(collection.len(), 3);
	assert_eq!(collection.polygons().len(), 2);
	assert_eq!(collection.points().len(), 1);
	assert_eq!(collection.polygons_with_holes().len(), 1);
	assert!(collection.multi_polygons_with_holes().is_empty());

	let types = collection.property_types();
	assert_eq!(types["DIST_FEED"], PropertyType::Number);
	assert_eq!(types["PDT_OWNER"], PropertyType::String);
	assert_eq!(types["label"], PropertyType::String);

	let first = collection.polygons()[0];
	assert_eq!(first.get_property_or_fail("DIST_FEED")?, &GeoValue::from(3778.194));
	assert!(first.get_property_optional("missing").is_none());

	let well = collection.points()[0];
	let parcel = first.geometry.as_ref().unwrap();
	assert!(facade.point_in_polygon(&PointGeometry::from([0.5, 0.5]), parcel));
	assert!(facade.intersects(well.geometry.as_ref().unwrap(), parcel));

	let side = facade.length(&Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 0.0]]));
	assert_relative_eq!(side, 111_195.08, epsilon = 0.1);

	assert_eq!(facade.bbox(&collection), Some([0.0, 0.0, 4.0, 2.0]));
	Ok(())
}

#[test]
fn edit_and_write_back() -> Result<()> {
	let facade = Facade::new(FacadeConfig {
		units: Units::Kilometers,
		crs: Some("EPSG:4326".to_string()),
		..FacadeConfig::default()
	});
	let mut collection = facade.load_str(PARCELS)?;

	let mut feature = GeoFeature::new(Geometry::new_point([10.0, 10.0])).with_id("added");
	feature.set_property("PDT_OWNER", "State");
	collection.add_feature(feature.clone());
	assert_eq!(collection.len(), 4);

	assert!(collection.delete_feature(&feature));
	assert!(!collection.delete_feature(&feature));
	assert_eq!(collection.len(), 3);

	let reloaded = facade.load_str(&facade.stringify(&collection))?;
	assert_eq!(reloaded, collection);
	Ok(())
}

#[test]
fn errors_are_typed() {
	let facade = Facade::new(FacadeConfig::default());

	let err = facade.load_str("{\"type\": \"FeatureCollection\", ").unwrap_err();
	assert!(matches!(err.downcast_ref::<GeoError>(), Some(GeoError::Parse(_))));

	let feature = GeoFeature::new(Geometry::new_point([0.0, 0.0]));
	let err = feature.get_property_or_fail("name").unwrap_err();
	assert_eq!(
		err.downcast_ref::<GeoError>(),
		Some(&GeoError::PropertyNotFound { key: "name".to_string() })
	);
}
