use crate::{Backend, FacadeConfig, GeoBackend, Units, units::length_to_degrees};
use anyhow::Result;
use geofacade_geometry::{
	GeoCollection, GeoFeature, Geometry, PointGeometry, parse_geojson_with, read_geojson_file_with,
	read_geojson_with, read_ndgeojson_iter_with,
};
use log::{debug, trace};
use std::{
	io::{BufRead, Read},
	path::Path,
};

/// Binds a geometry backend to a configuration.
///
/// Loading honours [`FacadeConfig::verify_geometry`], new collections get [`FacadeConfig::crs`],
/// and measurements without explicit units use [`FacadeConfig::units`].
#[derive(Clone, Debug, Default)]
pub struct Facade<B: Backend = GeoBackend> {
	backend: B,
	config: FacadeConfig,
}

impl Facade<GeoBackend> {
	#[must_use]
	pub fn new(config: FacadeConfig) -> Self {
		Self::with_backend(GeoBackend, config)
	}

	pub fn from_config_path(path: &Path) -> Result<Self> {
		Ok(Self::new(FacadeConfig::from_path(path)?))
	}
}

impl<B: Backend> Facade<B> {
	pub fn with_backend(backend: B, config: FacadeConfig) -> Self {
		debug!("facade with units {} and crs {:?}", config.units, config.crs);
		Self { backend, config }
	}

	pub fn backend(&self) -> &B {
		&self.backend
	}

	pub fn config(&self) -> &FacadeConfig {
		&self.config
	}

	pub fn create_collection(&self) -> GeoCollection {
		GeoCollection::new(self.config.crs())
	}

	pub fn load_str(&self, json: &str) -> Result<GeoCollection> {
		parse_geojson_with(json, self.config.parse_options())
	}

	pub fn load_reader(&self, reader: impl Read) -> Result<GeoCollection> {
		read_geojson_with(reader, self.config.parse_options())
	}

	pub fn load_path(&self, path: &Path) -> Result<GeoCollection> {
		let collection = read_geojson_file_with(path, self.config.parse_options())?;
		debug!("loaded {} features from {path:?}", collection.len());
		Ok(collection)
	}

	/// Streams newline-delimited GeoJSON features, verified as configured.
	pub fn load_nd(&self, reader: impl BufRead) -> impl Iterator<Item = Result<GeoFeature>> {
		read_ndgeojson_iter_with(reader, self.config.parse_options())
	}

	/// GeoJSON text, with coordinates rounded to [`FacadeConfig::precision`].
	pub fn stringify(&self, collection: &GeoCollection) -> String {
		collection.stringify(self.config.precision)
	}

	pub fn distance(&self, from: &PointGeometry, to: &PointGeometry) -> f64 {
		self.distance_in(from, to, self.config.units)
	}

	pub fn distance_in(&self, from: &PointGeometry, to: &PointGeometry, units: Units) -> f64 {
		trace!("distance {from:?} -> {to:?} in {units}");
		self.backend.distance(from, to, units)
	}

	pub fn length(&self, geometry: &Geometry) -> f64 {
		self.length_in(geometry, self.config.units)
	}

	pub fn length_in(&self, geometry: &Geometry, units: Units) -> f64 {
		self.backend.length(geometry, units)
	}

	/// Square meters, independent of the configured units.
	pub fn area(&self, geometry: &Geometry) -> f64 {
		self.backend.area(geometry)
	}

	pub fn bbox(&self, collection: &GeoCollection) -> Option<[f64; 4]> {
		self.backend.bbox(collection)
	}

	pub fn centroid(&self, geometry: &Geometry) -> Option<PointGeometry> {
		self.backend.centroid(geometry)
	}

	pub fn convex_hull(&self, collection: &GeoCollection) -> Option<Geometry> {
		self.backend.convex_hull(collection)
	}

	/// Unions every polygon and multi polygon of the collection; other geometry is skipped.
	pub fn union_polygons(&self, collection: &GeoCollection) -> Result<Option<Geometry>> {
		let areal: Vec<&Geometry> = collection
			.polygons()
			.into_iter()
			.chain(collection.multi_polygons())
			.filter_map(|f| f.geometry.as_ref())
			.collect();
		if areal.is_empty() {
			return Ok(None);
		}
		trace!("union of {} areal features", areal.len());
		self.backend.union(&areal).map(Some)
	}

	pub fn union(&self, geometries: &[&Geometry]) -> Result<Geometry> {
		self.backend.union(geometries)
	}

	pub fn to_mercator(&self, geometry: &Geometry) -> Geometry {
		self.backend.to_mercator(geometry)
	}

	/// Simplifies with a tolerance in the configured units.
	pub fn simplify(&self, geometry: &Geometry, tolerance: f64) -> Geometry {
		self.backend.simplify(geometry, self.degrees(tolerance))
	}

	/// Buffers by a distance in the configured units.
	pub fn buffer(&self, geometry: &Geometry, distance: f64) -> Geometry {
		self.backend.buffer(geometry, self.degrees(distance))
	}

	/// DBSCAN over the point features of the collection, with `distance` in the configured units.
	/// Labels line up with [`GeoCollection::points`].
	pub fn dbscan(&self, collection: &GeoCollection, distance: f64, min_points: usize) -> Vec<Option<usize>> {
		let points = point_geometries(collection);
		trace!("dbscan over {} points", points.len());
		self.backend.dbscan(&points, self.degrees(distance), min_points)
	}

	/// k-means over the point features of the collection. Labels line up with
	/// [`GeoCollection::points`].
	pub fn kmeans(&self, collection: &GeoCollection, k: usize) -> Result<Vec<usize>> {
		self.backend.kmeans(&point_geometries(collection), k)
	}

	pub fn point_in_polygon(&self, point: &PointGeometry, geometry: &Geometry) -> bool {
		self.backend.point_in_polygon(point, geometry)
	}

	pub fn intersects(&self, a: &Geometry, b: &Geometry) -> bool {
		self.backend.intersects(a, b)
	}

	fn degrees(&self, length: f64) -> f64 {
		length_to_degrees(length, self.config.units)
	}
}

fn point_geometries(collection: &GeoCollection) -> Vec<PointGeometry> {
	collection
		.points()
		.into_iter()
		.filter_map(|f| match &f.geometry {
			Some(Geometry::Point(p)) => Some(p.clone()),
			_ => None,
		})
		.collect()
}
