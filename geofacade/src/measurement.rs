use crate::{GeoBackend, Units, units::EARTH_RADIUS, units::convert_length};
use geo::{Centroid, Distance, Haversine, Length};
use geofacade_geometry::{GeoCollection, Geometry, PointGeometry, PolygonGeometry, RingGeometry};

/// Distances, lengths and areas on the sphere, plus bounding boxes and centroids.
pub trait Measurement {
	/// Great-circle distance between two points.
	fn distance(&self, from: &PointGeometry, to: &PointGeometry, units: Units) -> f64;

	/// Length of line work: the path length of lines and the perimeter of polygon rings. Points
	/// have length zero.
	fn length(&self, geometry: &Geometry, units: Units) -> f64;

	/// Area in square meters. Holes are subtracted; non-areal geometry has area zero. The result
	/// does not depend on ring winding.
	fn area(&self, geometry: &Geometry) -> f64;

	/// `[min_x, min_y, max_x, max_y]` over every feature, or `None` for an empty collection.
	fn bbox(&self, collection: &GeoCollection) -> Option<[f64; 4]>;

	fn centroid(&self, geometry: &Geometry) -> Option<PointGeometry>;
}

/// Spherical excess of a ring in square meters. The sign follows the winding.
fn ring_area(ring: &RingGeometry) -> f64 {
	let c = &ring.0;
	if c.len() < 3 {
		return 0.0;
	}
	let mut sum = 0.0;
	let mut p2 = &c[c.len() - 1];
	for p1 in c {
		sum += (p1.x() - p2.x()).to_radians() * (2.0 + p2.y().to_radians().sin() + p1.y().to_radians().sin());
		p2 = p1;
	}
	sum * EARTH_RADIUS * EARTH_RADIUS / 2.0
}

fn geometry_meters(geometry: &Geometry) -> f64 {
	match geometry {
		Geometry::Point(_) | Geometry::MultiPoint(_) => 0.0,
		Geometry::LineString(g) => Haversine.length(&g.to_geo()),
		Geometry::MultiLineString(g) => Haversine.length(&g.to_geo()),
		Geometry::Polygon(g) => g.0.iter().map(|r| Haversine.length(&r.to_geo())).sum(),
		Geometry::MultiPolygon(g) => g.0.iter().flat_map(|p| &p.0).map(|r| Haversine.length(&r.to_geo())).sum(),
		Geometry::Collection(members) => members.iter().map(geometry_meters).sum(),
	}
}

fn polygon_area(polygon: &PolygonGeometry) -> f64 {
	let mut rings = polygon.0.iter();
	let Some(exterior) = rings.next() else {
		return 0.0;
	};
	let holes: f64 = rings.map(|r| ring_area(r).abs()).sum();
	(ring_area(exterior).abs() - holes).max(0.0)
}

impl Measurement for GeoBackend {
	fn distance(&self, from: &PointGeometry, to: &PointGeometry, units: Units) -> f64 {
		convert_length(Haversine.distance(from.to_geo(), to.to_geo()), Units::Meters, units)
	}

	fn length(&self, geometry: &Geometry, units: Units) -> f64 {
		convert_length(geometry_meters(geometry), Units::Meters, units)
	}

	fn area(&self, geometry: &Geometry) -> f64 {
		match geometry {
			Geometry::Polygon(g) => polygon_area(g),
			Geometry::MultiPolygon(g) => g.0.iter().map(polygon_area).sum(),
			Geometry::Collection(members) => members.iter().map(|m| self.area(m)).sum(),
			_ => 0.0,
		}
	}

	fn bbox(&self, collection: &GeoCollection) -> Option<[f64; 4]> {
		collection
			.iter()
			.filter_map(|f| f.geometry.as_ref()?.compute_bounds())
			.reduce(|a, b| [a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])])
	}

	fn centroid(&self, geometry: &Geometry) -> Option<PointGeometry> {
		geometry.to_geo().centroid().map(|p| PointGeometry::from(p.0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use geofacade_geometry::GeoFeature;
	use rstest::rstest;

	fn point(x: f64, y: f64) -> PointGeometry {
		PointGeometry::from([x, y])
	}

	#[rstest]
	#[case(Units::Kilometers, 111.195)]
	#[case(Units::Meters, 111_195.08)]
	#[case(Units::Degrees, 1.0)]
	#[case(Units::NauticalMiles, 60.041)]
	fn one_degree_along_the_equator(#[case] units: Units, #[case] expected: f64) {
		let d = GeoBackend.distance(&point(0.0, 0.0), &point(1.0, 0.0), units);
		assert_relative_eq!(d, expected, max_relative = 1e-4);
	}

	#[test]
	fn distance_is_symmetric() {
		let berlin = point(13.4050, 52.5200);
		let paris = point(2.3522, 48.8566);
		let a = GeoBackend.distance(&berlin, &paris, Units::Kilometers);
		let b = GeoBackend.distance(&paris, &berlin, Units::Kilometers);
		assert_relative_eq!(a, b);
		assert_relative_eq!(a, 877.5, epsilon = 1.0);
		assert_eq!(GeoBackend.distance(&berlin, &berlin, Units::Meters), 0.0);
	}

	#[test]
	fn agrees_with_geo_haversine() {
		let berlin = point(13.4050, 52.5200);
		let paris = point(2.3522, 48.8566);
		let meters = Haversine.distance(berlin.to_geo(), paris.to_geo());
		assert_relative_eq!(GeoBackend.distance(&berlin, &paris, Units::Meters), meters);
		assert_relative_eq!(GeoBackend.distance(&berlin, &paris, Units::Miles), meters / 1609.344);

		let route = Geometry::new_line_string(vec![[13.4050, 52.5200], [8.6821, 50.1109], [2.3522, 48.8566]]);
		let Geometry::LineString(line) = &route else { unreachable!() };
		assert_relative_eq!(GeoBackend.length(&route, Units::Meters), Haversine.length(&line.to_geo()));
	}

	#[test]
	fn collection_sums_members() {
		let line = Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 0.0]]);
		let square = Geometry::new_polygon(vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]);
		let both = Geometry::new_collection(vec![line.clone(), square.clone(), Geometry::new_point([5.0, 5.0])]);

		let length = GeoBackend.length(&line, Units::Meters) + GeoBackend.length(&square, Units::Meters);
		assert_relative_eq!(GeoBackend.length(&both, Units::Meters), length);
		assert_relative_eq!(GeoBackend.area(&both), GeoBackend.area(&square));
	}

	#[test]
	fn length_of_lines_and_rings() {
		let line = Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
		assert_relative_eq!(GeoBackend.length(&line, Units::Degrees), 2.0, epsilon = 1e-9);

		let square = Geometry::new_polygon(vec![vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]]);
		let perimeter = GeoBackend.length(&square, Units::Degrees);
		assert!(perimeter > 3.99 && perimeter < 4.0);

		assert_eq!(GeoBackend.length(&Geometry::new_point([1.0, 1.0]), Units::Meters), 0.0);
	}

	#[test]
	fn area_subtracts_holes() {
		let outer = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]];
		let inner = vec![[0.25, 0.25], [0.25, 0.75], [0.75, 0.75], [0.75, 0.25], [0.25, 0.25]];

		let solid = GeoBackend.area(&Geometry::new_polygon(vec![outer.clone()]));
		// one square degree at the equator is about 12 364 km²
		assert_relative_eq!(solid, 1.2364e10, max_relative = 1e-3);

		let holed = GeoBackend.area(&Geometry::new_polygon(vec![outer.clone(), inner]));
		assert_relative_eq!(holed / solid, 0.75, epsilon = 1e-3);

		let reversed: Vec<[f64; 2]> = outer.iter().rev().copied().collect();
		assert_relative_eq!(GeoBackend.area(&Geometry::new_polygon(vec![reversed])), solid, max_relative = 1e-12);

		let double = Geometry::new_multi_polygon(vec![vec![outer.clone()], vec![outer]]);
		assert_relative_eq!(GeoBackend.area(&double), 2.0 * solid);

		assert_eq!(GeoBackend.area(&Geometry::new_point([0.0, 0.0])), 0.0);
	}

	#[test]
	fn bbox_over_collection() {
		let collection = GeoCollection::from(vec![
			GeoFeature::new(Geometry::new_point([-3.0, 4.0])),
			GeoFeature::new(Geometry::new_line_string(vec![[1.0, -2.0], [5.0, 1.0]])),
		]);
		assert_eq!(GeoBackend.bbox(&collection), Some([-3.0, -2.0, 5.0, 4.0]));
		assert_eq!(GeoBackend.bbox(&GeoCollection::new(None)), None);

		let unplaced = GeoCollection::from(vec![GeoFeature::without_geometry()]);
		assert_eq!(GeoBackend.bbox(&unplaced), None);
	}

	#[test]
	fn centroid_of_square() {
		let square = Geometry::new_polygon(vec![vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]]);
		let c = GeoBackend.centroid(&square).unwrap();
		assert_relative_eq!(c.x(), 1.0, epsilon = 1e-12);
		assert_relative_eq!(c.y(), 1.0, epsilon = 1e-12);
	}
}
