use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A position: `x` (longitude), `y` (latitude) and an optional elevation `z`.
///
/// Ranges are never checked, only finiteness (see [`Coordinates::verify`]).
#[derive(Clone, PartialEq)]
pub struct Coordinates {
	xy: [f64; 2],
	z: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { xy: [x, y], z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { xy: [x, y], z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.xy[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.xy[1]
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	pub fn verify(&self) -> Result<()> {
		crate::ensure_geometry!(
			self.xy.iter().chain(self.z.iter()).all(|v| v.is_finite()),
			"coordinates {:?} must be finite numbers",
			self
		);
		Ok(())
	}

	/// Spherical Web Mercator (EPSG:3857) projection of a longitude/latitude position.
	#[must_use]
	pub fn to_mercator(&self) -> Self {
		const RADIUS: f64 = 6_378_137.0;
		const MAX_LAT: f64 = 85.051_128_779_806_59;
		let lat = self.y().clamp(-MAX_LAT, MAX_LAT).to_radians();
		Self {
			xy: [
				RADIUS * self.x().to_radians(),
				RADIUS * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln(),
			],
			z: self.z,
		}
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let round = |v: f64| match precision {
			Some(prec) => {
				let factor = 10f64.powi(i32::from(prec));
				(v * factor).round() / factor
			}
			None => v,
		};
		let mut values = vec![round(self.xy[0]), round(self.xy[1])];
		if let Some(z) = self.z {
			values.push(round(z));
		}
		Value::from(values)
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinates {
	fn from(value: [f64; 3]) -> Self {
		Coordinates::new_3d(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl From<&Coordinates> for geo::Coord {
	fn from(value: &Coordinates) -> Self {
		geo::Coord {
			x: value.x(),
			y: value.y(),
		}
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.z {
			Some(z) => [self.xy[0], self.xy[1], z].fmt(f),
			None => self.xy.fmt(f),
		}
	}
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_and_accessors() {
		let c = Coordinates::new(13.404954, 52.520008);
		assert_eq!(c.x(), 13.404954);
		assert_eq!(c.y(), 52.520008);
		assert_eq!(c.z(), None);
		assert_eq!(Coordinates::new_3d(1.0, 2.0, 3.0).z(), Some(3.0));
	}

	#[test]
	fn debug_formats_like_array() {
		assert_eq!(format!("{:?}", Coordinates::new(1.0, 2.0)), "[1.0, 2.0]");
		assert_eq!(format!("{:?}", Coordinates::new_3d(1.0, 2.0, 3.0)), "[1.0, 2.0, 3.0]");
	}

	#[rstest]
	#[case(None, [1.23456, 2.34567])]
	#[case(Some(0), [1.0, 2.0])]
	#[case(Some(1), [1.2, 2.3])]
	#[case(Some(3), [1.235, 2.346])]
	fn to_json(#[case] precision: Option<u8>, #[case] expected: [f64; 2]) {
		let c = Coordinates::new(1.23456, 2.34567);
		assert_eq!(c.to_json(precision), Value::from(expected.to_vec()));
	}

	#[test]
	fn to_json_keeps_elevation() {
		let c = Coordinates::new_3d(1.0, 2.0, 30.5);
		assert_eq!(c.to_json(None), serde_json::json!([1.0, 2.0, 30.5]));
	}

	#[test]
	fn verify_rejects_non_finite() {
		assert!(Coordinates::new(1.0, 2.0).verify().is_ok());
		assert!(Coordinates::new(f64::NAN, 2.0).verify().is_err());
		assert!(Coordinates::new_3d(1.0, 2.0, f64::INFINITY).verify().is_err());
	}

	#[test]
	fn to_mercator() {
		let origin = Coordinates::new(0.0, 0.0).to_mercator();
		assert!(origin.x().abs() < 1e-9);
		assert!(origin.y().abs() < 1e-9);

		let m = Coordinates::new(180.0, 0.0).to_mercator();
		assert!((m.x() - 20_037_508.342_789_244).abs() < 1e-6);
	}

	#[test]
	fn geo_coord_conversion() {
		let c = Coordinates::from(geo::Coord { x: 11.0, y: 22.0 });
		assert_eq!(c, Coordinates::new(11.0, 22.0));
		let back = geo::Coord::from(&c);
		assert_eq!(back.x, 11.0);
		assert_eq!(back.y, 22.0);
	}

	#[test]
	fn from_tuple_and_arrays() {
		assert_eq!(Coordinates::from((3.0, 4.0)), Coordinates::new(3.0, 4.0));
		assert_eq!(Coordinates::from(&[5, 6]), Coordinates::new(5.0, 6.0));
		assert_eq!(Coordinates::from([1.0, 2.0, 3.0]), Coordinates::new_3d(1.0, 2.0, 3.0));
	}
}
