use serde::Deserialize;
use std::{
	f64::consts::PI,
	fmt::{Display, Formatter},
};

/// Mean earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_008.8;

/// Length units accepted by measurements and configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Units {
	Meters,
	#[default]
	Kilometers,
	Miles,
	NauticalMiles,
	Degrees,
	Radians,
}

impl Units {
	pub const ALL: [Units; 6] = [
		Units::Meters,
		Units::Kilometers,
		Units::Miles,
		Units::NauticalMiles,
		Units::Degrees,
		Units::Radians,
	];

	/// How many of this unit one radian of arc on the earth's surface spans.
	#[must_use]
	pub fn per_radian(&self) -> f64 {
		match self {
			Units::Meters => EARTH_RADIUS,
			Units::Kilometers => EARTH_RADIUS / 1000.0,
			Units::Miles => EARTH_RADIUS / 1609.344,
			Units::NauticalMiles => EARTH_RADIUS / 1852.0,
			Units::Degrees => 180.0 / PI,
			Units::Radians => 1.0,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Units::Meters => "meters",
			Units::Kilometers => "kilometers",
			Units::Miles => "miles",
			Units::NauticalMiles => "nautical_miles",
			Units::Degrees => "degrees",
			Units::Radians => "radians",
		}
	}

	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		Units::ALL.into_iter().find(|u| u.as_str() == name)
	}
}

impl Display for Units {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[must_use]
pub fn radians_to_length(radians: f64, units: Units) -> f64 {
	radians * units.per_radian()
}

#[must_use]
pub fn length_to_radians(length: f64, units: Units) -> f64 {
	length / units.per_radian()
}

#[must_use]
pub fn length_to_degrees(length: f64, units: Units) -> f64 {
	length_to_radians(length, units).to_degrees()
}

#[must_use]
pub fn degrees_to_length(degrees: f64, units: Units) -> f64 {
	radians_to_length(degrees.to_radians(), units)
}

#[must_use]
pub fn convert_length(length: f64, from: Units, to: Units) -> f64 {
	radians_to_length(length_to_radians(length, from), to)
}
