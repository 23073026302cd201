use crate::Units;
use anyhow::{Context, Result};
use geofacade_geometry::{Crs, ParseOptions};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Settings a [`crate::Facade`] applies to every call.
///
/// ```yaml
/// units: miles
/// crs: "EPSG:4326"
/// verify_geometry: false
/// precision: 6
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FacadeConfig {
	/// Units for distances and lengths when the caller does not name any.
	pub units: Units,

	/// CRS name given to collections created through the facade. No CRS when unset.
	pub crs: Option<String>,

	/// Reject structurally invalid geometry while loading.
	pub verify_geometry: bool,

	/// Decimal places kept for coordinates when writing GeoJSON. Unlimited when unset.
	pub precision: Option<u8>,
}

impl Default for FacadeConfig {
	fn default() -> Self {
		Self {
			units: Units::default(),
			crs: None,
			verify_geometry: true,
			precision: None,
		}
	}
}

impl FacadeConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config {path:?}"))?;
		FacadeConfig::from_reader(BufReader::new(file)).with_context(|| format!("parsing config {path:?}"))
	}

	#[must_use]
	pub fn crs(&self) -> Option<Crs> {
		self.crs.as_deref().map(Crs::new)
	}

	#[must_use]
	pub fn parse_options(&self) -> ParseOptions {
		ParseOptions {
			verify_geometry: self.verify_geometry,
		}
	}
}
