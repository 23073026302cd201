use std::fmt::{Display, Formatter};

/// Error kinds raised by this crate.
///
/// Operations return `anyhow::Result`; when one of these kinds is the cause it can be recovered
/// with `error.downcast_ref::<GeoError>()`.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
	/// The input text is not well-formed JSON, or not a GeoJSON document of the expected shape.
	Parse(String),
	/// A strict property lookup asked for a key the feature does not have.
	PropertyNotFound { key: String },
	/// A geometry failed structural validation.
	InvalidGeometry(String),
}

impl GeoError {
	pub fn parse(msg: impl Into<String>) -> Self {
		GeoError::Parse(msg.into())
	}

	pub fn invalid_geometry(msg: impl Into<String>) -> Self {
		GeoError::InvalidGeometry(msg.into())
	}
}

impl Display for GeoError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoError::Parse(msg) => write!(f, "parse error: {msg}"),
			GeoError::PropertyNotFound { key } => write!(f, "property '{key}' not found"),
			GeoError::InvalidGeometry(msg) => write!(f, "invalid geometry: {msg}"),
		}
	}
}

impl std::error::Error for GeoError {}

/// Returns early with a [`GeoError::InvalidGeometry`] unless the condition holds.
#[macro_export]
macro_rules! ensure_geometry {
	($cond:expr, $($arg:tt)*) => {
		if !$cond {
			return Err($crate::GeoError::invalid_geometry(format!($($arg)*)).into());
		}
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::{Result, anyhow};

	#[test]
	fn display() {
		assert_eq!(GeoError::parse("eof").to_string(), "parse error: eof");
		assert_eq!(
			GeoError::PropertyNotFound { key: "name".into() }.to_string(),
			"property 'name' not found"
		);
		assert_eq!(
			GeoError::invalid_geometry("ring is open").to_string(),
			"invalid geometry: ring is open"
		);
	}

	#[test]
	fn downcast_through_anyhow() {
		fn check(ok: bool) -> Result<()> {
			ensure_geometry!(ok, "failed with {}", 42);
			Ok(())
		}
		assert!(check(true).is_ok());
		let err = check(false).unwrap_err();
		assert_eq!(
			err.downcast_ref::<GeoError>(),
			Some(&GeoError::InvalidGeometry("failed with 42".into()))
		);
		assert!(anyhow!("other").downcast_ref::<GeoError>().is_none());
	}
}
