use super::GeoProperties;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde_json::{Number, Value};
use std::fmt::{Debug, Display};

/// A property value. Closed counterpart of the JSON values a GeoJSON `properties` object holds.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Array(Vec<GeoValue>),
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	Object(GeoProperties),
	String(String),
	UInt(u64),
}

lazy_static! {
	static ref REG_NUMBER: Regex = RegexBuilder::new(r"^\s*[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?\s*$")
		.build()
		.expect("valid number pattern");
}

impl GeoValue {
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		match self {
			GeoValue::Array(_) => "array",
			GeoValue::Bool(_) => "boolean",
			GeoValue::Double(_) | GeoValue::Int(_) | GeoValue::UInt(_) => "number",
			GeoValue::Null => "null",
			GeoValue::Object(_) => "object",
			GeoValue::String(_) => "string",
		}
	}

	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			GeoValue::Double(v) => Some(*v),
			GeoValue::Int(v) => Some(*v as f64),
			GeoValue::UInt(v) => Some(*v as f64),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			GeoValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// True for numbers and for strings that read as a decimal number (`"42"`, `" -1.5e3 "`).
	/// Empty and blank strings are not numeric.
	#[must_use]
	pub fn is_numeric(&self) -> bool {
		match self {
			GeoValue::Double(_) | GeoValue::Int(_) | GeoValue::UInt(_) => true,
			GeoValue::String(s) => REG_NUMBER.is_match(s),
			_ => false,
		}
	}

	/// Converts a JSON value into a property value. Integers keep their integer type.
	#[must_use]
	pub fn from_json(value: &Value) -> Self {
		match value {
			Value::Null => GeoValue::Null,
			Value::Bool(b) => GeoValue::Bool(*b),
			Value::Number(n) => {
				if let Some(v) = n.as_u64() {
					GeoValue::UInt(v)
				} else if let Some(v) = n.as_i64() {
					GeoValue::Int(v)
				} else {
					GeoValue::Double(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			Value::String(s) => GeoValue::String(s.clone()),
			Value::Array(a) => GeoValue::Array(a.iter().map(GeoValue::from_json).collect()),
			Value::Object(o) => GeoValue::Object(o.iter().map(|(k, v)| (k.clone(), GeoValue::from_json(v))).collect()),
		}
	}

	/// Converts back to JSON. Non-finite doubles have no JSON form and become `null`.
	#[must_use]
	pub fn to_json(&self) -> Value {
		match self {
			GeoValue::Array(a) => Value::Array(a.iter().map(GeoValue::to_json).collect()),
			GeoValue::Bool(b) => Value::Bool(*b),
			GeoValue::Double(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
			GeoValue::Int(v) => Value::from(*v),
			GeoValue::Null => Value::Null,
			GeoValue::Object(o) => o.to_json(),
			GeoValue::String(s) => Value::String(s.clone()),
			GeoValue::UInt(v) => Value::from(*v),
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => write!(f, "null"),
			GeoValue::String(v) => write!(f, "{v}"),
			GeoValue::UInt(v) => write!(f, "{v}"),
			GeoValue::Array(_) | GeoValue::Object(_) => write!(f, "{}", self.to_json()),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(i64::from(value))
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u32> for GeoValue {
	fn from(value: u32) -> Self {
		GeoValue::UInt(u64::from(value))
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl From<GeoProperties> for GeoValue {
	fn from(value: GeoProperties) -> Self {
		GeoValue::Object(value)
	}
}

impl<T> From<Vec<T>> for GeoValue
where
	GeoValue: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		GeoValue::Array(value.into_iter().map(GeoValue::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(GeoValue::from(1.5), true)]
	#[case(GeoValue::from(-3), true)]
	#[case(GeoValue::from(7u64), true)]
	#[case(GeoValue::from("42"), true)]
	#[case(GeoValue::from(" -1.5e3 "), true)]
	#[case(GeoValue::from("1."), true)]
	#[case(GeoValue::from(""), false)]
	#[case(GeoValue::from("   "), false)]
	#[case(GeoValue::from("Unknown"), false)]
	#[case(GeoValue::from("1,5"), false)]
	#[case(GeoValue::from(true), false)]
	#[case(GeoValue::Null, false)]
	fn is_numeric(#[case] value: GeoValue, #[case] expected: bool) {
		assert_eq!(value.is_numeric(), expected);
	}

	#[test]
	fn from_json() {
		let value = GeoValue::from_json(&json!({
			"a": 1,
			"b": -2,
			"c": 2.5,
			"d": [true, null],
			"e": "text"
		}));
		let GeoValue::Object(props) = value else {
			panic!("expected an object");
		};
		assert_eq!(props.get("a"), Some(&GeoValue::UInt(1)));
		assert_eq!(props.get("b"), Some(&GeoValue::Int(-2)));
		assert_eq!(props.get("c"), Some(&GeoValue::Double(2.5)));
		assert_eq!(
			props.get("d"),
			Some(&GeoValue::Array(vec![GeoValue::Bool(true), GeoValue::Null]))
		);
		assert_eq!(props.get("e"), Some(&GeoValue::from("text")));
	}

	#[test]
	fn to_json() {
		assert_eq!(GeoValue::from(3778.194).to_json(), json!(3778.194));
		assert_eq!(GeoValue::from(-3).to_json(), json!(-3));
		assert_eq!(GeoValue::from(f64::NAN).to_json(), Value::Null);
		assert_eq!(GeoValue::from(vec!["a", "b"]).to_json(), json!(["a", "b"]));
	}

	#[test]
	fn display() {
		assert_eq!(GeoValue::from("Unknown").to_string(), "Unknown");
		assert_eq!(GeoValue::from(3778.194).to_string(), "3778.194");
		assert_eq!(GeoValue::Null.to_string(), "null");
		assert_eq!(GeoValue::from(vec![1, 2]).to_string(), "[1,2]");
	}

	#[test]
	fn accessors() {
		assert_eq!(GeoValue::from(2u64).as_f64(), Some(2.0));
		assert_eq!(GeoValue::from("x").as_f64(), None);
		assert_eq!(GeoValue::from("x").as_str(), Some("x"));
		assert_eq!(GeoValue::from(true).type_as_str(), "boolean");
		assert_eq!(GeoValue::from(-1).type_as_str(), "number");
	}
}
