use serde_json::Value;
use tablefor_utils::html::{SafeString, text_node};

/// The renderable result of formatting one cell
///
/// `Text` is escaped when the cell is emitted; `Safe` is emitted
/// verbatim and must only be produced for markup that is already
/// escaped. Safety is an explicit state of the value, never inferred
/// from its content.
///
/// # Examples
///
/// ```
/// use tablefor::CellValue;
///
/// let plain: CellValue = "a < b".into();
/// assert_eq!(plain.as_str(), "a < b");
///
/// let markup = CellValue::safe("<em>done</em>");
/// assert!(markup.is_safe());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
	/// Plain text, escaped on output
	Text(String),
	/// Pre-escaped markup, emitted verbatim
	Safe(String),
}

impl CellValue {
	/// Mark a string as pre-escaped markup
	pub fn safe(s: impl Into<String>) -> Self {
		Self::Safe(s.into())
	}

	/// The underlying string, regardless of safety
	pub fn as_str(&self) -> &str {
		match self {
			Self::Text(s) | Self::Safe(s) => s,
		}
	}

	/// Whether the value bypasses escaping
	pub fn is_safe(&self) -> bool {
		matches!(self, Self::Safe(_))
	}

	/// Render to markup, escaping unless the value is safe
	pub fn to_html(&self) -> SafeString {
		match self {
			Self::Text(s) => text_node(s),
			Self::Safe(s) => SafeString::new(s.clone()),
		}
	}

	/// Cell text for an accessor result
	///
	/// Strings render their contents without JSON quoting; a present
	/// `null` renders as an empty cell; every other value renders via
	/// its JSON display form.
	///
	/// # Examples
	///
	/// ```
	/// use tablefor::CellValue;
	/// use serde_json::json;
	///
	/// assert_eq!(CellValue::from_json(&json!("Ada")).as_str(), "Ada");
	/// assert_eq!(CellValue::from_json(&json!(null)).as_str(), "");
	/// assert_eq!(CellValue::from_json(&json!(42)).as_str(), "42");
	/// ```
	pub fn from_json(value: &Value) -> Self {
		match value {
			Value::Null => Self::Text(String::new()),
			Value::String(s) => Self::Text(s.clone()),
			other => Self::Text(other.to_string()),
		}
	}
}

impl From<String> for CellValue {
	fn from(s: String) -> Self {
		Self::Text(s)
	}
}

impl From<&str> for CellValue {
	fn from(s: &str) -> Self {
		Self::Text(s.to_string())
	}
}

impl From<SafeString> for CellValue {
	fn from(s: SafeString) -> Self {
		Self::Safe(s.into_string())
	}
}

macro_rules! cell_value_from_display {
	($($ty:ty),+) => {
		$(
			impl From<$ty> for CellValue {
				fn from(v: $ty) -> Self {
					Self::Text(v.to_string())
				}
			}
		)+
	};
}

cell_value_from_display!(i32, i64, u32, u64, usize, f32, f64, bool);
