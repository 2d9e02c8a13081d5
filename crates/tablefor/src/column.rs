use crate::context::Helper;
use crate::error::{TableError, TableResult};
use crate::value::CellValue;
use serde_json::Value;
use std::sync::Arc;
use tablefor_utils::html::AttrMap;

/// Callback computing a cell value directly from a record
pub type CellCallback = Box<dyn Fn(&Value) -> TableResult<CellValue>>;

/// A `helper_method` reference as written at the declaration site
///
/// Either a bare helper name (the helper receives exactly the
/// accessor's value) or a name plus extra arguments (the helper
/// receives the accessor's value followed by the extras, in order).
///
/// # Examples
///
/// ```
/// use tablefor::HelperMethod;
/// use serde_json::json;
///
/// let bare = HelperMethod::new("intcomma");
/// assert!(bare.args().is_empty());
///
/// let with_args = HelperMethod::with_args("round_to", vec![json!(2)]);
/// assert_eq!(with_args.name(), "round_to");
/// assert_eq!(with_args.args().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HelperMethod {
	name: String,
	args: Vec<Value>,
}

impl HelperMethod {
	/// Reference a helper that takes only the accessor's value
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			args: Vec::new(),
		}
	}

	/// Reference a helper with extra trailing arguments
	pub fn with_args(name: impl Into<String>, args: Vec<Value>) -> Self {
		Self {
			name: name.into(),
			args,
		}
	}

	/// The helper name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The extra arguments, in order
	pub fn args(&self) -> &[Value] {
		&self.args
	}
}

/// Per-column declaration options
///
/// `html` attributes are applied verbatim to the column's `<th>` and
/// `<td>` tags. `helper_method` is consumed by the builder when the
/// column is declared and never reaches the renderer.
#[derive(Debug, Clone, Default)]
pub struct ColumnOptions {
	pub(crate) html: AttrMap,
	pub(crate) helper_method: Option<HelperMethod>,
}

impl ColumnOptions {
	/// Create empty options
	pub fn new() -> Self {
		Self::default()
	}

	/// Add one HTML attribute for the column's cells
	///
	/// # Examples
	///
	/// ```
	/// use tablefor::ColumnOptions;
	///
	/// let options = ColumnOptions::new().attr("class", "numeric");
	/// assert_eq!(options.html_attrs().get("class"), Some("numeric"));
	/// ```
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.html.set(name, value);
		self
	}

	/// Replace the column's HTML attributes wholesale
	pub fn html(mut self, attrs: AttrMap) -> Self {
		self.html = attrs;
		self
	}

	/// Format the accessor's value through a named helper
	pub fn helper(mut self, name: impl Into<String>) -> Self {
		self.helper_method = Some(HelperMethod::new(name));
		self
	}

	/// Format through a named helper with extra trailing arguments
	pub fn helper_with_args(mut self, name: impl Into<String>, args: Vec<Value>) -> Self {
		self.helper_method = Some(HelperMethod::with_args(name, args));
		self
	}

	/// The column's HTML attributes
	pub fn html_attrs(&self) -> &AttrMap {
		&self.html
	}

	/// The declared helper reference, if any
	pub fn helper_method(&self) -> Option<&HelperMethod> {
		self.helper_method.as_ref()
	}
}

/// A helper resolved against the registry at declaration time
///
/// Only the builder constructs these; by the time a column holds one,
/// the name has already been looked up successfully.
pub struct ResolvedHelper {
	pub(crate) name: String,
	pub(crate) callable: Arc<Helper>,
	pub(crate) extra_args: Vec<Value>,
}

impl std::fmt::Debug for ResolvedHelper {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ResolvedHelper")
			.field("name", &self.name)
			.field("extra_args", &self.extra_args)
			.finish_non_exhaustive()
	}
}

impl ResolvedHelper {
	/// The helper name the column was declared with
	pub fn name(&self) -> &str {
		&self.name
	}
}

/// One declared column: how to derive one cell's value from a record
///
/// The three variants share a display name and options and are unified
/// by [`Column::format`].
pub enum Column {
	/// Read a single field off the record
	Simple {
		name: String,
		method: String,
		options: ColumnOptions,
	},
	/// Read a field, then pass it through a resolved helper
	Helper {
		name: String,
		method: String,
		helper: ResolvedHelper,
		options: ColumnOptions,
	},
	/// Compute the cell directly from the record
	Proc {
		name: String,
		callback: CellCallback,
		options: ColumnOptions,
	},
}

impl std::fmt::Debug for Column {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Simple {
				name,
				method,
				options,
			} => f
				.debug_struct("Simple")
				.field("name", name)
				.field("method", method)
				.field("options", options)
				.finish(),
			Self::Helper {
				name,
				method,
				helper,
				options,
			} => f
				.debug_struct("Helper")
				.field("name", name)
				.field("method", method)
				.field("helper", helper)
				.field("options", options)
				.finish(),
			Self::Proc { name, options, .. } => f
				.debug_struct("Proc")
				.field("name", name)
				.field("options", options)
				.finish_non_exhaustive(),
		}
	}
}

impl Column {
	/// The header label
	pub fn name(&self) -> &str {
		match self {
			Self::Simple { name, .. } | Self::Helper { name, .. } | Self::Proc { name, .. } => name,
		}
	}

	/// The declaration options
	pub fn options(&self) -> &ColumnOptions {
		match self {
			Self::Simple { options, .. }
			| Self::Helper { options, .. }
			| Self::Proc { options, .. } => options,
		}
	}

	/// Compute this column's cell value for one record
	///
	/// Errors propagate uncaught: a missing field, a non-object record,
	/// or a failing helper/callback aborts the render that called this.
	pub fn format(&self, record: &Value) -> TableResult<CellValue> {
		match self {
			Self::Simple { name, method, .. } => {
				let value = lookup(record, method, name)?;
				Ok(CellValue::from_json(value))
			}
			Self::Helper {
				name,
				method,
				helper,
				..
			} => {
				let value = lookup(record, method, name)?;
				let mut args = Vec::with_capacity(1 + helper.extra_args.len());
				args.push(value.clone());
				args.extend(helper.extra_args.iter().cloned());
				(helper.callable)(&args)
			}
			Self::Proc { callback, .. } => callback(record),
		}
	}
}

fn lookup<'a>(record: &'a Value, method: &str, column: &str) -> TableResult<&'a Value> {
	let object = record.as_object().ok_or(TableError::NotAnObject)?;
	object
		.get(method)
		.ok_or_else(|| TableError::MissingAccessor {
			column: column.to_string(),
			method: method.to_string(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn simple(name: &str, method: &str) -> Column {
		Column::Simple {
			name: name.to_string(),
			method: method.to_string(),
			options: ColumnOptions::default(),
		}
	}

	#[test]
	fn test_simple_format_reads_field() {
		let col = simple("Name", "name");
		let record = json!({"name": "Ada"});
		assert_eq!(col.format(&record).unwrap().as_str(), "Ada");
	}

	#[test]
	fn test_simple_format_missing_field() {
		let col = simple("Name", "name");
		let record = json!({"age": 36});
		let err = col.format(&record).unwrap_err();
		assert!(matches!(
			err,
			TableError::MissingAccessor { ref column, ref method }
				if column == "Name" && method == "name"
		));
	}

	#[test]
	fn test_format_non_object_record() {
		let col = simple("Name", "name");
		let err = col.format(&json!([1, 2, 3])).unwrap_err();
		assert!(matches!(err, TableError::NotAnObject));
	}

	#[test]
	fn test_helper_format_arg_order() {
		let col = Column::Helper {
			name: "Size".to_string(),
			method: "size".to_string(),
			helper: ResolvedHelper {
				name: "join".to_string(),
				callable: Arc::new(|args: &[Value]| {
					let parts: Vec<String> = args.iter().map(|v| v.to_string()).collect();
					Ok(CellValue::from(parts.join("|")))
				}),
				extra_args: vec![json!(1), json!(2)],
			},
			options: ColumnOptions::default(),
		};
		let record = json!({"size": 9});
		assert_eq!(col.format(&record).unwrap().as_str(), "9|1|2");
	}

	#[test]
	fn test_proc_format_receives_record() {
		let col = Column::Proc {
			name: "Full name".to_string(),
			callback: Box::new(|record: &Value| {
				let first = record["first"].as_str().unwrap_or_default();
				let last = record["last"].as_str().unwrap_or_default();
				Ok(CellValue::from(format!("{} {}", first, last)))
			}),
			options: ColumnOptions::default(),
		};
		let record = json!({"first": "Ada", "last": "Lovelace"});
		assert_eq!(col.format(&record).unwrap().as_str(), "Ada Lovelace");
	}

	#[test]
	fn test_options_builder() {
		let options = ColumnOptions::new()
			.attr("class", "numeric")
			.helper_with_args("round_to", vec![json!(2)]);
		assert_eq!(options.html_attrs().get("class"), Some("numeric"));
		assert_eq!(options.helper_method().unwrap().name(), "round_to");
	}
}
