use crate::column::{CellCallback, Column, ColumnOptions, ResolvedHelper};
use crate::context::HelperRegistry;
use crate::error::{TableError, TableResult};
use crate::value::CellValue;
use serde_json::Value;
use tablefor_utils::text::humanize;
use tracing::trace;

/// Collects an ordered sequence of column declarations
///
/// Created fresh for every [`table_for`](crate::table_for) call and
/// handed to the caller's closure; columns render in declaration order,
/// with no reordering and no dedup by name.
///
/// Exactly one of {closure, `helper_method` option, plain accessor}
/// determines each column's variant: a closure wins over
/// `helper_method`, which wins over the plain-accessor default.
#[derive(Debug)]
pub struct TableDefinition<'a> {
	helpers: &'a HelperRegistry,
	columns: Vec<Column>,
}

impl<'a> TableDefinition<'a> {
	pub(crate) fn new(helpers: &'a HelperRegistry) -> Self {
		Self {
			helpers,
			columns: Vec::new(),
		}
	}

	/// Declare a column from a single field identifier
	///
	/// The identifier is both the accessor and, humanized, the header
	/// label: `column("first_name")` reads `first_name` under the
	/// header "First name".
	pub fn column(&mut self, name: &str) -> &mut Self {
		self.columns.push(Column::Simple {
			name: humanize(name),
			method: name.to_string(),
			options: ColumnOptions::default(),
		});
		self
	}

	/// Declare a column with an explicit label and accessor
	pub fn column_with(&mut self, label: impl Into<String>, method: impl Into<String>) -> &mut Self {
		self.columns.push(Column::Simple {
			name: label.into(),
			method: method.into(),
			options: ColumnOptions::default(),
		});
		self
	}

	/// Declare a column with options, deriving the accessor when absent
	///
	/// With `method: None` the label is treated as the field identifier,
	/// exactly as in [`column`](Self::column). A `helper_method` in the
	/// options is resolved against the registry here; an unknown name
	/// fails now, before any rendering.
	///
	/// # Errors
	///
	/// [`TableError::UnknownHelper`] if `options.helper_method` names a
	/// helper that is not registered on the view context.
	pub fn column_opts(
		&mut self,
		label: &str,
		method: Option<&str>,
		mut options: ColumnOptions,
	) -> TableResult<&mut Self> {
		let (name, method) = match method {
			Some(m) => (label.to_string(), m.to_string()),
			None => (humanize(label), label.to_string()),
		};

		match options.helper_method.take() {
			Some(helper_ref) => {
				let callable =
					self.helpers
						.get(helper_ref.name())
						.ok_or_else(|| TableError::UnknownHelper {
							name: helper_ref.name().to_string(),
						})?;
				trace!(helper = helper_ref.name(), column = %name, "resolved helper method");
				self.columns.push(Column::Helper {
					name,
					method,
					helper: ResolvedHelper {
						name: helper_ref.name().to_string(),
						callable,
						extra_args: helper_ref.args().to_vec(),
					},
					options,
				});
			}
			None => {
				self.columns.push(Column::Simple {
					name,
					method,
					options,
				});
			}
		}
		Ok(self)
	}

	/// Declare a column whose cells are computed by a closure
	pub fn column_fn<F>(&mut self, label: impl Into<String>, callback: F) -> &mut Self
	where
		F: Fn(&Value) -> TableResult<CellValue> + 'static,
	{
		self.column_fn_opts(label, ColumnOptions::default(), callback)
	}

	/// Declare a closure column carrying HTML attributes
	///
	/// The closure takes precedence: any `helper_method` in the options
	/// is discarded.
	pub fn column_fn_opts<F>(
		&mut self,
		label: impl Into<String>,
		mut options: ColumnOptions,
		callback: F,
	) -> &mut Self
	where
		F: Fn(&Value) -> TableResult<CellValue> + 'static,
	{
		options.helper_method = None;
		self.columns.push(Column::Proc {
			name: label.into(),
			callback: Box::new(callback) as CellCallback,
			options,
		});
		self
	}

	/// The declared columns, in declaration order
	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub(crate) fn into_columns(self) -> Vec<Column> {
		self.columns
	}
}

/// Declare simple columns from a list of field identifiers
///
/// The static stand-in for the source DSL's dynamic shorthand: each
/// identifier becomes a plain accessor column with a humanized label.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tablefor::{TableOptions, ViewContext, columns, table_for};
///
/// let mut ctx = ViewContext::new();
/// let records = vec![json!({"first_name": "Ada", "age": 36})];
/// let markup = table_for(&mut ctx, &records, TableOptions::new(), |t| {
///     columns!(t; first_name, age);
///     Ok(())
/// })
/// .unwrap();
/// assert!(markup.as_str().contains("<th>First name</th><th>Age</th>"));
/// ```
#[macro_export]
macro_rules! columns {
	($def:expr; $($field:ident),+ $(,)?) => {
		$( $def.column(stringify!($field)); )+
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_column_derives_label_and_method() {
		let registry = HelperRegistry::new();
		let mut def = TableDefinition::new(&registry);
		def.column("email_address");

		let col = &def.columns()[0];
		assert_eq!(col.name(), "Email address");
		let record = json!({"email_address": "ada@example.com"});
		assert_eq!(col.format(&record).unwrap().as_str(), "ada@example.com");
	}

	#[test]
	fn test_declaration_order_preserved() {
		let registry = HelperRegistry::new();
		let mut def = TableDefinition::new(&registry);
		def.column("b").column("a").column("b");

		let names: Vec<&str> = def.columns().iter().map(|c| c.name()).collect();
		assert_eq!(names, vec!["B", "A", "B"]);
	}

	#[test]
	fn test_column_with_keeps_label_verbatim() {
		let registry = HelperRegistry::new();
		let mut def = TableDefinition::new(&registry);
		def.column_with("E-mail", "email");
		assert_eq!(def.columns()[0].name(), "E-mail");
	}

	#[test]
	fn test_column_opts_derives_when_method_absent() {
		let registry = HelperRegistry::new();
		let mut def = TableDefinition::new(&registry);
		def.column_opts("size", None, ColumnOptions::new().attr("class", "numeric"))
			.unwrap();

		let col = &def.columns()[0];
		assert_eq!(col.name(), "Size");
		assert_eq!(col.options().html_attrs().get("class"), Some("numeric"));
	}

	#[test]
	fn test_unknown_helper_fails_at_declaration() {
		let registry = HelperRegistry::new();
		let mut def = TableDefinition::new(&registry);
		let err = def
			.column_opts("size", None, ColumnOptions::new().helper("round_to"))
			.unwrap_err();
		assert!(matches!(err, TableError::UnknownHelper { ref name } if name == "round_to"));
		assert!(def.columns().is_empty());
	}

	#[test]
	fn test_helper_resolved_eagerly() {
		let mut registry = HelperRegistry::new();
		registry.register("upcase", |args| {
			Ok(CellValue::from(
				args[0].as_str().unwrap_or_default().to_uppercase(),
			))
		});
		let mut def = TableDefinition::new(&registry);
		def.column_opts("name", None, ColumnOptions::new().helper("upcase"))
			.unwrap();

		let record = json!({"name": "ada"});
		assert_eq!(def.columns()[0].format(&record).unwrap().as_str(), "ADA");
	}

	#[test]
	fn test_closure_takes_precedence_over_helper_method() {
		// A helper_method on a closure column is discarded, not resolved:
		// the name does not even have to exist.
		let registry = HelperRegistry::new();
		let mut def = TableDefinition::new(&registry);
		def.column_fn_opts(
			"Status",
			ColumnOptions::new().helper("no_such_helper"),
			|_| Ok(CellValue::from("ok")),
		);

		let col = &def.columns()[0];
		assert_eq!(col.format(&json!({})).unwrap().as_str(), "ok");
		assert!(col.options().helper_method().is_none());
	}

	#[test]
	fn test_columns_macro_expands_to_simple_columns() {
		let registry = HelperRegistry::new();
		let mut def = TableDefinition::new(&registry);
		columns!(def; first_name, last_name, age);

		let names: Vec<&str> = def.columns().iter().map(|c| c.name()).collect();
		assert_eq!(names, vec!["First name", "Last name", "Age"]);
	}
}
