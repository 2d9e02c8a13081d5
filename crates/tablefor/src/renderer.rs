use crate::column::Column;
use crate::context::ViewContext;
use crate::definition::TableDefinition;
use crate::error::TableResult;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tablefor_utils::html::{AttrMap, SafeString, content_tag, text_node};
use tracing::debug;

/// Table-level rendering options
///
/// Only the `html` attribute map reaches the rendered `<table>` tag.
/// Any other option set with [`set`](Self::set) is accepted and stored
/// but never read by the renderer, matching the source behavior of
/// discarding non-`html` table options.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
	html: AttrMap,
	extra: HashMap<String, Value>,
}

impl TableOptions {
	/// Create empty options
	pub fn new() -> Self {
		Self::default()
	}

	/// Add one HTML attribute for the outer `<table>` tag
	///
	/// # Examples
	///
	/// ```
	/// use tablefor::TableOptions;
	///
	/// let options = TableOptions::new().attr("id", "people_table");
	/// assert_eq!(options.html_attrs().get("id"), Some("people_table"));
	/// ```
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.html.set(name, value);
		self
	}

	/// Replace the table's HTML attributes wholesale
	pub fn html(mut self, attrs: AttrMap) -> Self {
		self.html = attrs;
		self
	}

	/// Store a non-`html` table option
	///
	/// Kept for call-site compatibility; the renderer ignores it.
	pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}

	/// The table's HTML attributes
	pub fn html_attrs(&self) -> &AttrMap {
		&self.html
	}

	/// Read back a stored non-`html` option
	pub fn extra(&self, key: &str) -> Option<&Value> {
		self.extra.get(key)
	}
}

/// Render an HTML table for a collection of records
///
/// Constructs a fresh [`TableDefinition`], runs `build` to collect the
/// column declarations, then renders one header cell per column and one
/// body row per record. The finished markup is appended to the view
/// context's output buffer and returned as a [`SafeString`].
///
/// The populate closure is part of the contract, not a convenience: a
/// `table_for` call without one does not compile.
///
/// # Errors
///
/// Whatever `build` returns, plus render-time failures: a record that
/// does not serialize to an object, a missing accessor, or a failing
/// helper/callback. On any error nothing is appended to the context.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use tablefor::{ColumnOptions, TableOptions, ViewContext, table_for};
///
/// #[derive(Serialize)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let people = vec![Person { name: "Ada".into(), age: 36 }];
/// let mut ctx = ViewContext::new();
/// let markup = table_for(
///     &mut ctx,
///     &people,
///     TableOptions::new().attr("id", "people_table"),
///     |t| {
///         t.column("name");
///         t.column_opts("age", None, ColumnOptions::new().attr("class", "numeric"))?;
///         Ok(())
///     },
/// )
/// .unwrap();
/// assert_eq!(
///     markup.as_str(),
///     "<table id=\"people_table\">\
///      <thead><tr><th>Name</th><th class=\"numeric\">Age</th></tr></thead>\
///      <tbody><tr><td>Ada</td><td class=\"numeric\">36</td></tr></tbody>\
///      </table>"
/// );
/// assert_eq!(ctx.output(), markup.as_str());
/// ```
pub fn table_for<T, F>(
	ctx: &mut ViewContext,
	collection: &[T],
	options: TableOptions,
	build: F,
) -> TableResult<SafeString>
where
	T: Serialize,
	F: FnOnce(&mut TableDefinition) -> TableResult<()>,
{
	let mut definition = TableDefinition::new(ctx.helpers());
	build(&mut definition)?;
	let columns = definition.into_columns();

	debug!(
		columns = columns.len(),
		records = collection.len(),
		"rendering table"
	);

	let records = collection
		.iter()
		.map(serde_json::to_value)
		.collect::<Result<Vec<_>, _>>()?;

	let markup = render_table(&columns, &records, options.html_attrs())?;
	ctx.concat(&markup);
	Ok(markup)
}

fn render_table(columns: &[Column], records: &[Value], attrs: &AttrMap) -> TableResult<SafeString> {
	let mut inner = render_head(columns);
	inner.push(&render_body(columns, records)?);
	Ok(content_tag("table", attrs, &inner))
}

fn render_head(columns: &[Column]) -> SafeString {
	let mut cells = SafeString::new("");
	for column in columns {
		cells.push(&content_tag(
			"th",
			column.options().html_attrs(),
			&text_node(column.name()),
		));
	}
	let row = content_tag("tr", &AttrMap::new(), &cells);
	content_tag("thead", &AttrMap::new(), &row)
}

fn render_body(columns: &[Column], records: &[Value]) -> TableResult<SafeString> {
	let mut rows = SafeString::new("");
	for record in records {
		let mut cells = SafeString::new("");
		for column in columns {
			let value = column.format(record)?;
			cells.push(&content_tag(
				"td",
				column.options().html_attrs(),
				&value.to_html(),
			));
		}
		rows.push(&content_tag("tr", &AttrMap::new(), &cells));
	}
	Ok(content_tag("tbody", &AttrMap::new(), &rows))
}
