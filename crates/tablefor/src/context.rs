use crate::error::TableResult;
use crate::value::CellValue;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tablefor_utils::html::SafeString;

/// A view helper callable
///
/// Helpers receive the accessor's value as `args[0]` followed by the
/// column's extra arguments in declaration order.
pub type Helper = dyn Fn(&[Value]) -> TableResult<CellValue> + Send + Sync;

/// Name → callable table for view helpers
///
/// Helper names are resolved eagerly when a column is declared, so an
/// unregistered name fails before any rendering begins.
///
/// # Examples
///
/// ```
/// use tablefor::{CellValue, HelperRegistry};
///
/// let mut registry = HelperRegistry::new();
/// registry.register("shout", |args| {
///     let text = args[0].as_str().unwrap_or_default();
///     Ok(CellValue::from(text.to_uppercase()))
/// });
/// assert!(registry.contains("shout"));
/// ```
#[derive(Clone, Default)]
pub struct HelperRegistry {
	helpers: HashMap<String, Arc<Helper>>,
}

impl std::fmt::Debug for HelperRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HelperRegistry")
			.field("helpers", &self.helpers.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl HelperRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a registry pre-loaded with the built-in formatting helpers
	///
	/// # Examples
	///
	/// ```
	/// use tablefor::HelperRegistry;
	///
	/// let registry = HelperRegistry::with_builtins();
	/// assert!(registry.contains("intcomma"));
	/// assert!(registry.contains("round_to"));
	/// ```
	pub fn with_builtins() -> Self {
		let mut registry = Self::new();
		crate::helpers::register_builtins(&mut registry);
		registry
	}

	/// Register a helper under the given name, replacing any previous one
	pub fn register<F>(&mut self, name: impl Into<String>, helper: F)
	where
		F: Fn(&[Value]) -> TableResult<CellValue> + Send + Sync + 'static,
	{
		self.helpers.insert(name.into(), Arc::new(helper));
	}

	/// Look up a helper by name
	pub fn get(&self, name: &str) -> Option<Arc<Helper>> {
		self.helpers.get(name).cloned()
	}

	/// Whether a helper is registered under the given name
	pub fn contains(&self, name: &str) -> bool {
		self.helpers.contains_key(name)
	}

	/// Number of registered helpers
	pub fn len(&self) -> usize {
		self.helpers.len()
	}

	/// Whether the registry is empty
	pub fn is_empty(&self) -> bool {
		self.helpers.is_empty()
	}
}

/// The enclosing template/view context
///
/// Owns the helper registry used to resolve `helper_method` names and
/// the output buffer that rendered markup is appended to. One context
/// typically lives for the duration of a view render and receives the
/// output of every `table_for` call made inside it.
#[derive(Clone, Default)]
pub struct ViewContext {
	helpers: HelperRegistry,
	out: String,
}

impl ViewContext {
	/// Create a context with an empty helper registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a context around an existing helper registry
	///
	/// # Examples
	///
	/// ```
	/// use tablefor::{HelperRegistry, ViewContext};
	///
	/// let ctx = ViewContext::with_helpers(HelperRegistry::with_builtins());
	/// assert!(ctx.helpers().contains("filesizeformat"));
	/// ```
	pub fn with_helpers(helpers: HelperRegistry) -> Self {
		Self {
			helpers,
			out: String::new(),
		}
	}

	/// The helper registry
	pub fn helpers(&self) -> &HelperRegistry {
		&self.helpers
	}

	/// Mutable access to the helper registry
	pub fn helpers_mut(&mut self) -> &mut HelperRegistry {
		&mut self.helpers
	}

	/// Append pre-escaped markup to the output buffer
	pub fn concat(&mut self, markup: &SafeString) {
		self.out.push_str(markup.as_str());
	}

	/// Everything written to the context so far
	pub fn output(&self) -> &str {
		&self.out
	}

	/// Take the accumulated output, leaving the buffer empty
	pub fn take_output(&mut self) -> String {
		std::mem::take(&mut self.out)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_register_and_get() {
		let mut registry = HelperRegistry::new();
		assert!(registry.is_empty());

		registry.register("echo", |args| Ok(CellValue::from_json(&args[0])));
		assert_eq!(registry.len(), 1);

		let helper = registry.get("echo").unwrap();
		let result = helper(&[json!("hi")]).unwrap();
		assert_eq!(result.as_str(), "hi");
	}

	#[test]
	fn test_get_unknown_is_none() {
		assert!(HelperRegistry::new().get("nope").is_none());
	}

	#[test]
	fn test_register_replaces() {
		let mut registry = HelperRegistry::new();
		registry.register("f", |_| Ok(CellValue::from("old")));
		registry.register("f", |_| Ok(CellValue::from("new")));
		assert_eq!(registry.len(), 1);
		assert_eq!(registry.get("f").unwrap()(&[]).unwrap().as_str(), "new");
	}

	#[test]
	fn test_concat_appends() {
		let mut ctx = ViewContext::new();
		ctx.concat(&SafeString::new("<p>a</p>"));
		ctx.concat(&SafeString::new("<p>b</p>"));
		assert_eq!(ctx.output(), "<p>a</p><p>b</p>");
	}

	#[test]
	fn test_take_output_drains() {
		let mut ctx = ViewContext::new();
		ctx.concat(&SafeString::new("<table></table>"));
		assert_eq!(ctx.take_output(), "<table></table>");
		assert_eq!(ctx.output(), "");
	}
}
