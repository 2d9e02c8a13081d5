//! HTML escaping, safe strings, attribute maps, and tag building

use indexmap::IndexMap;
use std::borrow::Cow;

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use tablefor_utils::html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape attribute value for use in HTML
///
/// # Examples
///
/// ```
/// use tablefor_utils::html::escape_attr;
///
/// assert_eq!(escape_attr("value"), "value");
/// assert_eq!(escape_attr("value with \"quotes\""),
///            "value with &quot;quotes&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Conditional escape - only escape if not already marked as safe
///
/// # Examples
///
/// ```
/// use tablefor_utils::html::conditional_escape;
///
/// assert_eq!(conditional_escape("<script>", true), "&lt;script&gt;");
/// assert_eq!(conditional_escape("<script>", false), "<script>");
/// ```
pub fn conditional_escape(text: &str, autoescape: bool) -> Cow<'_, str> {
	if autoescape {
		Cow::Owned(escape(text))
	} else {
		Cow::Borrowed(text)
	}
}

/// Mark string as safe (bypasses autoescaping)
///
/// Escaping safety is an explicit type, not an ambient property of the
/// string: everything rendered through [`text_node`] or [`content_tag`]
/// is escaped, and only values wrapped in `SafeString` pass through
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeString(String);

impl SafeString {
	/// Create a new SafeString that bypasses HTML escaping
	///
	/// # Examples
	///
	/// ```
	/// use tablefor_utils::html::SafeString;
	///
	/// let safe = SafeString::new("<b>Bold</b>");
	/// assert_eq!(safe.as_str(), "<b>Bold</b>");
	/// ```
	pub fn new(s: impl Into<String>) -> Self {
		Self(s.into())
	}

	/// Get the string content
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consume the wrapper and return the markup
	pub fn into_string(self) -> String {
		self.0
	}

	/// Append another pre-escaped fragment
	///
	/// # Examples
	///
	/// ```
	/// use tablefor_utils::html::SafeString;
	///
	/// let mut row = SafeString::new("<td>a</td>");
	/// row.push(&SafeString::new("<td>b</td>"));
	/// assert_eq!(row.as_str(), "<td>a</td><td>b</td>");
	/// ```
	pub fn push(&mut self, other: &SafeString) {
		self.0.push_str(&other.0);
	}

	/// Whether the fragment is empty
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<SafeString> for String {
	fn from(s: SafeString) -> Self {
		s.0
	}
}

/// Insertion-ordered HTML attribute map
///
/// Attributes render in the order they were set, as space-separated
/// `name="value"` pairs with attribute-escaped values. Setting an
/// existing name replaces its value in place.
///
/// # Examples
///
/// ```
/// use tablefor_utils::html::AttrMap;
///
/// let attrs = AttrMap::new().attr("id", "people").attr("class", "wide");
/// assert_eq!(attrs.render(), " id=\"people\" class=\"wide\"");
/// assert_eq!(AttrMap::new().render(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrMap {
	attrs: IndexMap<String, String>,
}

impl AttrMap {
	/// Create an empty attribute map
	pub fn new() -> Self {
		Self::default()
	}

	/// Set an attribute, consuming and returning the map for chaining
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(name, value);
		self
	}

	/// Set an attribute in place
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.attrs.insert(name.into(), value.into());
	}

	/// Get an attribute value
	///
	/// # Examples
	///
	/// ```
	/// use tablefor_utils::html::AttrMap;
	///
	/// let attrs = AttrMap::new().attr("class", "numeric");
	/// assert_eq!(attrs.get("class"), Some("numeric"));
	/// assert_eq!(attrs.get("id"), None);
	/// ```
	pub fn get(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}

	/// Whether the map has no attributes
	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	/// Number of attributes
	pub fn len(&self) -> usize {
		self.attrs.len()
	}

	/// Render as ` name="value"` pairs, in insertion order
	///
	/// Returns the empty string for an empty map; otherwise every pair
	/// carries a leading space so the result drops directly into a tag.
	pub fn render(&self) -> String {
		let mut out = String::new();
		for (name, value) in &self.attrs {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&escape_attr(value));
			out.push('"');
		}
		out
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttrMap {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();
		for (name, value) in iter {
			map.set(name, value);
		}
		map
	}
}

/// Build an escaped text node
///
/// # Examples
///
/// ```
/// use tablefor_utils::html::text_node;
///
/// assert_eq!(text_node("a < b").as_str(), "a &lt; b");
/// ```
pub fn text_node(text: &str) -> SafeString {
	SafeString::new(escape(text))
}

/// Wrap pre-escaped content in a tag with the given attributes
///
/// # Examples
///
/// ```
/// use tablefor_utils::html::{AttrMap, content_tag, text_node};
///
/// let cell = content_tag("td", &AttrMap::new().attr("class", "numeric"), &text_node("42"));
/// assert_eq!(cell.as_str(), "<td class=\"numeric\">42</td>");
/// ```
pub fn content_tag(name: &str, attrs: &AttrMap, content: &SafeString) -> SafeString {
	SafeString::new(format!(
		"<{}{}>{}</{}>",
		name,
		attrs.render(),
		content.as_str(),
		name
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape() {
		assert_eq!(escape("Hello, World!"), "Hello, World!");
		assert_eq!(
			escape("<script>alert('XSS')</script>"),
			"&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
		);
		assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
		assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
	}

	#[test]
	fn test_escape_empty_string() {
		assert_eq!(escape(""), "");
	}

	#[test]
	fn test_escape_multibyte() {
		assert_eq!(escape("こんにちは<>&"), "こんにちは&lt;&gt;&amp;");
	}

	#[test]
	fn test_escape_attr() {
		assert_eq!(escape_attr("value"), "value");
		assert_eq!(
			escape_attr("value with \"quotes\""),
			"value with &quot;quotes&quot;"
		);
		assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
		assert_eq!(escape_attr("tab\there"), "tab&#9;here");
		assert_eq!(escape_attr("test\rvalue"), "test&#13;value");
	}

	#[test]
	fn test_conditional_escape() {
		assert_eq!(conditional_escape("<script>", true), "&lt;script&gt;");
		assert_eq!(conditional_escape("<script>", false), "<script>");
	}

	#[test]
	fn test_safe_string() {
		let safe = SafeString::new("<b>Bold</b>");
		assert_eq!(safe.as_str(), "<b>Bold</b>");
		assert_eq!(String::from(safe), "<b>Bold</b>");
	}

	#[test]
	fn test_safe_string_push() {
		let mut markup = SafeString::new("<tr>");
		markup.push(&SafeString::new("<td>x</td>"));
		markup.push(&SafeString::new("</tr>"));
		assert_eq!(markup.as_str(), "<tr><td>x</td></tr>");
	}

	#[test]
	fn test_attr_map_insertion_order() {
		let attrs = AttrMap::new()
			.attr("id", "people")
			.attr("class", "wide")
			.attr("data-sort", "asc");
		assert_eq!(
			attrs.render(),
			" id=\"people\" class=\"wide\" data-sort=\"asc\""
		);
	}

	#[test]
	fn test_attr_map_replace_keeps_position() {
		let mut attrs = AttrMap::new().attr("id", "a").attr("class", "b");
		attrs.set("id", "c");
		assert_eq!(attrs.render(), " id=\"c\" class=\"b\"");
		assert_eq!(attrs.len(), 2);
	}

	#[test]
	fn test_attr_map_escapes_values() {
		let attrs = AttrMap::new().attr("title", "a \"b\" & c");
		assert_eq!(attrs.render(), " title=\"a &quot;b&quot; &amp; c\"");
	}

	#[test]
	fn test_attr_map_from_iter() {
		let attrs: AttrMap = [("id", "x"), ("class", "y")].into_iter().collect();
		assert_eq!(attrs.render(), " id=\"x\" class=\"y\"");
	}

	#[test]
	fn test_text_node_escapes() {
		assert_eq!(text_node("<td>").as_str(), "&lt;td&gt;");
	}

	#[test]
	fn test_content_tag_no_attrs() {
		let tag = content_tag("tr", &AttrMap::new(), &SafeString::new("<td>1</td>"));
		assert_eq!(tag.as_str(), "<tr><td>1</td></tr>");
	}

	#[test]
	fn test_content_tag_nested() {
		let cell = content_tag("td", &AttrMap::new(), &text_node("a & b"));
		let row = content_tag("tr", &AttrMap::new(), &cell);
		assert_eq!(row.as_str(), "<tr><td>a &amp; b</td></tr>");
	}
}
