//! Text formatting utilities
//!
//! Label humanization plus the number formatters exposed as built-in
//! table helpers.

/// Turn a field identifier into a display label
///
/// Underscores become spaces and the first character is uppercased; the
/// rest of the string is preserved as-is.
///
/// # Examples
///
/// ```
/// use tablefor_utils::text::humanize;
///
/// assert_eq!(humanize("first_name"), "First name");
/// assert_eq!(humanize("age"), "Age");
/// assert_eq!(humanize("ISBN"), "ISBN");
/// ```
pub fn humanize(name: &str) -> String {
	let spaced = name.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

/// Format an integer with thousands separators
///
/// # Examples
///
/// ```
/// use tablefor_utils::text::intcomma;
///
/// assert_eq!(intcomma(100), "100");
/// assert_eq!(intcomma(1234567), "1,234,567");
/// assert_eq!(intcomma(-1000), "-1,000");
/// ```
pub fn intcomma(n: i64) -> String {
	let digits = n.unsigned_abs().to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	if n < 0 {
		format!("-{}", grouped)
	} else {
		grouped
	}
}

/// Convert an integer to its ordinal representation
///
/// # Examples
///
/// ```
/// use tablefor_utils::text::ordinal;
///
/// assert_eq!(ordinal(1), "1st");
/// assert_eq!(ordinal(12), "12th");
/// assert_eq!(ordinal(23), "23rd");
/// ```
pub fn ordinal(n: i64) -> String {
	let suffix = match (n.abs() % 10, n.abs() % 100) {
		(_, 11..=13) => "th",
		(1, _) => "st",
		(2, _) => "nd",
		(3, _) => "rd",
		_ => "th",
	};
	format!("{}{}", n, suffix)
}

/// Format file size in human-readable format
///
/// # Examples
///
/// ```
/// use tablefor_utils::text::filesizeformat;
///
/// assert_eq!(filesizeformat(0), "0 bytes");
/// assert_eq!(filesizeformat(1024), "1.0 KB");
/// assert_eq!(filesizeformat(10 * 1024 * 1024), "10.0 MB");
/// ```
pub fn filesizeformat(bytes: u64) -> String {
	const KB: u64 = 1024;
	const MB: u64 = KB * 1024;
	const GB: u64 = MB * 1024;

	if bytes == 0 {
		"0 bytes".to_string()
	} else if bytes == 1 {
		"1 byte".to_string()
	} else if bytes < KB {
		format!("{} bytes", bytes)
	} else if bytes < MB {
		format!("{:.1} KB", bytes as f64 / KB as f64)
	} else if bytes < GB {
		format!("{:.1} MB", bytes as f64 / MB as f64)
	} else {
		format!("{:.1} GB", bytes as f64 / GB as f64)
	}
}
