use thiserror::Error;

/// Errors raised while declaring columns or rendering a table
///
/// Declaration-time failures (`UnknownHelper`) surface before any markup
/// is produced; render-time failures abort the current render and leave
/// the view context's output buffer untouched. There is no retry or
/// recovery anywhere in this crate.
#[derive(Debug, Error)]
pub enum TableError {
	/// `helper_method` named a helper that is not registered on the view context
	#[error("Unknown helper method '{name}'")]
	UnknownHelper { name: String },

	/// A record object lacks the field a column reads
	#[error("Column '{column}': record has no field '{method}'")]
	MissingAccessor { column: String, method: String },

	/// A serialized record is not a JSON object, so field lookup is meaningless
	#[error("Record is not an object; cannot look up fields")]
	NotAnObject,

	/// A helper rejected its arguments or failed while formatting
	#[error("Helper '{name}': {message}")]
	Helper { name: String, message: String },

	/// A record failed to serialize
	#[error("Record serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_messages() {
		let err = TableError::UnknownHelper {
			name: "round_to".to_string(),
		};
		assert_eq!(err.to_string(), "Unknown helper method 'round_to'");

		let err = TableError::MissingAccessor {
			column: "Age".to_string(),
			method: "age".to_string(),
		};
		assert_eq!(err.to_string(), "Column 'Age': record has no field 'age'");
	}
}
