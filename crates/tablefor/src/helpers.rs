//! Built-in formatting helpers
//!
//! The formatters a host view layer typically provides, packaged in the
//! registry callable shape. Every helper receives the accessor's value
//! as its first argument; extras follow in declaration order.
//!
//! | name             | extra args | cell for `1234567` etc.        |
//! |------------------|------------|--------------------------------|
//! | `intcomma`       | none       | `1,234,567`                    |
//! | `ordinal`        | none       | `3` renders `3rd`              |
//! | `filesizeformat` | none       | `2048` renders `2.0 KB`        |
//! | `round_to`       | digits     | `3.14159, 2` renders `3.14`    |
//! | `truncate`       | max chars  | prefix plus `...` when too long|
//! | `upper`, `lower` | none       | case-folded text               |

use crate::context::HelperRegistry;
use crate::error::{TableError, TableResult};
use crate::value::CellValue;
use serde_json::Value;

/// Register the built-in helpers on a registry
///
/// Called by [`HelperRegistry::with_builtins`]; usable directly to add
/// the builtins to a registry that already carries custom helpers.
pub fn register_builtins(registry: &mut HelperRegistry) {
	registry.register("intcomma", |args| {
		let n = arg_i64("intcomma", args, 0)?;
		Ok(CellValue::from(tablefor_utils::text::intcomma(n)))
	});
	registry.register("ordinal", |args| {
		let n = arg_i64("ordinal", args, 0)?;
		Ok(CellValue::from(tablefor_utils::text::ordinal(n)))
	});
	registry.register("filesizeformat", |args| {
		let bytes = arg_u64("filesizeformat", args, 0)?;
		Ok(CellValue::from(tablefor_utils::text::filesizeformat(bytes)))
	});
	registry.register("round_to", |args| {
		expect_args("round_to", args, 2)?;
		let value = arg_f64("round_to", args, 0)?;
		let digits = arg_u64("round_to", args, 1)? as usize;
		Ok(CellValue::from(format!("{:.*}", digits, value)))
	});
	registry.register("truncate", |args| {
		expect_args("truncate", args, 2)?;
		let text = arg_str("truncate", args, 0)?;
		let max = arg_u64("truncate", args, 1)? as usize;
		if text.chars().count() <= max {
			Ok(CellValue::from(text))
		} else {
			let prefix: String = text.chars().take(max).collect();
			Ok(CellValue::from(format!("{}...", prefix)))
		}
	});
	registry.register("upper", |args| {
		let text = arg_str("upper", args, 0)?;
		Ok(CellValue::from(text.to_uppercase()))
	});
	registry.register("lower", |args| {
		let text = arg_str("lower", args, 0)?;
		Ok(CellValue::from(text.to_lowercase()))
	});
}

fn helper_error(name: &str, message: impl Into<String>) -> TableError {
	TableError::Helper {
		name: name.to_string(),
		message: message.into(),
	}
}

fn expect_args(name: &str, args: &[Value], count: usize) -> TableResult<()> {
	if args.len() == count {
		Ok(())
	} else {
		Err(helper_error(
			name,
			format!("expected {} arguments, got {}", count, args.len()),
		))
	}
}

fn arg_i64(name: &str, args: &[Value], idx: usize) -> TableResult<i64> {
	args.get(idx)
		.and_then(Value::as_i64)
		.ok_or_else(|| helper_error(name, format!("argument {} must be an integer", idx)))
}

fn arg_u64(name: &str, args: &[Value], idx: usize) -> TableResult<u64> {
	args.get(idx)
		.and_then(Value::as_u64)
		.ok_or_else(|| helper_error(name, format!("argument {} must be a non-negative integer", idx)))
}

fn arg_f64(name: &str, args: &[Value], idx: usize) -> TableResult<f64> {
	args.get(idx)
		.and_then(Value::as_f64)
		.ok_or_else(|| helper_error(name, format!("argument {} must be a number", idx)))
}

fn arg_str(name: &str, args: &[Value], idx: usize) -> TableResult<String> {
	args.get(idx)
		.and_then(Value::as_str)
		.map(str::to_string)
		.ok_or_else(|| helper_error(name, format!("argument {} must be a string", idx)))
}
