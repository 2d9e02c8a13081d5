//! Declarative HTML table rendering for server-rendered views
//!
//! This crate provides `table_for`, a small DSL for turning a collection
//! of records into a `<table>` fragment:
//! - Columns declared in a closure, rendered in declaration order
//! - Three column shapes: plain accessor, helper-formatted, closure
//! - Helper names resolved eagerly against a registry (fail fast)
//! - Everything escaped by default; `CellValue::safe` opts out per value
//! - Markup emitted into the enclosing view context's output buffer
//!
//! ```
//! use serde_json::json;
//! use tablefor::{ColumnOptions, HelperRegistry, TableOptions, ViewContext, table_for};
//!
//! let mut ctx = ViewContext::with_helpers(HelperRegistry::with_builtins());
//! let files = vec![
//!     json!({"name": "report.pdf", "size": 2048}),
//!     json!({"name": "notes.txt", "size": 512}),
//! ];
//!
//! let markup = table_for(&mut ctx, &files, TableOptions::new(), |t| {
//!     t.column("name");
//!     t.column_opts("size", None, ColumnOptions::new().helper("filesizeformat"))?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert!(markup.as_str().contains("<td>2.0 KB</td>"));
//! ```

pub mod column;
pub mod context;
pub mod definition;
pub mod error;
pub mod helpers;
pub mod renderer;
pub mod value;

pub use column::{CellCallback, Column, ColumnOptions, HelperMethod, ResolvedHelper};
pub use context::{Helper, HelperRegistry, ViewContext};
pub use definition::TableDefinition;
pub use error::{TableError, TableResult};
pub use renderer::{TableOptions, table_for};
pub use value::CellValue;

// Re-exported so call sites can build attribute maps and safe strings
// without depending on the utils crate directly.
pub use tablefor_utils::html::{AttrMap, SafeString};
