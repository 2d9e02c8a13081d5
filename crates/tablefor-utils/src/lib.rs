//! HTML and text utilities for the `tablefor` table helper
//!
//! This crate provides the rendering primitives the table DSL builds on:
//! - HTML escaping for text nodes and attribute values
//! - `SafeString`, an explicit marker for pre-escaped markup
//! - `AttrMap`, an insertion-ordered attribute map
//! - `content_tag`/`text_node`, the tag-building primitives
//! - Label humanization and number formatting

pub mod html;
pub mod text;

pub use html::{AttrMap, SafeString, conditional_escape, content_tag, escape, escape_attr, text_node};
pub use text::{filesizeformat, humanize, intcomma, ordinal};
