//! # CLI Templates
//!
//! Output is rendered from minijinja templates kept as standalone files, so
//! they are easy to edit and diff, and included here as string constants.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so block tags
//! sit on their own lines without emitting blank ones. Every line of output is
//! an explicit line of template text.
//!
//! Layout math (column widths, padding) happens in Rust before rendering;
//! templates only place values and pick style names.
//!
//! Templates named `*.html` are auto-escaped.

pub const CATALOG_TEMPLATE: &str = include_str!("templates/catalog.tmp");
pub const CATALOG_HTML_TEMPLATE: &str = include_str!("templates/catalog.html");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const SHELVES_TEMPLATE: &str = include_str!("templates/shelves.tmp");
