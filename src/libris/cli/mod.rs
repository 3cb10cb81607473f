//! # CLI Behavior
//!
//! This is **one possible UI client** for libris, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation of `libris`.
//!
//! ## Naked Execution (`libris`)
//!
//! Running `libris` with no arguments defaults to `libris list`.
//!
//! ## After a Change
//!
//! Every mutating command prints its success message followed by the
//! refreshed catalog table. `--quiet` keeps just the message.
//!
//! ## Where Data Lives
//!
//! `$LIBRIS_DATA` if set, otherwise the platform data directory. Logging is
//! controlled by `-v`/`-vv` or `LIBRIS_LOG` and always goes to stderr.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call API and format output
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting (tables, HTML, messages)
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
