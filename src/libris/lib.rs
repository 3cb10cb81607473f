//! # Libris Architecture
//!
//! Libris is a **UI-agnostic catalog library** for books and their physical
//! copies. The `libris` binary is one client of it; the same core could sit
//! behind a web page or a TUI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders views and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Catalog and the store                           │
//! │  - Persists after every successful mutation                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and mutation of &mut Catalog                  │
//! │  - Returns CmdResult or a LibrisError, never both           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persist.rs over store/)                       │
//! │  - KeyValueStore trait                                      │
//! │  - FileKvStore (production), InMemoryKvStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! Books get `B<n>` ids from a persisted counter that never goes backwards.
//! Copies get positional ids (`002C`: second copy, shelf C) that are derived,
//! not allocated, and are only unique within one book. See [`ids`] and
//! [`shelf`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain values and returns
//! `Result<CmdResult>`. It never prints and never exits. Rendering is a pure
//! projection ([`view`]) the UI draws however it likes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`catalog`]: The in-memory book list and id counter
//! - [`model`]: `Book`, `BookCopy`, `CopyStatus`
//! - [`persist`]: Catalog <-> key-value store
//! - [`store`]: Storage abstraction and implementations
//! - [`view`]: Display projection of the catalog
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod init;
pub mod model;
pub mod persist;
pub mod shelf;
pub mod store;
pub mod view;
