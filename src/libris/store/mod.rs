//! # Storage Layer
//!
//! The catalog is persisted through a plain string key-value interface,
//! [`KeyValueStore`]. The store knows nothing about books: it reads and writes
//! whole blobs by key, and [`persist`](crate::persist) decides what goes in
//! them.
//!
//! ## Implementations
//!
//! - [`fs::FileKvStore`]: production storage, one file per key
//!   - `<data dir>/archive.json`: the catalog
//!   - `<data dir>/bookID_Number.json`: the book id counter
//!   - every write is whole-value replace via temp file + rename
//!
//! - [`memory::InMemoryKvStore`]: in-memory storage for testing
//!   - no persistence
//!   - can simulate write failures
//!
//! Writes are never partial, so the worst a crash can do is lose the single
//! mutation that had not been saved yet.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the persisted key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
