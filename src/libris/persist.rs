//! Moves the catalog in and out of a [`KeyValueStore`].
//!
//! Two independent entries are used, matching the layout older catalogs were
//! saved with:
//!
//! - `archive`: the book list as JSON
//! - `bookID_Number`: the next book id number as decimal text
//!
//! Saving always rewrites both entries in full, counter first. A save that
//! dies between the two writes leaves at most a counter that is ahead of the
//! archive, which only skips book ids.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ids::{BookIdCounter, DEFAULT_COUNTER_START};
use crate::model::Book;
use crate::store::KeyValueStore;

pub const ARCHIVE_KEY: &str = "archive";
pub const COUNTER_KEY: &str = "bookID_Number";

/// Loads the catalog. Missing entries give an empty catalog and the default
/// counter; a malformed archive is an error so it never gets overwritten.
pub fn load<S: KeyValueStore>(store: &S) -> Result<Catalog> {
    let books: Vec<Book> = match store.get(ARCHIVE_KEY)? {
        Some(raw) => serde_json::from_str(&raw)?,
        None => Vec::new(),
    };
    let counter = match store.get(COUNTER_KEY)? {
        Some(raw) => parse_counter(&raw),
        None => BookIdCounter::default(),
    };

    let mut catalog = Catalog::from_parts(books, counter);
    if catalog.reconcile_counter()? {
        tracing::warn!(
            stored = counter.peek(),
            next = catalog.counter().peek(),
            "book id counter was behind existing ids; advanced it"
        );
    }
    tracing::info!(books = catalog.len(), next_id = catalog.counter().peek(), "catalog loaded");
    Ok(catalog)
}

pub fn save<S: KeyValueStore>(store: &mut S, catalog: &Catalog) -> Result<()> {
    let archive = serde_json::to_string(catalog.books())?;
    store.set(COUNTER_KEY, &catalog.counter().peek().to_string())?;
    store.set(ARCHIVE_KEY, &archive)?;
    tracing::info!(books = catalog.len(), version = catalog.version(), "catalog saved");
    Ok(())
}

/// Unparseable or zero values fall back to the default start.
fn parse_counter(raw: &str) -> BookIdCounter {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => BookIdCounter::new(n),
        _ => {
            tracing::warn!(value = raw, "ignoring unreadable book id counter");
            BookIdCounter::new(DEFAULT_COUNTER_START)
        }
    }
}
