//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every libris operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the key-value store and the in-memory [`Catalog`]
//! - **Dispatches** to the appropriate command function
//! - **Persists** after every command that reports `changed`, and only then
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! A failed command leaves the catalog exactly as it was, and nothing is
//! written. If the write itself fails, the catalog is rolled back to the
//! state before the command so memory and storage never disagree.
//!
//! ## Generic Over KeyValueStore
//!
//! `LibrisApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `LibrisApi<FileKvStore>`
//! - Testing: `LibrisApi<InMemoryKvStore>`

use crate::catalog::Catalog;
use crate::commands::{self, add_book, add_copies, circulation, delete_copies, edit_book};
use crate::commands::{list, remove_book};
use crate::config::LibrisConfig;
use crate::error::Result;
use crate::persist;
use crate::store::KeyValueStore;
use crate::view::{self, CatalogView, ViewOptions};
use chrono::Utc;

/// The main API facade for libris operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct LibrisApi<S: KeyValueStore> {
    store: S,
    catalog: Catalog,
    paths: commands::LibrisPaths,
    view_options: ViewOptions,
}

impl<S: KeyValueStore> LibrisApi<S> {
    /// Loads the catalog from `store`. This is the one startup read.
    pub fn new(store: S, paths: commands::LibrisPaths) -> Result<Self> {
        let catalog = persist::load(&store)?;
        Ok(Self {
            store,
            catalog,
            paths,
            view_options: ViewOptions::default(),
        })
    }

    pub fn with_config(mut self, config: &LibrisConfig) -> Self {
        self.view_options = config.view_options();
        self
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        copy_count: i64,
        location: &str,
    ) -> Result<commands::CmdResult> {
        self.mutate(|catalog| add_book::run(catalog, title, author, copy_count, location))
    }

    pub fn remove_book(&mut self, book_id: &str) -> Result<commands::CmdResult> {
        self.mutate(|catalog| remove_book::run(catalog, book_id))
    }

    pub fn edit_book(&mut self, book_id: &str, edit: &BookEdit) -> Result<commands::CmdResult> {
        self.mutate(|catalog| edit_book::run(catalog, book_id, edit))
    }

    pub fn add_copies(&mut self, book_id: &str, count: i64) -> Result<commands::CmdResult> {
        self.mutate(|catalog| add_copies::run(catalog, book_id, count))
    }

    pub fn delete_copy(&mut self, book_id: &str, copy_id: &str) -> Result<commands::CmdResult> {
        self.mutate(|catalog| delete_copies::one(catalog, book_id, copy_id))
    }

    pub fn delete_copies(
        &mut self,
        book_id: &str,
        copy_ids: &str,
    ) -> Result<commands::CmdResult> {
        self.mutate(|catalog| delete_copies::many(catalog, book_id, copy_ids))
    }

    pub fn check_out(
        &mut self,
        book_id: &str,
        copy_id: &str,
        note: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let now = Utc::now();
        self.mutate(|catalog| circulation::check_out(catalog, book_id, copy_id, note, now))
    }

    pub fn return_copy(
        &mut self,
        book_id: &str,
        copy_id: &str,
        note: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let now = Utc::now();
        self.mutate(|catalog| circulation::return_copy(catalog, book_id, copy_id, note, now))
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        list::run(&self.catalog, &self.view_options)
    }

    /// The current rendering of the catalog.
    pub fn view(&self) -> CatalogView {
        view::render(&self.catalog, &self.view_options)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Bumps on every successful mutation; UIs re-render when it moves.
    pub fn version(&self) -> u64 {
        self.catalog.version()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::LibrisPaths {
        &self.paths
    }

    fn mutate<F>(&mut self, op: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&mut Catalog) -> Result<commands::CmdResult>,
    {
        let snapshot = self.catalog.clone();
        let result = op(&mut self.catalog)?;
        if !result.changed {
            return Ok(result);
        }

        self.catalog.touch();
        if let Err(e) = persist::save(&mut self.store, &self.catalog) {
            tracing::error!(error = %e, "save failed; discarding change");
            self.catalog = snapshot;
            // Put back whatever part of the save already landed.
            if let Err(restore) = persist::save(&mut self.store, &self.catalog) {
                tracing::error!(error = %restore, "could not restore stored catalog");
            }
            return Err(e);
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit_book::BookEdit;
pub use crate::commands::{CmdMessage, CmdResult, LibrisPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibrisError;
    use crate::persist::{ARCHIVE_KEY, COUNTER_KEY};
    use crate::store::memory::InMemoryKvStore;

    fn api() -> LibrisApi<InMemoryKvStore> {
        LibrisApi::new(InMemoryKvStore::new(), LibrisPaths::new("/tmp/libris-unused")).unwrap()
    }

    #[test]
    fn successful_mutation_persists_and_bumps_version() {
        let mut api = api();
        let result = api.add_book("Dune", "Herbert", 2, "Shelf 1").unwrap();

        assert!(result.changed);
        assert_eq!(api.version(), 1);
        assert_eq!(api.store.writes(), 2);
        assert_eq!(
            api.store.get(COUNTER_KEY).unwrap().as_deref(),
            Some("1001")
        );
        assert!(api.store.get(ARCHIVE_KEY).unwrap().unwrap().contains("001A"));
    }

    #[test]
    fn failed_command_neither_writes_nor_bumps() {
        let mut api = api();
        let err = api.remove_book("B1000").unwrap_err();

        assert!(err.is_user_error());
        assert_eq!(api.version(), 0);
        assert_eq!(api.store.writes(), 0);
    }

    #[test]
    fn no_match_delete_is_not_persisted() {
        let mut api = api();
        api.add_book("T", "A", 2, "Shelf 1").unwrap();
        let writes = api.store.writes();

        assert!(matches!(
            api.delete_copies("B1000", "009A"),
            Err(LibrisError::NoMatch(_))
        ));
        assert_eq!(api.store.writes(), writes);
        assert_eq!(api.version(), 1);
    }

    #[test]
    fn write_failure_rolls_back_catalog() {
        let mut api = api();
        api.add_book("T", "A", 1, "Shelf 1").unwrap();
        let before = api.catalog().clone();

        api.store.set_simulate_write_error(true);
        assert!(matches!(
            api.add_copies("B1000", 3),
            Err(LibrisError::Store(_))
        ));
        assert_eq!(api.catalog(), &before);
    }

    #[test]
    fn partial_save_failure_leaves_store_matching_memory() {
        for failing in [ARCHIVE_KEY, COUNTER_KEY] {
            let mut api = api();
            api.add_book("T", "A", 1, "Shelf 1").unwrap();
            api.store.fail_writes_to(failing);

            assert!(api.add_copies("B1000", 3).is_err(), "{}", failing);
            assert!(api.add_book("U", "B", 2, "").is_err(), "{}", failing);

            let stored = persist::load(&api.store).unwrap();
            assert_eq!(stored.books(), api.catalog().books(), "{}", failing);
            assert_eq!(stored.books()[0].copies.len(), 1);
            assert_eq!(stored.counter().peek(), 1001, "{}", failing);
        }
    }

    #[test]
    fn startup_reads_existing_state() {
        let mut first = api();
        first.add_book("T", "A", 1, "Shelf 2").unwrap();
        let store = first.store;

        let second = LibrisApi::new(store, LibrisPaths::new("/tmp/libris-unused")).unwrap();
        assert_eq!(second.catalog().len(), 1);
        assert_eq!(second.view().blocks()[0].rows[0].copy_id, "001B");
    }

    #[test]
    fn view_follows_configured_history_limit() {
        let config = LibrisConfig {
            history_limit: 1,
            ..LibrisConfig::default()
        };
        let mut api = api().with_config(&config);
        api.add_book("T", "A", 1, "").unwrap();
        api.check_out("B1000", "001X", None).unwrap();
        api.return_copy("B1000", "001X", None).unwrap();

        assert_eq!(api.catalog().books()[0].copies[0].history.len(), 2);
        assert_eq!(api.view().blocks()[0].rows[0].history.len(), 1);
    }
}
