//! # Catalog
//!
//! The in-memory state every command operates on: the ordered list of books
//! and the running book id counter. There is exactly one `Catalog` per
//! [`LibrisApi`](crate::api::LibrisApi); commands receive it by `&mut` and no
//! global state exists.
//!
//! The `version` counter increments once per successful mutation so that a UI
//! can tell whether it needs to re-render without diffing the books.

use crate::error::{LibrisError, Result};
use crate::ids::{book_id_number, BookIdCounter};
use crate::model::Book;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    counter: BookIdCounter,
    version: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(books: Vec<Book>, counter: BookIdCounter) -> Self {
        Self {
            books,
            counter,
            version: 0,
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn counter(&self) -> BookIdCounter {
        self.counter
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn touch(&mut self) {
        self.version += 1;
    }

    pub(crate) fn allocate_book_id(&mut self) -> Result<String> {
        self.counter.allocate()
    }

    pub(crate) fn push_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Moves the counter past every `B<n>` id already in the catalog.
    /// Returns true if it had to move.
    pub fn reconcile_counter(&mut self) -> Result<bool> {
        match self.books.iter().filter_map(|b| book_id_number(&b.id)).max() {
            Some(highest) => self.counter.ensure_above(highest),
            None => Ok(false),
        }
    }

    pub fn position(&self, book_id: &str) -> Option<usize> {
        let book_id = book_id.trim();
        self.books.iter().position(|b| b.id == book_id)
    }

    pub fn book(&self, book_id: &str) -> Result<&Book> {
        self.position(book_id)
            .map(|idx| &self.books[idx])
            .ok_or_else(|| LibrisError::BookNotFound(book_id.trim().to_string()))
    }

    pub(crate) fn book_mut(&mut self, book_id: &str) -> Result<&mut Book> {
        match self.position(book_id) {
            Some(idx) => Ok(&mut self.books[idx]),
            None => Err(LibrisError::BookNotFound(book_id.trim().to_string())),
        }
    }

    pub(crate) fn remove_book(&mut self, book_id: &str) -> Result<Book> {
        match self.position(book_id) {
            Some(idx) => Ok(self.books.remove(idx)),
            None => Err(LibrisError::BookNotFound(book_id.trim().to_string())),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::commands::add_book;

    pub struct CatalogFixture {
        pub catalog: Catalog,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: Catalog::new(),
            }
        }

        pub fn with_book(mut self, title: &str, copies: i64, location: &str) -> Self {
            add_book::run(&mut self.catalog, title, "Test Author", copies, location).unwrap();
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Book {}", i + 1);
                add_book::run(&mut self.catalog, &title, "Test Author", 1, "Shelf 1").unwrap();
            }
            self
        }

        pub fn build(self) -> Catalog {
            self.catalog
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::CatalogFixture;
    use super::*;
    use crate::model::BookCopy;

    fn book(id: &str) -> Book {
        Book {
            title: "T".into(),
            author: "A".into(),
            id: id.into(),
            location: String::new(),
            copies: vec![BookCopy::new("001X".into(), String::new())],
        }
    }

    #[test]
    fn lookup_trims_the_id() {
        let catalog = CatalogFixture::new().with_books(2).build();
        assert_eq!(catalog.book("  B1001 ").unwrap().title, "Test Book 2");
    }

    #[test]
    fn missing_book_is_not_found() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.book("B1"),
            Err(LibrisError::BookNotFound(id)) if id == "B1"
        ));
    }

    #[test]
    fn reconcile_moves_counter_past_existing_ids() {
        let mut catalog =
            Catalog::from_parts(vec![book("B1000"), book("B1007")], BookIdCounter::default());
        assert!(catalog.reconcile_counter().unwrap());
        assert_eq!(catalog.counter().peek(), 1008);
        assert!(!catalog.reconcile_counter().unwrap());
    }

    #[test]
    fn reconcile_ignores_foreign_ids() {
        let mut catalog =
            Catalog::from_parts(vec![book("legacy-7")], BookIdCounter::new(1200));
        assert!(!catalog.reconcile_counter().unwrap());
        assert_eq!(catalog.counter().peek(), 1200);
    }
}
