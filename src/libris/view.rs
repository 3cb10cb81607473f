//! # View
//!
//! A display-only projection of the catalog. [`render`] is a pure function of
//! the current state; it holds nothing between calls, so callers simply render
//! again after every change (see [`Catalog::version`](crate::catalog::Catalog::version)).
//!
//! The shape mirrors a table grouped by book: one details block per book that
//! spans all of that book's copy rows, then one row per copy. How the table is
//! drawn (terminal, HTML) is up to the UI layer.

use crate::catalog::Catalog;
use crate::model::{Book, BookCopy};
use serde::Serialize;

pub const DEFAULT_HISTORY_LIMIT: usize = 5;
pub const DEFAULT_LOCATION_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub history_limit: usize,
    pub location_placeholder: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            location_placeholder: DEFAULT_LOCATION_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyRow {
    pub copy_id: String,
    pub location: String,
    pub history: Vec<String>,
    pub status: String,
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookBlock {
    pub title: String,
    pub author: String,
    pub id: String,
    pub rows: Vec<CopyRow>,
}

impl BookBlock {
    /// Number of copy rows the details block spans.
    pub fn row_span(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "books", rename_all = "lowercase")]
pub enum CatalogView {
    /// No books at all; the UI shows a "no records" placeholder instead of a table.
    Empty,
    Table(Vec<BookBlock>),
}

impl CatalogView {
    pub fn blocks(&self) -> &[BookBlock] {
        match self {
            CatalogView::Empty => &[],
            CatalogView::Table(blocks) => blocks,
        }
    }
}

pub fn render(catalog: &Catalog, options: &ViewOptions) -> CatalogView {
    if catalog.is_empty() {
        return CatalogView::Empty;
    }
    CatalogView::Table(
        catalog
            .books()
            .iter()
            .map(|book| book_block(book, options))
            .collect(),
    )
}

fn book_block(book: &Book, options: &ViewOptions) -> BookBlock {
    BookBlock {
        title: book.title.clone(),
        author: book.author.clone(),
        id: book.id.clone(),
        rows: book
            .copies
            .iter()
            .map(|copy| copy_row(copy, options))
            .collect(),
    }
}

fn copy_row(copy: &BookCopy, options: &ViewOptions) -> CopyRow {
    let location = if copy.location.is_empty() {
        options.location_placeholder.clone()
    } else {
        copy.location.clone()
    };
    let availability = if copy.status.is_available() {
        Availability::Available
    } else {
        Availability::Unavailable
    };

    CopyRow {
        copy_id: copy.copy_id.clone(),
        location,
        history: copy
            .history
            .iter()
            .take(options.history_limit)
            .cloned()
            .collect(),
        status: copy.status.to_string(),
        availability,
    }
}
