use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::ids::{copy_room, numbered_copy_ids};
use crate::model::BookCopy;
use crate::shelf::{shelf_letter, Shelf};

/// Appends `count` copies to an existing book.
///
/// New copies inherit the location of the book's first copy (or the default
/// shelf when there is none) and are numbered after the current copy count.
/// Existing copies keep their ids.
pub fn run(catalog: &mut Catalog, book_id: &str, count: i64) -> Result<CmdResult> {
    let book = catalog.book_mut(book_id)?;
    if count <= 0 {
        return Err(LibrisError::Validation(format!(
            "Number of copies to add must be a positive integer (got {})",
            count
        )));
    }
    let count = copy_room(book.copies.len(), count as u64)?;

    let location = book
        .copies
        .first()
        .map(|c| c.location.as_str())
        .filter(|loc| !loc.is_empty())
        .unwrap_or(Shelf::Default.label())
        .to_string();
    let letter = shelf_letter(location.as_str());

    let new_copies: Vec<BookCopy> = numbered_copy_ids(book.copies.len(), count, letter)
        .into_iter()
        .map(|copy_id| BookCopy::new(copy_id, location.clone()))
        .collect();
    let added: Vec<String> = new_copies.iter().map(|c| c.copy_id.clone()).collect();
    book.copies.extend(new_copies);
    tracing::debug!(book_id = %book.id, copies = book.copies.len(), added = count, "copies added");

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success(format!(
        "Copies added to {}: {}",
        book.id,
        added.join(", ")
    )));
    Ok(result.with_affected_books(vec![book.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::CatalogFixture;
    use crate::commands::delete_copies;

    fn ids(catalog: &Catalog) -> Vec<String> {
        catalog.books()[0]
            .copies
            .iter()
            .map(|c| c.copy_id.clone())
            .collect()
    }

    #[test]
    fn continues_numbering_from_current_count() {
        let mut catalog = CatalogFixture::new().with_book("T", 2, "Shelf 4").build();
        run(&mut catalog, "B1000", 2).unwrap();
        assert_eq!(ids(&catalog), vec!["001D", "002D", "003D", "004D"]);
        assert!(catalog.books()[0]
            .copies
            .iter()
            .all(|c| c.location == "Shelf 4"));
    }

    #[test]
    fn numbering_uses_count_not_highest_id() {
        let mut catalog = CatalogFixture::new().with_book("T", 3, "Shelf 1").build();
        delete_copies::one(&mut catalog, "B1000", "001A").unwrap();
        run(&mut catalog, "B1000", 1).unwrap();
        // Positional numbering can repeat an id that already exists.
        assert_eq!(ids(&catalog), vec!["002A", "003A", "003A"]);
    }

    #[test]
    fn empty_book_falls_back_to_default_shelf() {
        let mut catalog = CatalogFixture::new().with_book("T", 1, "Shelf 2").build();
        delete_copies::one(&mut catalog, "B1000", "001B").unwrap();
        run(&mut catalog, "B1000", 2).unwrap();

        let copies = &catalog.books()[0].copies;
        assert_eq!(ids(&catalog), vec!["001X", "002X"]);
        assert!(copies.iter().all(|c| c.location == "Default"));
    }

    #[test]
    fn unknown_book_is_not_found() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            run(&mut catalog, "B1000", 1),
            Err(LibrisError::BookNotFound(_))
        ));
    }

    #[test]
    fn rejects_non_positive_counts() {
        let mut catalog = CatalogFixture::new().with_book("T", 1, "Shelf 1").build();
        let before = catalog.clone();
        assert!(matches!(
            run(&mut catalog, "B1000", 0),
            Err(LibrisError::Validation(_))
        ));
        assert_eq!(catalog, before);
    }

    #[test]
    fn rejects_counts_past_the_per_book_limit() {
        let mut catalog = CatalogFixture::new().with_book("T", 990, "Shelf 1").build();
        let before = catalog.clone();
        for count in [10, i64::MAX] {
            assert!(matches!(
                run(&mut catalog, "B1000", count),
                Err(LibrisError::Validation(_))
            ));
        }
        assert_eq!(catalog, before);

        run(&mut catalog, "B1000", 9).unwrap();
        assert_eq!(catalog.books()[0].copies.len(), 999);
    }
}
