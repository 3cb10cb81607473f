use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, book_id: &str) -> Result<CmdResult> {
    let book = catalog.remove_book(book_id)?;
    tracing::debug!(book_id = %book.id, copies = book.copies.len(), "book removed");

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success(format!(
        "Book removed ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::CatalogFixture;
    use crate::commands::add_book;
    use crate::error::LibrisError;

    #[test]
    fn removes_book_and_leaves_others_untouched() {
        let mut catalog = CatalogFixture::new().with_books(3).build();
        let before_other = catalog.book("B1002").unwrap().clone();

        run(&mut catalog, " B1001 ").unwrap();

        assert!(matches!(
            catalog.book("B1001"),
            Err(LibrisError::BookNotFound(_))
        ));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.book("B1002").unwrap(), &before_other);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut catalog = CatalogFixture::new().with_books(1).build();
        let before = catalog.clone();
        assert!(matches!(
            run(&mut catalog, "B9999"),
            Err(LibrisError::BookNotFound(_))
        ));
        assert_eq!(catalog, before);
    }

    #[test]
    fn removed_ids_are_never_reissued() {
        let mut catalog = Catalog::new();
        add_book::run(&mut catalog, "A", "X", 1, "").unwrap();
        run(&mut catalog, "B1000").unwrap();
        add_book::run(&mut catalog, "B", "X", 1, "").unwrap();
        assert_eq!(catalog.books()[0].id, "B1001");
    }
}
