use crate::catalog::Catalog;
use crate::commands::{replacement, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::copy_id;
use crate::shelf::shelf_letter;

/// Replacement values for an edit. Blank or missing fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct BookEdit {
    pub title: Option<String>,
    pub author: Option<String>,
    pub location: Option<String>,
}

impl BookEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Applies an edit. A new location moves every copy and renumbers all copy
/// ids `001..N` in their current order with the new shelf letter.
pub fn run(catalog: &mut Catalog, book_id: &str, edit: &BookEdit) -> Result<CmdResult> {
    let book = catalog.book_mut(book_id)?;
    let mut changes = Vec::new();

    if let Some(title) = replacement(edit.title.as_deref()) {
        book.title = title;
        changes.push("title");
    }
    if let Some(author) = replacement(edit.author.as_deref()) {
        book.author = author;
        changes.push("author");
    }
    if let Some(location) = replacement(edit.location.as_deref()) {
        let letter = shelf_letter(location.as_str());
        for (idx, copy) in book.copies.iter_mut().enumerate() {
            copy.copy_id = copy_id(idx + 1, letter);
            copy.location = location.clone();
        }
        book.location = location;
        changes.push("location");
    }
    tracing::debug!(book_id = %book.id, copies = book.copies.len(), ?changes, "book edited");

    let mut result = CmdResult::changed();
    let summary = if changes.is_empty() {
        "nothing to change".to_string()
    } else {
        changes.join(", ")
    };
    result.add_message(CmdMessage::success(format!(
        "Book updated ({}): {}",
        book.id, summary
    )));
    Ok(result.with_affected_books(vec![book.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::CatalogFixture;
    use crate::commands::delete_copies;
    use crate::error::LibrisError;

    #[test]
    fn updates_only_non_blank_fields() {
        let mut catalog = CatalogFixture::new().with_book("Old", 1, "Shelf 1").build();
        let edit = BookEdit::new().title("New").author("  ").location("");
        run(&mut catalog, "B1000", &edit).unwrap();

        let book = catalog.book("B1000").unwrap();
        assert_eq!(book.title, "New");
        assert_eq!(book.author, "Test Author");
        assert_eq!(book.location, "Shelf 1");
        assert_eq!(book.copies[0].copy_id, "001A");
    }

    #[test]
    fn all_blank_edit_is_a_successful_no_op() {
        let mut catalog = CatalogFixture::new().with_book("T", 2, "Shelf 2").build();
        let before = catalog.book("B1000").unwrap().clone();

        let result = run(&mut catalog, "B1000", &BookEdit::new()).unwrap();

        assert!(result.changed);
        assert_eq!(catalog.book("B1000").unwrap(), &before);
    }

    #[test]
    fn new_location_renumbers_positionally() {
        let mut catalog = CatalogFixture::new().with_book("T", 4, "Shelf 1").build();
        delete_copies::many(&mut catalog, "B1000", "001A,003A").unwrap();

        run(&mut catalog, "B1000", &BookEdit::new().location(" Shelf 5 ")).unwrap();

        let book = catalog.book("B1000").unwrap();
        let ids: Vec<_> = book.copies.iter().map(|c| c.copy_id.as_str()).collect();
        assert_eq!(ids, vec!["001E", "002E"]);
        assert!(book.copies.iter().all(|c| c.location == "Shelf 5"));
        assert_eq!(book.location, "Shelf 5");
    }

    #[test]
    fn unrecognised_location_uses_default_letter() {
        let mut catalog = CatalogFixture::new().with_book("T", 1, "Shelf 1").build();
        run(&mut catalog, "B1000", &BookEdit::new().location("Basement")).unwrap();

        let copy = &catalog.book("B1000").unwrap().copies[0];
        assert_eq!(copy.copy_id, "001X");
        assert_eq!(copy.location, "Basement");
    }

    #[test]
    fn unknown_book_is_not_found() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            run(&mut catalog, "B1", &BookEdit::new().title("x")),
            Err(LibrisError::BookNotFound(_))
        ));
    }
}
