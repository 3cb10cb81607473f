use crate::catalog::Catalog;
use crate::commands::{required, CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::ids::{copy_room, numbered_copy_ids};
use crate::model::{Book, BookCopy};
use crate::shelf::shelf_letter;

pub fn run(
    catalog: &mut Catalog,
    title: &str,
    author: &str,
    copy_count: i64,
    location: &str,
) -> Result<CmdResult> {
    let title = required(title, "Title")?;
    let author = required(author, "Author")?;
    if copy_count <= 0 {
        return Err(LibrisError::Validation(format!(
            "Number of copies must be a positive integer (got {})",
            copy_count
        )));
    }
    let count = copy_room(0, copy_count as u64)?;
    let location = location.trim().to_string();

    let id = catalog.allocate_book_id()?;
    let letter = shelf_letter(location.as_str());
    let copies = numbered_copy_ids(0, count, letter)
        .into_iter()
        .map(|copy_id| BookCopy::new(copy_id, location.clone()))
        .collect();

    let book = Book {
        title,
        author,
        id,
        location,
        copies,
    };
    tracing::debug!(book_id = %book.id, copies = copy_count, "book added");
    catalog.push_book(book.clone());

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {} by {}, {} {}",
        book.id,
        book.title,
        book.author,
        copy_count,
        if copy_count == 1 { "copy" } else { "copies" }
    )));
    Ok(result.with_affected_books(vec![book]))
}
