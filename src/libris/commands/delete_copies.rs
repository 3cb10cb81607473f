//! Copy removal. Neither path renumbers the copies that remain, so gaps in the
//! sequence (`001A`, `003A`) are expected until the next location edit.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};

/// Removes exactly one copy from one book.
pub fn one(catalog: &mut Catalog, book_id: &str, copy_id: &str) -> Result<CmdResult> {
    let copy_id = copy_id.trim();
    let book = catalog.book_mut(book_id)?;
    let idx = book
        .copy_index(copy_id)
        .ok_or_else(|| LibrisError::CopyNotFound {
            book_id: book.id.clone(),
            copy_id: copy_id.to_string(),
        })?;

    book.copies.remove(idx);
    tracing::debug!(book_id = %book.id, copies = book.copies.len(), copy_id, "copy removed");

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success(format!(
        "Copy {} removed from {}",
        copy_id, book.id
    )));
    Ok(result.with_affected_books(vec![book.clone()]))
}

/// Removes every copy of one book whose id appears in a comma-separated list.
pub fn many(catalog: &mut Catalog, book_id: &str, copy_ids: &str) -> Result<CmdResult> {
    let wanted = parse_copy_ids(copy_ids);
    if wanted.is_empty() {
        return Err(LibrisError::Validation(
            "Please enter at least one Copy ID".to_string(),
        ));
    }

    let book = catalog.book_mut(book_id)?;
    let before = book.copies.len();
    book.copies
        .retain(|copy| !wanted.iter().any(|id| *id == copy.copy_id));
    let removed = before - book.copies.len();

    if removed == 0 {
        return Err(LibrisError::NoMatch(book.id.clone()));
    }
    tracing::debug!(book_id = %book.id, copies = book.copies.len(), removed, "copies removed");

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success(format!(
        "Removed {} of {} requested {} from {}",
        removed,
        wanted.len(),
        if wanted.len() == 1 { "copy" } else { "copies" },
        book.id
    )));
    Ok(result.with_affected_books(vec![book.clone()]))
}

/// Comma-split, trim, drop empties.
pub fn parse_copy_ids(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect()
}
