//! Check-out and return of individual copies.
//!
//! Both flip a copy's status and prepend one dated line to its history. Copy
//! ids and locations are never touched here.

use crate::catalog::Catalog;
use crate::commands::{replacement, CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::model::{CopyStatus, CHECKED_OUT};
use chrono::{DateTime, Utc};

const HISTORY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    CheckOut,
    Return,
}

impl Movement {
    fn label(&self) -> &'static str {
        match self {
            Movement::CheckOut => "Checked out",
            Movement::Return => "Returned",
        }
    }

    fn target_status(&self) -> CopyStatus {
        match self {
            Movement::CheckOut => CopyStatus::Other(CHECKED_OUT.to_string()),
            Movement::Return => CopyStatus::Available,
        }
    }
}

pub fn check_out(
    catalog: &mut Catalog,
    book_id: &str,
    copy_id: &str,
    note: Option<&str>,
    at: DateTime<Utc>,
) -> Result<CmdResult> {
    run(catalog, book_id, copy_id, Movement::CheckOut, note, at)
}

pub fn return_copy(
    catalog: &mut Catalog,
    book_id: &str,
    copy_id: &str,
    note: Option<&str>,
    at: DateTime<Utc>,
) -> Result<CmdResult> {
    run(catalog, book_id, copy_id, Movement::Return, note, at)
}

fn run(
    catalog: &mut Catalog,
    book_id: &str,
    copy_id: &str,
    movement: Movement,
    note: Option<&str>,
    at: DateTime<Utc>,
) -> Result<CmdResult> {
    let copy_id = copy_id.trim();
    let book = catalog.book_mut(book_id)?;
    let book_id = book.id.clone();
    let copy = book
        .copies
        .iter_mut()
        .find(|c| c.copy_id == copy_id)
        .ok_or_else(|| LibrisError::CopyNotFound {
            book_id: book_id.clone(),
            copy_id: copy_id.to_string(),
        })?;

    match (movement, copy.status.is_available()) {
        (Movement::CheckOut, false) => {
            return Err(LibrisError::Validation(format!(
                "Copy {} of {} is not available ({})",
                copy_id, book_id, copy.status
            )));
        }
        (Movement::Return, true) => {
            return Err(LibrisError::Validation(format!(
                "Copy {} of {} is already available",
                copy_id, book_id
            )));
        }
        _ => {}
    }

    let mut entry = format!("{} {}", at.format(HISTORY_TIME_FORMAT), movement.label());
    if let Some(note) = replacement(note) {
        entry.push_str(": ");
        entry.push_str(&note);
    }
    copy.history.insert(0, entry);
    copy.status = movement.target_status();
    tracing::debug!(book_id = %book_id, copy_id, status = %copy.status, "copy status changed");

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success(format!(
        "{} {} of {}",
        movement.label(),
        copy_id,
        book_id
    )));
    Ok(result.with_affected_books(vec![book.clone()]))
}
