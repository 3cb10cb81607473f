//! Book and copy identifiers.
//!
//! Book ids come from a persisted counter and are never recycled. Copy ids are
//! not allocated at all: they are derived from a copy's position in its book
//! plus the shelf letter, so two books can (and usually do) share copy ids.

use crate::error::{LibrisError, Result};

pub const DEFAULT_COUNTER_START: u64 = 1000;
pub const BOOK_ID_PREFIX: char = 'B';
/// Keeps copy ids at three digits.
pub const MAX_COPIES_PER_BOOK: usize = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookIdCounter(u64);

impl Default for BookIdCounter {
    fn default() -> Self {
        Self(DEFAULT_COUNTER_START)
    }
}

impl BookIdCounter {
    pub fn new(next: u64) -> Self {
        Self(next)
    }

    /// The number the next allocation will use.
    pub fn peek(&self) -> u64 {
        self.0
    }

    /// Returns `B<n>` for the current value and advances the counter.
    /// The counter is left alone when it cannot advance.
    pub fn allocate(&mut self) -> Result<String> {
        let next = self
            .0
            .checked_add(1)
            .ok_or_else(|| LibrisError::Store("Book id counter is exhausted".to_string()))?;
        let id = format!("{}{}", BOOK_ID_PREFIX, self.0);
        self.0 = next;
        Ok(id)
    }

    /// Advances the counter so it is strictly greater than `used`.
    /// Returns true if the counter moved.
    pub fn ensure_above(&mut self, used: u64) -> Result<bool> {
        if self.0 > used {
            return Ok(false);
        }
        self.0 = used.checked_add(1).ok_or_else(|| {
            LibrisError::Store(format!(
                "Book id {}{} leaves no room for new ids",
                BOOK_ID_PREFIX, used
            ))
        })?;
        Ok(true)
    }
}

/// Numeric part of a `B<n>` book id, if it has one.
pub fn book_id_number(id: &str) -> Option<u64> {
    id.strip_prefix(BOOK_ID_PREFIX)?.parse().ok()
}

/// `<3-digit, 1-based index><shelf letter>`, e.g. `004C`.
pub fn copy_id(index: usize, letter: char) -> String {
    format!("{:03}{}", index, letter)
}

/// Checks that `count` more copies fit next to `existing` ones.
pub fn copy_room(existing: usize, count: u64) -> Result<usize> {
    let room = MAX_COPIES_PER_BOOK.saturating_sub(existing);
    if count > room as u64 {
        return Err(LibrisError::Validation(format!(
            "A book holds at most {} copies (has {}, asked for {} more)",
            MAX_COPIES_PER_BOOK, existing, count
        )));
    }
    Ok(count as usize)
}

/// Copy ids for `count` consecutive positions starting after `existing`.
pub fn numbered_copy_ids(existing: usize, count: usize, letter: char) -> Vec<String> {
    (existing + 1..=existing + count)
        .map(|index| copy_id(index, letter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_default() {
        let mut counter = BookIdCounter::default();
        assert_eq!(counter.allocate().unwrap(), "B1000");
        assert_eq!(counter.allocate().unwrap(), "B1001");
        assert_eq!(counter.peek(), 1002);
    }

    #[test]
    fn ensure_above_only_moves_forward() {
        let mut counter = BookIdCounter::new(1005);
        assert!(!counter.ensure_above(1003).unwrap());
        assert_eq!(counter.peek(), 1005);
        assert!(counter.ensure_above(1005).unwrap());
        assert_eq!(counter.peek(), 1006);
    }

    #[test]
    fn counter_at_the_top_refuses_to_wrap() {
        let mut counter = BookIdCounter::new(u64::MAX);
        assert!(matches!(counter.allocate(), Err(LibrisError::Store(_))));
        assert_eq!(counter.peek(), u64::MAX);

        let mut counter = BookIdCounter::default();
        assert!(counter.ensure_above(u64::MAX).is_err());
        assert!(counter.ensure_above(u64::MAX - 1).unwrap());
        assert_eq!(counter.peek(), u64::MAX);
    }

    #[test]
    fn copy_room_stops_at_the_per_book_limit() {
        assert_eq!(copy_room(0, 999).unwrap(), 999);
        assert_eq!(copy_room(998, 1).unwrap(), 1);
        assert!(matches!(copy_room(998, 2), Err(LibrisError::Validation(_))));
        assert!(copy_room(0, u64::MAX).is_err());
        assert!(copy_room(1200, 1).is_err());
    }

    #[test]
    fn book_id_number_parses_prefix() {
        assert_eq!(book_id_number("B1042"), Some(1042));
        assert_eq!(book_id_number("1042"), None);
        assert_eq!(book_id_number("Bxyz"), None);
    }

    #[test]
    fn copy_ids_are_zero_padded() {
        assert_eq!(copy_id(1, 'A'), "001A");
        assert_eq!(copy_id(42, 'X'), "042X");
        assert_eq!(copy_id(1234, 'B'), "1234B");
    }

    #[test]
    fn numbered_ids_continue_from_existing() {
        assert_eq!(numbered_copy_ids(0, 3, 'C'), vec!["001C", "002C", "003C"]);
        assert_eq!(numbered_copy_ids(2, 2, 'X'), vec!["003X", "004X"]);
        assert!(numbered_copy_ids(5, 0, 'A').is_empty());
    }
}
