//! Shelf names and the single-letter codes embedded in copy ids.
//!
//! Resolution never fails: anything that is not one of the five named shelves
//! (after trimming) lands on the default shelf.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shelf {
    One,
    Two,
    Three,
    Four,
    Five,
    Default,
}

pub const DEFAULT_LETTER: char = 'X';

impl Shelf {
    pub const ALL: [Shelf; 6] = [
        Shelf::One,
        Shelf::Two,
        Shelf::Three,
        Shelf::Four,
        Shelf::Five,
        Shelf::Default,
    ];

    /// Exact match on the trimmed name. Unknown names map to `Shelf::Default`.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "Shelf 1" => Shelf::One,
            "Shelf 2" => Shelf::Two,
            "Shelf 3" => Shelf::Three,
            "Shelf 4" => Shelf::Four,
            "Shelf 5" => Shelf::Five,
            _ => Shelf::Default,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shelf::One => "Shelf 1",
            Shelf::Two => "Shelf 2",
            Shelf::Three => "Shelf 3",
            Shelf::Four => "Shelf 4",
            Shelf::Five => "Shelf 5",
            Shelf::Default => "Default",
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Shelf::One => 'A',
            Shelf::Two => 'B',
            Shelf::Three => 'C',
            Shelf::Four => 'D',
            Shelf::Five => 'E',
            Shelf::Default => DEFAULT_LETTER,
        }
    }
}

/// Resolves a free-text location to its shelf letter.
///
/// Accepts both `&str` and `Option<&str>`; `None`, blank and unrecognised
/// locations all yield [`DEFAULT_LETTER`].
pub fn shelf_letter<'a>(location: impl Into<Option<&'a str>>) -> char {
    match location.into() {
        Some(name) => Shelf::parse(name).letter(),
        None => DEFAULT_LETTER,
    }
}
