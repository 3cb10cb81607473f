//! Styles for the libris CLI.
//!
//! Templates only ever name a style (`{{ x | style("copy-id") }}`); what that
//! looks like is decided here. Keeping the names in [`names`] lets renderers
//! and templates agree without repeating string literals.
//!
//! Unknown style names render the text unchanged.
use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
#[allow(dead_code)]
pub mod names {
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const HEADER: &str = "header";
    // Catalog table
    pub const BOOK_TITLE: &str = "book-title";
    pub const BOOK_AUTHOR: &str = "book-author";
    pub const BOOK_ID: &str = "book-id";
    pub const COPY_ID: &str = "copy-id";
    pub const LOCATION: &str = "location";
    pub const HISTORY: &str = "history";
    pub const AVAILABLE: &str = "available";
    pub const UNAVAILABLE: &str = "unavailable";
    // Shelves
    pub const SHELF_LETTER: &str = "shelf-letter";
}

pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) if !text.is_empty() => style.apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

pub static LIBRIS_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, Style::new().color256(240))
        .add(names::ERROR, Style::new().red().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::BOOK_TITLE, Style::new().bold())
        .add(names::BOOK_AUTHOR, Style::new())
        .add(names::BOOK_ID, Style::new().cyan())
        .add(names::COPY_ID, Style::new().yellow())
        .add(names::LOCATION, Style::new())
        .add(names::HISTORY, muted.italic())
        .add(names::AVAILABLE, Style::new().green())
        .add(names::UNAVAILABLE, Style::new().red())
        .add(names::SHELF_LETTER, Style::new().yellow().bold())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_styles_emit_ansi() {
        let theme = Theme::new().add("x", Style::new().red().force_styling(true));
        let out = theme.apply("x", "hi");
        assert!(out.contains("\x1b["));
        assert!(out.contains("hi"));
    }

    #[test]
    fn unknown_style_and_empty_text_pass_through() {
        assert_eq!(LIBRIS_THEME.apply("no-such-style", "text"), "text");
        assert_eq!(LIBRIS_THEME.apply(names::BOOK_TITLE, ""), "");
    }

    #[test]
    fn every_name_is_registered() {
        for name in [
            names::MUTED,
            names::FAINT,
            names::ERROR,
            names::SUCCESS,
            names::INFO,
            names::HEADER,
            names::BOOK_TITLE,
            names::BOOK_AUTHOR,
            names::BOOK_ID,
            names::COPY_ID,
            names::LOCATION,
            names::HISTORY,
            names::AVAILABLE,
            names::UNAVAILABLE,
            names::SHELF_LETTER,
        ] {
            assert!(LIBRIS_THEME.has(name), "{}", name);
        }
    }
}
