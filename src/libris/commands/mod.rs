use crate::config::LibrisConfig;
use crate::error::{LibrisError, Result};
use crate::model::Book;
use crate::view::CatalogView;
use std::path::PathBuf;

pub mod add_book;
pub mod add_copies;
pub mod circulation;
pub mod config;
pub mod delete_copies;
pub mod edit_book;
pub mod init;
pub mod list;
pub mod remove_book;

#[derive(Debug, Clone)]
pub struct LibrisPaths {
    pub data: PathBuf,
}

impl LibrisPaths {
    pub fn new(data: impl Into<PathBuf>) -> Self {
        Self { data: data.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Set when the command mutated the catalog; the API persists only then.
    pub changed: bool,
    pub affected_books: Vec<Book>,
    pub view: Option<CatalogView>,
    pub config: Option<LibrisConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_view(mut self, view: CatalogView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_config(mut self, config: LibrisConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Trims a required text field, failing with `what` when nothing is left.
pub(crate) fn required(value: &str, what: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LibrisError::Validation(format!("{} cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional replacement; blank means "leave unchanged".
pub(crate) fn replacement(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
