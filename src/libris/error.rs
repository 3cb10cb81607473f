use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("{0}")]
    Validation(String),

    #[error("Book ID not found: {0}")]
    BookNotFound(String),

    #[error("Copy ID not found: {copy_id} (book {book_id})")]
    CopyNotFound { book_id: String, copy_id: String },

    #[error("No matching Copy IDs found in book {0}")]
    NoMatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl LibrisError {
    /// True for failures caused by the request itself (bad input, unknown ids,
    /// nothing matched) rather than by storage or configuration.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            LibrisError::Validation(_)
                | LibrisError::BookNotFound(_)
                | LibrisError::CopyNotFound { .. }
                | LibrisError::NoMatch(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LibrisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_classified() {
        assert!(LibrisError::Validation("x".into()).is_user_error());
        assert!(LibrisError::BookNotFound("B1".into()).is_user_error());
        assert!(LibrisError::NoMatch("B1".into()).is_user_error());
        assert!(!LibrisError::Store("disk".into()).is_user_error());
    }

    #[test]
    fn copy_not_found_names_both_ids() {
        let err = LibrisError::CopyNotFound {
            book_id: "B1000".into(),
            copy_id: "009A".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("009A"));
        assert!(msg.contains("B1000"));
    }
}
