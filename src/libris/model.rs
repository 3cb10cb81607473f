use serde::{Deserialize, Serialize};

pub const AVAILABLE: &str = "Available";
pub const CHECKED_OUT: &str = "Checked out";

/// Availability of a single copy.
///
/// Stored as free text: `"Available"` is the only value with special meaning,
/// anything else is kept verbatim and treated as unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CopyStatus {
    Available,
    Other(String),
}

impl CopyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CopyStatus::Available => AVAILABLE,
            CopyStatus::Other(s) => s,
        }
    }

    /// Case-insensitive exact match against "available".
    pub fn is_available(&self) -> bool {
        self.as_str().eq_ignore_ascii_case(AVAILABLE)
    }
}

impl From<String> for CopyStatus {
    fn from(s: String) -> Self {
        if s == AVAILABLE {
            CopyStatus::Available
        } else {
            CopyStatus::Other(s)
        }
    }
}

impl From<CopyStatus> for String {
    fn from(status: CopyStatus) -> Self {
        match status {
            CopyStatus::Available => AVAILABLE.to_string(),
            CopyStatus::Other(s) => s,
        }
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCopy {
    #[serde(rename = "CopyID")]
    pub copy_id: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    // Newest first.
    #[serde(rename = "History", default)]
    pub history: Vec<String>,
    #[serde(rename = "Status")]
    pub status: CopyStatus,
}

impl BookCopy {
    pub fn new(copy_id: String, location: String) -> Self {
        Self {
            copy_id,
            location,
            history: Vec::new(),
            status: CopyStatus::Available,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Copies", default)]
    pub copies: Vec<BookCopy>,
}

impl Book {
    pub fn copy_index(&self, copy_id: &str) -> Option<usize> {
        self.copies.iter().position(|c| c.copy_id == copy_id)
    }
}
