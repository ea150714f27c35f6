use serde::{Deserialize, Serialize};

/// Storage classification for a saved code. Scans that parsed as plain
/// URLs are kept openable; everything else is stored as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavedKind {
    Url,
    Text,
}

impl SavedKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SavedKind::Url => "url",
            SavedKind::Text => "text",
        }
    }

    /// Parses the stored column value. Unknown values fall back to text,
    /// matching the storage default.
    pub fn from_column(value: &str) -> Self {
        match value {
            "url" => SavedKind::Url,
            _ => SavedKind::Text,
        }
    }
}

/// A scanned or generated code saved to a user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCode {
    pub id: String,
    pub user_id: String,
    /// The raw payload text, verbatim.
    pub data: String,
    pub kind: SavedKind,
    pub title: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
