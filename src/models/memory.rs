// file: src/models/memory.rs
// description: memory document model as stored in the index
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// A single remembered note as the index stores it. This crate only
/// reads memories; creation and ingestion live elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Memory {
    /// Identifier shortened for display, at most 12 characters.
    /// Character-based so multibyte ids never get split mid-codepoint.
    pub fn short_id(&self) -> String {
        self.id.chars().take(12).collect()
    }

    pub fn tag_list(&self) -> String {
        self.tags.join(", ")
    }
}
