//! Frontend Models
//!
//! Data structures matching the character API payloads.

use serde::{Deserialize, Serialize};

/// One character as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, rename = "natureType")]
    pub nature_type: Vec<String>,
}

impl CharacterRecord {
    /// The only image the gallery shows
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Response body of `GET /api/character`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPage {
    pub characters: Vec<CharacterRecord>,
    pub total_pages: u32,
}
