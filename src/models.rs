//! Frontend Models
//!
//! Data structures matching the config resource and the quotes service.

use serde::Deserialize;

/// Static configuration resource (`assets/config.json`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigObject {
    pub quotes_url: String,
    #[serde(default)]
    pub show_author_and_tags: Option<bool>,
}

/// Quote record (matches quotes service)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub author: String,
    pub author_slug: String,
    pub content: String,
    pub date_added: String,
    pub date_modified: String,
    pub tags: Vec<String>,
}

/// User-editable search parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub category: String,
    pub quantity: i32,
}

pub const DEFAULT_CATEGORY: &str = "happiness";
pub const DEFAULT_QUANTITY: i32 = 3;

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            quantity: DEFAULT_QUANTITY,
        }
    }
}
