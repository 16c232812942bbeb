//! Wire types for the remote menu document.
//!
//! The document is a single JSON object keyed by category name:
//!
//! ```text
//! {
//!   "Salads":   { "menu": ["Greek Salad", "Caesar Salad"] },
//!   "Desserts": { "menu": ["Tiramisu"] }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One named category. Extra fields next to `menu` are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCategory {
    pub menu: Vec<String>,
}

/// The whole document, keyed by category name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct MenuResponse {
    pub entries: HashMap<String, MenuCategory>,
}

impl MenuResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Returns the item names listed under `category`, in document order.
    /// A missing category yields an empty list.
    pub fn items_for(&self, category: &str) -> Vec<String> {
        self.entries
            .get(category)
            .map(|c| c.menu.clone())
            .unwrap_or_default()
    }

    /// Category names, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
