//! # Application State
//!
//! Core state for the menu screen. Domain data only, no TUI types.
//! Presentation state (scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── category: String          // category being shown
//! ├── source_name: String       // host the menu comes from (title bar)
//! ├── items: DisplayedItems     // observable list the view renders
//! ├── phase: Phase              // Loading → Loaded | Failed
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::observable::DisplayedItems;

/// Where the screen is in its single fetch.
///
/// The only transition is out of `Loading`; there is no way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
    /// The fetch failed; the list stays empty.
    Failed(String),
}

pub struct App {
    pub category: String,
    pub source_name: String,
    pub items: DisplayedItems,
    pub phase: Phase,
    pub status_message: String,
}

impl App {
    pub fn new(category: String, source_name: String) -> Self {
        Self {
            category,
            source_name,
            items: DisplayedItems::new(),
            phase: Phase::Loading,
            status_message: String::from("Loading…"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.category.clone(), source_label(&config.url))
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

/// Short name for where the menu comes from: the URL's host, or the raw
/// string when it has none.
pub fn source_label(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.category, "Salads");
        assert_eq!(app.phase, Phase::Loading);
        assert!(app.is_loading());
        assert!(app.items.is_empty());
        assert_eq!(app.status_message, "Loading…");
    }

    #[test]
    fn test_from_config() {
        let config = ResolvedConfig {
            url: "http://localhost/menu.json".to_string(),
            category: "Desserts".to_string(),
            timeout: None,
        };
        let app = App::from_config(&config);
        assert_eq!(app.category, "Desserts");
        assert_eq!(app.source_name, "localhost");
    }

    #[test]
    fn test_source_label_uses_host() {
        assert_eq!(
            source_label("https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/littleLemonMenu.json"),
            "raw.githubusercontent.com"
        );
        assert_eq!(source_label("http://127.0.0.1:8080/menu.json"), "127.0.0.1");
    }

    #[test]
    fn test_source_label_falls_back_to_raw_string() {
        assert_eq!(source_label("not a url"), "not a url");
    }
}
