//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::state::App;
use crate::menu::{FetchError, MenuSource};

/// A source that answers every fetch with a fixed result.
pub struct StaticSource {
    pub result: Result<Vec<String>, FetchError>,
}

impl StaticSource {
    pub fn items(items: &[&str]) -> Self {
        Self {
            result: Ok(items.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl MenuSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, _category: &str) -> Result<Vec<String>, FetchError> {
        self.result.clone()
    }
}

/// Creates a test App showing the "Salads" category.
pub fn test_app() -> App {
    App::new("Salads".to_string(), "test-source".to_string())
}

/// Text of every row of a rendered buffer, one string per terminal line.
pub fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
