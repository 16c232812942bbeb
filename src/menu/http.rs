//! Menu source backed by a single HTTP GET.
//!
//! The menu host serves the document as `text/plain`, so the body is read
//! as text and parsed as JSON regardless of the advertised content type.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::menu::{FetchError, MenuResponse, MenuSource};

pub struct HttpMenuSource {
    url: String,
    client: reqwest::Client,
}

impl HttpMenuSource {
    /// Creates a source for `url`. No timeout is applied unless one is given.
    pub fn new(url: String, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client ({e}), falling back to defaults");
            reqwest::Client::new()
        });

        Self { url, client }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, category: &str) -> Result<Vec<String>, FetchError> {
        info!("Fetching menu from {} (category={})", self.url, category);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Menu response status: {}", status);

        if !status.is_success() {
            // The body can be a whole HTML error page; it goes to the log,
            // the error carries only the reason phrase.
            let body = response.text().await.unwrap_or_default();
            warn!("Menu request failed: {} - {}", status.as_u16(), body.trim());
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Menu body received: {} bytes", body.len());

        let menu = MenuResponse::from_json(&body).map_err(|e| {
            warn!("Menu body is not a menu document: {e}");
            FetchError::Parse(e.to_string())
        })?;

        let items = menu.items_for(category);
        if items.is_empty() {
            info!(
                "Category '{}' has no items (available: {:?})",
                category,
                menu.categories()
            );
        } else {
            info!("Fetched {} items for '{}'", items.len(), category);
        }
        Ok(items)
    }
}
