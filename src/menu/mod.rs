pub mod http;
pub mod source;
pub mod types;

pub use http::HttpMenuSource;
pub use source::{FetchError, MenuSource};
pub use types::{MenuCategory, MenuResponse};
