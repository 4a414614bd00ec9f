//! Client side of the shortening service contract.
//!
//! One call, one attempt: `POST {base}/api/shorten` with `{"originalUrl": ..}`
//! and a `{"shortUrl": ..}` reply. Retries and timeouts are left to callers.

pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::HttpShortener;
pub use error::{ShortenError, FALLBACK_ERROR_MESSAGE};
pub use traits::Shortener;
pub use types::{ErrorBody, ShortenRequest, ShortenResult};

/// Path appended to the configured base URL.
pub const SHORTEN_PATH: &str = "/api/shorten";
