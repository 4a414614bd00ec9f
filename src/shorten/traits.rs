use async_trait::async_trait;

use super::error::ShortenError;
use super::types::ShortenResult;

/// Anything that can turn a long URL into a short one.
///
/// The UI only talks to this trait, so tests can swap the HTTP client for a
/// scripted fake.
#[async_trait]
pub trait Shortener: Send + Sync {
    /// Shorten `original_url`.
    ///
    /// The input is expected to have passed validation already and is sent
    /// without further sanitization. Exactly one attempt is made.
    async fn shorten(&self, original_url: &str) -> Result<ShortenResult, ShortenError>;
}
