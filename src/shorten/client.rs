use async_trait::async_trait;
use reqwest::Client;

use super::error::ShortenError;
use super::traits::Shortener;
use super::types::{ErrorBody, ShortenRequest, ShortenResult};
use super::SHORTEN_PATH;

/// [`Shortener`] backed by the remote HTTP service.
pub struct HttpShortener {
    client: Client,
    endpoint: String,
}

impl HttpShortener {
    /// Build a client for the service rooted at `base_url`.
    ///
    /// A trailing `/` on the base is dropped so the endpoint never ends up
    /// with a double slash.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: endpoint_for(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn endpoint_for(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SHORTEN_PATH)
}

#[async_trait]
impl Shortener for HttpShortener {
    async fn shorten(&self, original_url: &str) -> Result<ShortenResult, ShortenError> {
        let body = ShortenRequest {
            original_url: original_url.to_string(),
        };

        tracing::debug!(endpoint = %self.endpoint, url = %original_url, "Sending shorten request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|source| ShortenError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();

        if !status.is_success() {
            // A body we fail to read is treated like a body without a message.
            let message = match response.bytes().await {
                Ok(bytes) => ErrorBody::message_from(&bytes),
                Err(_) => None,
            };
            tracing::warn!(status = status.as_u16(), reason = ?message, "Shorten request rejected");
            return Err(ShortenError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ShortenError::InvalidResponse {
                status: status.as_u16(),
                reason: format!("Failed to read response body: {}", e),
            })?;

        let result: ShortenResult =
            serde_json::from_slice(&bytes).map_err(|e| ShortenError::InvalidResponse {
                status: status.as_u16(),
                reason: e.to_string(),
            })?;

        tracing::info!(short_url = %result.short_url, "URL shortened");
        Ok(result)
    }
}
