use serde::{Deserialize, Serialize};

/// Request body sent to the shortening service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: String,
}

/// Successful reply. The short URL is kept exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResult {
    pub short_url: String,
}

/// Error payload some services attach to non-2xx replies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Pull a usable message out of a raw error body.
    ///
    /// Bodies that are not JSON, lack `message`, or carry an empty one yield `None`.
    pub fn message_from(bytes: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(bytes)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
    }
}
