//! Failures of a single shorten call.
//!
//! Transport failures (no response at all) and service failures (a non-2xx
//! response) stay distinguishable here, but both reach the UI through the
//! same `Result` and end up as one user-facing message.

use thiserror::Error;

/// Message shown when the service gave us nothing better.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred.";

#[derive(Debug, Error)]
pub enum ShortenError {
    /// The request never got a response (connect, DNS, reset, ...).
    #[error("Shortening service unreachable at '{endpoint}': {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a status outside 2xx.
    #[error("Shortening service returned {status}{}", message_suffix(.message))]
    Service { status: u16, message: Option<String> },

    /// A 2xx reply whose body is not a shorten result.
    #[error("Unexpected response from shortening service ({status}): {reason}")]
    InvalidResponse { status: u16, reason: String },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

impl ShortenError {
    /// HTTP status, when the service responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ShortenError::Transport { .. } => None,
            ShortenError::Service { status, .. } | ShortenError::InvalidResponse { status, .. } => {
                Some(*status)
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ShortenError::Transport { .. })
    }

    /// Text for the error notification: the server's own message when it sent
    /// one, the generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ShortenError::Service {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_message_is_shown_verbatim() {
        let err = ShortenError::Service {
            status: 500,
            message: Some("rate limited".into()),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.user_message(), "rate limited");
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "Shortening service returned 500: rate limited"
        );
    }

    #[test]
    fn service_without_message_falls_back() {
        let err = ShortenError::Service {
            status: 404,
            message: None,
        };
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(err.to_string(), "Shortening service returned 404");
    }

    #[test]
    fn invalid_response_falls_back() {
        let err = ShortenError::InvalidResponse {
            status: 200,
            reason: "missing field `shortUrl`".into(),
        };
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }
}
