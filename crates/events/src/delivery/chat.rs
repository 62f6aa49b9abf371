//! Chat-webhook delivery with exponential-backoff retry.
//!
//! [`ChatDelivery`] posts a JSON-encoded [`PlatformEvent`] summary to a
//! chat webhook URL (team channel integration). Failed attempts are
//! retried up to three times with exponential backoff (1 s, 2 s, 4 s).

use std::time::Duration;

use crate::bus::PlatformEvent;

/// Retry delays in seconds (exponential backoff: 1s, 2s, 4s).
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for chat delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum ChatDeliveryError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Chat webhook returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// ChatDelivery
// ---------------------------------------------------------------------------

/// Delivers lifecycle notifications to a chat webhook endpoint.
pub struct ChatDelivery {
    client: reqwest::Client,
}

impl ChatDelivery {
    /// Create a new delivery service with a pre-configured HTTP client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }

    /// Deliver an event to a chat webhook URL with retry.
    ///
    /// Retries up to 3 times with exponential backoff before giving up.
    /// Returns `Ok(())` on the first successful attempt.
    pub async fn deliver(
        &self,
        url: &str,
        event: &PlatformEvent,
    ) -> Result<(), ChatDeliveryError> {
        let payload = serde_json::json!({
            "text": headline(event),
            "event_type": event.event_type,
            "source_entity_type": event.source_entity_type,
            "source_entity_id": event.source_entity_id,
            "timestamp": event.timestamp,
        });

        let mut last_err: Option<ChatDeliveryError> = None;

        for (attempt, delay_secs) in RETRY_DELAYS_SECS.iter().enumerate() {
            match self.try_send(url, &payload).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        url,
                        error = %e,
                        "Chat delivery attempt failed, retrying"
                    );
                    last_err = Some(e);
                    tokio::time::sleep(Duration::from_secs(*delay_secs)).await;
                }
            }
        }

        // Final attempt after the last backoff.
        match self.try_send(url, &payload).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!(url, error = %e, "Chat delivery failed after all retries");
                Err(last_err.unwrap_or(e))
            }
        }
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> Result<(), ChatDeliveryError> {
        let response = self.client.post(url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(ChatDeliveryError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

impl Default for ChatDelivery {
    fn default() -> Self {
        Self::new()
    }
}

/// One-line human-readable summary for the chat message body.
fn headline(event: &PlatformEvent) -> String {
    match (&event.source_entity_type, event.source_entity_id) {
        (Some(entity), Some(id)) => format!("{} ({entity} #{id})", event.event_type),
        _ => event.event_type.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_panic() {
        let _delivery = ChatDelivery::new();
    }

    #[test]
    fn error_display_http_status() {
        let err = ChatDeliveryError::HttpStatus(502);
        assert_eq!(err.to_string(), "Chat webhook returned HTTP 502");
    }

    #[test]
    fn headline_includes_entity() {
        let event = PlatformEvent::new("role.published").with_source("role", 12);
        assert_eq!(headline(&event), "role.published (role #12)");
    }

    #[test]
    fn headline_without_entity_is_event_type() {
        let event = PlatformEvent::new("role.published");
        assert_eq!(headline(&event), "role.published");
    }
}
