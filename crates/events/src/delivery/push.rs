//! Push-gateway delivery.
//!
//! [`PushDelivery`] forwards a lifecycle event to the mobile push gateway,
//! addressed by topic (one topic per client or operator). A single attempt
//! with a short timeout: the gateway queues internally, so retrying here
//! would only produce duplicate notifications.

use std::time::Duration;

use crate::bus::PlatformEvent;

/// HTTP request timeout for a push attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Error type for push delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum PushDeliveryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Push gateway returned HTTP {0}")]
    HttpStatus(u16),
}

/// Delivers lifecycle events to the push notification gateway.
pub struct PushDelivery {
    client: reqwest::Client,
}

impl PushDelivery {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }

    /// Send one push message for `event` to `topic` via the gateway at
    /// `base_url`.
    pub async fn deliver(
        &self,
        base_url: &str,
        topic: &str,
        event: &PlatformEvent,
    ) -> Result<(), PushDeliveryError> {
        let url = format!("{}/push/{topic}", base_url.trim_end_matches('/'));
        let payload = serde_json::json!({
            "event_type": event.event_type,
            "source_entity_type": event.source_entity_type,
            "source_entity_id": event.source_entity_id,
            "timestamp": event.timestamp,
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(PushDeliveryError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

impl Default for PushDelivery {
    fn default() -> Self {
        Self::new()
    }
}
