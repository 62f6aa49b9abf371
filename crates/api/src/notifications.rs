//! Fan-out of platform events to the external notification collaborators.
//!
//! [`NotificationRelay`] subscribes to the event bus and forwards each
//! lifecycle event to the configured chat webhook and push gateway.
//! Strictly fire-and-forget: a failed delivery is logged with the event
//! identifiers and dropped; it never blocks or fails the transition that
//! produced it.

use tokio::sync::broadcast;

use crewcall_events::{ChatDelivery, PlatformEvent, PushDelivery};

/// Topic all lifecycle pushes are addressed to. Per-user topics arrive
/// with account-scoped notification preferences.
const BROADCAST_TOPIC: &str = "lifecycle";

pub struct NotificationRelay {
    chat_webhook_url: Option<String>,
    push_gateway_url: Option<String>,
    chat: ChatDelivery,
    push: PushDelivery,
}

impl NotificationRelay {
    pub fn new(chat_webhook_url: Option<String>, push_gateway_url: Option<String>) -> Self {
        Self {
            chat_webhook_url,
            push_gateway_url,
            chat: ChatDelivery::new(),
            push: PushDelivery::new(),
        }
    }

    /// Consume events from `receiver` until the bus closes.
    pub async fn run(self, mut receiver: broadcast::Receiver<PlatformEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.relay(&event).await,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Notification relay lagged; events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed; notification relay exiting");
                    return;
                }
            }
        }
    }

    async fn relay(&self, event: &PlatformEvent) {
        if let Some(url) = &self.chat_webhook_url {
            if let Err(err) = self.chat.deliver(url, event).await {
                tracing::warn!(
                    event_type = %event.event_type,
                    source_entity_id = ?event.source_entity_id,
                    error = %err,
                    "Chat notification failed; dropping"
                );
            }
        }
        if let Some(url) = &self.push_gateway_url {
            if let Err(err) = self.push.deliver(url, BROADCAST_TOPIC, event).await {
                tracing::warn!(
                    event_type = %event.event_type,
                    source_entity_id = ?event.source_entity_id,
                    error = %err,
                    "Push notification failed; dropping"
                );
            }
        }
    }
}
