//! Durable capture of every platform event.
//!
//! [`EventPersistence`] subscribes to the bus and appends each event to
//! the `events` table. Runs as a background task for the lifetime of the
//! process; a write failure is logged and the loop keeps going, because
//! the audit trail must never take a lifecycle transition down with it.

use tokio::sync::broadcast;

use crewcall_db::repositories::EventRepo;
use crewcall_db::DbPool;

use crate::bus::PlatformEvent;

pub struct EventPersistence;

impl EventPersistence {
    /// Consume events from `receiver` until the bus closes.
    pub async fn run(pool: DbPool, mut receiver: broadcast::Receiver<PlatformEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(err) = EventRepo::insert(
                        &pool,
                        &event.event_type,
                        event.source_entity_type.as_deref(),
                        event.source_entity_id,
                        event.actor_client_id,
                        &event.payload,
                    )
                    .await
                    {
                        tracing::error!(
                            event_type = %event.event_type,
                            error = %err,
                            "Failed to persist platform event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event persistence lagged; events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed; persistence task exiting");
                    return;
                }
            }
        }
    }
}
