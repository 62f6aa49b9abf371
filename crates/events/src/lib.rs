//! Crewcall event bus and notification infrastructure.
//!
//! Building blocks for the platform-wide event system:
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`PlatformEvent`] — the canonical domain event envelope.
//! - [`EventPersistence`] — background service that durably writes every
//!   event to the `events` table.
//! - [`delivery`] — external notification channels (chat webhook, push
//!   gateway). Fire-and-forget: failures are logged and never block a
//!   lifecycle transition.

pub mod bus;
pub mod delivery;
pub mod persistence;

pub use bus::{EventBus, PlatformEvent};
pub use delivery::chat::ChatDelivery;
pub use delivery::push::PushDelivery;
pub use persistence::EventPersistence;
