//! External notification channels.
//!
//! Both channels are fire-and-forget collaborators: a delivery failure is
//! logged with the event identifiers and otherwise swallowed, never
//! surfaced to the lifecycle operation that triggered it.

pub mod chat;
pub mod push;
