//! HTTP handlers, one module per resource.

pub mod clients;
pub mod events;
pub mod health;
pub mod operators;
pub mod roles;
