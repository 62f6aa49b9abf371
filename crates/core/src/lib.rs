//! Crewcall domain logic.
//!
//! Pure types, validation, and lifecycle rules shared by the repository,
//! API, and syndication layers. This crate has zero internal dependencies
//! so any other workspace crate can use it.

pub mod capacity;
pub mod error;
pub mod estimation;
pub mod lifecycle;
pub mod operator;
pub mod role;
pub mod taxonomy;
pub mod types;
