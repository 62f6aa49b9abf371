//! BEAM job-network syndication gateway.
//!
//! Mirrors published roles to the external BEAM job board and records the
//! acknowledgement back onto the role as metadata. The gateway owns
//! de-duplication (a payload hash per role) and is strictly isolated from
//! the lifecycle: a downstream failure is reported, never rolled back
//! into role state.

pub mod client;
pub mod error;
pub mod gateway;
pub mod payload;

pub use client::BeamClient;
pub use error::SyncError;
pub use gateway::{SyncOutcome, SyndicationGateway};
pub use payload::BeamListing;
