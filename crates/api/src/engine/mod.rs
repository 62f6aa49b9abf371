//! Lifecycle orchestration over the repository layer.
//!
//! Handlers stay thin; the sequencing that must hold across tables
//! (status gate, capacity check, compare-and-set write, event publish)
//! lives here.

pub mod allocator;
pub mod lifecycle;
