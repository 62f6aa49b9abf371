//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or `&mut PgConnection` for methods that must run
//! inside a caller-owned transaction) as the first argument. Every
//! lifecycle write is a compare-and-set UPDATE conditioned on the expected
//! prior status, so a lost race surfaces as zero rows, never as a
//! double-write.

pub mod client_repo;
pub mod event_repo;
pub mod operator_repo;
pub mod operator_type_repo;
pub mod role_repo;

pub use client_repo::ClientRepo;
pub use event_repo::EventRepo;
pub use operator_repo::OperatorRepo;
pub use operator_type_repo::OperatorTypeRepo;
pub use role_repo::RoleRepo;
