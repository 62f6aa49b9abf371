/// Error type for BEAM syndication failures.
///
/// Kept separate from `CoreError` on purpose: a sync failure is never a
/// lifecycle failure. The API layer reports it through the sync endpoint
/// only; `publish` succeeds regardless.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The role's status/visibility combination does not qualify for
    /// syndication.
    #[error("Role {role_id} is not eligible for syndication: {reason}")]
    Ineligible { role_id: i64, reason: String },

    /// The role (or its owning client) no longer exists.
    #[error("Role {0} not found")]
    RoleNotFound(i64),

    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// BEAM returned a non-2xx status code.
    #[error("BEAM returned HTTP {0}")]
    HttpStatus(u16),

    /// BEAM answered 2xx but the body carried no listing id.
    #[error("BEAM response did not contain a listing id")]
    MissingListingId,

    /// Reading the role or recording the acknowledgement failed locally.
    #[error("Database error during sync: {0}")]
    Database(#[from] sqlx::Error),
}
