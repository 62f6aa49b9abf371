//! The syndication gateway: decides eligibility, de-duplicates, pushes,
//! and records the acknowledgement.
//!
//! The gateway never writes `status_id`. Its only role-table writes are
//! the `beam_*` metadata columns, so a downstream failure cannot revert a
//! published role by construction.

use sqlx::PgPool;

use crewcall_core::lifecycle;
use crewcall_core::taxonomy::Visibility;
use crewcall_core::types::DbId;
use crewcall_db::models::role::Role;
use crewcall_db::repositories::{ClientRepo, RoleRepo};

use crate::client::BeamClient;
use crate::error::SyncError;
use crate::payload::BeamListing;

/// What a sync attempt did.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// The payload was pushed and the acknowledgement recorded.
    Synced { beam_ref: String },
    /// Nothing material changed since the last push; no external call.
    Unchanged { beam_ref: String },
}

/// Mirrors eligible roles to BEAM exactly once per material change.
pub struct SyndicationGateway {
    client: BeamClient,
}

impl SyndicationGateway {
    pub fn new(client: BeamClient) -> Self {
        Self { client }
    }

    /// Sync one role to BEAM.
    ///
    /// Steps: load the role, gate on eligibility, build the normalized
    /// payload, short-circuit when the payload hash matches the last
    /// recorded one, otherwise create or update the external listing and
    /// record the returned id plus the new hash.
    pub async fn sync_role(&self, pool: &PgPool, role_id: DbId) -> Result<SyncOutcome, SyncError> {
        let role = RoleRepo::find_by_id(pool, role_id)
            .await?
            .ok_or(SyncError::RoleNotFound(role_id))?;

        Self::check_eligibility(&role)?;

        let client_name = ClientRepo::find_by_id(pool, role.client_id)
            .await?
            .map(|c| c.name)
            .ok_or(SyncError::RoleNotFound(role_id))?;

        let listing = BeamListing::from_role(&role, &client_name);
        let hash = listing.payload_hash();

        // Local de-dup ledger: the external system is not assumed to be
        // idempotent, so an unchanged payload never leaves the process.
        if role.beam_payload_hash.as_deref() == Some(hash.as_str()) {
            let beam_ref = role.beam_ref.clone().unwrap_or_default();
            tracing::debug!(role_id, %beam_ref, "Role already synced; skipping push");
            return Ok(SyncOutcome::Unchanged { beam_ref });
        }

        let beam_ref = match &role.beam_ref {
            Some(existing) => self.client.update_listing(existing, &listing).await?,
            None => self.client.create_listing(&listing).await?,
        };

        RoleRepo::mark_synced(pool, role_id, &beam_ref, &hash).await?;
        tracing::info!(role_id, %beam_ref, "Role synced to BEAM");

        Ok(SyncOutcome::Synced { beam_ref })
    }

    /// Only Live/Filled roles with public visibility leave the platform.
    fn check_eligibility(role: &Role) -> Result<(), SyncError> {
        if !lifecycle::SYNDICATION_STATUSES.contains(&role.status_id) {
            return Err(SyncError::Ineligible {
                role_id: role.id,
                reason: format!(
                    "status is {}",
                    lifecycle::status_name(role.status_id)
                ),
            });
        }
        match Visibility::parse(&role.visibility) {
            Ok(Visibility::Public) => Ok(()),
            _ => Err(SyncError::Ineligible {
                role_id: role.id,
                reason: format!("visibility is {}", role.visibility),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crewcall_core::lifecycle::{
        STATUS_CLAIMED, STATUS_COMPLETED, STATUS_DRAFT, STATUS_FILLED, STATUS_LIVE,
    };

    fn role(status_id: i16, visibility: &str) -> Role {
        let now = chrono::Utc::now();
        Role {
            id: 9,
            client_id: 1,
            operator_id: None,
            category: "design".into(),
            workstream: "creative".into(),
            title: "Poster series".into(),
            description: "Three posters for the fall campaign.".into(),
            skills: vec![],
            pay_range: "$300-$600".into(),
            deadline: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            location: None,
            visibility: visibility.into(),
            tags: vec![],
            media_url: None,
            status_id,
            cancel_reason: None,
            feedback_rating: None,
            feedback_comment: None,
            beam_ref: None,
            beam_synced_at: None,
            beam_payload_hash: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    #[test]
    fn live_public_is_eligible() {
        assert!(SyndicationGateway::check_eligibility(&role(STATUS_LIVE, "public")).is_ok());
    }

    #[test]
    fn filled_public_is_eligible() {
        assert!(SyndicationGateway::check_eligibility(&role(STATUS_FILLED, "public")).is_ok());
    }

    #[test]
    fn draft_is_not_eligible() {
        let err = SyndicationGateway::check_eligibility(&role(STATUS_DRAFT, "public")).unwrap_err();
        assert!(err.to_string().contains("status is Draft"));
    }

    #[test]
    fn claimed_is_not_eligible() {
        assert!(SyndicationGateway::check_eligibility(&role(STATUS_CLAIMED, "public")).is_err());
    }

    #[test]
    fn completed_is_not_eligible() {
        assert!(
            SyndicationGateway::check_eligibility(&role(STATUS_COMPLETED, "public")).is_err()
        );
    }

    #[test]
    fn members_only_never_leaves_the_platform() {
        let err = SyndicationGateway::check_eligibility(&role(STATUS_LIVE, "members")).unwrap_err();
        assert!(err.to_string().contains("visibility is members"));
    }
}
