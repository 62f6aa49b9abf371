//! Normalized BEAM listing payload.
//!
//! The wire shape BEAM expects, flattened from a role plus its owning
//! client's display name. The payload hash doubles as the gateway's local
//! de-duplication ledger: identical hash means nothing material changed,
//! so no external call is made.

use chrono::NaiveDate;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crewcall_core::lifecycle;
use crewcall_db::models::role::Role;

/// The outbound listing document.
#[derive(Debug, Clone, Serialize)]
pub struct BeamListing {
    pub title: String,
    pub description: String,
    pub category: String,
    pub skills: Vec<String>,
    pub pay: String,
    pub deadline: NaiveDate,
    pub workstream: String,
    pub tags: Vec<String>,
    pub media_url: Option<String>,
    pub client_name: String,
    pub location: Option<String>,
    /// `false` once the role is Filled: BEAM stops routing applicants but
    /// keeps the listing visible.
    pub accepting_applicants: bool,
}

impl BeamListing {
    /// Build the listing for a role. The caller supplies the client name
    /// because the role row only carries the client id.
    pub fn from_role(role: &Role, client_name: &str) -> Self {
        Self {
            title: role.title.clone(),
            description: role.description.clone(),
            category: role.category.clone(),
            skills: role.skills.clone(),
            pay: role.pay_range.clone(),
            deadline: role.deadline,
            workstream: role.workstream.clone(),
            tags: role.tags.clone(),
            media_url: role.media_url.clone(),
            client_name: client_name.to_string(),
            location: role.location.clone(),
            accepting_applicants: role.status_id == lifecycle::STATUS_LIVE,
        }
    }

    /// SHA-256 over the serialized payload, hex-encoded. Field order is
    /// fixed by the struct definition, so equal listings hash equally.
    pub fn payload_hash(&self) -> String {
        let bytes = serde_json::to_vec(self).expect("BeamListing serialization cannot fail");
        let digest = Sha256::digest(&bytes);
        digest.iter().map(|b| format!("{b:02x}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crewcall_core::lifecycle::{STATUS_FILLED, STATUS_LIVE};

    fn sample_role(status_id: i16) -> Role {
        let now = chrono::Utc::now();
        Role {
            id: 1,
            client_id: 2,
            operator_id: None,
            category: "web_dev".into(),
            workstream: "creative".into(),
            title: "Rebuild storefront landing page".into(),
            description: "Replace the legacy landing page.".into(),
            skills: vec!["html".into()],
            pay_range: "$500-$1000".into(),
            deadline: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            location: Some("Remote".into()),
            visibility: "public".into(),
            tags: vec!["storefront".into()],
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
    fn live_role_accepts_applicants() {
        let listing = BeamListing::from_role(&sample_role(STATUS_LIVE), "Acme");
        assert!(listing.accepting_applicants);
        assert_eq!(listing.client_name, "Acme");
        assert_eq!(listing.pay, "$500-$1000");
    }

    #[test]
    fn filled_role_stops_accepting_applicants() {
        let listing = BeamListing::from_role(&sample_role(STATUS_FILLED), "Acme");
        assert!(!listing.accepting_applicants);
    }

    #[test]
    fn equal_listings_hash_equally() {
        let a = BeamListing::from_role(&sample_role(STATUS_LIVE), "Acme");
        let b = BeamListing::from_role(&sample_role(STATUS_LIVE), "Acme");
        assert_eq!(a.payload_hash(), b.payload_hash());
    }

    #[test]
    fn material_change_changes_hash() {
        let a = BeamListing::from_role(&sample_role(STATUS_LIVE), "Acme");
        let mut role = sample_role(STATUS_LIVE);
        role.title = "New title".into();
        let b = BeamListing::from_role(&role, "Acme");
        assert_ne!(a.payload_hash(), b.payload_hash());
    }

    #[test]
    fn fill_transition_changes_hash() {
        // Filling flips accepting_applicants, which must re-trigger a sync.
        let live = BeamListing::from_role(&sample_role(STATUS_LIVE), "Acme");
        let filled = BeamListing::from_role(&sample_role(STATUS_FILLED), "Acme");
        assert_ne!(live.payload_hash(), filled.payload_hash());
    }

    #[test]
    fn hash_is_hex_sha256() {
        let listing = BeamListing::from_role(&sample_role(STATUS_LIVE), "Acme");
        let hash = listing.payload_hash();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
