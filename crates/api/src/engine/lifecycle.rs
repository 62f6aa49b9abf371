//! Role lifecycle orchestration.
//!
//! Every write here is a single atomic unit: the compare-and-set UPDATE
//! in the repository carries the pre/postcondition, and `claim` wraps the
//! capacity check and the role write in one transaction with the operator
//! row locked. Events are published only after the commit; syndication is
//! triggered in the background and can never roll a transition back.

use std::sync::Arc;

use serde_json::json;

use crewcall_beam::SyncOutcome;
use crewcall_core::error::CoreError;
use crewcall_core::types::DbId;
use crewcall_core::{capacity, estimation, lifecycle, taxonomy};
use crewcall_db::models::role::{CreateRole, Role, UpdateRole};
use crewcall_db::models::status::RoleStatus;
use crewcall_db::repositories::{ClientRepo, OperatorRepo, RoleRepo};
use crewcall_events::bus::event_types;
use crewcall_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Validate and insert a new Draft role.
pub async fn create(state: &AppState, input: &CreateRole) -> AppResult<Role> {
    let visibility = input.visibility.as_deref().unwrap_or("public");
    let today = chrono::Utc::now().date_naive();

    let parsed = crewcall_core::role::validate_create(
        &input.title,
        &input.description,
        &input.category,
        &input.workstream,
        &input.pay_range,
        input.deadline,
        visibility,
        &input.skills,
        &input.tags,
        today,
    )?;

    // Creating a role against a missing client is a validation failure,
    // not a 500 from the foreign key.
    ClientRepo::find_by_id(&state.pool, input.client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: input.client_id,
        }))?;

    let role = RoleRepo::create(
        &state.pool,
        input,
        parsed.category.as_str(),
        parsed.workstream.as_str(),
        parsed.visibility.as_str(),
    )
    .await?;

    publish_event(
        state,
        event_types::ROLE_CREATED,
        &role,
        json!({ "status": "draft" }),
    );
    Ok(role)
}

// ---------------------------------------------------------------------------
// Publish
// ---------------------------------------------------------------------------

/// Draft -> Live. Makes the role eligible for claiming and (if public)
/// kicks off a background BEAM sync.
///
/// Pay range and deadline were validated at creation; skills may still be
/// empty in a Draft, and leaving Draft requires at least one.
pub async fn publish(state: &AppState, role_id: DbId) -> AppResult<Role> {
    let current = RoleRepo::find_by_id(&state.pool, role_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Role",
            id: role_id,
        }))?;
    lifecycle::validate_transition(current.status_id, lifecycle::STATUS_LIVE)?;
    if current.skills.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "At least one skill is required to publish a role".to_string(),
        )));
    }

    let updated =
        RoleRepo::transition(&state.pool, role_id, RoleStatus::Draft, RoleStatus::Live).await?;

    let role = match updated {
        Some(role) => role,
        None => return Err(invalid_or_missing(state, role_id, RoleStatus::Live).await),
    };

    tracing::info!(role_id = role.id, client_id = role.client_id, "Role published");
    publish_event(state, event_types::ROLE_PUBLISHED, &role, json!({}));
    spawn_sync(state, &role);
    Ok(role)
}

// ---------------------------------------------------------------------------
// Claim
// ---------------------------------------------------------------------------

/// Live -> Claimed, binding the operator. The only path that sets
/// `operator_id`.
///
/// Runs as one transaction: the operator row is locked first so two
/// concurrent claims by the same operator serialize their capacity
/// checks, and the role write is a compare-and-set so two concurrent
/// claims on the same role can never both succeed; the loser observes
/// zero rows and fails with `InvalidTransition`, not `CapacityExceeded`.
pub async fn claim(state: &AppState, role_id: DbId, operator_id: DbId) -> AppResult<Role> {
    let mut tx = state.pool.begin().await?;

    let operator = OperatorRepo::lock_with_type(&mut tx, operator_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Operator",
            id: operator_id,
        }))?;

    let role = RoleRepo::find_by_id(&mut *tx, role_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Role",
            id: role_id,
        }))?;

    // Status-machine gate before anything capacity-related.
    lifecycle::validate_transition(role.status_id, lifecycle::STATUS_CLAIMED)?;

    // Availability gate runs before the numeric capacity test.
    let assignments = RoleRepo::active_assignments(&mut *tx, operator_id).await?;
    let committed = super::allocator::committed_hours(&assignments);
    let effective =
        capacity::effective_capacity(operator.base_weekly_hours, operator.capacity_override);
    let requested = estimation::estimated_hours_for(&role.pay_range);
    capacity::check_reservation(
        operator_id,
        operator.status_id,
        effective,
        committed,
        requested,
    )?;

    let claimed = match RoleRepo::claim(&mut tx, role_id, operator_id).await? {
        Some(role) => role,
        None => {
            // Lost the race: someone else moved the role between our read
            // and the compare-and-set.
            tx.rollback().await?;
            return Err(invalid_or_missing(state, role_id, RoleStatus::Claimed).await);
        }
    };

    tx.commit().await?;

    tracing::info!(
        role_id = claimed.id,
        operator_id,
        requested_hours = requested,
        "Role claimed"
    );
    publish_event(
        state,
        event_types::ROLE_CLAIMED,
        &claimed,
        json!({ "operator_id": operator_id, "estimated_hours": requested }),
    );
    Ok(claimed)
}

// ---------------------------------------------------------------------------
// Advance
// ---------------------------------------------------------------------------

/// Strict forward progress: InProgress -> Review -> Completed, one step
/// at a time. Reaching Completed records the completion timestamp; the
/// capacity reservation is released implicitly because the role leaves
/// the active-assignment set in the same write.
pub async fn advance(state: &AppState, role_id: DbId, target: RoleStatus) -> AppResult<Role> {
    let updated = match target {
        RoleStatus::InProgress => {
            // Claimed and Filled are internally equivalent starting points.
            let from_claimed = RoleRepo::transition(
                &state.pool,
                role_id,
                RoleStatus::Claimed,
                RoleStatus::InProgress,
            )
            .await?;
            match from_claimed {
                Some(role) => Some(role),
                None => {
                    RoleRepo::transition(
                        &state.pool,
                        role_id,
                        RoleStatus::Filled,
                        RoleStatus::InProgress,
                    )
                    .await?
                }
            }
        }
        RoleStatus::Review => {
            RoleRepo::transition(&state.pool, role_id, RoleStatus::InProgress, RoleStatus::Review)
                .await?
        }
        RoleStatus::Completed => RoleRepo::complete(&state.pool, role_id).await?,
        other => {
            return Err(AppError::BadRequest(format!(
                "Cannot advance to {:?}; use the dedicated endpoint",
                other
            )))
        }
    };

    let role = match updated {
        Some(role) => role,
        None => return Err(invalid_or_missing(state, role_id, target).await),
    };

    let event_type = if target == RoleStatus::Completed {
        event_types::ROLE_COMPLETED
    } else {
        event_types::ROLE_ADVANCED
    };
    tracing::info!(
        role_id = role.id,
        status = lifecycle::status_name(role.status_id),
        "Role advanced"
    );
    publish_event(
        state,
        event_type,
        &role,
        json!({ "status": lifecycle::status_name(role.status_id) }),
    );
    Ok(role)
}

// ---------------------------------------------------------------------------
// Fill
// ---------------------------------------------------------------------------

/// Live -> Filled: stop routing external applicants while keeping the
/// listing visible. A follow-up background sync pushes the flipped
/// `accepting_applicants` flag to BEAM.
pub async fn fill(state: &AppState, role_id: DbId) -> AppResult<Role> {
    let updated =
        RoleRepo::transition(&state.pool, role_id, RoleStatus::Live, RoleStatus::Filled).await?;

    let role = match updated {
        Some(role) => role,
        None => return Err(invalid_or_missing(state, role_id, RoleStatus::Filled).await),
    };

    publish_event(state, event_types::ROLE_FILLED, &role, json!({}));
    spawn_sync(state, &role);
    Ok(role)
}

// ---------------------------------------------------------------------------
// Cancel
// ---------------------------------------------------------------------------

/// Cancel from any non-terminal state, recording the reason. Held
/// capacity is released the same implicit way completion releases it.
pub async fn cancel(state: &AppState, role_id: DbId, reason: &str) -> AppResult<Role> {
    if reason.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Cancellation reason must not be empty".to_string(),
        )));
    }

    let updated = RoleRepo::cancel(&state.pool, role_id, reason).await?;
    let role = match updated {
        Some(role) => role,
        None => return Err(invalid_or_missing(state, role_id, RoleStatus::Cancelled).await),
    };

    tracing::info!(role_id = role.id, reason, "Role cancelled");
    publish_event(
        state,
        event_types::ROLE_CANCELLED,
        &role,
        json!({ "reason": reason }),
    );
    Ok(role)
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Full-field edit, allowed only while Draft or Live so scope cannot
/// silently change under an operator who already claimed the work.
pub async fn update(state: &AppState, role_id: DbId, patch: &UpdateRole) -> AppResult<Role> {
    let canonical = canonicalize_patch(patch)?;

    let updated = RoleRepo::update(&state.pool, role_id, &canonical).await?;
    match updated {
        Some(role) => Ok(role),
        None => match RoleRepo::find_by_id(&state.pool, role_id).await? {
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "Role",
                id: role_id,
            })),
            Some(current) => Err(AppError::Core(CoreError::InvalidTransition(format!(
                "{} role can no longer be edited",
                lifecycle::status_name(current.status_id)
            )))),
        },
    }
}

/// Validate patch fields and rewrite enum slugs into canonical form.
fn canonicalize_patch(patch: &UpdateRole) -> Result<UpdateRole, CoreError> {
    let mut canonical = UpdateRole {
        category: None,
        workstream: None,
        title: patch.title.clone(),
        description: patch.description.clone(),
        skills: patch.skills.clone(),
        pay_range: patch.pay_range.clone(),
        deadline: patch.deadline,
        location: patch.location.clone(),
        visibility: None,
        tags: patch.tags.clone(),
        media_url: patch.media_url.clone(),
    };

    if let Some(title) = &patch.title {
        crewcall_core::role::validate_title(title)?;
    }
    if let Some(description) = &patch.description {
        crewcall_core::role::validate_description(description)?;
    }
    if let Some(category) = &patch.category {
        canonical.category = Some(taxonomy::Category::parse(category)?.as_str().to_string());
    }
    if let Some(workstream) = &patch.workstream {
        canonical.workstream = Some(taxonomy::Workstream::parse(workstream)?.as_str().to_string());
    }
    if let Some(visibility) = &patch.visibility {
        canonical.visibility = Some(taxonomy::Visibility::parse(visibility)?.as_str().to_string());
    }
    if let Some(pay_range) = &patch.pay_range {
        estimation::parse_pay_range(pay_range)?;
    }
    if let Some(deadline) = patch.deadline {
        crewcall_core::role::validate_deadline(deadline, chrono::Utc::now().date_naive())?;
    }
    if let Some(skills) = &patch.skills {
        crewcall_core::role::validate_labels(skills, "skills", crewcall_core::role::MAX_SKILLS)?;
    }
    if let Some(tags) = &patch.tags {
        crewcall_core::role::validate_labels(tags, "tags", crewcall_core::role::MAX_TAGS)?;
    }

    Ok(canonical)
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Attach rating + comment to a Completed role.
pub async fn feedback(
    state: &AppState,
    role_id: DbId,
    rating: i16,
    comment: Option<&str>,
) -> AppResult<Role> {
    crewcall_core::role::validate_feedback_rating(rating)?;

    let updated = RoleRepo::set_feedback(&state.pool, role_id, rating, comment).await?;
    match updated {
        Some(role) => Ok(role),
        None => match RoleRepo::find_by_id(&state.pool, role_id).await? {
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "Role",
                id: role_id,
            })),
            Some(current) => Err(AppError::Core(CoreError::InvalidTransition(format!(
                "feedback requires a Completed role, not {}",
                lifecycle::status_name(current.status_id)
            )))),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A compare-and-set write matched zero rows: distinguish "role missing"
/// from "role in the wrong state" for the error response.
async fn invalid_or_missing(state: &AppState, role_id: DbId, to: RoleStatus) -> AppError {
    match RoleRepo::find_by_id(&state.pool, role_id).await {
        Ok(Some(current)) => AppError::Core(CoreError::InvalidTransition(format!(
            "{} -> {}",
            lifecycle::status_name(current.status_id),
            lifecycle::status_name(to.id())
        ))),
        Ok(None) => AppError::Core(CoreError::NotFound {
            entity: "Role",
            id: role_id,
        }),
        Err(err) => AppError::Database(err),
    }
}

/// Publish a lifecycle event. Subscribers (persistence, notifications)
/// run out-of-band; this never blocks or fails the transition.
fn publish_event(state: &AppState, event_type: &str, role: &Role, payload: serde_json::Value) {
    state.event_bus.publish(
        PlatformEvent::new(event_type)
            .with_source("role", role.id)
            .with_actor(role.client_id)
            .with_payload(payload),
    );
}

/// Kick off a background BEAM sync for a public role. Failure is logged
/// and reported through `role.synced` never arriving; the lifecycle
/// state committed above is not touched.
fn spawn_sync(state: &AppState, role: &Role) {
    if role.visibility != taxonomy::Visibility::Public.as_str() {
        return;
    }
    let beam = Arc::clone(&state.beam);
    let bus = Arc::clone(&state.event_bus);
    let pool = state.pool.clone();
    let role_id = role.id;
    tokio::spawn(async move {
        match beam.sync_role(&pool, role_id).await {
            Ok(SyncOutcome::Synced { beam_ref }) => {
                bus.publish(
                    PlatformEvent::new(event_types::ROLE_SYNCED)
                        .with_source("role", role_id)
                        .with_payload(json!({ "beam_ref": beam_ref })),
                );
            }
            Ok(SyncOutcome::Unchanged { .. }) => {}
            Err(err) => {
                tracing::warn!(
                    role_id,
                    error = %err,
                    "Background BEAM sync failed; role state is unaffected"
                );
            }
        }
    });
}
