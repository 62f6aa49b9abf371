//! Role input validation rules.
//!
//! Shared by the create and update paths in the API layer. Rules that
//! involve other entities (operator capacity, lifecycle state) live in
//! [`crate::capacity`] and [`crate::lifecycle`]; this module only checks
//! the shape of caller-supplied fields.

use crate::error::CoreError;
use crate::estimation;
use crate::taxonomy::{Category, Visibility, Workstream};
use crate::types::Deadline;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a role title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a role description.
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Maximum number of skills on a role.
pub const MAX_SKILLS: usize = 20;

/// Maximum number of tags on a role.
pub const MAX_TAGS: usize = 20;

/// Maximum length of a single skill or tag.
pub const MAX_LABEL_LEN: usize = 64;

/// Feedback ratings are 1-5 stars.
pub const MIN_FEEDBACK_RATING: i16 = 1;
pub const MAX_FEEDBACK_RATING: i16 = 5;

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate a role title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must not exceed {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a role description.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "Description must not be empty".to_string(),
        ));
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Description must not exceed {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a skill or tag list: bounded count, bounded length, no empties,
/// no duplicates. `kind` names the list in error messages.
pub fn validate_labels(labels: &[String], kind: &str, max: usize) -> Result<(), CoreError> {
    if labels.len() > max {
        return Err(CoreError::Validation(format!(
            "A role may have at most {max} {kind}"
        )));
    }
    let mut seen = std::collections::HashSet::with_capacity(labels.len());
    for (i, label) in labels.iter().enumerate() {
        if label.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{kind} at index {i} must not be empty"
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(CoreError::Validation(format!(
                "{kind} at index {i} exceeds {MAX_LABEL_LEN} characters"
            )));
        }
        if !seen.insert(label.as_str()) {
            return Err(CoreError::Validation(format!("Duplicate {kind}: \"{label}\"")));
        }
    }
    Ok(())
}

/// Validate a deadline against the current date.
pub fn validate_deadline(deadline: Deadline, today: Deadline) -> Result<(), CoreError> {
    if deadline < today {
        return Err(CoreError::Validation(format!(
            "Deadline {deadline} is in the past"
        )));
    }
    Ok(())
}

/// Validate a completion feedback rating.
pub fn validate_feedback_rating(rating: i16) -> Result<(), CoreError> {
    if (MIN_FEEDBACK_RATING..=MAX_FEEDBACK_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Feedback rating must be between {MIN_FEEDBACK_RATING} and {MAX_FEEDBACK_RATING}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Creation input
// ---------------------------------------------------------------------------

/// Everything `create` requires before a Draft exists. The parsed enums are
/// returned so the caller stores canonical slugs, not whatever casing the
/// request carried.
#[derive(Debug)]
pub struct ValidatedRoleInput {
    pub category: Category,
    pub workstream: Workstream,
    pub visibility: Visibility,
}

/// Validate the full creation input for a role.
///
/// Title, description, category, workstream, pay range, and deadline are
/// all required for a Draft to exist at all. Skills may stay empty while
/// drafting; the publish path requires at least one before the role
/// leaves Draft.
#[allow(clippy::too_many_arguments)]
pub fn validate_create(
    title: &str,
    description: &str,
    category: &str,
    workstream: &str,
    pay_range: &str,
    deadline: Deadline,
    visibility: &str,
    skills: &[String],
    tags: &[String],
    today: Deadline,
) -> Result<ValidatedRoleInput, CoreError> {
    validate_title(title)?;
    validate_description(description)?;
    let category = Category::parse(category)?;
    let workstream = Workstream::parse(workstream)?;
    estimation::parse_pay_range(pay_range)?;
    validate_deadline(deadline, today)?;
    let visibility = Visibility::parse(visibility)?;
    validate_labels(skills, "skills", MAX_SKILLS)?;
    validate_labels(tags, "tags", MAX_TAGS)?;
    Ok(ValidatedRoleInput {
        category,
        workstream,
        visibility,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> Deadline {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_input() -> Result<ValidatedRoleInput, CoreError> {
        validate_create(
            "Rebuild storefront landing page",
            "Replace the legacy landing page with the new brand kit.",
            "web_dev",
            "creative",
            "$500-$1000",
            day(2026, 9, 1),
            "public",
            &["html".to_string(), "css".to_string()],
            &["storefront".to_string()],
            day(2026, 8, 1),
        )
    }

    #[test]
    fn accepts_complete_input() {
        let parsed = valid_input().unwrap();
        assert_eq!(parsed.category, Category::WebDev);
        assert_eq!(parsed.workstream, Workstream::Creative);
        assert_eq!(parsed.visibility, Visibility::Public);
    }

    #[test]
    fn rejects_empty_title() {
        assert!(validate_title("  ").is_err());
    }

    #[test]
    fn rejects_oversized_description() {
        assert!(validate_description(&"d".repeat(MAX_DESCRIPTION_LEN + 1)).is_err());
    }

    #[test]
    fn rejects_unknown_category() {
        let err = validate_create(
            "t",
            "d",
            "surgery",
            "creative",
            "$100",
            day(2026, 9, 1),
            "public",
            &[],
            &[],
            day(2026, 8, 1),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown category"));
    }

    #[test]
    fn rejects_past_deadline() {
        let err = validate_deadline(day(2026, 1, 1), day(2026, 8, 1)).unwrap_err();
        assert!(err.to_string().contains("in the past"));
    }

    #[test]
    fn deadline_today_is_allowed() {
        assert!(validate_deadline(day(2026, 8, 1), day(2026, 8, 1)).is_ok());
    }

    #[test]
    fn rejects_duplicate_skills() {
        let skills = vec!["html".to_string(), "html".to_string()];
        assert!(validate_labels(&skills, "skills", MAX_SKILLS).is_err());
    }

    #[test]
    fn rejects_too_many_tags() {
        let tags: Vec<String> = (0..MAX_TAGS + 1).map(|i| format!("tag{i}")).collect();
        assert!(validate_labels(&tags, "tags", MAX_TAGS).is_err());
    }

    #[test]
    fn feedback_rating_bounds() {
        assert!(validate_feedback_rating(1).is_ok());
        assert!(validate_feedback_rating(5).is_ok());
        assert!(validate_feedback_rating(0).is_err());
        assert!(validate_feedback_rating(6).is_err());
    }
}
