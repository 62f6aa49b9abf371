//! Closed classification enums for roles.
//!
//! Category and workstream are orthogonal axes used for filtering and
//! routing. Both are modeled as closed tagged variants so invalid values
//! are rejected at the boundary instead of leaking into queries.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The kind of work a role asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    WebDev,
    Design,
    Admin,
    Logistics,
    ProductPrep,
    Retail,
    Events,
    Finance,
}

/// All categories, in display order.
pub const ALL_CATEGORIES: [Category; 8] = [
    Category::WebDev,
    Category::Design,
    Category::Admin,
    Category::Logistics,
    Category::ProductPrep,
    Category::Retail,
    Category::Events,
    Category::Finance,
];

impl Category {
    /// The stable slug stored in the database and used in query filters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebDev => "web_dev",
            Self::Design => "design",
            Self::Admin => "admin",
            Self::Logistics => "logistics",
            Self::ProductPrep => "product_prep",
            Self::Retail => "retail",
            Self::Events => "events",
            Self::Finance => "finance",
        }
    }

    /// Parse a slug, rejecting anything outside the closed set.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        ALL_CATEGORIES
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| CoreError::Validation(format!("Unknown category: \"{value}\"")))
    }
}

// ---------------------------------------------------------------------------
// Workstream
// ---------------------------------------------------------------------------

/// The operational lane a role is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workstream {
    Creative,
    Operations,
    Media,
    Transport,
    Retail,
    Events,
    Admin,
}

/// All workstreams, in display order.
pub const ALL_WORKSTREAMS: [Workstream; 7] = [
    Workstream::Creative,
    Workstream::Operations,
    Workstream::Media,
    Workstream::Transport,
    Workstream::Retail,
    Workstream::Events,
    Workstream::Admin,
];

impl Workstream {
    /// The stable slug stored in the database and used in query filters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Creative => "creative",
            Self::Operations => "operations",
            Self::Media => "media",
            Self::Transport => "transport",
            Self::Retail => "retail",
            Self::Events => "events",
            Self::Admin => "admin",
        }
    }

    /// Parse a slug, rejecting anything outside the closed set.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        ALL_WORKSTREAMS
            .into_iter()
            .find(|w| w.as_str() == value)
            .ok_or_else(|| CoreError::Validation(format!("Unknown workstream: \"{value}\"")))
    }
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Who may see a published role.
///
/// Only `Public` roles are mirrored to BEAM; `Members` roles stay inside
/// the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Members,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Members => "members",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "public" => Ok(Self::Public),
            "members" => Ok(Self::Members),
            other => Err(CoreError::Validation(format!(
                "Unknown visibility: \"{other}\""
            ))),
        }
    }
}
