//! Advisory classification of free-text role descriptions.
//!
//! This is the boundary to the AI-classification collaborator: the trait
//! is the contract, and [`KeywordClassifier`] is the built-in heuristic
//! implementation. Suggestions are advisory only: role creation always
//! takes the caller's explicit category/workstream/skills, and nothing in
//! the lifecycle ever consults this module.

use serde::Serialize;

use crewcall_core::taxonomy::{Category, Workstream};

/// A suggested classification for free-form input text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Suggestion {
    pub category: Option<Category>,
    pub workstream: Option<Workstream>,
    pub skills: Vec<String>,
}

/// The classification collaborator's contract.
pub trait Classifier: Send + Sync {
    /// Suggest category, workstream, and skills for `text`. Must never
    /// fail: an unclassifiable text yields an empty suggestion.
    fn suggest(&self, text: &str) -> Suggestion;
}

/// Keyword-table heuristic classifier.
pub struct KeywordClassifier;

/// (keyword, category) pairs, checked in order; first match wins.
const CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    ("website", Category::WebDev),
    ("web", Category::WebDev),
    ("landing page", Category::WebDev),
    ("logo", Category::Design),
    ("design", Category::Design),
    ("brand", Category::Design),
    ("delivery", Category::Logistics),
    ("warehouse", Category::Logistics),
    ("shipping", Category::Logistics),
    ("packaging", Category::ProductPrep),
    ("assembly", Category::ProductPrep),
    ("store", Category::Retail),
    ("pop-up", Category::Events),
    ("event", Category::Events),
    ("invoice", Category::Finance),
    ("bookkeeping", Category::Finance),
    ("scheduling", Category::Admin),
    ("data entry", Category::Admin),
];

/// (keyword, workstream) pairs, checked in order; first match wins.
const WORKSTREAM_KEYWORDS: &[(&str, Workstream)] = &[
    ("video", Workstream::Media),
    ("photo", Workstream::Media),
    ("social", Workstream::Media),
    ("design", Workstream::Creative),
    ("brand", Workstream::Creative),
    ("copy", Workstream::Creative),
    ("driver", Workstream::Transport),
    ("delivery", Workstream::Transport),
    ("store", Workstream::Retail),
    ("register", Workstream::Retail),
    ("event", Workstream::Events),
    ("booth", Workstream::Events),
    ("invoice", Workstream::Admin),
    ("calendar", Workstream::Admin),
];

/// Skill keywords surfaced verbatim when present in the text.
const SKILL_KEYWORDS: &[&str] = &[
    "html",
    "css",
    "javascript",
    "figma",
    "photoshop",
    "excel",
    "quickbooks",
    "forklift",
    "photography",
    "copywriting",
];

impl Classifier for KeywordClassifier {
    fn suggest(&self, text: &str) -> Suggestion {
        let lowered = text.to_lowercase();

        let category = CATEGORY_KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, category)| *category);

        let workstream = WORKSTREAM_KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, workstream)| *workstream);

        let skills = SKILL_KEYWORDS
            .iter()
            .filter(|keyword| lowered.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect();

        Suggestion {
            category,
            workstream,
            skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn suggests_web_dev_for_website_text() {
        let suggestion =
            KeywordClassifier.suggest("Need a new website landing page with HTML and CSS");
        assert_matches!(suggestion.category, Some(Category::WebDev));
        assert!(suggestion.skills.contains(&"html".to_string()));
        assert!(suggestion.skills.contains(&"css".to_string()));
    }

    #[test]
    fn suggests_transport_for_delivery_text() {
        let suggestion = KeywordClassifier.suggest("Driver needed for weekend delivery runs");
        assert_matches!(suggestion.workstream, Some(Workstream::Transport));
    }

    #[test]
    fn unclassifiable_text_yields_empty_suggestion() {
        let suggestion = KeywordClassifier.suggest("xyzzy");
        assert!(suggestion.category.is_none());
        assert!(suggestion.workstream.is_none());
        assert!(suggestion.skills.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let suggestion = KeywordClassifier.suggest("LOGO refresh for the BRAND");
        assert_eq!(suggestion.category, Some(Category::Design));
        assert_eq!(suggestion.workstream, Some(Workstream::Creative));
    }
}
