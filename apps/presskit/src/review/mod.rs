// Quality review: one scoring call against the generated kit, parsed best-effort.

pub mod parser;
pub mod prompts;
pub mod reviewer;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use parser::parse_review;
pub use reviewer::{display_review_report, review_press_kit};

/// Substituted for any category whose score line is missing or malformed.
pub const DEFAULT_SCORE: i64 = 7;

/// Substituted when the reply has no usable overall feedback.
pub const DEFAULT_FEEDBACK: &str = "The content is well-written and appropriate for a press kit.";

/// The four fixed review categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewCategory {
    ContentConsistency,
    WritingStyle,
    Layout,
    Seo,
}

impl ReviewCategory {
    pub const ALL: [ReviewCategory; 4] = [
        ReviewCategory::ContentConsistency,
        ReviewCategory::WritingStyle,
        ReviewCategory::Layout,
        ReviewCategory::Seo,
    ];

    /// Stable key used in serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            ReviewCategory::ContentConsistency => "content_consistency",
            ReviewCategory::WritingStyle => "writing_style",
            ReviewCategory::Layout => "layout",
            ReviewCategory::Seo => "seo",
        }
    }

    /// Human-readable name, also the label the reviewer is asked to use.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReviewCategory::ContentConsistency => "Content Consistency",
            ReviewCategory::WritingStyle => "Writing Style and Tone",
            ReviewCategory::Layout => "Layout and Structure",
            ReviewCategory::Seo => "SEO Optimization",
        }
    }

    /// Line trigger in the reviewer's reply, e.g. `SEO Optimization:`.
    pub fn reply_label(&self) -> &'static str {
        match self {
            ReviewCategory::ContentConsistency => "Content Consistency:",
            ReviewCategory::WritingStyle => "Writing Style and Tone:",
            ReviewCategory::Layout => "Layout and Structure:",
            ReviewCategory::Seo => "SEO Optimization:",
        }
    }
}

/// Scores, feedback, and the raw reply they were parsed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewResult {
    /// Always holds all four categories. Scores are not clamped to 0–10.
    pub scores: BTreeMap<ReviewCategory, i64>,
    pub overall_feedback: String,
    pub full_review: String,
}

impl ReviewResult {
    /// Parses a reviewer reply, substituting defaults wherever parsing fails.
    pub fn from_reply(reply: String) -> Self {
        let parsed = parse_review(&reply);
        Self {
            scores: parsed.resolved_scores(),
            overall_feedback: parsed
                .feedback
                .unwrap_or_else(|| DEFAULT_FEEDBACK.to_string()),
            full_review: reply,
        }
    }

    pub fn score(&self, category: ReviewCategory) -> i64 {
        self.scores.get(&category).copied().unwrap_or(DEFAULT_SCORE)
    }
}
