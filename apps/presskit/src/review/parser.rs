//! Review reply parser: a two-state line machine over the reviewer's free text.
//!
//! `Scores`: a line containing a category label yields that category's outcome
//! (first matching label wins, later lines override earlier ones).
//! `Feedback`: entered at the `Overall Feedback:` line; every following line
//! belongs to the feedback and parsing ends.

use std::collections::BTreeMap;

use tracing::warn;

use crate::review::{ReviewCategory, DEFAULT_SCORE};

const FEEDBACK_LABEL: &str = "Overall Feedback:";

/// What the parser found for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    Parsed(i64),
    Missing,
    Malformed,
}

impl ScoreOutcome {
    pub fn resolve(&self) -> i64 {
        match self {
            ScoreOutcome::Parsed(score) => *score,
            ScoreOutcome::Missing | ScoreOutcome::Malformed => DEFAULT_SCORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReview {
    pub outcomes: BTreeMap<ReviewCategory, ScoreOutcome>,
    /// Trimmed text after the feedback label; `None` when absent or blank.
    pub feedback: Option<String>,
}

impl ParsedReview {
    /// Scores for all four categories with the default applied to failures.
    pub fn resolved_scores(&self) -> BTreeMap<ReviewCategory, i64> {
        ReviewCategory::ALL
            .iter()
            .map(|category| {
                let outcome = self
                    .outcomes
                    .get(category)
                    .copied()
                    .unwrap_or(ScoreOutcome::Missing);
                if !matches!(outcome, ScoreOutcome::Parsed(_)) {
                    warn!(
                        category = category.key(),
                        ?outcome,
                        "Review score unavailable, using default {}",
                        DEFAULT_SCORE
                    );
                }
                (*category, outcome.resolve())
            })
            .collect()
    }
}

enum ParseState {
    Scores,
    Feedback,
}

pub fn parse_review(reply: &str) -> ParsedReview {
    let mut outcomes: BTreeMap<ReviewCategory, ScoreOutcome> = ReviewCategory::ALL
        .iter()
        .map(|c| (*c, ScoreOutcome::Missing))
        .collect();
    let mut feedback_lines: Vec<&str> = Vec::new();
    let mut state = ParseState::Scores;

    for line in reply.lines() {
        match state {
            ParseState::Scores => {
                if let Some((category, rest)) = match_category(line) {
                    outcomes.insert(category, parse_score(rest));
                } else if line.contains(FEEDBACK_LABEL) {
                    state = ParseState::Feedback;
                }
            }
            ParseState::Feedback => feedback_lines.push(line),
        }
    }

    let feedback = feedback_lines.join("\n").trim().to_string();
    ParsedReview {
        outcomes,
        feedback: (!feedback.is_empty()).then_some(feedback),
    }
}

/// Finds the first category label on the line and returns the text after it.
fn match_category(line: &str) -> Option<(ReviewCategory, &str)> {
    ReviewCategory::ALL.iter().find_map(|category| {
        let label = category.reply_label();
        line.find(label)
            .map(|idx| (*category, &line[idx + label.len()..]))
    })
}

/// Reads `<score>/10`; markdown emphasis around the number is ignored.
fn parse_score(rest: &str) -> ScoreOutcome {
    let raw = rest.split('/').next().unwrap_or_default();
    let raw = raw.trim().trim_matches('*').trim();
    match raw.parse::<i64>() {
        Ok(score) => ScoreOutcome::Parsed(score),
        Err(_) => ScoreOutcome::Malformed,
    }
}
