// Output formatting: one document model, three renderers, one writer.
// Every renderer walks the same block sequence, so section order lives only in `build_document`.

pub mod font_metrics;
pub mod markdown;
pub mod output;
pub mod pdf;
pub mod text;

use serde::Serialize;

use crate::generation::GeneratedContent;
use crate::models::PressKitData;
use crate::review::ReviewResult;

pub use output::{save_output, OutputFormat};

/// A heading made of a fixed label and an optional operator-supplied subject,
/// e.g. `Press Release` + `New Product`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingText {
    pub label: &'static str,
    pub subject: Option<String>,
}

impl HeadingText {
    fn plain(label: &'static str) -> Self {
        Self {
            label,
            subject: None,
        }
    }

    fn with_subject(label: &'static str, subject: &str) -> Self {
        Self {
            label,
            subject: Some(subject.to_string()),
        }
    }

    /// `label: subject`, or just the label. `upper` upper-cases the label only.
    pub fn compose(&self, upper: bool) -> String {
        let label = if upper {
            self.label.to_uppercase()
        } else {
            self.label.to_string()
        };
        match &self.subject {
            Some(subject) => format!("{label}: {subject}"),
            None => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub label: &'static str,
    pub score: i64,
}

/// One typed unit of the rendered press kit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Title(HeadingText),
    Heading(HeadingText),
    Subheading(HeadingText),
    /// Free text; blank lines separate paragraphs.
    Body(String),
    List(Vec<String>),
    Scores(Vec<ScoreRow>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// Lays out the press kit in its fixed section order.
pub fn build_document(
    data: &PressKitData,
    content: &GeneratedContent,
    review: &ReviewResult,
) -> Document {
    let mut blocks = vec![
        Block::Title(HeadingText::with_subject("Press Kit", &data.company_info.name)),
        Block::Heading(HeadingText::with_subject(
            "Press Release",
            &data.press_kit_info.topic,
        )),
        Block::Body(content.press_release.clone()),
        Block::Heading(HeadingText::plain("Company Overview")),
        Block::Body(content.company_overview.clone()),
        Block::Heading(HeadingText::plain("PR Message")),
        Block::Body(content.pr_message.clone()),
        Block::Heading(HeadingText::plain("Email Draft")),
        Block::Body(content.email_draft.clone()),
    ];

    if data.has_supplementary_data() {
        blocks.push(Block::Heading(HeadingText::plain("Supplementary Materials")));
        blocks.push(Block::List(
            data.supplementary_data
                .iter()
                .map(|item| format!("{} (Source: {})", item.title, item.source))
                .collect(),
        ));
    }

    blocks.push(Block::Heading(HeadingText::plain("Quality Review Summary")));
    blocks.push(Block::Scores(
        review
            .scores
            .iter()
            .map(|(category, score)| ScoreRow {
                label: category.display_name(),
                score: *score,
            })
            .collect(),
    ));
    blocks.push(Block::Subheading(HeadingText::plain("Overall Feedback")));
    blocks.push(Block::Body(review.overall_feedback.clone()));

    Document { blocks }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{content, data, review};
    use super::*;

    fn heading_labels(doc: &Document) -> Vec<&'static str> {
        doc.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Title(h) | Block::Heading(h) | Block::Subheading(h) => Some(h.label),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_section_order_with_supplementary_data() {
        let doc = build_document(&data(true), &content(), &review());
        assert_eq!(
            heading_labels(&doc),
            vec![
                "Press Kit",
                "Press Release",
                "Company Overview",
                "PR Message",
                "Email Draft",
                "Supplementary Materials",
                "Quality Review Summary",
                "Overall Feedback",
            ]
        );
    }

    #[test]
    fn test_supplementary_section_omitted_when_empty() {
        let doc = build_document(&data(false), &content(), &review());
        assert!(!heading_labels(&doc).contains(&"Supplementary Materials"));
        assert!(!doc.blocks.iter().any(|b| matches!(b, Block::List(_))));
    }

    #[test]
    fn test_scores_follow_category_order() {
        let doc = build_document(&data(false), &content(), &review());
        let rows = doc
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Scores(rows) => Some(rows.clone()),
                _ => None,
            })
            .unwrap();
        let pairs: Vec<(&str, i64)> = rows.iter().map(|r| (r.label, r.score)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Content Consistency", 8),
                ("Writing Style and Tone", 9),
                ("Layout and Structure", 6),
                ("SEO Optimization", 7),
            ]
        );
    }

    #[test]
    fn test_heading_compose_upper_cases_label_only() {
        let heading = HeadingText::with_subject("Press Kit", "Acme");
        assert_eq!(heading.compose(false), "Press Kit: Acme");
        assert_eq!(heading.compose(true), "PRESS KIT: Acme");
    }
}
