//! Press release styles: the fixed presets offered to the operator, and draft previews.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Characters kept in a preview when the draft has no paragraph break.
const PREVIEW_CHARS: usize = 200;

/// Style preset applied to the press release prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Formal,
    Creative,
    #[default]
    Professional,
}

impl Style {
    /// All styles in presentation order.
    pub const ALL: [Style; 3] = [Style::Formal, Style::Creative, Style::Professional];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Formal => "formal",
            Style::Creative => "creative",
            Style::Professional => "professional",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Style::Formal => "Formal",
            Style::Creative => "Creative",
            Style::Professional => "Professional",
        }
    }

    /// Case-insensitive lookup by style name.
    pub fn from_name(name: &str) -> Option<Style> {
        let name = name.trim();
        Style::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated press release variant, held only while the operator picks a style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDraft {
    pub style: Style,
    pub full_text: String,
    pub preview: String,
}

impl StyleDraft {
    pub fn new(style: Style, full_text: String) -> Self {
        let preview = preview_of(&full_text);
        Self {
            style,
            full_text,
            preview,
        }
    }
}

/// First paragraph when the text has a blank line, otherwise the first 200 characters plus `...`.
pub fn preview_of(text: &str) -> String {
    match text.split_once("\n\n") {
        Some((first, _)) => first.to_string(),
        None => {
            let head: String = text.chars().take(PREVIEW_CHARS).collect();
            format!("{head}...")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_are_presented_formal_creative_professional() {
        assert_eq!(
            Style::ALL.map(|s| s.as_str()),
            ["formal", "creative", "professional"]
        );
    }

    #[test]
    fn test_default_style_is_professional() {
        assert_eq!(Style::default(), Style::Professional);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Style::from_name("Formal"), Some(Style::Formal));
        assert_eq!(Style::from_name("CREATIVE "), Some(Style::Creative));
        assert_eq!(Style::from_name("casual"), None);
    }

    #[test]
    fn test_preview_uses_first_paragraph() {
        let text = "Headline\nSubhead\n\nBody paragraph.\n\nMore.";
        assert_eq!(preview_of(text), "Headline\nSubhead");
    }

    #[test]
    fn test_preview_truncates_without_paragraph_break() {
        let text = "x".repeat(250);
        let preview = preview_of(&text);
        assert_eq!(preview.len(), 203);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_of_short_text_still_gets_ellipsis() {
        assert_eq!(preview_of("Short."), "Short....");
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let text = "é".repeat(201);
        let preview = preview_of(&text);
        assert_eq!(preview.chars().count(), 203);
    }

    #[test]
    fn test_style_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Style::Creative).unwrap(),
            r#""creative""#
        );
    }
}
