use crate::render::{Block, Document};

/// Renders the document as plain text with upper-cased section labels.
pub fn render_text(doc: &Document) -> String {
    let mut out = String::new();

    for block in &doc.blocks {
        match block {
            Block::Title(heading) => {
                out.push_str(&heading.compose(true));
                out.push_str("\n\n");
            }
            Block::Heading(heading) | Block::Subheading(heading) => {
                out.push_str(&heading.compose(true));
                out.push('\n');
            }
            Block::Body(text) => {
                out.push_str(text.trim_end());
                out.push_str("\n\n");
            }
            Block::List(items) => {
                for item in items {
                    out.push_str(&format!("- {item}\n"));
                }
                out.push('\n');
            }
            Block::Scores(rows) => {
                for row in rows {
                    out.push_str(&format!("{}: {}/10\n", row.label, row.score));
                }
                out.push('\n');
            }
        }
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::build_document;
    use crate::render::fixtures::{content, data, review};

    #[test]
    fn test_text_layout() {
        let doc = build_document(&data(false), &content(), &review());
        let rendered = render_text(&doc);
        assert!(rendered.starts_with("PRESS KIT: Acme\n\nPRESS RELEASE: New Product\nFOR IMMEDIATE RELEASE"));
        assert!(rendered.contains("\nCOMPANY OVERVIEW\nAcme builds things.\n\nPR MESSAGE\n"));
        assert!(rendered.contains("QUALITY REVIEW SUMMARY\nContent Consistency: 8/10\n"));
        assert!(rendered.ends_with("SEO Optimization: 7/10\n\nOVERALL FEEDBACK\nGood kit.\n"));
        assert!(!rendered.contains("SUPPLEMENTARY MATERIALS"));
    }

    #[test]
    fn test_text_is_deterministic() {
        let doc = build_document(&data(true), &content(), &review());
        let first = render_text(&doc);
        assert_eq!(first, render_text(&doc));
        assert!(first.contains("SUPPLEMENTARY MATERIALS\n- Acme wins award (Source: Wire)\n\n"));
    }
}
