use crate::render::{Block, Document};

/// Renders the document as Markdown. Pure: equal input gives equal output.
pub fn render_markdown(doc: &Document) -> String {
    let mut out = String::new();

    for block in &doc.blocks {
        match block {
            Block::Title(heading) => {
                out.push_str(&format!("# {}\n\n", heading.compose(false)));
            }
            Block::Heading(heading) => {
                out.push_str(&format!("## {}\n", heading.compose(false)));
            }
            Block::Subheading(heading) => {
                out.push_str(&format!("### {}\n", heading.compose(false)));
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
                    out.push_str(&format!("- {}: {}/10\n", row.label, row.score));
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
