use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::GeneratedContent;
use crate::models::PressKitData;
use crate::render::markdown::render_markdown;
use crate::render::pdf::render_pdf;
use crate::render::text::render_text;
use crate::render::{build_document, Document};
use crate::review::ReviewResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Pdf,
    Text,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["markdown", "pdf", "text"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "markdown" => Some(Self::Markdown),
            "pdf" => Some(Self::Pdf),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// Like `from_name`, but an unknown name falls back to markdown.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            warn!(format = name, "Unsupported output format, falling back to markdown");
            Self::Markdown
        })
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Pdf => "pdf",
            Self::Text => "txt",
        }
    }

    pub fn render(&self, doc: &Document) -> Vec<u8> {
        match self {
            Self::Markdown => render_markdown(doc).into_bytes(),
            Self::Pdf => render_pdf(doc),
            Self::Text => render_text(doc).into_bytes(),
        }
    }
}

/// Company name as a file-name fragment: lowercased, spaces and path separators become `_`.
pub fn slugify(company_name: &str) -> String {
    company_name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}

pub fn output_path(output_dir: &Path, company_name: &str, format: OutputFormat) -> PathBuf {
    output_dir.join(format!(
        "press_kit_{}.{}",
        slugify(company_name),
        format.extension()
    ))
}

/// Renders the press kit in `format` and writes it under `output_dir`,
/// creating the directory and replacing any previous file of the same name.
pub async fn save_output(
    output_dir: &Path,
    data: &PressKitData,
    content: &GeneratedContent,
    review: &ReviewResult,
    format: &str,
) -> Result<PathBuf, AppError> {
    let format = OutputFormat::resolve(format);
    let doc = build_document(data, content, review);
    let bytes = format.render(&doc);

    tokio::fs::create_dir_all(output_dir).await?;
    let path = output_path(output_dir, &data.company_info.name, format);
    tokio::fs::write(&path, &bytes).await?;

    info!(path = %path.display(), bytes = bytes.len(), ?format, "Press kit written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::{content, data, review};

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Acme"), "acme");
        assert_eq!(slugify("Big Corp Ltd"), "big_corp_ltd");
        assert_eq!(slugify("../etc/passwd"), ".._etc_passwd");
        assert_eq!(slugify("A\\B"), "a_b");
    }

    #[test]
    fn test_resolve_falls_back_to_markdown() {
        assert_eq!(OutputFormat::resolve("pdf"), OutputFormat::Pdf);
        assert_eq!(OutputFormat::resolve("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::resolve("docx"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::resolve("PDF"), OutputFormat::Markdown);
    }

    #[tokio::test]
    async fn test_save_markdown_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("output");

        let path = save_output(&dir, &data(false), &content(), &review(), "markdown")
            .await
            .unwrap();

        assert_eq!(path, dir.join("press_kit_acme.md"));
        let written = std::fs::read_to_string(&path).unwrap();
        let doc = build_document(&data(false), &content(), &review());
        assert_eq!(written, render_markdown(&doc));
    }

    #[tokio::test]
    async fn test_unknown_format_writes_markdown_file() {
        let tmp = tempfile::tempdir().unwrap();

        let fallback = save_output(tmp.path(), &data(true), &content(), &review(), "docx")
            .await
            .unwrap();
        assert_eq!(fallback.extension().unwrap(), "md");
        let fallback_bytes = std::fs::read(&fallback).unwrap();

        let markdown = save_output(tmp.path(), &data(true), &content(), &review(), "markdown")
            .await
            .unwrap();
        assert_eq!(fallback, markdown);
        assert_eq!(fallback_bytes, std::fs::read(&markdown).unwrap());
    }

    #[tokio::test]
    async fn test_existing_file_is_overwritten() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("press_kit_acme.txt");
        std::fs::write(&target, "stale content that is much longer than nothing").unwrap();

        let path = save_output(tmp.path(), &data(false), &content(), &review(), "text")
            .await
            .unwrap();

        assert_eq!(path, target);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert_eq!(written, render_text(&build_document(&data(false), &content(), &review())));
    }

    #[tokio::test]
    async fn test_pdf_output_has_pdf_extension_and_header() {
        let tmp = tempfile::tempdir().unwrap();
        let path = save_output(tmp.path(), &data(false), &content(), &review(), "pdf")
            .await
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "press_kit_acme.pdf");
        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_every_format_name_resolves() {
        for name in OutputFormat::NAMES {
            assert!(OutputFormat::from_name(name).is_some());
        }
    }
}
