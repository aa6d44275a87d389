//! Press kit generation: style drafts, operator selection, then the remaining documents.
//!
//! Flow: three style drafts → operator picks one (or asks for changes, which
//! regenerates all three once) → company overview → PR message → email draft.
//! Every call is one sequential round trip through `TextGenerator`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::console::Console;
use crate::errors::AppError;
use crate::generation::prompts::{
    COMPANY_OVERVIEW_PROMPT_TEMPLATE, EMAIL_DRAFT_PROMPT_TEMPLATE, PRESS_RELEASE_PROMPT_TEMPLATE,
    PR_MESSAGE_PROMPT_TEMPLATE, REVISION_NOTES_TEMPLATE,
};
use crate::generation::styles::{Style, StyleDraft};
use crate::llm_client::prompts::fill_template;
use crate::llm_client::TextGenerator;
use crate::models::PressKitData;

/// Typed answer that asks for changes instead of a style.
const MODIFICATION_PHRASE: &str = "request modification";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The four generated documents plus the style the operator chose.
/// Built once per run; never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub selected_style: Style,
    pub press_release: String,
    pub company_overview: String,
    pub pr_message: String,
    pub email_draft: String,
}

/// Outcome of the style prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleChoice {
    Selected(StyleDraft),
    ModificationRequested(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Single-document generation
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_press_release(
    llm: &dyn TextGenerator,
    data: &PressKitData,
    style: Style,
    modification_request: Option<&str>,
) -> Result<String, AppError> {
    Ok(llm
        .generate(&build_press_release_prompt(data, style, modification_request))
        .await?)
}

pub async fn generate_company_overview(
    llm: &dyn TextGenerator,
    data: &PressKitData,
) -> Result<String, AppError> {
    let company = &data.company_info;
    let prompt = fill_template(
        COMPANY_OVERVIEW_PROMPT_TEMPLATE,
        &[
            ("company_name", company.name.as_str()),
            ("product", company.product.as_str()),
            ("achievements", company.achievements.as_str()),
            ("brand_attributes", company.brand_attributes.as_str()),
        ],
    );
    Ok(llm.generate(&prompt).await?)
}

pub async fn generate_pr_message(
    llm: &dyn TextGenerator,
    data: &PressKitData,
) -> Result<String, AppError> {
    let prompt = fill_template(PR_MESSAGE_PROMPT_TEMPLATE, &announcement_values(data));
    Ok(llm.generate(&prompt).await?)
}

pub async fn generate_email_draft(
    llm: &dyn TextGenerator,
    data: &PressKitData,
) -> Result<String, AppError> {
    let prompt = fill_template(EMAIL_DRAFT_PROMPT_TEMPLATE, &announcement_values(data));
    Ok(llm.generate(&prompt).await?)
}

fn announcement_values(data: &PressKitData) -> [(&'static str, &str); 4] {
    [
        ("company_name", data.company_info.name.as_str()),
        ("topic", data.press_kit_info.topic.as_str()),
        ("target_media", data.press_kit_info.target_media.as_str()),
        ("tone", data.press_kit_info.tone.as_str()),
    ]
}

fn build_press_release_prompt(
    data: &PressKitData,
    style: Style,
    modification_request: Option<&str>,
) -> String {
    let company = &data.company_info;
    let request = &data.press_kit_info;

    let supplementary = if data.supplementary_data.is_empty() {
        "(none)".to_string()
    } else {
        data.supplementary_data
            .iter()
            .map(|item| format!("- {}", item.title))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let revision_notes = modification_request
        .map(|r| fill_template(REVISION_NOTES_TEMPLATE, &[("request", r)]))
        .unwrap_or_default();

    fill_template(
        PRESS_RELEASE_PROMPT_TEMPLATE,
        &[
            ("company_name", company.name.as_str()),
            ("topic", request.topic.as_str()),
            ("product", company.product.as_str()),
            ("achievements", company.achievements.as_str()),
            ("brand_attributes", company.brand_attributes.as_str()),
            ("target_media", request.target_media.as_str()),
            ("tone", request.tone.as_str()),
            ("style", style.as_str()),
            ("supplementary", supplementary.as_str()),
            ("revision_notes", revision_notes.as_str()),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Style selection
// ────────────────────────────────────────────────────────────────────────────

/// Generates one press release draft per style, one after another.
pub async fn generate_style_options(
    console: &mut dyn Console,
    llm: &dyn TextGenerator,
    data: &PressKitData,
    modification_request: Option<&str>,
) -> Result<Vec<StyleDraft>, AppError> {
    let mut drafts = Vec::with_capacity(Style::ALL.len());
    for style in Style::ALL {
        console.say(&format!("\nGenerating {style} draft..."));
        info!(%style, revised = modification_request.is_some(), "Generating press release draft");
        let text = generate_press_release(llm, data, style, modification_request).await?;
        drafts.push(StyleDraft::new(style, text));
    }
    Ok(drafts)
}

/// Shows the previews and asks for a style.
///
/// With `allow_modification` unset, the modification phrase counts as an invalid answer.
pub async fn present_style_options(
    console: &mut dyn Console,
    drafts: &[StyleDraft],
    allow_modification: bool,
    max_attempts: u32,
) -> Result<StyleChoice, AppError> {
    console.say("\n[Draft Previews]\n");
    for draft in drafts {
        console.say(&format!(
            "[Draft Preview – Style: {}]",
            draft.style.display_name()
        ));
        console.say(&draft.preview);
        console.say("\n");
    }

    let question = if allow_modification {
        "Which style do you prefer? (Enter style name or 'request modification'): "
    } else {
        "Which style do you prefer? (Enter style name): "
    };

    for _ in 0..max_attempts {
        let answer = console.ask(question).await?;

        if answer.trim().eq_ignore_ascii_case(MODIFICATION_PHRASE) {
            if allow_modification {
                let request = console
                    .ask("What modifications would you like to request? ")
                    .await?;
                return Ok(StyleChoice::ModificationRequested(request));
            }
            console.say("Modifications were already applied once. Please choose a style.");
            continue;
        }

        let selected = Style::from_name(&answer)
            .and_then(|style| drafts.iter().find(|d| d.style == style));
        if let Some(draft) = selected {
            return Ok(StyleChoice::Selected(draft.clone()));
        }

        console.say("Invalid selection. Please try again.");
    }

    Err(AppError::AttemptsExhausted {
        step: "style selection",
        attempts: max_attempts,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Full generation
// ────────────────────────────────────────────────────────────────────────────

/// Runs the whole generation stage and returns the finished content.
///
/// A modification request regenerates all three drafts exactly once; only the
/// press release is affected by it.
pub async fn generate_all_content(
    console: &mut dyn Console,
    llm: &dyn TextGenerator,
    data: &PressKitData,
    max_attempts: u32,
) -> Result<GeneratedContent, AppError> {
    let mut modification_request: Option<String> = None;

    let selected = loop {
        let drafts =
            generate_style_options(console, llm, data, modification_request.as_deref()).await?;
        let allow_modification = modification_request.is_none();

        match present_style_options(console, &drafts, allow_modification, max_attempts).await? {
            StyleChoice::Selected(draft) => break draft,
            StyleChoice::ModificationRequested(request) => {
                console.say(&format!("Applying requested modifications: {request}"));
                info!("Operator requested modifications; regenerating drafts");
                modification_request = Some(request);
            }
        }
    };
    info!(style = %selected.style, "Press release style selected");

    let company_overview = generate_company_overview(llm, data).await?;
    let pr_message = generate_pr_message(llm, data).await?;
    let email_draft = generate_email_draft(llm, data).await?;

    Ok(GeneratedContent {
        selected_style: selected.style,
        press_release: selected.full_text,
        company_overview,
        pr_message,
        email_draft,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
