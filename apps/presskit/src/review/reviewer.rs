use tracing::{debug, info};

use crate::console::{confirm, Console};
use crate::errors::AppError;
use crate::generation::GeneratedContent;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::TextGenerator;
use crate::review::prompts::REVIEW_PROMPT_TEMPLATE;
use crate::review::{ReviewCategory, ReviewResult};

/// Asks the provider to score the generated kit and parses its reply.
///
/// Only the provider call can fail; parse problems fall back to defaults.
pub async fn review_press_kit(
    console: &mut dyn Console,
    llm: &dyn TextGenerator,
    content: &GeneratedContent,
) -> Result<ReviewResult, AppError> {
    console.say("\n[Quality Review Phase]\n");

    let prompt = build_review_prompt(content);
    let reply = llm.generate(&prompt).await?;
    let review = ReviewResult::from_reply(reply);

    info!(
        content_consistency = review.score(ReviewCategory::ContentConsistency),
        writing_style = review.score(ReviewCategory::WritingStyle),
        layout = review.score(ReviewCategory::Layout),
        seo = review.score(ReviewCategory::Seo),
        "Quality review parsed"
    );
    debug!(reply_chars = review.full_review.len(), "Raw review reply kept");
    Ok(review)
}

fn build_review_prompt(content: &GeneratedContent) -> String {
    fill_template(
        REVIEW_PROMPT_TEMPLATE,
        &[
            ("press_release", content.press_release.as_str()),
            ("company_overview", content.company_overview.as_str()),
            ("pr_message", content.pr_message.as_str()),
            ("email_draft", content.email_draft.as_str()),
        ],
    )
}

/// Prints the scores and feedback, then asks whether the operator wants modifications.
pub async fn display_review_report(
    console: &mut dyn Console,
    review: &ReviewResult,
) -> Result<bool, AppError> {
    console.say("\n[Quality Review Report]\n");
    for (category, score) in &review.scores {
        console.say(&format!("{}: {score}/10", category.display_name()));
    }

    console.say("\nOverall Feedback:");
    console.say(&review.overall_feedback);

    confirm(
        console,
        "\nWould you like to request modifications based on this feedback? (Y/N): ",
    )
    .await
}
