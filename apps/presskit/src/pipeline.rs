//! End-to-end run: collect → generate → confirm → review → save.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::collector::collect_all_data;
use crate::console::{confirm, Console};
use crate::errors::AppError;
use crate::generation::generate_all_content;
use crate::llm_client::TextGenerator;
use crate::models::PressKitData;
use crate::render::save_output;
use crate::review::{display_review_report, review_press_kit};
use crate::search::NewsSearch;

/// Everything one run needs besides the operator.
pub struct Pipeline<'a> {
    pub llm: &'a dyn TextGenerator,
    pub search: &'a dyn NewsSearch,
    pub output_dir: &'a Path,
    pub output_format: &'a str,
    pub max_prompt_attempts: u32,
}

impl Pipeline<'_> {
    /// Returns the written file, or `None` when the operator cancels at the final confirmation.
    pub async fn run(&self, console: &mut dyn Console) -> Result<Option<PathBuf>, AppError> {
        info!("Collecting press kit inputs");
        let data = collect_all_data(console, self.search, self.max_prompt_attempts).await?;

        info!("Generating press kit content");
        let content = generate_all_content(console, self.llm, &data, self.max_prompt_attempts).await?;
        info!(style = %content.selected_style, "Press kit content ready");

        show_final_structure(console, &data);
        if !confirm(console, "\nDo you confirm this final configuration? (Y/N): ").await? {
            console.say("Process cancelled by user.");
            info!("Run cancelled at final confirmation");
            return Ok(None);
        }

        info!("Reviewing press kit");
        let review = review_press_kit(console, self.llm, &content).await?;
        if display_review_report(console, &review).await? {
            // Post-review edits are not supported; the reviewed content is saved as is.
            console.say("\nModification functionality would be implemented here in a complete solution.");
            console.say("For now, we'll proceed with the current version.");
        }

        let path = save_output(self.output_dir, &data, &content, &review, self.output_format).await?;
        console.say(&format!("\nPress kit saved as {}", path.display()));
        Ok(Some(path))
    }
}

/// Drives `run` until it finishes or `interrupt` fires, whichever comes first.
/// An interrupt drops the run where it stands and reports `Interrupted`.
pub async fn run_until_interrupted<R, I>(run: R, interrupt: I) -> Result<Option<PathBuf>, AppError>
where
    R: Future<Output = Result<Option<PathBuf>, AppError>>,
    I: Future,
{
    tokio::select! {
        result = run => result,
        _ = interrupt => {
            info!("Interrupt received, abandoning run");
            Err(AppError::Interrupted)
        }
    }
}

fn show_final_structure(console: &mut dyn Console, data: &PressKitData) {
    console.say("\n[Final Configuration Confirmation]\n");
    console.say("[Final Structure Preview]");
    console.say("- Press Release (Draft)");
    console.say("- Company Overview");
    console.say("- PR Message");
    console.say("- Email Draft");
    if data.has_supplementary_data() {
        console.say("- Supplementary Materials");
    }
}
