//! Input collection: company facts and press kit topic, each confirmed by the operator.
//!
//! A rejected summary re-asks the whole group. Rounds are capped by
//! `max_attempts`; running out ends the run with `AttemptsExhausted`.

use tracing::info;

use crate::console::{confirm, Console};
use crate::errors::AppError;
use crate::models::{CompanyInfo, PressKitData, PressKitRequest};
use crate::search::{search_supplementary_data, NewsSearch};

const CONFIRM_QUESTION: &str = "\nIs the above information correct? (Y/N): ";

/// Asks for the company fields until the operator confirms the summary.
pub async fn collect_company_info(
    console: &mut dyn Console,
    max_attempts: u32,
) -> Result<CompanyInfo, AppError> {
    console.say("\n[User Input Stage]\n");

    for attempt in 1..=max_attempts {
        let info = CompanyInfo {
            name: console.ask("Company Name: ").await?,
            product: console.ask("Flagship Product/Service: ").await?,
            achievements: console.ask("Major Achievements: ").await?,
            brand_attributes: console.ask("Brand Attributes: ").await?,
        };

        console.say("\nCompany Information Summary:");
        console.say(&format!("Name: {}", info.name));
        console.say(&format!("Product: {}", info.product));
        console.say(&format!("Achievements: {}", info.achievements));
        console.say(&format!("Brand attributes: {}", info.brand_attributes));

        if confirm(console, CONFIRM_QUESTION).await? {
            info!(attempt, "Company information confirmed");
            return Ok(info);
        }
        console.say("Please re-enter the information.");
    }

    Err(AppError::AttemptsExhausted {
        step: "company information",
        attempts: max_attempts,
    })
}

/// Asks for the topic fields until the operator confirms the summary.
pub async fn collect_topic_info(
    console: &mut dyn Console,
    max_attempts: u32,
) -> Result<PressKitRequest, AppError> {
    for attempt in 1..=max_attempts {
        let request = PressKitRequest {
            topic: console.ask("Press Kit Topic: ").await?,
            target_media: console.ask("Target Media: ").await?,
            tone: console
                .ask("Tone (e.g., professional, formal, creative): ")
                .await?,
        };

        console.say("\nPress Kit Information Summary:");
        console.say(&format!("Topic: {}", request.topic));
        console.say(&format!("Target media: {}", request.target_media));
        console.say(&format!("Tone: {}", request.tone));

        if confirm(console, CONFIRM_QUESTION).await? {
            info!(attempt, "Press kit topic confirmed");
            return Ok(request);
        }
        console.say("Please re-enter the information.");
    }

    Err(AppError::AttemptsExhausted {
        step: "press kit topic",
        attempts: max_attempts,
    })
}

/// Company info → topic → supplementary news, in that order.
pub async fn collect_all_data(
    console: &mut dyn Console,
    search: &dyn NewsSearch,
    max_attempts: u32,
) -> Result<PressKitData, AppError> {
    let company_info = collect_company_info(console, max_attempts).await?;
    let press_kit_info = collect_topic_info(console, max_attempts).await?;
    let supplementary_data =
        search_supplementary_data(console, search, &company_info.name, &press_kit_info.topic)
            .await?;

    Ok(PressKitData {
        company_info,
        press_kit_info,
        supplementary_data,
    })
}
