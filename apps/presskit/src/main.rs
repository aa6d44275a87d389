mod cli;
mod collector;
mod config;
mod console;
mod errors;
mod generation;
mod llm_client;
mod models;
mod pipeline;
mod render;
mod review;
mod search;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::console::Terminal;
use crate::errors::AppError;
use crate::llm_client::GeminiClient;
use crate::pipeline::{run_until_interrupted, Pipeline};
use crate::search::SerpApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first; a malformed value stops the run here
    let config = Config::from_env()?;

    // Initialize structured logging on stderr so prompts on stdout stay readable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting presskit v{}", env!("CARGO_PKG_VERSION"));

    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    )
    .context("failed to build Gemini client")?;
    info!("LLM client initialized (model: {})", llm.model());

    let search = SerpApiClient::new(
        config.serpapi_api_key.clone(),
        config.serpapi_base_url.clone(),
    )
    .context("failed to build SerpAPI client")?;

    let pipeline = Pipeline {
        llm: &llm,
        search: &search,
        output_dir: &config.output_dir,
        output_format: &cli.output_format,
        max_prompt_attempts: config.max_prompt_attempts,
    };

    println!("\nWelcome to PressKit: Press Kit Generator\n");

    let mut terminal = Terminal::new();
    let outcome = run_until_interrupted(pipeline.run(&mut terminal), tokio::signal::ctrl_c()).await;

    match outcome {
        Ok(Some(path)) => {
            println!("\nPress kit generation complete! File saved at: {}", path.display());
        }
        Ok(None) => {}
        Err(AppError::Interrupted) => println!("\nProcess interrupted by user. Exiting..."),
        Err(e) => {
            tracing::error!(error = %e, "Press kit run failed");
            println!("\nAn error occurred: {e}");
        }
    }

    Ok(())
}
