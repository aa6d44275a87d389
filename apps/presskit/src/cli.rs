use clap::builder::PossibleValuesParser;
use clap::Parser;

use crate::render::OutputFormat;

/// Automatic press kit generation and quality review
#[derive(Parser, Debug)]
#[command(name = "presskit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format for the press kit
    #[arg(
        short = 'f',
        long,
        default_value = "markdown",
        value_parser = PossibleValuesParser::new(OutputFormat::NAMES)
    )]
    pub output_format: String,
}
