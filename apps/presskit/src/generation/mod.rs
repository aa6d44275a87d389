// Press kit generation: style drafts, operator selection, and the supporting documents.
// All LLM calls go through llm_client::TextGenerator.

pub mod generator;
pub mod prompts;
pub mod styles;

pub use generator::{generate_all_content, GeneratedContent};
