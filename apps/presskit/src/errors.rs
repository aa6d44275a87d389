use thiserror::Error;

use crate::llm_client::LlmError;

/// Pipeline-level error type.
/// Everything that reaches `main` as an `AppError` ends the run with a printed message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Operator aborted the run (Ctrl-C or end of input).
    #[error("Interrupted by operator")]
    Interrupted,

    #[error("No valid answer for {step} after {attempts} attempts")]
    AttemptsExhausted { step: &'static str, attempts: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempts_exhausted_message_names_the_step() {
        let err = AppError::AttemptsExhausted {
            step: "style selection",
            attempts: 5,
        };
        assert_eq!(
            err.to_string(),
            "No valid answer for style selection after 5 attempts"
        );
    }

    #[test]
    fn test_llm_error_converts() {
        let err: AppError = LlmError::EmptyContent.into();
        assert_eq!(err.to_string(), "LLM error: LLM returned empty content");
    }
}
