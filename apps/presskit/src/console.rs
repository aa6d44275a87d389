//! Operator I/O. The pipeline only talks to the operator through `Console`,
//! so every interactive step can run against scripted answers.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::warn;

use crate::errors::AppError;

#[async_trait]
pub trait Console: Send {
    /// Shows `question` and returns the operator's answer without the line terminator.
    async fn ask(&mut self, question: &str) -> Result<String, AppError>;

    /// Shows one line of output.
    fn say(&mut self, line: &str);
}

/// Console bound to the process stdin/stdout.
///
/// Lines are read on a dedicated OS thread and handed over through a channel,
/// so a pending `ask` can be dropped (e.g. on Ctrl-C) without waiting for input.
pub struct Terminal {
    lines: mpsc::UnboundedReceiver<io::Result<String>>,
}

impl Terminal {
    pub fn new() -> Self {
        Self::from_reader(io::BufReader::new(io::stdin()))
    }

    /// Reads lines from any blocking reader. End of input closes the channel.
    pub fn from_reader<R: BufRead + Send + 'static>(mut reader: R) -> Self {
        let (tx, lines) = mpsc::unbounded_channel();
        let spawned = std::thread::Builder::new()
            .name("presskit-stdin".to_string())
            .spawn(move || loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) => {
                        if tx.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(e));
                        break;
                    }
                }
            });
        if let Err(e) = spawned {
            // the sender went down with the closure, so the first `ask` sees end of input
            warn!("Could not start stdin reader: {e}");
        }
        Self { lines }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for Terminal {
    async fn ask(&mut self, question: &str) -> Result<String, AppError> {
        let mut stdout = io::stdout();
        stdout.write_all(question.as_bytes())?;
        stdout.flush()?;

        match self.lines.recv().await {
            Some(line) => Ok(line?.trim_end_matches(['\r', '\n']).to_string()),
            // stdin closed: treat like an operator abort
            None => Err(AppError::Interrupted),
        }
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}

/// True when the answer is an affirmative `Y` (case-insensitive, whitespace ignored).
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Asks a Y/N question and reports whether the operator said yes.
pub async fn confirm(console: &mut dyn Console, question: &str) -> Result<bool, AppError> {
    let answer = console.ask(question).await?;
    Ok(is_affirmative(&answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedConsole;

    #[test]
    fn test_only_y_is_affirmative() {
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("y"));
        assert!(is_affirmative("  y \t"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("N"));
        assert!(!is_affirmative(""));
    }

    #[tokio::test]
    async fn test_confirm_reads_one_answer() {
        let mut console = ScriptedConsole::new(["y", "n"]);
        assert!(confirm(&mut console, "First? ").await.unwrap());
        assert!(!confirm(&mut console, "Second? ").await.unwrap());
        assert_eq!(console.questions(), vec!["First? ", "Second? "]);
    }

    #[tokio::test]
    async fn test_terminal_strips_line_endings_and_ends_on_eof() {
        let mut terminal = Terminal::from_reader(io::Cursor::new("Acme\r\nRockets\n"));
        assert_eq!(terminal.ask("Name: ").await.unwrap(), "Acme");
        assert_eq!(terminal.ask("Product: ").await.unwrap(), "Rockets");
        assert!(matches!(
            terminal.ask("Next: ").await,
            Err(AppError::Interrupted)
        ));
    }

    /// Blocks in `read` until the paired sender is dropped.
    struct StalledInput(std::sync::mpsc::Receiver<()>);

    impl io::Read for StalledInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            let _ = self.0.recv();
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_pending_ask_can_be_abandoned() {
        let (release, stalled) = std::sync::mpsc::channel();
        let mut terminal = Terminal::from_reader(io::BufReader::new(StalledInput(stalled)));

        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            terminal.ask("Company Name: "),
        )
        .await;
        assert!(pending.is_err());

        drop(release);
        assert!(matches!(
            terminal.ask("Company Name: ").await,
            Err(AppError::Interrupted)
        ));
    }
}
