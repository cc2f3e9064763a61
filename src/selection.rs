use anyhow::{Context, Result};
use inquire::Text;
use std::io::{BufRead, IsTerminal, Write};

/// Trait for providing interactive input
/// This allows us to abstract away the interactive prompts for testing
pub trait SelectionProvider {
    /// Get a line of text input from the user
    ///
    /// # Errors
    /// Returns an error if the input process fails or user cancels
    fn get_text_input(&self, prompt: &str) -> Result<String>;
}

/// Real implementation: `inquire` on a terminal, a plain line read otherwise
pub struct RealSelectionProvider;

impl SelectionProvider for RealSelectionProvider {
    fn get_text_input(&self, prompt: &str) -> Result<String> {
        if std::io::stdin().is_terminal() {
            return Ok(Text::new(prompt).prompt()?);
        }

        print!("{} ", prompt);
        std::io::stdout().flush()?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read selection from stdin")?;
        Ok(line.trim().to_string())
    }
}

/// Mock implementation for testing that returns a predetermined value
pub struct MockSelectionProvider {
    pub response: String,
}

impl MockSelectionProvider {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl SelectionProvider for MockSelectionProvider {
    fn get_text_input(&self, _prompt: &str) -> Result<String> {
        Ok(self.response.clone())
    }
}

/// Resolves a numeric answer against `count` listed choices.
///
/// Returns `None` for anything that is not an in-range index.
#[must_use]
pub fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    answer.trim().parse::<usize>().ok().filter(|i| *i < count)
}
