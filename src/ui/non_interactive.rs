//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;
use std::io::{self, BufRead};

use crate::error::{OnboardError, Result};

use super::{OnboardTheme, Prompt, UserInterface, SKIP_NOTICE};

/// UI implementation for non-interactive mode.
///
/// Output is never colored. Prompts are answered from `ONBOARD_PROMPT_*`
/// environment variables first, then from one line of standard input.
/// End of input or a blank line is an error.
pub struct NonInteractiveUI {
    theme: OnboardTheme,
    env_overrides: HashMap<String, String>,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        // Collect ONBOARD_PROMPT_* env vars
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("ONBOARD_PROMPT_"))
            .collect();

        Self::with_overrides(env_overrides)
    }

    /// Create with explicit overrides, reading unanswered prompts from stdin.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self::with_input(overrides, io::stdin().lock())
    }

    /// Create with explicit overrides and input (for testing).
    pub fn with_input(overrides: HashMap<String, String>, input: impl BufRead + 'static) -> Self {
        Self {
            theme: OnboardTheme::plain(),
            env_overrides: overrides,
            input: Box::new(input),
        }
    }

    fn read_answer(&mut self, prompt: &Prompt) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        let answer = line.trim();
        if read == 0 || answer.is_empty() {
            return Err(OnboardError::MissingInput {
                key: prompt.key.clone(),
            });
        }
        tracing::debug!("Read answer for '{}' from stdin", prompt.key);
        Ok(answer.to_string())
    }
}

impl Default for NonInteractiveUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn check_started(&mut self, label: &str) {
        println!("Checking {}...", label);
    }

    fn check_passed(&mut self, msg: &str) {
        println!("{}", self.theme.format_ok(msg));
    }

    fn check_failed(&mut self, msg: &str) {
        println!("{}", self.theme.format_ko(msg));
    }

    fn check_skipped(&mut self, reason: &str) {
        println!("{}", SKIP_NOTICE);
        tracing::debug!("Skipped: {}", reason);
    }

    fn show_outro(&mut self, all_good: bool) {
        println!();
        println!("{}", self.theme.format_outro(all_good));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        println!("{}", prompt.question);
        match self.env_overrides.get(&prompt.env_key()) {
            Some(value) => {
                println!("> {}", value);
                Ok(value.clone())
            }
            None => self.read_answer(prompt),
        }
    }
}
