//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use onboard::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("email_match", "y");
//!
//! ui.check_started("shell");
//! ui.check_passed("Your default shell is zsh");
//! assert_eq!(ui.prompt(&Prompt::new("email_match", "?")).unwrap(), "y");
//!
//! assert!(ui.has_passed("zsh"));
//! assert_eq!(ui.lines(), ["Checking shell...", "[OK] Your default shell is zsh"]);
//! ```

use std::collections::HashMap;

use crate::error::{OnboardError, Result};

use super::{Prompt, UserInterface, OUTRO_FAILURE, OUTRO_SUCCESS, SKIP_NOTICE};

/// Mock UI implementation for testing.
///
/// Besides per-kind buffers, every printed line is recorded in order in
/// [`MockUI::lines`] with the same text the plain terminal would print.
#[derive(Debug, Default)]
pub struct MockUI {
    lines: Vec<String>,
    messages: Vec<String>,
    started: Vec<String>,
    passed: Vec<String>,
    failed: Vec<String>,
    skipped: Vec<String>,
    outros: Vec<bool>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Every line printed, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Labels of every check that was started.
    pub fn started(&self) -> &[String] {
        &self.started
    }

    /// Messages of passed checks.
    pub fn passed(&self) -> &[String] {
        &self.passed
    }

    /// Messages of failed checks.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    /// Reasons of skipped checks.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Verdicts passed to `show_outro`.
    pub fn outros(&self) -> &[bool] {
        &self.outros
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a passed check mentioned `msg`.
    pub fn has_passed(&self, msg: &str) -> bool {
        self.passed.iter().any(|m| m.contains(msg))
    }

    /// Check if a failed check mentioned `msg`.
    pub fn has_failed(&self, msg: &str) -> bool {
        self.failed.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }

    fn check_started(&mut self, label: &str) {
        self.lines.push(format!("Checking {}...", label));
        self.started.push(label.to_string());
    }

    fn check_passed(&mut self, msg: &str) {
        self.lines.push(format!("[OK] {}", msg));
        self.passed.push(msg.to_string());
    }

    fn check_failed(&mut self, msg: &str) {
        self.lines.push(format!("[KO] {}", msg));
        self.failed.push(msg.to_string());
    }

    fn check_skipped(&mut self, reason: &str) {
        self.lines.push(SKIP_NOTICE.to_string());
        self.skipped.push(reason.to_string());
    }

    fn show_outro(&mut self, all_good: bool) {
        self.lines.push(String::new());
        self.lines.push(if all_good { OUTRO_SUCCESS } else { OUTRO_FAILURE }.to_string());
        self.outros.push(all_good);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());
        self.prompt_responses
            .get(&prompt.key)
            .cloned()
            .ok_or_else(|| OnboardError::MissingInput {
                key: prompt.key.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_lines_in_order() {
        let mut ui = MockUI::new();
        ui.check_started("git version");
        ui.check_failed("outdated");
        ui.show_outro(false);

        assert_eq!(
            ui.lines(),
            ["Checking git version...", "[KO] outdated", "", OUTRO_FAILURE]
        );
        assert_eq!(ui.outros(), [false]);
    }

    #[test]
    fn unanswered_prompt_is_missing_input() {
        let mut ui = MockUI::new();
        let result = ui.prompt(&Prompt::new("email_match", "?"));
        assert!(matches!(result, Err(OnboardError::MissingInput { .. })));
        assert_eq!(ui.prompts_shown(), ["email_match"]);
    }

    #[test]
    fn skip_prints_notice_and_keeps_reason() {
        let mut ui = MockUI::new();
        ui.check_skipped("Unsupported URL scheme");
        assert_eq!(ui.lines(), [SKIP_NOTICE]);
        assert_eq!(ui.skipped(), ["Unsupported URL scheme"]);
    }
}
