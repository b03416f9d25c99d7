//! Terminal output and operator input.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use onboard::ui::{create_ui, UserInterface};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false);
//! ui.check_started("shell");
//! ui.check_passed("Your default shell is zsh");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, OnboardTheme};

use crate::error::Result;

/// Notice printed when a check cannot run in this environment.
pub const SKIP_NOTICE: &str = "Test not available for now...";

/// Final line when every check passed.
pub const OUTRO_SUCCESS: &str = "🚀  Awesome! Your computer is now ready! Welcome to codesmiths";

/// Final line when at least one check failed.
pub const OUTRO_FAILURE: &str =
    "😥  Bummer! Something's wrong, if you're stuck, ask Ashkan for help.";

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message to the user.
    fn message(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Announce a check: `Checking {label}...`.
    fn check_started(&mut self, label: &str);

    /// Report a passed check: `[OK] {msg}`.
    fn check_passed(&mut self, msg: &str);

    /// Report a failed check: `[KO] {msg}`.
    fn check_failed(&mut self, msg: &str);

    /// Report a check that could not run.
    fn check_skipped(&mut self, reason: &str);

    /// Print the closing block chosen by the final verdict.
    fn show_outro(&mut self, all_good: bool);

    /// Show a prompt and read one line of input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;
}

/// A question to put to the operator.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key, used for `ONBOARD_PROMPT_*` answers.
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    /// Create a prompt.
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }

    /// Environment variable that answers this prompt without reading input.
    pub fn env_key(&self) -> String {
        format!("ONBOARD_PROMPT_{}", self.key.to_uppercase())
    }
}

/// Whether a free-form answer counts as "yes": it contains a `y`, any case.
pub fn is_affirmative(answer: &str) -> bool {
    answer.to_lowercase().contains('y')
}
