//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, NonInteractiveUI, OnboardTheme, Prompt, UserInterface,
    SKIP_NOTICE,
};

/// Interactive terminal UI implementation.
///
/// The check report goes to stdout; errors go to stderr.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: OnboardTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            OnboardTheme::new()
        } else {
            OnboardTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.error.apply_to(msg)).ok();
    }

    fn check_started(&mut self, label: &str) {
        writeln!(self.term, "Checking {}...", label).ok();
    }

    fn check_passed(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_ok(msg)).ok();
    }

    fn check_failed(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_ko(msg)).ok();
    }

    fn check_skipped(&mut self, reason: &str) {
        writeln!(self.term, "{}", self.theme.format_skipped(SKIP_NOTICE)).ok();
        tracing::debug!("Skipped: {}", reason);
    }

    fn show_outro(&mut self, all_good: bool) {
        writeln!(self.term).ok();
        writeln!(self.term, "{}", self.theme.format_outro(all_good)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.term)
    }
}

/// Create the appropriate UI for the current environment.
pub fn create_ui(interactive: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new())
    } else {
        Box::new(NonInteractiveUI::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::TermTarget;

    #[test]
    fn report_and_errors_use_separate_streams() {
        let ui = TerminalUI::new();
        assert!(matches!(ui.term.target(), TermTarget::Stdout));
        assert!(matches!(ui.err.target(), TermTarget::Stderr));
    }
}
