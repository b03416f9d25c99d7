//! Login shell check.

use crate::error::Result;
use crate::shell::login_shell;

use super::{CheckOutcome, Probe, ProbeContext};

/// Passes when `$SHELL` names the expected shell.
#[derive(Debug, Clone)]
pub struct ShellProbe {
    expected: String,
    current: String,
}

impl ShellProbe {
    /// Create a probe for an explicit `$SHELL` value.
    pub fn new(expected: &str, current: &str) -> Self {
        Self {
            expected: expected.to_string(),
            current: current.to_string(),
        }
    }

    /// Create a probe reading the real `$SHELL`.
    pub fn from_env(expected: &str) -> Self {
        Self::new(expected, &login_shell())
    }
}

impl Probe for ShellProbe {
    fn label(&self) -> &str {
        "shell"
    }

    fn run(&self, _ctx: &mut ProbeContext<'_>) -> Result<CheckOutcome> {
        Ok(CheckOutcome::from_bool(
            self.current.contains(&self.expected),
            format!("Your default shell is {}", self.expected),
            format!(
                "Your default shell is {}, but should be {}",
                self.current, self.expected
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockCommandRunner;
    use crate::ui::MockUI;

    fn run(probe: &ShellProbe) -> CheckOutcome {
        let commands = MockCommandRunner::new();
        let mut ui = MockUI::new();
        let mut ctx = ProbeContext {
            commands: &commands,
            ui: &mut ui,
        };
        probe.run(&mut ctx).unwrap()
    }

    #[test]
    fn zsh_passes() {
        let outcome = run(&ShellProbe::new("zsh", "/bin/zsh"));
        assert_eq!(outcome, CheckOutcome::Passed("Your default shell is zsh".into()));
    }

    #[test]
    fn homebrew_zsh_passes() {
        assert!(run(&ShellProbe::new("zsh", "/opt/homebrew/bin/zsh")).is_passed());
    }

    #[test]
    fn bash_fails_naming_current_shell() {
        let outcome = run(&ShellProbe::new("zsh", "/bin/bash"));
        assert_eq!(
            outcome,
            CheckOutcome::Failed("Your default shell is /bin/bash, but should be zsh".into())
        );
    }

    #[test]
    fn unset_shell_fails() {
        assert!(!run(&ShellProbe::new("zsh", "")).is_passed());
    }

    #[test]
    fn runs_no_commands() {
        let commands = MockCommandRunner::new();
        let mut ui = MockUI::new();
        let mut ctx = ProbeContext {
            commands: &commands,
            ui: &mut ui,
        };
        ShellProbe::new("zsh", "/bin/zsh").run(&mut ctx).unwrap();
        assert!(commands.calls().is_empty());
    }
}
