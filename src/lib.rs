//! onboard - workstation onboarding checker.
//!
//! Runs a fixed sequence of independent checks against a new developer's
//! machine (login shell, runtime and tool versions, git settings, GitHub
//! profile) and prints an `[OK]`/`[KO]` line for each, followed by a single
//! verdict.
//!
//! # Modules
//!
//! - [`bootstrap`] - Required gem verification before any check runs
//! - [`checks`] - Probes, the check runner, and the aggregate verdict
//! - [`cli`] - Command-line interface and the top-level run
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Required versions and thresholds
//! - [`shell`] - External command execution and PATH lookup
//! - [`ui`] - Terminal output and operator prompts
//!
//! # Example
//!
//! ```
//! use onboard::checks::{CheckRunner, FailurePolicy, ShellProbe};
//! use onboard::shell::MockCommandRunner;
//! use onboard::ui::MockUI;
//!
//! let commands = MockCommandRunner::new();
//! let mut ui = MockUI::new();
//! let mut runner = CheckRunner::new(FailurePolicy::Abort);
//!
//! runner
//!     .run_probe(&ShellProbe::new("zsh", "/bin/zsh"), &commands, &mut ui)
//!     .unwrap();
//! assert!(runner.verdict().all_good());
//! assert_eq!(ui.lines(), ["Checking shell...", "[OK] Your default shell is zsh"]);
//! ```

pub mod bootstrap;
pub mod checks;
pub mod cli;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{OnboardError, Result};
