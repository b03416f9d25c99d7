//! Canned command runner for testing.
//!
//! # Example
//!
//! ```
//! use onboard::shell::{CommandRunner, MockCommandRunner};
//!
//! let mut commands = MockCommandRunner::new();
//! commands.set_stdout("node --version", "v20.11.1\n");
//!
//! let output = commands.run("node", &["--version"]).unwrap();
//! assert_eq!(output.stdout, "v20.11.1\n");
//! assert!(commands.run("asdf", &["--version"]).is_err());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{OnboardError, Result};

use super::command::{display_command, CommandOutput, CommandRunner};

/// [`CommandRunner`] that answers from a table keyed by the full command line.
///
/// Commands with no configured answer behave like a missing executable.
#[derive(Debug, Default)]
pub struct MockCommandRunner {
    outputs: HashMap<String, CommandOutput>,
    calls: RefCell<Vec<String>>,
}

impl MockCommandRunner {
    /// Create an empty runner where every command is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with a full [`CommandOutput`].
    pub fn set_output(&mut self, command: &str, output: CommandOutput) {
        self.outputs.insert(command.to_string(), output);
    }

    /// Answer `command` with a successful run printing `stdout`.
    pub fn set_stdout(&mut self, command: &str, stdout: &str) {
        self.set_output(command, CommandOutput::success(stdout));
    }

    /// Every command line that was run, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let command = display_command(program, args);
        self.calls.borrow_mut().push(command.clone());
        self.outputs
            .get(&command)
            .cloned()
            .ok_or(OnboardError::CommandNotFound { command })
    }
}
