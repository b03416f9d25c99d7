//! Ruby version check.
//!
//! Unlike the other runtimes, Ruby must match the required version exactly.
//! On a mismatch the message lists every `ruby` on PATH, which usually shows
//! a system Ruby shadowing the rbenv shim.

use std::path::PathBuf;

use crate::error::Result;
use crate::shell::{parse_system_path, resolve_all_tool_paths};

use super::{CheckOutcome, Probe, ProbeContext};

/// Passes when the default `ruby` reports exactly the required version.
#[derive(Debug, Clone)]
pub struct RubyVersionProbe {
    required: String,
    path_entries: Vec<PathBuf>,
}

impl RubyVersionProbe {
    /// Create a probe searching the system PATH.
    pub fn new(required: &str) -> Self {
        Self::with_path(required, parse_system_path())
    }

    /// Create a probe searching explicit PATH entries.
    pub fn with_path(required: &str, path_entries: Vec<PathBuf>) -> Self {
        Self {
            required: required.to_string(),
            path_entries,
        }
    }

    fn ruby_locations(&self) -> String {
        resolve_all_tool_paths("ruby", &self.path_entries)
            .iter()
            .map(|p| format!("ruby is {}\n", p.display()))
            .collect()
    }
}

impl Probe for RubyVersionProbe {
    fn label(&self) -> &str {
        "ruby version"
    }

    fn run(&self, ctx: &mut ProbeContext<'_>) -> Result<CheckOutcome> {
        let output = ctx.commands.run("ruby", &["-e", "print RUBY_VERSION"])?;
        let actual = output.stdout.trim();
        tracing::debug!("ruby version {} (required {})", actual, self.required);

        if actual == self.required {
            return Ok(CheckOutcome::Passed(format!(
                "Your default ruby version is {}",
                actual
            )));
        }

        Ok(CheckOutcome::Failed(format!(
            "Your default ruby version is {}, but should be {}. Did you run `rbenv global {}`?\n{}---",
            actual,
            self.required,
            self.required,
            self.ruby_locations()
        )))
    }
}
