//! Pre-check gem verification.
//!
//! Before any check runs, the required gem set must be installed. When it is
//! not, the checker prints reinstall instructions and stops with exit code 1.

use crate::error::{OnboardError, Result};
use crate::shell::{display_command, CommandRunner};

/// Rails release pinned by the reinstall instructions.
const RAILS_REQUIREMENT: &str = "rails:~>7.0.4";

/// Outcome of the gem verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapStatus {
    /// Every required gem is installed.
    Ready,
    /// At least one gem is missing; `first_missing` is reported to the user.
    MissingGem { first_missing: String },
}

/// Names of locally installed gems, from `gem list --local --no-versions`.
///
/// A missing `gem` executable means no gems at all. A `gem` that runs but
/// exits non-zero is an error.
pub fn installed_gems(commands: &dyn CommandRunner) -> Result<Vec<String>> {
    let args = ["list", "--local", "--no-versions"];
    let output = match commands.run("gem", &args) {
        Ok(output) => output,
        Err(OnboardError::CommandNotFound { command }) => {
            tracing::debug!("`{}` unavailable, treating every gem as missing", command);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };
    if !output.success {
        return Err(OnboardError::CommandFailed {
            command: display_command("gem", &args),
            code: output.exit_code,
        });
    }

    Ok(output
        .stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("***"))
        .map(String::from)
        .collect())
}

/// Verify that every gem in `required` is installed.
pub fn check_gems(commands: &dyn CommandRunner, required: &[String]) -> Result<BootstrapStatus> {
    let installed = installed_gems(commands)?;
    let missing = required.iter().find(|gem| !installed.contains(gem));

    Ok(match missing {
        Some(gem) => BootstrapStatus::MissingGem {
            first_missing: gem.clone(),
        },
        None => BootstrapStatus::Ready,
    })
}

/// Instructions shown when a gem is missing.
pub fn remediation(missing: &str, required: &[String]) -> Vec<String> {
    let gems = required.join(" ");
    vec![
        format!("⚠️  The gem '{}' is missing.", missing),
        format!("1️⃣ Please run `gem uninstall -qxaI {} rails`", gems),
        format!("2️⃣ Then run `gem install {} '{}'`", gems, RAILS_REQUIREMENT),
        "3️⃣ Then retry this check!".to_string(),
    ]
}
