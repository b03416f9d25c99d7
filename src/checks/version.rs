//! Tool version checks.
//!
//! A [`VersionProbe`] runs a version command, strips a known label from the
//! output, and compares the result against a required version. The rule is
//! "compatible enough": the major versions must be equal and the actual
//! minor version at least the required one. Patch levels are ignored, and a
//! newer major version fails just like an older one.
//!
//! # Example
//!
//! ```
//! use onboard::checks::VersionTuple;
//!
//! let required: VersionTuple = "14.10".parse().unwrap();
//! assert!(VersionTuple::parse("14.12").unwrap().satisfies(&required));
//! assert!(!VersionTuple::parse("14.9").unwrap().satisfies(&required));
//! assert!(!VersionTuple::parse("15.0").unwrap().satisfies(&required));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{OnboardError, Result};

use super::{CheckOutcome, Probe, ProbeContext};

/// Integer components of a dotted version string (`"14.10"` → `[14, 10]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTuple(Vec<u64>);

impl VersionTuple {
    /// Parse a dotted version string.
    ///
    /// Each component contributes its leading digits, so `"3 (Apple Git-146)"`
    /// reads as `3`. A component with no leading digit, or an empty string,
    /// is an error.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(OnboardError::VersionParse {
                input: input.to_string(),
            });
        }

        trimmed
            .split('.')
            .map(|part| {
                let digits: String = part
                    .trim_start()
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                digits.parse::<u64>().map_err(|_| OnboardError::VersionParse {
                    input: input.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// All components in order.
    pub fn components(&self) -> &[u64] {
        &self.0
    }

    pub fn major(&self) -> u64 {
        self.0[0]
    }

    /// The second component, if the version has one.
    pub fn minor(&self) -> Option<u64> {
        self.0.get(1).copied()
    }

    /// Same major version and at least the required minor version.
    ///
    /// A version without a minor component only satisfies a requirement
    /// that has none either.
    pub fn satisfies(&self, required: &VersionTuple) -> bool {
        if self.major() != required.major() {
            return false;
        }
        match (self.minor(), required.minor()) {
            (Some(actual), Some(wanted)) => actual >= wanted,
            (_, None) => true,
            (None, Some(_)) => false,
        }
    }
}

impl FromStr for VersionTuple {
    type Err = OnboardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Pull a version out of raw command output by deleting every occurrence of `label`.
pub fn parse_version_output(output: &str, label: &str) -> Result<VersionTuple> {
    let cleaned = if label.is_empty() {
        output.to_string()
    } else {
        output.replace(label, "")
    };
    VersionTuple::parse(&cleaned)
}

/// Checks a tool's version against a minimum compatible version.
#[derive(Debug, Clone)]
pub struct VersionProbe {
    label: String,
    name: String,
    program: String,
    args: Vec<String>,
    strip: String,
    required: String,
}

impl VersionProbe {
    /// Create a probe for `name` that runs `program args...`.
    pub fn new(name: &str, program: &str, args: &[&str], strip: &str, required: &str) -> Self {
        Self {
            label: format!("{} version", name),
            name: name.to_string(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            strip: strip.to_string(),
            required: required.to_string(),
        }
    }

    /// `asdf --version` prints `v0.14.0-ccdd47d`.
    pub fn asdf(required: &str) -> Self {
        Self::new("asdf", "asdf", &["--version"], "v", required)
    }

    /// `git --version` prints `git version 2.43.0`.
    pub fn git(required: &str) -> Self {
        Self::new("git", "git", &["--version"], "git version", required)
    }

    /// `node --version` prints `v20.11.1`.
    pub fn node(required: &str) -> Self {
        Self::new("node", "node", &["--version"], "v", required)
    }

    /// `postgres --version` prints `postgres (PostgreSQL) 14.10`.
    pub fn postgres(required: &str) -> Self {
        Self::new("postgres", "postgres", &["--version"], "postgres (PostgreSQL)", required)
    }

    /// Judge already-captured command output.
    pub fn evaluate(&self, output: &str) -> Result<CheckOutcome> {
        let actual = parse_version_output(output, &self.strip)?;
        let required = VersionTuple::parse(&self.required)?;
        tracing::debug!("{} version {} (required {})", self.name, actual, required);

        Ok(CheckOutcome::from_bool(
            actual.satisfies(&required),
            format!("Your default {} version is {}", self.name, actual),
            format!("Your default {} version is outdated: {}", self.name, actual),
        ))
    }
}

impl Probe for VersionProbe {
    fn label(&self) -> &str {
        &self.label
    }

    fn run(&self, ctx: &mut ProbeContext<'_>) -> Result<CheckOutcome> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        let output = ctx.commands.run(&self.program, &args)?;
        self.evaluate(&output.stdout)
    }
}
