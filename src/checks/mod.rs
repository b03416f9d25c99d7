//! Workstation checks.
//!
//! # Architecture
//!
//! - [`outcome`] - [`CheckOutcome`] and the aggregate [`Verdict`]
//! - [`runner`] - [`CheckRunner`], which reports outcomes and folds the verdict
//! - [`version`] - [`VersionProbe`] and the major/minor compatibility rule
//! - [`shell`], [`ruby`], [`git`], [`github`], [`tools`] - the individual probes
//!
//! [`default_probes`] lists the probes in the order they are run.

pub mod git;
pub mod github;
pub mod outcome;
pub mod ruby;
pub mod runner;
pub mod shell;
pub mod tools;
pub mod version;

pub use git::{EditorProbe, EmailMatchProbe};
pub use github::{extract_github_username, AvatarProbe};
pub use outcome::{CheckOutcome, Verdict};
pub use runner::{CheckRunner, FailurePolicy};
pub use ruby::RubyVersionProbe;
pub use shell::ShellProbe;
pub use tools::ToolsProbe;
pub use version::{VersionProbe, VersionTuple};

use crate::error::Result;
use crate::requirements::Requirements;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// What a probe may touch while it runs.
pub struct ProbeContext<'a> {
    /// Runs external programs.
    pub commands: &'a dyn CommandRunner,
    /// Prints instructions and reads operator answers.
    pub ui: &'a mut dyn UserInterface,
}

/// One independent verification unit.
pub trait Probe {
    /// Label shown as `Checking {label}...`.
    fn label(&self) -> &str;

    /// Inspect the workstation.
    fn run(&self, ctx: &mut ProbeContext<'_>) -> Result<CheckOutcome>;
}

/// Every probe, in the order the checker runs them.
pub fn default_probes(req: &Requirements) -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(ShellProbe::from_env(&req.shell)),
        Box::new(RubyVersionProbe::new(&req.ruby)),
        Box::new(VersionProbe::asdf(&req.asdf)),
        Box::new(VersionProbe::git(&req.git)),
        Box::new(VersionProbe::node(&req.node)),
        Box::new(VersionProbe::postgres(&req.postgres)),
        Box::new(EmailMatchProbe::new()),
        Box::new(AvatarProbe::new(
            &req.github_ssh_host,
            &req.github_api,
            req.minimum_avatar_size,
        )),
        Box::new(EditorProbe::new(&req.editor)),
        Box::new(ToolsProbe::from_env(&req.tools)),
    ]
}
