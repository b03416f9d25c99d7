//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Bootstrap, checks, and outro for one invocation

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{run, run_checks, RunResult};
