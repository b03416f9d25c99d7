//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Every flag can also be set
//! through an `ONBOARD_*` environment variable. Flags under the
//! "Requirements" heading override one default of [`Requirements`].

use clap::Parser;

use crate::checks::FailurePolicy;
use crate::requirements::{Requirements, DEFAULT_GITHUB_API};

/// Check that a developer workstation is ready for onboarding.
#[derive(Debug, Parser)]
#[command(name = "onboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, env = "ONBOARD_NO_COLOR")]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, env = "ONBOARD_DEBUG")]
    pub debug: bool,

    /// Plain output; answer questions from ONBOARD_PROMPT_* variables or stdin
    #[arg(long, env = "ONBOARD_NON_INTERACTIVE")]
    pub non_interactive: bool,

    /// Report a check that errors out as failed and continue with the rest
    #[arg(long, env = "ONBOARD_KEEP_GOING")]
    pub keep_going: bool,

    /// Do not verify the required gems before running checks
    #[arg(long, env = "ONBOARD_SKIP_BOOTSTRAP")]
    pub skip_bootstrap: bool,

    /// GitHub API base URL
    #[arg(long, env = "ONBOARD_GITHUB_API", default_value = DEFAULT_GITHUB_API, hide = true)]
    pub github_api: String,

    /// Text the login shell path must contain [default: zsh]
    #[arg(long, env = "ONBOARD_SHELL", value_name = "NAME", help_heading = "Requirements")]
    pub shell: Option<String>,

    /// Exact Ruby version [default: 3.3.0]
    #[arg(long, env = "ONBOARD_RUBY_VERSION", value_name = "VERSION", help_heading = "Requirements")]
    pub ruby_version: Option<String>,

    /// Minimum asdf version, same major [default: 0.14.0]
    #[arg(long, env = "ONBOARD_ASDF_VERSION", value_name = "VERSION", help_heading = "Requirements")]
    pub asdf_version: Option<String>,

    /// Minimum git version, same major [default: 2.0]
    #[arg(long, env = "ONBOARD_GIT_VERSION", value_name = "VERSION", help_heading = "Requirements")]
    pub git_version: Option<String>,

    /// Minimum node version, same major [default: 20.9.0]
    #[arg(long, env = "ONBOARD_NODE_VERSION", value_name = "VERSION", help_heading = "Requirements")]
    pub node_version: Option<String>,

    /// Minimum postgres version, same major [default: 14.10]
    #[arg(long, env = "ONBOARD_POSTGRES_VERSION", value_name = "VERSION", help_heading = "Requirements")]
    pub postgres_version: Option<String>,

    /// Text the git editor setting must contain [default: code]
    #[arg(long, env = "ONBOARD_EDITOR", value_name = "NAME", help_heading = "Requirements")]
    pub editor: Option<String>,

    /// Executables that must be on PATH [default: rspec,rubocop]
    #[arg(long, env = "ONBOARD_TOOLS", value_name = "LIST", value_delimiter = ',', help_heading = "Requirements")]
    pub tools: Option<Vec<String>>,

    /// Gems that must be installed before any check runs
    #[arg(long, env = "ONBOARD_GEMS", value_name = "LIST", value_delimiter = ',', help_heading = "Requirements")]
    pub gems: Option<Vec<String>>,

    /// Smallest avatar, in bytes, that counts as a real picture [default: 2048]
    #[arg(long, env = "ONBOARD_MIN_AVATAR_SIZE", value_name = "BYTES", help_heading = "Requirements")]
    pub min_avatar_size: Option<u64>,
}

impl Cli {
    /// Failure policy selected by `--keep-going`.
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::Abort
        }
    }

    /// The default requirements with every override from the command line applied.
    pub fn requirements(&self) -> Requirements {
        let mut req = Requirements::default().with_github_api(&self.github_api);

        let versions = [
            (&self.shell, &mut req.shell),
            (&self.ruby_version, &mut req.ruby),
            (&self.asdf_version, &mut req.asdf),
            (&self.git_version, &mut req.git),
            (&self.node_version, &mut req.node),
            (&self.postgres_version, &mut req.postgres),
            (&self.editor, &mut req.editor),
        ];
        for (arg, field) in versions {
            if let Some(value) = arg {
                *field = value.clone();
            }
        }
        if let Some(tools) = &self.tools {
            req.tools = tools.clone();
        }
        if let Some(gems) = &self.gems {
            req.gems = gems.clone();
        }
        if let Some(size) = self.min_avatar_size {
            req.minimum_avatar_size = size;
        }
        req
    }
}
