//! Git configuration checks.

use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::{is_affirmative, Prompt};

use super::{CheckOutcome, Probe, ProbeContext};

/// Page listing the emails attached to the operator's GitHub account.
pub const GITHUB_EMAILS_URL: &str = "https://github.com/settings/emails";

/// Read a key from the global git config.
///
/// An unset key makes `git config` exit 1 with no output; that reads as an
/// empty value rather than an error.
pub fn global_config(commands: &dyn CommandRunner, key: &str) -> Result<String> {
    let output = commands.run("git", &["config", "--global", key])?;
    Ok(output.stdout.trim_end_matches(['\r', '\n']).to_string())
}

/// Manual attestation that the git email is registered on GitHub.
///
/// Nothing is verified automatically: the operator is shown the configured
/// email and asked to confirm it appears on their GitHub emails page.
#[derive(Debug, Clone, Default)]
pub struct EmailMatchProbe;

impl EmailMatchProbe {
    pub fn new() -> Self {
        Self
    }

    fn prompt() -> Prompt {
        Prompt::new("email_match", "Is that the case? (y/n + <Enter>)")
    }
}

impl Probe for EmailMatchProbe {
    fn label(&self) -> &str {
        "git/Github email matching"
    }

    fn run(&self, ctx: &mut ProbeContext<'_>) -> Result<CheckOutcome> {
        let email = global_config(ctx.commands, "user.email")?;

        ctx.ui.message(&format!(
            "Please go to {} and make sure that",
            GITHUB_EMAILS_URL
        ));
        ctx.ui.message("the following email is listed on that page:");
        ctx.ui.message(&format!("👉  {}", email));

        let answer = ctx.ui.prompt(&Self::prompt())?;

        Ok(CheckOutcome::from_bool(
            is_affirmative(&answer),
            "git email is included in Github emails",
            format!(
                "Add {} to your GitHub account or update your git global settings",
                email
            ),
        ))
    }
}

/// Passes when `core.editor` mentions the expected editor, ignoring case.
#[derive(Debug, Clone)]
pub struct EditorProbe {
    expected: String,
}

impl EditorProbe {
    pub fn new(expected: &str) -> Self {
        Self {
            expected: expected.to_string(),
        }
    }

    fn pass_message(&self, editor: &str) -> String {
        if self.expected.eq_ignore_ascii_case("code") {
            "VS Code is your default git editor".to_string()
        } else {
            format!("`{}` is your default git editor", editor)
        }
    }
}

impl Probe for EditorProbe {
    fn label(&self) -> &str {
        "git editor setup"
    }

    fn run(&self, ctx: &mut ProbeContext<'_>) -> Result<CheckOutcome> {
        let editor = global_config(ctx.commands, "core.editor")?;
        let matches = editor
            .to_lowercase()
            .contains(&self.expected.to_lowercase());

        Ok(CheckOutcome::from_bool(
            matches,
            self.pass_message(&editor),
            format!(
                "Ask Ashkan to check your ~/.gitconfig editor setup. Right now, it's `{}`",
                editor
            ),
        ))
    }
}
