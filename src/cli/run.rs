//! The check run: bootstrap, every probe in order, then the outro.

use anyhow::Context;

use crate::bootstrap::{check_gems, remediation, BootstrapStatus};
use crate::checks::{default_probes, CheckRunner, Probe, Verdict};
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::args::Cli;

/// Result of a complete run.
///
/// A run that reaches the outro exits 0 whatever the verdict; the outro
/// line is the verdict. Only the bootstrap phase chooses a non-zero code.
#[derive(Debug, PartialEq, Eq)]
pub struct RunResult {
    /// Exit code to use.
    pub exit_code: i32,
}

impl RunResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

/// Run the whole checker as configured by the command line.
///
/// An error here means the run was aborted before the outro.
pub fn run(
    cli: &Cli,
    commands: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> anyhow::Result<RunResult> {
    let requirements = cli.requirements();

    if !cli.skip_bootstrap {
        let status = check_gems(commands, &requirements.gems)
            .context("Cannot verify the required gems")?;
        if let BootstrapStatus::MissingGem { first_missing } = status {
            for line in remediation(&first_missing, &requirements.gems) {
                ui.message(&line);
            }
            return Ok(RunResult::failure(1));
        }
    }

    let probes = default_probes(&requirements);
    let mut runner = CheckRunner::new(cli.failure_policy());
    run_checks(&mut runner, &probes, commands, ui)?;

    Ok(RunResult::success())
}

/// Run `probes` in order, then print the outro for the final verdict.
///
/// An error from a probe stops the run before the outro.
pub fn run_checks(
    runner: &mut CheckRunner,
    probes: &[Box<dyn Probe>],
    commands: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<Verdict> {
    let verdict = runner.run_all(probes, commands, ui)?;

    tracing::info!(
        "{} passed, {} failed, {} skipped",
        verdict.passed(),
        verdict.failed(),
        verdict.skipped()
    );
    ui.show_outro(verdict.all_good());
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{
        CheckOutcome, EditorProbe, EmailMatchProbe, FailurePolicy, ProbeContext, ShellProbe,
        VersionProbe,
    };
    use crate::error::OnboardError;
    use crate::shell::{CommandOutput, MockCommandRunner};
    use crate::ui::{MockUI, OUTRO_FAILURE, OUTRO_SUCCESS, SKIP_NOTICE};
    use clap::Parser;

    /// A probe that always fails with an unsupported URL scheme.
    struct UnreachableAvatar;

    impl Probe for UnreachableAvatar {
        fn label(&self) -> &str {
            "GitHub profile picture"
        }

        fn run(&self, _ctx: &mut ProbeContext<'_>) -> Result<CheckOutcome> {
            Err(OnboardError::UnsupportedScheme {
                url: "avatars/1".into(),
            })
        }
    }

    fn workstation() -> MockCommandRunner {
        let mut commands = MockCommandRunner::new();
        commands.set_stdout("git --version", "git version 2.43.0\n");
        commands.set_stdout("postgres --version", "postgres (PostgreSQL) 14.10\n");
        commands.set_stdout("git config --global user.email", "dev@example.com\n");
        commands.set_stdout("git config --global core.editor", "code --wait\n");
        commands
    }

    fn probes() -> Vec<Box<dyn Probe>> {
        vec![
            Box::new(ShellProbe::new("zsh", "/bin/zsh")),
            Box::new(VersionProbe::git("2.0")),
            Box::new(VersionProbe::postgres("14.10")),
            Box::new(EmailMatchProbe::new()),
            Box::new(UnreachableAvatar),
            Box::new(EditorProbe::new("code")),
        ]
    }

    #[test]
    fn all_good_run_prints_success_outro() {
        let commands = workstation();
        let mut ui = MockUI::new();
        ui.set_prompt_response("email_match", "y");
        let mut runner = CheckRunner::new(FailurePolicy::Abort);

        let verdict = run_checks(&mut runner, &probes(), &commands, &mut ui).unwrap();

        assert!(verdict.all_good());
        assert_eq!(verdict.passed(), 5);
        assert_eq!(verdict.skipped(), 1);
        assert_eq!(ui.started().len(), 6);
        assert!(ui.lines().contains(&SKIP_NOTICE.to_string()));
        assert_eq!(ui.lines().last().map(String::as_str), Some(OUTRO_SUCCESS));
    }

    #[test]
    fn answering_no_to_email_prints_apology() {
        let commands = workstation();
        let mut ui = MockUI::new();
        ui.set_prompt_response("email_match", "No");
        let mut runner = CheckRunner::new(FailurePolicy::Abort);

        let verdict = run_checks(&mut runner, &probes(), &commands, &mut ui).unwrap();

        assert!(!verdict.all_good());
        assert_eq!(verdict.failed(), 1);
        assert_eq!(ui.outros(), [false]);
        assert_eq!(ui.lines().last().map(String::as_str), Some(OUTRO_FAILURE));
    }

    #[test]
    fn aborting_error_skips_remaining_checks_and_outro() {
        let mut commands = workstation();
        commands.set_stdout("git --version", "");
        let mut ui = MockUI::new();
        ui.set_prompt_response("email_match", "y");
        let mut runner = CheckRunner::new(FailurePolicy::Abort);

        let result = run_checks(&mut runner, &probes(), &commands, &mut ui);

        assert!(matches!(result, Err(OnboardError::VersionParse { .. })));
        assert_eq!(ui.started(), ["shell", "git version"]);
        assert!(ui.outros().is_empty());
    }

    #[test]
    fn keep_going_finishes_the_run() {
        let mut commands = workstation();
        commands.set_stdout("git --version", "");
        let mut ui = MockUI::new();
        ui.set_prompt_response("email_match", "y");
        let mut runner = CheckRunner::new(FailurePolicy::KeepGoing);

        let verdict = run_checks(&mut runner, &probes(), &commands, &mut ui).unwrap();

        assert!(!verdict.all_good());
        assert_eq!(ui.started().len(), 6);
        assert_eq!(ui.outros(), [false]);
    }

    #[test]
    fn failed_verdict_still_exits_zero() {
        let mut commands = workstation();
        commands.set_stdout("ruby -e print RUBY_VERSION", "3.3.0");
        let mut ui = MockUI::new();
        ui.set_prompt_response("email_match", "No");
        let cli = Cli::parse_from(["onboard", "--skip-bootstrap", "--keep-going"]);

        let result = run(&cli, &commands, &mut ui).unwrap();

        assert_eq!(result, RunResult::success());
        assert!(ui.has_failed("Add dev@example.com to your GitHub account"));
        assert_eq!(ui.lines().last().map(String::as_str), Some(OUTRO_FAILURE));
    }

    #[test]
    fn aborted_run_is_an_error_with_context() {
        let mut commands = MockCommandRunner::new();
        commands.set_output(
            "gem list --local --no-versions",
            CommandOutput::failure(Some(1), "", ""),
        );
        let mut ui = MockUI::new();
        let cli = Cli::parse_from(["onboard"]);

        let err = run(&cli, &commands, &mut ui).unwrap_err();

        assert!(format!("{:#}", err).starts_with("Cannot verify the required gems: "));
        assert!(matches!(
            err.downcast_ref::<OnboardError>(),
            Some(OnboardError::CommandFailed { .. })
        ));
        assert!(ui.outros().is_empty());
    }

    #[test]
    fn missing_gem_stops_before_any_check() {
        let mut commands = MockCommandRunner::new();
        commands.set_stdout("gem list --local --no-versions", "rake\n");
        let mut ui = MockUI::new();
        let cli = Cli::parse_from(["onboard"]);

        let result = run(&cli, &commands, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.started().is_empty());
        assert!(ui.has_message("The gem 'rspec' is missing."));
        assert!(ui.has_message("Then retry this check!"));
    }
}
