//! Check runner.
//!
//! The `CheckRunner` runs one labeled probe at a time, reports its outcome
//! immediately, and folds it into the [`Verdict`].

use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::outcome::{CheckOutcome, Verdict};
use super::{Probe, ProbeContext};

/// What to do when a probe fails with an error other than an unsupported URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Propagate the error and stop the run. Remaining probes and the
    /// outro are not shown.
    #[default]
    Abort,
    /// Report the error as a failed check and move on to the next probe.
    KeepGoing,
}

/// Runs checks and accumulates the verdict.
#[derive(Debug, Default)]
pub struct CheckRunner {
    policy: FailurePolicy,
    verdict: Verdict,
}

impl CheckRunner {
    /// Create a runner with a fresh, all-good verdict.
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            policy,
            verdict: Verdict::new(),
        }
    }

    /// The verdict so far.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Run one labeled check.
    ///
    /// Prints `Checking {label}...`, then the outcome line. Passed and failed
    /// outcomes update the verdict. A skipped outcome, or an
    /// [`UnsupportedScheme`](crate::OnboardError::UnsupportedScheme) error,
    /// prints the skip notice and leaves the verdict alone. Any other error
    /// is returned under [`FailurePolicy::Abort`], or reported as a failed
    /// check under [`FailurePolicy::KeepGoing`].
    pub fn run_check<F>(
        &mut self,
        label: &str,
        ui: &mut dyn UserInterface,
        probe: F,
    ) -> Result<CheckOutcome>
    where
        F: FnOnce(&mut dyn UserInterface) -> Result<CheckOutcome>,
    {
        ui.check_started(label);

        let outcome = match probe(ui) {
            Ok(outcome) => outcome,
            Err(e) if e.is_skip() => CheckOutcome::Skipped(e.to_string()),
            Err(e) => match self.policy {
                FailurePolicy::Abort => {
                    tracing::debug!("Check '{}' aborted the run: {}", label, e);
                    return Err(e);
                }
                FailurePolicy::KeepGoing => CheckOutcome::Failed(e.to_string()),
            },
        };

        tracing::debug!("Check '{}' -> {:?}", label, outcome);
        self.verdict.record(&outcome);

        match &outcome {
            CheckOutcome::Passed(msg) => ui.check_passed(msg),
            CheckOutcome::Failed(msg) => ui.check_failed(msg),
            CheckOutcome::Skipped(reason) => ui.check_skipped(reason),
        }

        Ok(outcome)
    }

    /// Run a [`Probe`] under its own label.
    pub fn run_probe(
        &mut self,
        probe: &dyn Probe,
        commands: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CheckOutcome> {
        self.run_check(probe.label(), ui, |ui| {
            let mut ctx = ProbeContext { commands, ui };
            probe.run(&mut ctx)
        })
    }

    /// Run every probe in order and return the final verdict.
    ///
    /// Stops at the first propagated error.
    pub fn run_all(
        &mut self,
        probes: &[Box<dyn Probe>],
        commands: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<Verdict> {
        for probe in probes {
            self.run_probe(probe.as_ref(), commands, ui)?;
        }
        Ok(self.verdict)
    }
}
