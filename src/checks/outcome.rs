//! Check outcome and aggregate verdict types.

/// The result of running a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The workstation meets this requirement.
    Passed(String),

    /// The workstation does not meet this requirement.
    Failed(String),

    /// The check could not run here; neither pass nor fail.
    Skipped(String),
}

impl CheckOutcome {
    /// Build a pass or fail outcome from a boolean, picking the matching message.
    pub fn from_bool(passed: bool, pass_msg: impl Into<String>, fail_msg: impl Into<String>) -> Self {
        if passed {
            Self::Passed(pass_msg.into())
        } else {
            Self::Failed(fail_msg.into())
        }
    }

    /// Whether this outcome counts as a pass.
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed(_))
    }

    /// Whether this outcome is ignored by the verdict.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// The message or skip reason.
    pub fn message(&self) -> &str {
        match self {
            Self::Passed(msg) | Self::Failed(msg) | Self::Skipped(msg) => msg,
        }
    }
}

/// Running verdict over every check reported so far.
///
/// Starts out all good; any failed check turns it bad for good.
/// Skipped checks are counted but never change the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    all_good: bool,
    passed: usize,
    failed: usize,
    skipped: usize,
}

impl Default for Verdict {
    fn default() -> Self {
        Self::new()
    }
}

impl Verdict {
    /// A verdict with no checks recorded yet.
    pub fn new() -> Self {
        Self {
            all_good: true,
            passed: 0,
            failed: 0,
            skipped: 0,
        }
    }

    /// Fold one outcome into the verdict.
    pub fn record(&mut self, outcome: &CheckOutcome) {
        match outcome {
            CheckOutcome::Passed(_) => self.passed += 1,
            CheckOutcome::Failed(_) => {
                self.failed += 1;
                self.all_good = false;
            }
            CheckOutcome::Skipped(_) => self.skipped += 1,
        }
    }

    /// True iff no recorded check failed.
    pub fn all_good(&self) -> bool {
        self.all_good
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bool_picks_message() {
        assert_eq!(
            CheckOutcome::from_bool(true, "yes", "no"),
            CheckOutcome::Passed("yes".into())
        );
        assert_eq!(
            CheckOutcome::from_bool(false, "yes", "no"),
            CheckOutcome::Failed("no".into())
        );
    }

    #[test]
    fn new_verdict_is_all_good() {
        let verdict = Verdict::new();
        assert!(verdict.all_good());
        assert_eq!(verdict.passed() + verdict.failed() + verdict.skipped(), 0);
    }

    #[test]
    fn verdict_is_and_of_non_skipped_outcomes() {
        let cases: &[(&[CheckOutcome], bool)] = &[
            (&[CheckOutcome::Passed("a".into())], true),
            (&[CheckOutcome::Skipped("a".into())], true),
            (
                &[
                    CheckOutcome::Passed("a".into()),
                    CheckOutcome::Failed("b".into()),
                    CheckOutcome::Passed("c".into()),
                ],
                false,
            ),
            (
                &[
                    CheckOutcome::Skipped("a".into()),
                    CheckOutcome::Passed("b".into()),
                ],
                true,
            ),
        ];

        for (outcomes, expected) in cases {
            let mut verdict = Verdict::new();
            for outcome in outcomes.iter() {
                verdict.record(outcome);
            }
            assert_eq!(verdict.all_good(), *expected, "outcomes: {:?}", outcomes);
        }
    }

    #[test]
    fn failure_is_sticky() {
        let mut verdict = Verdict::new();
        verdict.record(&CheckOutcome::Failed("x".into()));
        verdict.record(&CheckOutcome::Passed("y".into()));
        assert!(!verdict.all_good());
        assert_eq!(verdict.passed(), 1);
        assert_eq!(verdict.failed(), 1);
    }
}
