//! Visual theme and styling.

use console::Style;

/// Onboarding checker's visual theme.
#[derive(Debug, Clone)]
pub struct OnboardTheme {
    /// Style for passed checks and the success outro (green).
    pub success: Style,
    /// Style for failed checks and the failure outro (red).
    pub error: Style,
    /// Style for skip notices (dim).
    pub dim: Style,
}

impl Default for OnboardTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a passed check.
    pub fn format_ok(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("[OK] {}", msg)))
    }

    /// Format a failed check.
    pub fn format_ko(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("[KO] {}", msg)))
    }

    /// Format a skip notice.
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(msg))
    }

    /// Format the closing line for a verdict.
    pub fn format_outro(&self, all_good: bool) -> String {
        if all_good {
            format!("{}", self.success.apply_to(super::OUTRO_SUCCESS))
        } else {
            format!("{}", self.error.apply_to(super::OUTRO_FAILURE))
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
