//! Platform and environment detection.

use std::env::VarError;

/// Environment variables set by common CI providers.
const CI_VARIABLES: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key))
}

/// [`is_ci`] with a custom env var lookup (for testing).
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, VarError>,
{
    CI_VARIABLES.iter().any(|key| env_fn(key).is_ok())
}

/// The user's login shell as reported by `$SHELL`, empty when unset.
pub fn login_shell() -> String {
    login_shell_with_env(|key| std::env::var(key))
}

/// [`login_shell`] with a custom env var lookup (for testing).
pub fn login_shell_with_env<F>(env_fn: F) -> String
where
    F: Fn(&str) -> Result<String, VarError>,
{
    env_fn("SHELL").unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn ci_detected_from_any_provider_variable() {
        assert!(is_ci_with_env(lookup(&[("GITHUB_ACTIONS", "true")])));
        assert!(is_ci_with_env(lookup(&[("JENKINS_URL", "http://ci")])));
    }

    #[test]
    fn no_ci_variables_is_not_ci() {
        assert!(!is_ci_with_env(lookup(&[("HOME", "/home/dev")])));
    }

    #[test]
    fn login_shell_reads_shell_variable() {
        assert_eq!(login_shell_with_env(lookup(&[("SHELL", "/bin/zsh")])), "/bin/zsh");
    }

    #[test]
    fn login_shell_is_empty_when_unset() {
        assert_eq!(login_shell_with_env(lookup(&[])), "");
    }
}
