//! Installed tool check.

use std::path::PathBuf;

use crate::error::Result;
use crate::shell::{parse_system_path, resolve_tool_path};

use super::{CheckOutcome, Probe, ProbeContext};

/// Passes when every listed executable resolves on PATH.
#[derive(Debug, Clone)]
pub struct ToolsProbe {
    tools: Vec<String>,
    path_entries: Vec<PathBuf>,
}

impl ToolsProbe {
    /// Create a probe searching explicit PATH entries.
    pub fn new(tools: &[String], path_entries: Vec<PathBuf>) -> Self {
        Self {
            tools: tools.to_vec(),
            path_entries,
        }
    }

    /// Create a probe searching the system PATH.
    pub fn from_env(tools: &[String]) -> Self {
        Self::new(tools, parse_system_path())
    }

    /// Tools that do not resolve on PATH.
    pub fn missing(&self) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|tool| {
                let found = resolve_tool_path(tool, &self.path_entries);
                tracing::debug!("{} -> {:?}", tool, found);
                found.is_none()
            })
            .map(String::as_str)
            .collect()
    }
}

impl Probe for ToolsProbe {
    fn label(&self) -> &str {
        "ruby gems"
    }

    fn run(&self, _ctx: &mut ProbeContext<'_>) -> Result<CheckOutcome> {
        Ok(CheckOutcome::from_bool(
            self.missing().is_empty(),
            "Everything's fine",
            "Rspec and Rubocop gems aren't there. Did you run the `gem install ...` command?",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockCommandRunner;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    fn tools() -> Vec<String> {
        vec!["rspec".to_string(), "rubocop".to_string()]
    }

    fn run(probe: &ToolsProbe) -> CheckOutcome {
        let commands = MockCommandRunner::new();
        let mut ui = MockUI::new();
        let mut ctx = ProbeContext {
            commands: &commands,
            ui: &mut ui,
        };
        probe.run(&mut ctx).unwrap()
    }

    #[test]
    fn both_tools_present_passes() {
        let temp = TempDir::new().unwrap();
        let gems_bin = temp.path().join("gems/bin");
        let shims = temp.path().join("shims");
        create_fake_binary(&gems_bin.join("rspec"));
        create_fake_binary(&shims.join("rubocop"));

        let probe = ToolsProbe::new(&tools(), vec![gems_bin, shims]);
        assert_eq!(run(&probe), CheckOutcome::Passed("Everything's fine".into()));
    }

    #[test]
    fn one_tool_missing_fails() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("rspec"));

        let probe = ToolsProbe::new(&tools(), vec![bin]);
        assert_eq!(probe.missing(), ["rubocop"]);
        assert!(!run(&probe).is_passed());
    }

    #[test]
    fn empty_path_fails() {
        let probe = ToolsProbe::new(&tools(), vec![]);
        assert_eq!(probe.missing(), ["rspec", "rubocop"]);
        assert!(run(&probe).message().contains("gem install"));
    }
}
