//! What a ready workstation looks like.
//!
//! There are no configuration files: these defaults are the onboarding
//! standard, and the CLI can override the GitHub endpoint for testing.

/// Default GitHub REST API base URL.
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";

/// Default SSH destination used to discover the GitHub username.
pub const DEFAULT_GITHUB_SSH_HOST: &str = "git@github.com";

/// Smallest avatar (in bytes) that counts as an uploaded picture.
///
/// GitHub's generated identicons are smaller than this.
pub const MINIMUM_AVATAR_SIZE: u64 = 2 * 1024;

/// Required versions, tools, and thresholds for a ready workstation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirements {
    /// Substring expected in `$SHELL`.
    pub shell: String,
    /// Exact Ruby version.
    pub ruby: String,
    pub asdf: String,
    pub git: String,
    pub node: String,
    pub postgres: String,
    /// Case-insensitive substring expected in `git config core.editor`.
    pub editor: String,
    /// Executables that must resolve on PATH.
    pub tools: Vec<String>,
    /// Gems the bootstrap phase requires before any check runs.
    pub gems: Vec<String>,
    pub minimum_avatar_size: u64,
    pub github_ssh_host: String,
    pub github_api: String,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            shell: "zsh".to_string(),
            ruby: "3.3.0".to_string(),
            asdf: "0.14.0".to_string(),
            git: "2.0".to_string(),
            node: "20.9.0".to_string(),
            postgres: "14.10".to_string(),
            editor: "code".to_string(),
            tools: vec!["rspec".to_string(), "rubocop".to_string()],
            gems: ["rake", "rspec", "rubocop-performance", "pry-byebug", "colored", "http"]
                .iter()
                .map(|g| g.to_string())
                .collect(),
            minimum_avatar_size: MINIMUM_AVATAR_SIZE,
            github_ssh_host: DEFAULT_GITHUB_SSH_HOST.to_string(),
            github_api: DEFAULT_GITHUB_API.to_string(),
        }
    }
}

impl Requirements {
    /// Point the profile picture check at another API base URL.
    pub fn with_github_api(mut self, api: &str) -> Self {
        self.github_api = api.trim_end_matches('/').to_string();
        self
    }
}
