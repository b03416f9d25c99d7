//! GitHub profile picture check.
//!
//! The username comes from the greeting GitHub's SSH endpoint prints on a
//! successful `ssh -T`. The profile JSON gives the avatar URL, and the
//! avatar's `Content-Length` tells a real photo from a generated identicon.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_LENGTH;
use reqwest::Url;
use serde::Deserialize;

use crate::error::{OnboardError, Result};
use crate::shell::display_command;

use super::{CheckOutcome, Probe, ProbeContext};

static RE_SSH_GREETING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Hi (?P<nickname>.*)! You've successfully authenticated").unwrap()
});

/// Extract the GitHub username from `ssh -T git@github.com` output.
pub fn extract_github_username(output: &str) -> Option<String> {
    RE_SSH_GREETING
        .captures(output)
        .and_then(|caps| caps.name("nickname"))
        .map(|m| m.as_str().to_string())
}

/// Reject URLs the HTTP client cannot fetch: unparsable, relative, or not HTTP(S).
pub fn ensure_http_url(url: &str) -> Result<Url> {
    let unsupported = || OnboardError::UnsupportedScheme {
        url: url.to_string(),
    };
    let parsed = Url::parse(url).map_err(|_| unsupported())?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(unsupported()),
    }
}

/// The part of a GitHub user profile the check needs.
#[derive(Debug, Deserialize)]
struct UserProfile {
    avatar_url: Option<String>,
}

/// Minimal blocking client for the GitHub REST API.
pub struct GithubClient {
    client: Client,
    api_base: String,
}

impl GithubClient {
    /// Create a client with the default 30-second timeout.
    pub fn new(api_base: &str) -> Result<Self> {
        Self::with_timeout(api_base, Duration::from_secs(30))
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(api_base: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("onboard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Look up a user's avatar URL.
    ///
    /// The response status is not checked: an unknown user returns a JSON
    /// error document without `avatar_url`, which is reported the same way
    /// as an unusable URL.
    pub fn avatar_url(&self, username: &str) -> Result<String> {
        let url = ensure_http_url(&format!("{}/users/{}", self.api_base, username))?;
        tracing::debug!("GET {}", url);

        let body = self.client.get(url).send()?.text()?;
        let profile: UserProfile = serde_json::from_str(&body)?;
        profile
            .avatar_url
            .ok_or_else(|| OnboardError::UnsupportedScheme { url: String::new() })
    }

    /// Fetch `url` and return its declared `Content-Length`, 0 when absent.
    pub fn content_length(&self, url: &str) -> Result<u64> {
        let url = ensure_http_url(url)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let length = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0);
        tracing::debug!("Avatar Content-Length: {}", length);
        Ok(length)
    }
}

/// Passes when the operator's GitHub avatar is at least `minimum_size` bytes.
#[derive(Debug, Clone)]
pub struct AvatarProbe {
    ssh_host: String,
    api_base: String,
    minimum_size: u64,
}

impl AvatarProbe {
    pub fn new(ssh_host: &str, api_base: &str, minimum_size: u64) -> Self {
        Self {
            ssh_host: ssh_host.to_string(),
            api_base: api_base.to_string(),
            minimum_size,
        }
    }

    /// Judge an avatar size.
    pub fn evaluate(&self, content_length: u64) -> CheckOutcome {
        CheckOutcome::from_bool(
            content_length >= self.minimum_size,
            "Thanks for uploading a GitHub profile picture 📸",
            "You don't have any profile picture set.\nIt's important, go to github.com/settings/profile and upload a picture *right now*.",
        )
    }
}

impl Probe for AvatarProbe {
    fn label(&self) -> &str {
        "GitHub profile picture"
    }

    fn run(&self, ctx: &mut ProbeContext<'_>) -> Result<CheckOutcome> {
        let args = ["-T", self.ssh_host.as_str()];
        let output = ctx.commands.run("ssh", &args)?.combined();
        let username =
            extract_github_username(&output).ok_or_else(|| OnboardError::UnexpectedOutput {
                command: display_command("ssh", &args),
                output: output.trim().to_string(),
            })?;

        ctx.ui.message(&format!(
            "Your username on GitHub is {}, checking your profile picture now...",
            username
        ));

        let client = GithubClient::new(&self.api_base)?;
        let avatar_url = client.avatar_url(&username)?;
        let size = client.content_length(&avatar_url)?;
        Ok(self.evaluate(size))
    }
}
