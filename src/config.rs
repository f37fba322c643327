use std::{fmt, path::PathBuf, str::FromStr, time::Duration};
use structopt::StructOpt;
use thiserror::Error;

/// Boolean-like action input: only `true` (in any case) switches it on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toggle(pub bool);

impl FromStr for Toggle {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Toggle(s.eq_ignore_ascii_case("true")))
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "comment-deploy",
    about = "Triggers GitHub deployments from pull request comments"
)]
pub struct Inputs {
    /// Token used to authenticate against the GitHub API
    #[structopt(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// Path of the JSON webhook payload that triggered the run
    #[structopt(long, env = "GITHUB_EVENT_PATH", parse(from_os_str))]
    pub event_path: Option<PathBuf>,
    #[structopt(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,
    #[structopt(long, env = "GITHUB_SERVER_URL", default_value = "https://github.com")]
    pub server_url: String,
    /// Prefix a comment must start with to request a deployment
    #[structopt(long, env = "INPUT_TRIGGER_PHRASE", default_value = "deploy to")]
    pub trigger_phrase: String,
    /// JSON file listing the environments that may be deployed to
    #[structopt(long, env = "INPUT_ENVIRONMENT_VALIDATION_FILE", parse(from_os_str))]
    pub environment_file: Option<PathBuf>,
    #[structopt(long, env = "INPUT_ALLOW_DRAFT_DEPLOY", default_value = "false")]
    pub allow_draft_deploy: Toggle,
    #[structopt(long, env = "INPUT_IGNORE_STATUS_CHECKS", default_value = "false")]
    pub ignore_status_checks: Toggle,
    /// Post feedback comments on the pull request
    #[structopt(long, env = "INPUT_COMMENT", default_value = "true")]
    pub comment: Toggle,
    /// Timeout applied to every GitHub API call, e.g. `30s` or `2m`
    #[structopt(long, env = "INPUT_REQUEST_TIMEOUT", default_value = "30s")]
    pub request_timeout: humantime::Duration,
    /// File where step outputs are recorded
    #[structopt(long, env = "GITHUB_OUTPUT", parse(from_os_str))]
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("Missing GITHUB_TOKEN environment variable. (hint: `env: GITHUB_TOKEN: ${{{{ secrets.GITHUB_TOKEN }}}}`)")]
    MissingToken,
    #[error("Missing GITHUB_EVENT_PATH environment variable, is this running as a GitHub Action?")]
    MissingEventPath,
}

#[derive(Clone, PartialEq)]
pub struct Config {
    pub token: String,
    pub event_path: PathBuf,
    pub api_url: String,
    pub server_url: String,
    pub trigger_phrase: String,
    pub environment_file: Option<PathBuf>,
    pub allow_draft: bool,
    pub ignore_status_checks: bool,
    pub comment: bool,
    pub request_timeout: Duration,
    pub output_file: Option<PathBuf>,
}

impl Inputs {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let token = self
            .token
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let event_path = self
            .event_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ConfigError::MissingEventPath)?;

        Ok(Config {
            token,
            event_path,
            api_url: self.api_url.trim_end_matches('/').to_owned(),
            server_url: self.server_url.trim_end_matches('/').to_owned(),
            trigger_phrase: self.trigger_phrase,
            // unset action inputs arrive as empty strings
            environment_file: self
                .environment_file
                .filter(|path| !path.as_os_str().is_empty()),
            allow_draft: self.allow_draft_deploy.0,
            ignore_status_checks: self.ignore_status_checks.0,
            comment: self.comment.0,
            request_timeout: self.request_timeout.into(),
            output_file: self.output_file.filter(|path| !path.as_os_str().is_empty()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("event_path", &self.event_path)
            .field("api_url", &self.api_url)
            .field("server_url", &self.server_url)
            .field("trigger_phrase", &self.trigger_phrase)
            .field("environment_file", &self.environment_file)
            .field("allow_draft", &self.allow_draft)
            .field("ignore_status_checks", &self.ignore_status_checks)
            .field("comment", &self.comment)
            .field("request_timeout", &self.request_timeout)
            .field("output_file", &self.output_file)
            .finish()
    }
}
