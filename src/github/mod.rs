use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

mod client;

pub use client::{ApiError, GithubClient};

/// The `issue_comment` webhook payload. The comment is kept undecoded until
/// the event is known to be an issue comment, since other events (e.g.
/// `discussion_comment`) carry a `comment` of a different shape.
#[derive(Debug, PartialEq, Deserialize)]
pub struct IssueCommentEvent {
    pub action: Option<String>,
    pub issue: Option<Issue>,
    pub comment: Option<serde_json::Value>,
}

impl IssueCommentEvent {
    pub fn from_file<T: AsRef<Path>>(path: T) -> anyhow::Result<IssueCommentEvent> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let event: IssueCommentEvent = serde_json::from_reader(reader)?;
        Ok(event)
    }
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct Issue {
    pub pull_request: Option<PullRequestLink>,
}

/// Present on issues that are pull requests.
#[derive(Debug, PartialEq, Deserialize)]
pub struct PullRequestLink {
    pub url: String,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct Comment {
    pub body: String,
    pub url: String,
    pub user: User,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub state: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub merged: bool,
    pub merged_by: Option<User>,
    #[serde(default)]
    pub mergeable_state: String,
    pub head: Head,
    pub comments_url: String,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct Head {
    pub sha: String,
    pub repo: Repository,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct Repository {
    pub full_name: String,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct CombinedStatus {
    pub state: String,
    #[serde(default)]
    pub statuses: Vec<Status>,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct Status {
    pub context: String,
    pub state: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DeploymentRequest<'a> {
    #[serde(rename = "ref")]
    pub git_ref: &'a str,
    pub environment: &'a str,
    pub description: &'a str,
    pub transient_environment: bool,
    pub production_environment: bool,
    /// An empty list tells GitHub not to verify any status contexts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_contexts: Option<Vec<String>>,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct Deployment {
    pub id: u64,
    pub url: String,
}
