use super::{CombinedStatus, Deployment, DeploymentRequest, PullRequest};
use log::debug;
use reqwest::{
    blocking::{Client, RequestBuilder},
    header::{self, HeaderMap, HeaderValue, InvalidHeaderValue},
    StatusCode,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = "comment-deploy";
const DEFAULT_ACCEPT: &str = "application/vnd.github.v3+json";
// draft and mergeable_state are only exposed through these previews
const PULL_REQUEST_ACCEPT: &str =
    "application/vnd.github.shadow-cat-preview+json, application/vnd.github.sailor-v-preview+json";
const DEPLOYMENT_ACCEPT: &str = "application/vnd.github.ant-man-preview+json";
const REACTION_ACCEPT: &str = "application/vnd.github.squirrel-girl-preview+json";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GitHub API responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("Couldn't decode GitHub API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("GitHub token is not a valid header value")]
    InvalidToken(#[from] InvalidHeaderValue),
}

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: &str, token: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(header::ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(GithubClient {
            client,
            api_url: api_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn pull_request(&self, url: &str) -> Result<PullRequest, ApiError> {
        self.send(
            self.client
                .get(url)
                .header(header::ACCEPT, PULL_REQUEST_ACCEPT),
        )
    }

    pub fn combined_status(&self, repo: &str, sha: &str) -> Result<CombinedStatus, ApiError> {
        let url = format!("{}/repos/{}/commits/{}/status", self.api_url, repo, sha);
        self.send(self.client.get(&url))
    }

    pub fn create_deployment(
        &self,
        repo: &str,
        request: &DeploymentRequest,
    ) -> Result<Deployment, ApiError> {
        let url = format!("{}/repos/{}/deployments", self.api_url, repo);
        debug!("Creating deployment with URL {}", url);
        self.send(
            self.client
                .post(&url)
                .header(header::ACCEPT, DEPLOYMENT_ACCEPT)
                .json(request),
        )
    }

    pub fn add_reaction(&self, comment_url: &str, content: &str) -> Result<(), ApiError> {
        let url = format!("{}/reactions", comment_url);
        let _: IgnoredAny = self.send(
            self.client
                .post(&url)
                .header(header::ACCEPT, REACTION_ACCEPT)
                .json(&json!({ "content": content })),
        )?;
        Ok(())
    }

    pub fn post_comment(&self, comments_url: &str, body: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.send(
            self.client
                .post(comments_url)
                .json(&json!({ "body": body })),
        )?;
        Ok(())
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        debug!("Response: {}", body);

        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
