use crate::github::GithubClient;
use anyhow::Result;
use log::{debug, error, info};

/// Human readable outcome of a deployment request.
#[derive(Debug, PartialEq)]
pub enum Feedback {
    Success(String),
    Failure(String),
}

impl Feedback {
    pub fn message(&self) -> &str {
        match self {
            Feedback::Success(message) | Feedback::Failure(message) => message,
        }
    }

    fn log(&self) {
        match self {
            Feedback::Success(message) => info!("{}", message),
            Feedback::Failure(message) => error!("{}", message),
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, comments_url: &str, feedback: &Feedback) -> Result<()>;
}

/// Only writes feedback to the run log.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, _comments_url: &str, feedback: &Feedback) -> Result<()> {
        feedback.log();
        Ok(())
    }
}

/// Writes feedback to the run log and posts it on the pull request.
pub struct CommentNotifier {
    client: GithubClient,
}

impl CommentNotifier {
    pub fn new(client: GithubClient) -> Self {
        CommentNotifier { client }
    }
}

impl Notifier for CommentNotifier {
    fn notify(&mut self, comments_url: &str, feedback: &Feedback) -> Result<()> {
        debug!("Add comment to {}", comments_url);
        feedback.log();
        self.client.post_comment(comments_url, feedback.message())?;
        Ok(())
    }
}

pub fn notifier(comment: bool, client: &GithubClient) -> Box<dyn Notifier> {
    if comment {
        Box::new(CommentNotifier::new(client.clone()))
    } else {
        Box::new(ConsoleNotifier)
    }
}
