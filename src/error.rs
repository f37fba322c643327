use crate::github::ApiError;
use std::{fmt, io};
use thiserror::Error;

/// A deployment request that the requester can fix: reported back on the PR.
#[derive(Debug, PartialEq, Error)]
#[error("{0}")]
pub struct DeploymentFailure(String);

impl DeploymentFailure {
    pub fn new<S: Into<String>>(message: S) -> Self {
        DeploymentFailure(message.into())
    }
}

/// Reasons for stopping without attempting a deployment.
#[derive(Debug, PartialEq)]
pub enum Skip {
    NotAnIssueComment,
    NotCreated,
    NotPullRequest,
    NoTrigger { author: String, trigger: String },
}

impl Skip {
    pub fn is_error(&self) -> bool {
        matches!(self, Skip::NotAnIssueComment)
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_error() {
            1
        } else {
            0
        }
    }
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::NotAnIssueComment => write!(f, "This event doesn't seem to be an issue comment."),
            Skip::NotCreated => write!(f, "This is not a comment creation, ignoring."),
            Skip::NotPullRequest => write!(f, "This is not a pull request comment, ignoring."),
            Skip::NoTrigger { author, trigger } => write!(
                f,
                "Comment from {} does not match the comment trigger (`{}`).",
                author, trigger
            ),
        }
    }
}

/// Why a pipeline step did not proceed.
#[derive(Debug)]
pub enum Halt {
    Skip(Skip),
    Fail(DeploymentFailure),
    Fatal(anyhow::Error),
}

pub type Step<T> = Result<T, Halt>;

impl From<Skip> for Halt {
    fn from(skip: Skip) -> Self {
        Halt::Skip(skip)
    }
}

impl From<DeploymentFailure> for Halt {
    fn from(failure: DeploymentFailure) -> Self {
        Halt::Fail(failure)
    }
}

impl From<anyhow::Error> for Halt {
    fn from(err: anyhow::Error) -> Self {
        Halt::Fatal(err)
    }
}

impl From<ApiError> for Halt {
    fn from(err: ApiError) -> Self {
        Halt::Fatal(err.into())
    }
}

impl From<io::Error> for Halt {
    fn from(err: io::Error) -> Self {
        Halt::Fatal(err.into())
    }
}

impl From<serde_json::Error> for Halt {
    fn from(err: serde_json::Error) -> Self {
        Halt::Fatal(err.into())
    }
}
