use crate::error::{DeploymentFailure, Skip, Step};
use crate::github::{Comment, IssueCommentEvent, PullRequest};
use anyhow::anyhow;
use log::debug;
use serde::Deserialize;

/// The parts of a validated `issue_comment` event the pipeline works with.
#[derive(Debug, PartialEq)]
pub struct Trigger<'a> {
    pub pull_request_url: &'a str,
    pub comment: Comment,
}

pub fn validate_event(event: &IssueCommentEvent) -> Step<Trigger<'_>> {
    let issue = event.issue.as_ref().ok_or(Skip::NotAnIssueComment)?;
    let action = event
        .action
        .as_deref()
        .ok_or_else(|| anyhow!("Event payload has no `action` field"))?;
    if action != "created" {
        return Err(Skip::NotCreated.into());
    }
    let pull_request = issue.pull_request.as_ref().ok_or(Skip::NotPullRequest)?;
    let comment = event
        .comment
        .as_ref()
        .ok_or_else(|| anyhow!("Event payload has no `comment` field"))?;
    let comment = Comment::deserialize(comment)?;

    Ok(Trigger {
        pull_request_url: &pull_request.url,
        comment,
    })
}

/// Checks run in order; the first violation is reported.
pub fn validate_pr(pr: &PullRequest, allow_draft: bool) -> Result<(), DeploymentFailure> {
    debug!("Validating PR #{}", pr.number);
    if pr.draft && !allow_draft {
        return Err(DeploymentFailure::new("Can't deploy draft PRs."));
    }
    if pr.merged || pr.merged_by.is_some() {
        return Err(DeploymentFailure::new("Can't deploy a merged PR."));
    }
    if pr.state != "open" {
        return Err(DeploymentFailure::new("Can't deploy a PR which isn't open."));
    }
    match pr.mergeable_state.as_str() {
        "mergeable" => Ok(()),
        "draft" if allow_draft => Ok(()),
        _ => Err(DeploymentFailure::new(
            "PR can't be cleanly merged with base branch.",
        )),
    }
}
