use crate::environment::Environment;
use crate::error::{DeploymentFailure, Step};
use crate::github::{ApiError, Deployment, DeploymentRequest, GithubClient};
use log::debug;

/// Requires a green combined status on `sha`, unless checks are ignored.
pub fn check_commit(
    github: &GithubClient,
    ignore_status_checks: bool,
    head_repo: &str,
    sha: &str,
) -> Step<()> {
    if ignore_status_checks {
        return Ok(());
    }
    debug!("Checking commit status of {}#{}", head_repo, sha);
    let status = github.combined_status(head_repo, sha)?;

    if status.state != "success" {
        debug!("Commit status is {}", status.state);
        // every context is listed, including the ones that already passed
        let contexts: Vec<String> = status
            .statuses
            .iter()
            .map(|s| format!("* {}", s.context))
            .collect();
        return Err(DeploymentFailure::new(format!(
            "The following status checks are not green for {}:\n{}.",
            sha,
            contexts.join("\n")
        ))
        .into());
    }
    Ok(())
}

pub fn trigger_deployment(
    github: &GithubClient,
    ignore_status_checks: bool,
    head_repo: &str,
    git_ref: &str,
    environment: &Environment,
    description: &str,
) -> Step<Deployment> {
    debug!(
        "Triggering a deployment for {}#{} to {:?}",
        head_repo, git_ref, environment
    );
    let request = DeploymentRequest {
        git_ref,
        environment: &environment.name,
        description,
        transient_environment: environment.is_transient(),
        production_environment: environment.is_production(),
        required_contexts: if ignore_status_checks {
            Some(vec![])
        } else {
            None
        },
    };

    match github.create_deployment(head_repo, &request) {
        Ok(deployment) => Ok(deployment),
        Err(ApiError::Status { body, .. }) => Err(DeploymentFailure::new(format!(
            "Failed to trigger deployment ({})",
            body
        ))
        .into()),
        Err(err) => Err(err.into()),
    }
}
