use crate::error::{DeploymentFailure, Skip, Step};
use crate::github::Comment;
use log::debug;

/// Extracts the requested environment name from a comment such as
/// `deploy to staging`.
pub fn parse_command(comment: &Comment, trigger: &str) -> Step<String> {
    debug!("Parse comment");
    if !comment.body.starts_with(trigger) {
        return Err(Skip::NoTrigger {
            author: comment.user.login.clone(),
            trigger: trigger.to_owned(),
        }
        .into());
    }

    let environment = comment.body[trigger.len()..].trim();
    if environment.is_empty() {
        return Err(DeploymentFailure::new(format!(
            "No environment specified (usage: `{} environment`).",
            trigger
        ))
        .into());
    }
    Ok(environment.to_owned())
}
