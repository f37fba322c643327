use crate::command::parse_command;
use crate::config::Config;
use crate::deploy::{check_commit, trigger_deployment};
use crate::environment::resolve_environment;
use crate::error::{DeploymentFailure, Halt, Skip, Step};
use crate::github::{Deployment, GithubClient, IssueCommentEvent, PullRequest};
use crate::notify::{self, Feedback, Notifier};
use crate::validate::{validate_event, validate_pr};
use crate::workflow::Outputs;
use log::debug;

const REACTION: &str = "rocket";

/// How a run ended, when it did not end in a fatal error.
#[derive(Debug, PartialEq)]
pub enum Report {
    Deployed(Deployment),
    Skipped(Skip),
    /// Already reported on the pull request.
    Failed(DeploymentFailure),
}

impl Report {
    pub fn exit_code(&self) -> i32 {
        match self {
            Report::Deployed(_) => 0,
            Report::Skipped(skip) => skip.exit_code(),
            Report::Failed(_) => 1,
        }
    }
}

pub struct Hook {
    config: Config,
    github: GithubClient,
    notifier: Box<dyn Notifier>,
    outputs: Outputs,
}

impl Hook {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let github = GithubClient::new(&config.api_url, &config.token, config.request_timeout)?;
        let notifier = notify::notifier(config.comment, &github);
        let outputs = Outputs::new(config.output_file.clone());
        Ok(Hook {
            config,
            github,
            notifier,
            outputs,
        })
    }

    /// Handles one `issue_comment` event. Errors are the unexpected faults
    /// (network, payload shape, configuration files) that get no PR comment.
    pub fn run(&mut self, event: &IssueCommentEvent) -> anyhow::Result<Report> {
        match self.execute(event) {
            Ok(deployment) => Ok(Report::Deployed(deployment)),
            Err(Halt::Skip(skip)) => Ok(Report::Skipped(skip)),
            Err(Halt::Fail(failure)) => Ok(Report::Failed(failure)),
            Err(Halt::Fatal(err)) => Err(err),
        }
    }

    fn execute(&mut self, event: &IssueCommentEvent) -> Step<Deployment> {
        let trigger = validate_event(event)?;
        let command = match parse_command(&trigger.comment, &self.config.trigger_phrase) {
            Err(Halt::Skip(skip)) => return Err(Halt::Skip(skip)),
            command => command,
        };

        debug!("Requesting PR details");
        let pr = self.github.pull_request(trigger.pull_request_url)?;
        debug!("Loaded PR details: {:?}", pr);

        // a broken PR is reported before a malformed command
        let environment_name = match validate_pr(&pr, self.config.allow_draft)
            .map_err(Halt::from)
            .and_then(|()| command)
        {
            Err(Halt::Fail(failure)) => {
                let message = format!("Deployment failed: {}", failure);
                return Err(self.report_failure(&pr, message, failure));
            }
            environment_name => environment_name?,
        };

        let deployment = match self.deploy(&pr, &environment_name) {
            Err(Halt::Fail(failure)) => {
                let message = format!("Deployment to {} failed: {}", environment_name, failure);
                return Err(self.report_failure(&pr, message, failure));
            }
            deployment => deployment?,
        };

        debug!("Adding reaction to original comment");
        self.github.add_reaction(&trigger.comment.url, REACTION)?;
        let message = format!(
            "@{}: Triggered [deployment]({}/{}/deployments) to {}.",
            trigger.comment.user.login,
            self.config.server_url,
            pr.head.repo.full_name,
            environment_name
        );
        self.notifier
            .notify(&pr.comments_url, &Feedback::Success(message))?;

        debug!("Finished.");
        Ok(deployment)
    }

    fn deploy(&mut self, pr: &PullRequest, environment_name: &str) -> Step<Deployment> {
        let environment =
            resolve_environment(self.config.environment_file.as_deref(), environment_name)?;
        let head_repo = &pr.head.repo.full_name;
        let sha = &pr.head.sha;

        check_commit(
            &self.github,
            self.config.ignore_status_checks,
            head_repo,
            sha,
        )?;
        let deployment = trigger_deployment(
            &self.github,
            self.config.ignore_status_checks,
            head_repo,
            sha,
            &environment,
            &format!("Automatic deployment from #{}", pr.number),
        )?;

        self.outputs
            .set("deployment_id", &deployment.id.to_string())?;
        self.outputs.set("deployment_api_url", &deployment.url)?;
        Ok(deployment)
    }

    fn report_failure(
        &mut self,
        pr: &PullRequest,
        message: String,
        failure: DeploymentFailure,
    ) -> Halt {
        match self
            .notifier
            .notify(&pr.comments_url, &Feedback::Failure(message))
        {
            Ok(()) => Halt::Fail(failure),
            Err(err) => Halt::Fatal(err),
        }
    }
}
