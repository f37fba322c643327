use comment_deploy::config::Inputs;
use comment_deploy::github::IssueCommentEvent;
use comment_deploy::hook::{Hook, Report};
use comment_deploy::workflow;

use log::{debug, error, info};
use std::process;
use structopt::StructOpt;

fn main() -> anyhow::Result<()> {
    workflow::init_logger();
    let config = match Inputs::from_args().into_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    debug!("Config: {:?}", config);

    let event = IssueCommentEvent::from_file(&config.event_path)?;
    debug!("Loaded event JSON: {:?}", event);

    let report = Hook::new(config)?.run(&event)?;
    match &report {
        Report::Skipped(skip) if skip.is_error() => error!("{}", skip),
        Report::Skipped(skip) => info!("{}", skip),
        Report::Deployed(deployment) => debug!("Created deployment {}", deployment.id),
        Report::Failed(_) => {}
    }
    process::exit(report.exit_code())
}
