use crate::error::{DeploymentFailure, Step};
use log::debug;
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path};

/// A deployment target, either named freely in a comment or listed in the
/// environment validation file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Environment {
    pub name: String,
    #[serde(default)]
    pub transient: Option<bool>,
    #[serde(default)]
    pub production: Option<bool>,
}

impl Environment {
    pub fn named<S: Into<String>>(name: S) -> Self {
        Environment {
            name: name.into(),
            transient: None,
            production: None,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.transient.unwrap_or(false)
    }

    pub fn is_production(&self) -> bool {
        self.production.unwrap_or(true)
    }
}

/// Looks `name` up in the validation file when one is configured.
///
/// An unreadable or malformed file is a fatal error rather than a
/// [`DeploymentFailure`]: it is a misconfigured workflow, not a bad request.
pub fn resolve_environment(validation_file: Option<&Path>, name: &str) -> Step<Environment> {
    let path = match validation_file {
        Some(path) => path,
        None => return Ok(Environment::named(name)),
    };

    debug!("Get environment");
    let reader = BufReader::new(File::open(path)?);
    let environments: Vec<Environment> = serde_json::from_reader(reader)?;
    debug!("Loaded environment validation file");

    for environment in environments {
        debug!("Checking environment {}", environment.name);
        if environment.name == name {
            return Ok(environment);
        }
    }
    Err(DeploymentFailure::new(format!(
        "Environment '{}' doesn't exist in the environment validation file ({}).",
        name,
        path.display()
    ))
    .into())
}
