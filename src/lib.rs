extern crate anyhow;
extern crate reqwest;

pub mod command;
pub mod config;
pub mod deploy;
pub mod environment;
pub mod error;
pub mod github;
pub mod hook;
pub mod notify;
pub mod validate;
pub mod workflow;
