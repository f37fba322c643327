//! GitHub Actions workflow commands: log annotations and step outputs.
use env_logger::{Builder, Env, Target};
use log::Level;
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

const DEFAULT_FILTER: &str = "info,comment_deploy=debug";

/// Routes `log` records to stdout as workflow commands, so that the runner
/// renders debug lines and error annotations.
pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                workflow_line(record.level(), &record.args().to_string())
            )
        })
        .init();
}

pub fn workflow_line(level: Level, message: &str) -> String {
    match level {
        Level::Error => format!("::error ::{}", escape_data(message)),
        Level::Warn => format!("::warning ::{}", escape_data(message)),
        Level::Info => message.to_owned(),
        Level::Debug | Level::Trace => format!("::debug::{}", escape_data(message)),
    }
}

/// Commands end at the first newline, so multi-line data must be escaped.
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Named step outputs, readable by later steps as `steps.<id>.outputs.<name>`.
pub struct Outputs {
    file: Option<PathBuf>,
    sink: Box<dyn io::Write>,
}

impl Outputs {
    fn sink_to(file: Option<PathBuf>, sink: Box<dyn io::Write>) -> Self {
        Outputs { file, sink }
    }

    /// Without an output file, outputs are announced on stdout.
    pub fn new(file: Option<PathBuf>) -> Self {
        Outputs::sink_to(file, Box::new(io::stdout()))
    }

    pub fn set(&mut self, name: &str, value: &str) -> io::Result<()> {
        match &self.file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}={}", name, value)
            }
            None => writeln!(
                self.sink,
                "::set-output name={}::{}",
                name,
                escape_data(value)
            ),
        }
    }
}
