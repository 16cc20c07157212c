mod prices;
mod profile;
mod report;
mod roe;

use serde_json::Value;
use uuid::Uuid;

use finratio_core::SnapshotSource;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::{Envelope, EnvelopeMeta};

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope, CliError> {
    let source = SnapshotSource::from_path(&cli.snapshot)?;

    let result = match &cli.command {
        Command::Roe(args) => roe::run(args, &source)?,
        Command::Prices(args) => prices::run(args, &source)?,
        Command::Profile(args) => profile::run(args, &source)?,
        Command::Report(args) => report::run(args, &source)?,
    };

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string());
    for warning in result.warnings {
        meta.push_warning(warning);
    }

    Ok(Envelope {
        meta,
        data: result.data,
    })
}
