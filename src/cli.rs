use crate::config::Config;
use crate::form::AgePolicy;
use clap::Parser;
use std::path::PathBuf;

/// Interactive user-entry form for the terminal.
#[derive(Debug, Parser)]
#[command(name = "user-entry", version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append accepted users to this file as JSON lines
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Reject ages that are not numbers
    #[arg(long, conflicts_with = "lenient_age")]
    pub strict_age: bool,

    /// Accept ages that are not numbers; only reject numbers below 1
    #[arg(long)]
    pub lenient_age: bool,
}

impl Cli {
    /// Load the config selected by `--config` (or the default one).
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Apply command-line overrides on top of the file config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.export {
            config.export.path = Some(path.clone());
        }
        if self.strict_age {
            config.validation.age_policy = AgePolicy::Strict;
        } else if self.lenient_age {
            config.validation.age_policy = AgePolicy::Lenient;
        }
    }
}
