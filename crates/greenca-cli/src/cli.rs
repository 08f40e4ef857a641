use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use greenca_core::config::{CliOverrides, OutOfRangePolicy};

#[derive(Parser, Debug)]
#[command(name = "greenca", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Config file to use instead of greenca.toml lookup
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Classifier artifact path
    #[arg(long, global = true, value_name = "FILE")]
    pub model: Option<String>,
    /// Feature schema TOML replacing the built-in schema
    #[arg(long, global = true, value_name = "FILE")]
    pub schema: Option<String>,
    /// Clamp out-of-range values to the nearest bound instead of rejecting them
    #[arg(long, global = true)]
    pub clamp: bool,
    /// Log filter, e.g. "debug" or "greenca_model=debug"
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl GlobalArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            artifact_path: self.model.clone(),
            schema_path: self.schema.clone(),
            out_of_range: self.clamp.then_some(OutOfRangePolicy::Clamp),
            log_level: self.log_level.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect the indicators and predict comparative advantage
    Predict {
        /// Field assignment, by display name or model identifier (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        assignments: Vec<String>,
        /// JSON or TOML file mapping field names to values
        #[arg(long, value_name = "FILE")]
        values: Option<PathBuf>,
        /// Prompt for every field not already supplied
        #[arg(long, short = 'i')]
        interactive: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the active feature schema
    Schema {
        /// Print as a TOML schema file
        #[arg(long)]
        toml: bool,
    },
    /// Compare the schema with the features the artifact was trained on
    Verify,
}
