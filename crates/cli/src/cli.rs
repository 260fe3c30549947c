use clap::{Args, Parser, Subcommand};

use crate::ui::OutputFormat;

/// CLI definition for the Hodei client binary.
#[derive(Parser, Debug)]
#[command(author, version, about = "Command-line client for the Hodei CI/CD platform", long_about = None, name = "hodei")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options accepted by every command; unset values fall back to the environment.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct GlobalArgs {
    /// Base URL of the Hodei API [env: HODEI_API_URL]
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    /// Bearer token for the Hodei API [env: HODEI_TOKEN]
    #[arg(long, global = true)]
    pub token: Option<String>,
    /// Request timeout in seconds [env: HODEI_TIMEOUT_SECS]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
    /// Output format [env: HODEI_OUTPUT]
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
    /// Suppress success output
    #[arg(short, long, global = true)]
    pub quiet: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Format requested on the command line, used before configuration is loaded
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }
}

/// Top-level command groups.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage pipelines
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum PipelineCommand {
    /// Manage pipeline executions
    Execution {
        #[command(subcommand)]
        command: ExecutionCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExecutionCommand {
    /// Re-order the waiting execution to UP/DOWN for the provided execution id
    Reorder(ReorderArgs),
}

/// Arguments of `pipeline execution reorder`.
///
/// Both default to empty so that missing values are reported by the command's
/// own validation.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ReorderArgs {
    /// Waiting execution id to reorder
    #[arg(short = 'i', long, default_value = "")]
    pub execution_id: String,
    /// Re-order to UP/DOWN for the execution id
    #[arg(short = 'r', long, default_value = "")]
    pub reorder_action: String,
}
