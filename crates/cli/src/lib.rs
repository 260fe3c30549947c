//! Hodei CLI - command-line client for the Hodei CI/CD platform
//!
//! Commands receive their collaborators (remote client, output sink)
//! explicitly, so they can be driven from tests without a terminal or server.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

use std::sync::Arc;

use hodei_rust_sdk::CicdClient;

pub use cli::{Cli, Command, ExecutionCommand, GlobalArgs, PipelineCommand, ReorderArgs};
pub use client::ExecutionClient;
pub use commands::{ReorderAction, ReorderCommand};
pub use config::CliConfig;
pub use error::{CliError, ConfigError, Result, ValidationError};
pub use ui::{ConsoleUi, OutputFormat, Ui};

/// Run a parsed command line against the configured service
pub async fn run(command: Command, config: &CliConfig, ui: Arc<dyn Ui>) -> Result<()> {
    match command {
        Command::Pipeline {
            command:
                PipelineCommand::Execution {
                    command: ExecutionCommand::Reorder(args),
                },
        } => {
            let client = CicdClient::with_config(config.client_config())?;
            ReorderCommand::new(Arc::new(client), ui)
                .execute(&args.execution_id, &args.reorder_action)
                .await?;
        }
    }
    Ok(())
}
