//! Hodei CLI Entry Point

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use hodei_cli::{logging, Cli, CliConfig, CliError, ConsoleUi, Ui};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.global.verbose);

    let config = match CliConfig::load(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            let ui = ConsoleUi::new(cli.global.output_format(), cli.global.quiet);
            return report(&ui, &CliError::from(e));
        }
    };

    let ui = Arc::new(ConsoleUi::new(config.output, config.quiet));
    match hodei_cli::run(cli.command, &config, ui.clone()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(ui.as_ref(), &e),
    }
}

fn report(ui: &dyn Ui, e: &CliError) -> ExitCode {
    debug!("Command failed: {:?}", e);
    ui.error(&e.to_string());
    ExitCode::from(e.exit_code())
}
