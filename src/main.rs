// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use cli::{Args, is_config_operation};
use commands::{
    apply_cli_overrides, handle_config_update_command, handle_list_config_command,
    run_command, validate_args,
};
use poe_api::config::Config;
use poe_api::error::AppError;
use poe_api::PoeClient;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Handle configuration operations before touching the network
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    let Some(command) = args.command.clone() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;
    apply_cli_overrides(&mut config, &args);

    let (log_file_path, _guard) = logging::setup_logging(&args, Some(&config)).await?;
    info!("Logs are being written to: {log_file_path}");

    let client = PoeClient::new(config)?;

    match run_command(&client, &command).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {e}");
            Err(e)
        }
    }
}
