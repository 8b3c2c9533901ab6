use crate::cli::{Args, Command};
use poe_api::config::Config;
use poe_api::error::AppError;
use poe_api::models::{PlayerHistoryOptions, RealmOptions, SeasonOptions};
use poe_api::PoeClient;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_session_id.is_some() && args.clear_session_id {
        return Err(AppError::config_error(
            "Cannot use both --set-session-id and --clear-session-id",
        ));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }
    if args.timeout == Some(0) {
        return Err(AppError::config_error("--timeout must be at least 1 second"));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands
/// (--set-session-id, --clear-session-id, --set-log-file, --clear-log-file).
///
/// Only the stored file is edited; environment overrides are not persisted.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, args);
    config.validate()?;

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(session_id) = &args.new_session_id {
        config.session_id = Some(session_id.trim().to_string());
    } else if args.clear_session_id {
        config.session_id = None;
        println!("Session id cleared.");
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
}

/// Applies per-invocation overrides from the command line on top of the
/// loaded configuration.
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(session_id) = &args.session_id {
        config.session_id = Some(session_id.clone());
    }
    if let Some(timeout) = args.timeout {
        config.http_timeout_seconds = timeout;
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Runs one API subcommand and returns what should be printed.
///
/// Structured responses are rendered as pretty JSON; the atlas lookup
/// prints the bare point count.
pub async fn run_command(client: &PoeClient, command: &Command) -> Result<String, AppError> {
    info!("Running command: {command:?}");

    match command {
        Command::ItemOverview {
            league,
            item_type,
            language,
        } => to_json(&client.item_overview(league, *item_type, *language).await?),
        Command::ItemHistory {
            league,
            item_type,
            item_id,
        } => to_json(&client.item_history(league, *item_type, *item_id).await?),
        Command::Characters { account, realm } => {
            let options = realm.map(RealmOptions::new);
            to_json(&client.characters(account, options.as_ref()).await?)
        }
        Command::Items {
            account,
            character,
            realm,
        } => {
            let options = realm.map(RealmOptions::new);
            to_json(
                &client
                    .character_items(account, character, options.as_ref())
                    .await?,
            )
        }
        Command::Passives {
            account,
            character,
            realm,
        } => {
            let options = realm.map(RealmOptions::new);
            to_json(
                &client
                    .passive_skills(account, character, options.as_ref())
                    .await?,
            )
        }
        Command::Atlas {
            account,
            realm,
            league,
        } => {
            let points = client.atlas_passive_count(account, *realm, league).await?;
            Ok(points.to_string())
        }
        Command::Seasons {
            realm,
            limit,
            offset,
        } => {
            let options = SeasonOptions {
                realm: *realm,
                limit: *limit,
                offset: *offset,
            };
            to_json(&client.seasons(Some(&options)).await?)
        }
        Command::PlayerHistory {
            season_id,
            account,
            realm,
            limit,
            offset,
        } => {
            let options = PlayerHistoryOptions {
                realm: *realm,
                limit: *limit,
                offset: *offset,
            };
            to_json(
                &client
                    .player_history(season_id, account, Some(&options))
                    .await?,
            )
        }
    }
}
