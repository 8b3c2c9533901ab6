use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use poe_api::models::{ItemType, LanguageCode, Realm};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches the config file
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_session_id.is_some()
        || args.clear_session_id
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Path of Exile API client
///
/// Queries poe.ninja prices and the Path of Exile character, ladder and
/// season API, printing the decoded response as JSON.
///
/// Private profiles need a session id (the POESESSID cookie), either stored
/// with --set-session-id, passed with --session-id or set in POE_SESSION_ID.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Session id for this invocation only. Overrides the config file and POE_SESSION_ID.
    #[arg(long = "session-id", global = true, help_heading = "Request Options")]
    pub session_id: Option<String>,

    /// HTTP timeout in seconds for this invocation.
    #[arg(long = "timeout", global = true, help_heading = "Request Options")]
    pub timeout: Option<u64>,

    /// Store a session id in the config file.
    #[arg(long = "set-session-id", help_heading = "Configuration")]
    pub new_session_id: Option<String>,

    /// Remove the stored session id from the config file.
    #[arg(long = "clear-session-id", help_heading = "Configuration")]
    pub clear_session_id: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug logging. Logs are also written to stderr.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Current prices of one item category in a league
    ItemOverview {
        #[arg(long)]
        league: String,
        #[arg(long = "type", value_name = "ITEM_TYPE")]
        item_type: ItemType,
        /// Response language (default: en)
        #[arg(long)]
        language: Option<LanguageCode>,
    },
    /// Price history of one item
    ItemHistory {
        #[arg(long)]
        league: String,
        #[arg(long = "type", value_name = "ITEM_TYPE")]
        item_type: ItemType,
        #[arg(long = "item-id")]
        item_id: i64,
    },
    /// Characters of an account
    Characters {
        #[arg(long)]
        account: String,
        #[arg(long)]
        realm: Option<Realm>,
    },
    /// Items of a character
    Items {
        #[arg(long)]
        account: String,
        #[arg(long)]
        character: String,
        #[arg(long)]
        realm: Option<Realm>,
    },
    /// Passive tree of a character
    Passives {
        #[arg(long)]
        account: String,
        #[arg(long)]
        character: String,
        #[arg(long)]
        realm: Option<Realm>,
    },
    /// Allocated atlas passive points of an account in a league
    Atlas {
        #[arg(long)]
        account: String,
        #[arg(long, default_value = "pc")]
        realm: Realm,
        #[arg(long)]
        league: String,
    },
    /// All seasons
    Seasons {
        #[arg(long)]
        realm: Option<Realm>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Ladder history of an account in a season
    PlayerHistory {
        #[arg(long = "season")]
        season_id: String,
        #[arg(long)]
        account: String,
        #[arg(long)]
        realm: Option<Realm>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_item_overview() {
        let args = Args::parse_from([
            "poe_api",
            "item-overview",
            "--league",
            "Standard",
            "--type",
            "currency",
        ]);
        assert_eq!(
            args.command,
            Some(Command::ItemOverview {
                league: "Standard".to_string(),
                item_type: ItemType::Currency,
                language: None,
            })
        );
    }

    #[test]
    fn test_parse_atlas_default_realm() {
        let args = Args::parse_from([
            "poe_api",
            "atlas",
            "--account",
            "some_account",
            "--league",
            "Standard",
        ]);
        assert_eq!(
            args.command,
            Some(Command::Atlas {
                account: "some_account".to_string(),
                realm: Realm::Pc,
                league: "Standard".to_string(),
            })
        );
    }

    #[test]
    fn test_global_session_id_after_subcommand() {
        let args = Args::parse_from([
            "poe_api",
            "characters",
            "--account",
            "some_account",
            "--session-id",
            "abc",
        ]);
        assert_eq!(args.session_id.as_deref(), Some("abc"));
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_rejects_unknown_realm() {
        let result = Args::try_parse_from([
            "poe_api",
            "characters",
            "--account",
            "a",
            "--realm",
            "switch",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_operations() {
        let args = Args::parse_from(["poe_api", "--list-config"]);
        assert!(is_config_operation(&args));
        assert!(args.command.is_none());

        let args = Args::parse_from(["poe_api", "--set-session-id", "abc"]);
        assert!(is_config_operation(&args));
    }
}
