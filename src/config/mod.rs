use crate::constants::{self, endpoints, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration for the API client and the command-line tool.
///
/// The client never reads process-wide state: build a `Config` (from a file,
/// from [`Config::default`] or by hand) and hand it to
/// [`crate::api::PoeClient::new`].
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Vendor `POESESSID` cookie. Needed for private profiles and character tabs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Base URL of the economy aggregator.
    #[serde(default = "default_ninja_base_url")]
    pub ninja_base_url: String,
    /// Base URL of the vendor JSON API host.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Base URL of the vendor website host.
    #[serde(default = "default_web_base_url")]
    pub web_base_url: String,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_ninja_base_url() -> String {
    endpoints::NINJA_BASE_URL.to_string()
}

fn default_api_base_url() -> String {
    endpoints::API_BASE_URL.to_string()
}

fn default_web_base_url() -> String {
    endpoints::WEB_BASE_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    constants::DEFAULT_USER_AGENT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            session_id: None,
            ninja_base_url: default_ninja_base_url(),
            api_base_url: default_api_base_url(),
            web_base_url: default_web_base_url(),
            http_timeout_seconds: default_http_timeout(),
            user_agent: default_user_agent(),
            log_file_path: None,
        }
    }
}

// Keeps the session id out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("session_id", &self.session_id.as_ref().map(|_| "<redacted>"))
            .field("ninja_base_url", &self.ninja_base_url)
            .field("api_base_url", &self.api_base_url)
            .field("web_base_url", &self.web_base_url)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    ///
    /// # Environment Variables
    /// - `POE_SESSION_ID` - Override the vendor session id
    /// - `POE_LOG_FILE` - Override log file path
    /// - `POE_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// Environment variables take precedence over the config file. The
    /// result is validated before it is returned.
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `POE_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(session_id) = std::env::var(env_vars::SESSION_ID) {
            self.session_id = Some(session_id);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The session id is only reported as set or unset.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using built-in defaults)");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Session Id:");
        println!(
            "{}",
            if config.session_id.is_some() { "set" } else { "not set" }
        );
        println!("────────────────────────────────────");
        println!("Endpoints:");
        println!("ninja: {}", config.ninja_base_url);
        println!("api:   {}", config.api_base_url);
        println!("web:   {}", config.web_base_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/poe_api.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the base URLs so that endpoint paths join cleanly.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let normalized = Config {
            ninja_base_url: self.ninja_base_url.trim_end_matches('/').to_string(),
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            web_base_url: self.web_base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        };
        let content = toml::to_string_pretty(&normalized)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
