use reqwest::Client;

use crate::api::http_client::create_http_client;
use crate::config::Config;
use crate::error::AppError;

/// Client for the economy aggregator and the vendor web API.
///
/// Holds one pooled [`reqwest::Client`] and the [`Config`] it was built
/// from. Cloning is cheap and clones share the connection pool, so one
/// instance can serve any number of concurrent calls. Nothing is cached:
/// every call is a fresh request.
///
/// Endpoint methods are grouped by upstream in the sibling modules
/// (`ninja`, `characters`, `atlas`, `seasons`).
#[derive(Debug, Clone)]
pub struct PoeClient {
    pub(crate) http: Client,
    pub(crate) config: Config,
}

impl PoeClient {
    /// Validates `config` and builds a client from it.
    ///
    /// # Example
    /// ```no_run
    /// use poe_api::{Config, PoeClient};
    /// use poe_api::models::ItemType;
    ///
    /// # async fn example() -> Result<(), poe_api::AppError> {
    /// let client = PoeClient::new(Config::default())?;
    /// let currency = client.item_overview("Standard", ItemType::Currency, None).await?;
    /// println!("{} priced items", currency.lines.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let http = create_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn session_id(&self) -> Option<&str> {
        self.config.session_id.as_deref()
    }
}
