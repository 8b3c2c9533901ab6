//! Typed client for the poe.ninja economy API and the Path of Exile web API
//!
//! Every operation is a single HTTP GET followed by a typed decode. There is
//! no caching, no retrying and no shared mutable state; the session id and
//! endpoints travel in an explicit [`Config`] held by [`PoeClient`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use poe_api::{AppError, Config, PoeClient};
//! use poe_api::models::{ItemType, Realm, RealmOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config {
//!         session_id: Some("0123456789abcdef".to_string()),
//!         ..Config::default()
//!     };
//!     let client = PoeClient::new(config)?;
//!
//!     let currency = client.item_overview("Standard", ItemType::Currency, None).await?;
//!     for line in currency.lines.iter().take(5) {
//!         println!("{}: {} chaos", line.name, line.chaos_value);
//!     }
//!
//!     let options = RealmOptions::new(Realm::Pc);
//!     let characters = client.characters("some_account", Some(&options)).await?;
//!     println!("{} characters", characters.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use api::PoeClient;
pub use config::Config;
pub use error::AppError;
pub use models::{
    Character, HistoryPoint, ItemCollection, Items, PassiveSkills, PlayerHistory, Season,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
