//! Vendor character-window endpoints
//!
//! Private profiles and character tabs need `session_id` in the client's
//! [`crate::config::Config`]; without it the vendor answers 403.

use tracing::instrument;

use crate::api::PoeClient;
use crate::api::fetch_utils::{fetch, fetch_array};
use crate::api::urls::{character_items_url, characters_url, passive_skills_url};
use crate::error::AppError;
use crate::models::{Character, Items, PassiveSkills, RealmOptions};

impl PoeClient {
    /// Lists the characters of an account.
    #[instrument(skip(self))]
    pub async fn characters(
        &self,
        account_name: &str,
        options: Option<&RealmOptions>,
    ) -> Result<Vec<Character>, AppError> {
        let url = characters_url(&self.config.api_base_url, account_name, options)?;
        fetch_array(&self.http, &url, self.session_id()).await
    }

    /// Equipped and carried items of one character.
    #[instrument(skip(self))]
    pub async fn character_items(
        &self,
        account_name: &str,
        character: &str,
        options: Option<&RealmOptions>,
    ) -> Result<Items, AppError> {
        let url = character_items_url(&self.config.api_base_url, account_name, character, options)?;
        fetch(&self.http, &url, self.session_id()).await
    }

    /// Allocated passive nodes and tree jewels of one character.
    #[instrument(skip(self))]
    pub async fn passive_skills(
        &self,
        account_name: &str,
        character: &str,
        options: Option<&RealmOptions>,
    ) -> Result<PassiveSkills, AppError> {
        let url = passive_skills_url(&self.config.web_base_url, account_name, character, options)?;
        fetch(&self.http, &url, self.session_id()).await
    }
}
