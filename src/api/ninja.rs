//! Economy aggregator endpoints

use tracing::instrument;

use crate::api::PoeClient;
use crate::api::fetch_utils::{fetch, fetch_array};
use crate::api::urls::{item_history_url, item_overview_url};
use crate::error::AppError;
use crate::models::{HistoryPoint, ItemCollection, ItemType, LanguageCode};

impl PoeClient {
    /// Current prices of every item of `item_type` in `league`.
    ///
    /// `language` defaults to English. No session cookie is sent to this host.
    #[instrument(skip(self))]
    pub async fn item_overview(
        &self,
        league: &str,
        item_type: ItemType,
        language: Option<LanguageCode>,
    ) -> Result<ItemCollection, AppError> {
        let url = item_overview_url(&self.config.ninja_base_url, league, item_type, language)?;
        fetch(&self.http, &url, None).await
    }

    /// Price history of one item, as listed by [`PoeClient::item_overview`].
    #[instrument(skip(self))]
    pub async fn item_history(
        &self,
        league: &str,
        item_type: ItemType,
        item_id: i64,
    ) -> Result<Vec<HistoryPoint>, AppError> {
        let url = item_history_url(&self.config.ninja_base_url, league, item_type, item_id)?;
        fetch_array(&self.http, &url, None).await
    }
}
