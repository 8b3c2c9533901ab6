//! Vendor season and ladder endpoints

use tracing::instrument;

use crate::api::PoeClient;
use crate::api::fetch_utils::{fetch, fetch_array};
use crate::api::urls::{player_history_url, seasons_url};
use crate::error::AppError;
use crate::models::{PlayerHistory, PlayerHistoryOptions, Season, SeasonOptions};

impl PoeClient {
    /// Lists all seasons.
    #[instrument(skip(self))]
    pub async fn seasons(&self, options: Option<&SeasonOptions>) -> Result<Vec<Season>, AppError> {
        let url = seasons_url(&self.config.web_base_url, options)?;
        fetch_array(&self.http, &url, self.session_id()).await
    }

    /// Ladder history of an account in one season.
    ///
    /// Works for private profiles as well.
    #[instrument(skip(self))]
    pub async fn player_history(
        &self,
        season_id: &str,
        account_name: &str,
        options: Option<&PlayerHistoryOptions>,
    ) -> Result<PlayerHistory, AppError> {
        let url = player_history_url(&self.config.web_base_url, season_id, account_name, options)?;
        fetch(&self.http, &url, self.session_id()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::PoeClient;
    use crate::models::{PlayerHistoryOptions, Realm, SeasonOptions};
    use crate::testing_utils::TestDataBuilder;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    #[tokio::test]
    async fn test_seasons_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/seasons"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::seasons_json()))
            .mount(&mock_server)
            .await;

        let client = PoeClient::new(TestDataBuilder::config_for(&mock_server.uri())).unwrap();
        let seasons = client.seasons(None).await.unwrap();

        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].id, "Season13");
        assert!(seasons[1].end_at.is_none());
    }

    #[tokio::test]
    async fn test_seasons_with_paging() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/seasons"))
            .and(query_param("limit", "1"))
            .and(query_param("offset", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = PoeClient::new(TestDataBuilder::config_for(&mock_server.uri())).unwrap();
        let options = SeasonOptions {
            realm: None,
            limit: Some(1),
            offset: Some(1),
        };
        assert!(client.seasons(Some(&options)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_player_history_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/season-player-history"))
            .and(query_param("seasonId", "Season13"))
            .and(query_param("id", "some_account"))
            .and(query_param("realm", "pc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(TestDataBuilder::player_history_json()),
            )
            .mount(&mock_server)
            .await;

        let client = PoeClient::new(TestDataBuilder::config_for(&mock_server.uri())).unwrap();
        let options = PlayerHistoryOptions {
            realm: Some(Realm::Pc),
            ..PlayerHistoryOptions::default()
        };
        let history = client
            .player_history("Season13", "some_account", Some(&options))
            .await
            .unwrap();

        assert_eq!(history.total, 1);
        assert_eq!(history.best_rank(), Some(17));
        assert_eq!(history.entries[0].character.class, "Raider");
    }

    #[tokio::test]
    async fn test_player_history_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/season-player-history"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = PoeClient::new(TestDataBuilder::config_for(&mock_server.uri())).unwrap();
        let error = client
            .player_history("Season0", "nobody", None)
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }
}
