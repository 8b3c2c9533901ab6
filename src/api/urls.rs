//! URL building utilities for API endpoints

use reqwest::Url;

use crate::constants::endpoints;
use crate::error::AppError;
use crate::models::{
    ItemType, LanguageCode, PlayerHistoryOptions, QueryOptions, Realm, RealmOptions,
    SeasonOptions,
};

/// Builds a fully qualified URL from a base endpoint, optional options,
/// extra path segments and explicit query parameters.
///
/// Options contribute only the keys they have set. An explicit parameter
/// whose key already came from `options` replaces that value in place;
/// other parameters are appended in order. Path segments are
/// percent-encoded and appended to the base path before the query string.
///
/// # Example
/// ```
/// use poe_api::api::build_url;
/// use poe_api::models::{Realm, RealmOptions};
///
/// let options = RealmOptions::new(Realm::Xbox);
/// let url = build_url(
///     "https://api.example.com/character-window/get-characters",
///     Some(&options),
///     &[],
///     &[("accountName", "some_account")],
/// )
/// .unwrap();
/// assert_eq!(
///     url,
///     "https://api.example.com/character-window/get-characters?realm=xbox&accountName=some_account"
/// );
/// ```
pub fn build_url(
    base: &str,
    options: Option<&dyn QueryOptions>,
    path_segments: &[&str],
    params: &[(&str, &str)],
) -> Result<String, AppError> {
    let mut url = Url::parse(base).map_err(|e| AppError::invalid_url(base, e.to_string()))?;

    if !path_segments.is_empty() {
        url.path_segments_mut()
            .map_err(|_| AppError::invalid_url(base, "URL cannot have path segments"))?
            .pop_if_empty()
            .extend(path_segments);
    }

    let mut pairs: Vec<(String, String)> = options
        .map(|options| {
            options
                .query_pairs()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect()
        })
        .unwrap_or_default();

    for (key, value) in params {
        match pairs.iter_mut().find(|(existing, _)| existing == key) {
            Some(pair) => pair.1 = value.to_string(),
            None => pairs.push((key.to_string(), value.to_string())),
        }
    }

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url.into())
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Builds the item overview URL. The language defaults to English.
///
/// # Example
/// ```
/// use poe_api::api::item_overview_url;
/// use poe_api::models::ItemType;
///
/// let url = item_overview_url("https://poe.ninja", "Standard", ItemType::Currency, None).unwrap();
/// assert_eq!(
///     url,
///     "https://poe.ninja/api/data/ItemOverview?league=Standard&type=Currency&language=en"
/// );
/// ```
pub fn item_overview_url(
    ninja_base: &str,
    league: &str,
    item_type: ItemType,
    language: Option<LanguageCode>,
) -> Result<String, AppError> {
    build_url(
        &endpoint(ninja_base, endpoints::ITEM_OVERVIEW_PATH),
        None,
        &[],
        &[
            ("league", league),
            ("type", item_type.as_str()),
            ("language", language.unwrap_or_default().as_str()),
        ],
    )
}

/// Builds the price history URL of a single item.
pub fn item_history_url(
    ninja_base: &str,
    league: &str,
    item_type: ItemType,
    item_id: i64,
) -> Result<String, AppError> {
    build_url(
        &endpoint(ninja_base, endpoints::ITEM_HISTORY_PATH),
        None,
        &[],
        &[
            ("league", league),
            ("type", item_type.as_str()),
            ("itemId", &item_id.to_string()),
        ],
    )
}

/// Builds the character list URL of an account.
pub fn characters_url(
    api_base: &str,
    account_name: &str,
    options: Option<&RealmOptions>,
) -> Result<String, AppError> {
    build_url(
        &endpoint(api_base, endpoints::GET_CHARACTERS_PATH),
        options.map(|o| o as &dyn QueryOptions),
        &[],
        &[("accountName", account_name)],
    )
}

/// Builds the inventory URL of a character.
pub fn character_items_url(
    api_base: &str,
    account_name: &str,
    character: &str,
    options: Option<&RealmOptions>,
) -> Result<String, AppError> {
    build_url(
        &endpoint(api_base, endpoints::GET_ITEMS_PATH),
        options.map(|o| o as &dyn QueryOptions),
        &[],
        &[("accountName", account_name), ("character", character)],
    )
}

/// Builds the passive tree URL of a character.
///
/// `reqData=0` skips the static tree data the website would otherwise embed.
pub fn passive_skills_url(
    web_base: &str,
    account_name: &str,
    character: &str,
    options: Option<&RealmOptions>,
) -> Result<String, AppError> {
    build_url(
        &endpoint(web_base, endpoints::GET_PASSIVE_SKILLS_PATH),
        options.map(|o| o as &dyn QueryOptions),
        &[],
        &[
            ("accountName", account_name),
            ("character", character),
            ("reqData", "0"),
        ],
    )
}

/// Builds the atlas skill tree URL. The server answers with a redirect.
pub fn atlas_skill_tree_url(
    web_base: &str,
    account_name: &str,
    realm: Realm,
    league: &str,
) -> Result<String, AppError> {
    build_url(
        &endpoint(web_base, endpoints::VIEW_ATLAS_SKILL_TREE_PATH),
        None,
        &[],
        &[
            ("accountName", account_name),
            ("realm", realm.as_str()),
            ("league", league),
        ],
    )
}

/// Builds the season list URL.
pub fn seasons_url(web_base: &str, options: Option<&SeasonOptions>) -> Result<String, AppError> {
    build_url(
        &endpoint(web_base, endpoints::SEASONS_PATH),
        options.map(|o| o as &dyn QueryOptions),
        &[],
        &[],
    )
}

/// Builds the season history URL of an account.
pub fn player_history_url(
    web_base: &str,
    season_id: &str,
    account_name: &str,
    options: Option<&PlayerHistoryOptions>,
) -> Result<String, AppError> {
    build_url(
        &endpoint(web_base, endpoints::SEASON_PLAYER_HISTORY_PATH),
        options.map(|o| o as &dyn QueryOptions),
        &[],
        &[("seasonId", season_id), ("id", account_name)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LeagueTypeOptions {
        league: Option<&'static str>,
        item_type: Option<&'static str>,
    }

    impl QueryOptions for LeagueTypeOptions {
        fn query_pairs(&self) -> Vec<(&'static str, String)> {
            let mut pairs = Vec::new();
            if let Some(league) = self.league {
                pairs.push(("league", league.to_string()));
            }
            if let Some(item_type) = self.item_type {
                pairs.push(("type", item_type.to_string()));
            }
            pairs
        }
    }

    #[test]
    fn test_build_url_options_then_params() {
        let options = LeagueTypeOptions {
            league: Some("Standard"),
            item_type: Some("Currency"),
        };
        let url = build_url(
            "https://poe.ninja/api/data/ItemOverview",
            Some(&options),
            &[],
            &[("language", "en")],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://poe.ninja/api/data/ItemOverview?league=Standard&type=Currency&language=en"
        );
    }

    #[test]
    fn test_build_url_override_keeps_position() {
        let options = LeagueTypeOptions {
            league: Some("Standard"),
            item_type: Some("Currency"),
        };
        let url = build_url(
            "https://poe.ninja/api/data/ItemOverview",
            Some(&options),
            &[],
            &[("league", "Hardcore")],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://poe.ninja/api/data/ItemOverview?league=Hardcore&type=Currency"
        );
    }

    #[test]
    fn test_build_url_absent_options_are_omitted() {
        let options = LeagueTypeOptions {
            league: None,
            item_type: Some("Oil"),
        };
        let url = build_url("https://poe.ninja/x", Some(&options), &[], &[]).unwrap();
        assert_eq!(url, "https://poe.ninja/x?type=Oil");
    }

    #[test]
    fn test_build_url_without_query() {
        let url = build_url("https://www.pathofexile.com/api/seasons", None, &[], &[]).unwrap();
        assert_eq!(url, "https://www.pathofexile.com/api/seasons");
    }

    #[test]
    fn test_build_url_appends_path_segments_before_query() {
        let url = build_url(
            "https://www.pathofexile.com/api/ladders",
            None,
            &["Standard", "Hardcore SSF"],
            &[("limit", "20")],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://www.pathofexile.com/api/ladders/Standard/Hardcore%20SSF?limit=20"
        );
    }

    #[test]
    fn test_build_url_encodes_query_values() {
        let url = build_url(
            "https://poe.ninja/api/data/ItemOverview",
            None,
            &[],
            &[("league", "Settlers of Kalguur"), ("type", "a&b=c")],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://poe.ninja/api/data/ItemOverview?league=Settlers+of+Kalguur&type=a%26b%3Dc"
        );
    }

    #[test]
    fn test_build_url_invalid_base() {
        let result = build_url("not a url", None, &[], &[]);
        assert!(matches!(result, Err(AppError::InvalidUrl { .. })));
    }

    #[test]
    fn test_item_overview_url_default_language() {
        let url =
            item_overview_url("https://poe.ninja", "Standard", ItemType::Currency, None).unwrap();
        assert!(url.contains("league=Standard&type=Currency&language=en"));
    }

    #[test]
    fn test_item_overview_url_explicit_language() {
        let url = item_overview_url(
            "https://poe.ninja/",
            "Standard",
            ItemType::DivinationCard,
            Some(LanguageCode::Ru),
        )
        .unwrap();
        assert_eq!(
            url,
            "https://poe.ninja/api/data/ItemOverview?league=Standard&type=DivinationCard&language=ru"
        );
    }

    #[test]
    fn test_item_history_url() {
        let url = item_history_url("https://poe.ninja", "Standard", ItemType::Currency, 22).unwrap();
        assert_eq!(
            url,
            "https://poe.ninja/api/data/ItemHistory?league=Standard&type=Currency&itemId=22"
        );
    }

    #[test]
    fn test_characters_url_with_and_without_realm() {
        let url = characters_url("https://api.pathofexile.com", "Some_Account", None).unwrap();
        assert_eq!(
            url,
            "https://api.pathofexile.com/character-window/get-characters?accountName=Some_Account"
        );

        let options = RealmOptions::new(Realm::Sony);
        let url =
            characters_url("https://api.pathofexile.com", "Some_Account", Some(&options)).unwrap();
        assert_eq!(
            url,
            "https://api.pathofexile.com/character-window/get-characters?realm=sony&accountName=Some_Account"
        );
    }

    #[test]
    fn test_character_items_url() {
        let url = character_items_url("https://api.pathofexile.com", "acc", "MyChar", None).unwrap();
        assert_eq!(
            url,
            "https://api.pathofexile.com/character-window/get-items?accountName=acc&character=MyChar"
        );
    }

    #[test]
    fn test_passive_skills_url_requests_no_tree_data() {
        let url = passive_skills_url("https://www.pathofexile.com", "acc", "MyChar", None).unwrap();
        assert_eq!(
            url,
            "https://www.pathofexile.com/character-window/get-passive-skills?accountName=acc&character=MyChar&reqData=0"
        );
    }

    #[test]
    fn test_atlas_skill_tree_url() {
        let url =
            atlas_skill_tree_url("https://www.pathofexile.com", "acc", Realm::Pc, "Standard").unwrap();
        assert_eq!(
            url,
            "https://www.pathofexile.com/character-window/view-atlas-skill-tree?accountName=acc&realm=pc&league=Standard"
        );
    }

    #[test]
    fn test_seasons_url() {
        let url = seasons_url("https://www.pathofexile.com", None).unwrap();
        assert_eq!(url, "https://www.pathofexile.com/api/seasons");

        let options = SeasonOptions {
            realm: Some(Realm::Pc),
            limit: Some(5),
            offset: None,
        };
        let url = seasons_url("https://www.pathofexile.com", Some(&options)).unwrap();
        assert_eq!(url, "https://www.pathofexile.com/api/seasons?realm=pc&limit=5");
    }

    #[test]
    fn test_player_history_url() {
        let url =
            player_history_url("https://www.pathofexile.com", "Season13", "acc", None).unwrap();
        assert_eq!(
            url,
            "https://www.pathofexile.com/api/season-player-history?seasonId=Season13&id=acc"
        );
    }
}
