use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Season descriptor from the season list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "startAt", default)]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(rename = "endAt", default)]
    pub end_at: Option<DateTime<Utc>>,
}

impl Season {
    /// True if `now` falls inside the season. Open-ended seasons never end.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        let started = self.start_at.is_some_and(|start| start <= now);
        let not_ended = self.end_at.is_none_or(|end| now < end);
        started && not_ended
    }
}

/// Ladder standing of one account during a season.
/// Available even when the account's profile is private.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerHistory {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub entries: Vec<LadderEntry>,
}

impl PlayerHistory {
    /// Best (lowest) rank across all entries
    pub fn best_rank(&self) -> Option<u32> {
        self.entries.iter().map(|entry| entry.rank).min()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderEntry {
    pub rank: u32,
    #[serde(default)]
    pub dead: bool,
    #[serde(default)]
    pub online: bool,
    pub character: LadderCharacter,
    pub account: LadderAccount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderCharacter {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub level: u32,
    pub class: String,
    #[serde(default)]
    pub experience: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderAccount {
    pub name: String,
    #[serde(default)]
    pub realm: Option<String>,
    #[serde(default)]
    pub challenges: Option<Challenges>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenges {
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn season(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Season {
        Season {
            id: "Season1".to_string(),
            description: None,
            url: None,
            start_at: start,
            end_at: end,
        }
    }

    #[test]
    fn test_season_dates_parse_rfc3339() {
        let json = r#"{"id": "Season13", "startAt": "2016-06-03T20:00:00Z", "endAt": null}"#;
        let season: Season = serde_json::from_str(json).unwrap();
        assert_eq!(
            season.start_at,
            Some(Utc.with_ymd_and_hms(2016, 6, 3, 20, 0, 0).unwrap())
        );
        assert_eq!(season.end_at, None);
    }

    #[test]
    fn test_is_active_at() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let during = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();

        assert!(season(Some(start), Some(end)).is_active_at(during));
        assert!(!season(Some(start), Some(end)).is_active_at(after));
        assert!(!season(Some(start), Some(end)).is_active_at(end));
        assert!(season(Some(start), None).is_active_at(after));
        assert!(!season(None, None).is_active_at(during));
    }

    #[test]
    fn test_best_rank() {
        let history: PlayerHistory = serde_json::from_str(
            r#"{"total": 2, "entries": [
                {"rank": 40, "character": {"name": "A", "level": 90, "class": "Witch"}, "account": {"name": "acc"}},
                {"rank": 7, "dead": true, "character": {"name": "B", "level": 95, "class": "Duelist"}, "account": {"name": "acc"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(history.best_rank(), Some(7));
        assert!(history.entries[1].dead);

        let empty: PlayerHistory = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.best_rank(), None);
    }
}
