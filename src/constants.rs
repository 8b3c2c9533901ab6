//! Application-wide constants and configuration values
//!
//! Endpoint roots, wire-format details of the atlas redirect and the
//! defaults used by [`crate::config::Config`] live here.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections kept per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Default `User-Agent` header. The vendor API rejects requests without one.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Upstream base URLs
pub mod endpoints {
    /// Economy aggregator
    pub const NINJA_BASE_URL: &str = "https://poe.ninja";

    /// Vendor JSON API host (character list, inventories)
    pub const API_BASE_URL: &str = "https://api.pathofexile.com";

    /// Vendor website host (passives, atlas, seasons, ladders)
    pub const WEB_BASE_URL: &str = "https://www.pathofexile.com";

    pub const ITEM_OVERVIEW_PATH: &str = "/api/data/ItemOverview";
    pub const ITEM_HISTORY_PATH: &str = "/api/data/ItemHistory";
    pub const GET_CHARACTERS_PATH: &str = "/character-window/get-characters";
    pub const GET_ITEMS_PATH: &str = "/character-window/get-items";
    pub const GET_PASSIVE_SKILLS_PATH: &str = "/character-window/get-passive-skills";
    pub const VIEW_ATLAS_SKILL_TREE_PATH: &str = "/character-window/view-atlas-skill-tree";
    pub const SEASONS_PATH: &str = "/api/seasons";
    pub const SEASON_PLAYER_HISTORY_PATH: &str = "/api/season-player-history";
}

/// Session cookie expected by the vendor for private profiles
pub const SESSION_COOKIE_NAME: &str = "POESESSID";

/// Atlas skill tree redirect decoding
pub mod atlas {
    /// Path prefix the vendor redirects `view-atlas-skill-tree` to
    pub const REDIRECT_PATH_PREFIX: &str = "/fullscreen-atlas-skill-tree/";

    /// Byte index of the allocated point count in the decoded payload
    /// (hex characters 12..14)
    pub const POINT_COUNT_BYTE_OFFSET: usize = 6;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the vendor session id
    pub const SESSION_ID: &str = "POE_SESSION_ID";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "POE_LOG_FILE";

    /// Environment variable for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "POE_HTTP_TIMEOUT";
}

/// Number of response characters written to the debug log
pub const RESPONSE_PREVIEW_CHARS: usize = 1024;
