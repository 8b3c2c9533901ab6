use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Any non-2xx response. Callers branch on `status`.
    #[error("API request failed ({status}): {body} (URL: {url})")]
    Api {
        status: u16,
        body: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    // Atlas skill tree redirect decoding
    #[error("Redirect path does not contain an atlas skill tree: {path}")]
    AtlasMissingFragment { path: String },

    #[error("Failed to decode atlas skill tree fragment: {0}")]
    AtlasDecode(#[from] base64::DecodeError),

    #[error("Atlas skill tree payload too short: {len} bytes")]
    AtlasPayloadTooShort { len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API error from a non-success HTTP response
    pub fn api_error(status: u16, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an error for a redirect path without the atlas prefix
    pub fn atlas_missing_fragment(path: impl Into<String>) -> Self {
        Self::AtlasMissingFragment { path: path.into() }
    }

    /// HTTP status of an [`AppError::Api`] error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the upstream answered 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if the upstream refused access (private profile, bad session id)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Check if the error happened below HTTP (timeouts, refused connections)
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
        )
    }

    /// Check if the response arrived but could not be turned into the declared type
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiParse(_)
                | AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_api_error_helper() {
        let error = AppError::api_error(
            404,
            "{\"error\":{\"code\":1,\"message\":\"Resource not found\"}}",
            "https://api.pathofexile.com/character-window/get-items",
        );
        assert_eq!(error.status(), Some(404));
        assert_eq!(
            error.to_string(),
            "API request failed (404): {\"error\":{\"code\":1,\"message\":\"Resource not found\"}} \
             (URL: https://api.pathofexile.com/character-window/get-items)"
        );
    }

    #[test]
    fn test_status_only_for_api_errors() {
        assert_eq!(AppError::api_error(500, "", "url").status(), Some(500));
        assert_eq!(AppError::network_timeout("url").status(), None);
        assert_eq!(AppError::config_error("x").status(), None);
    }

    #[test]
    fn test_is_not_found() {
        assert!(AppError::api_error(404, "", "url").is_not_found());
        assert!(!AppError::api_error(403, "", "url").is_not_found());
        assert!(!AppError::api_no_data("empty", "url").is_not_found());
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(AppError::api_error(401, "", "url").is_unauthorized());
        assert!(AppError::api_error(403, "", "url").is_unauthorized());
        assert!(!AppError::api_error(404, "", "url").is_unauthorized());
    }

    #[test]
    fn test_network_timeout_helper() {
        let error = AppError::network_timeout("https://poe.ninja");
        assert!(error.is_network_error());
        assert_eq!(
            error.to_string(),
            "Network timeout while fetching data from: https://poe.ninja"
        );
    }

    #[test]
    fn test_network_connection_helper() {
        let error = AppError::network_connection("https://poe.ninja", "Connection refused");
        assert!(error.is_network_error());
        assert_eq!(
            error.to_string(),
            "Connection failed to: https://poe.ninja - Connection refused"
        );
    }

    #[test]
    fn test_parse_error_classification() {
        assert!(AppError::api_malformed_json("bad", "url").is_parse_error());
        assert!(AppError::api_unexpected_structure("bad", "url").is_parse_error());
        assert!(AppError::api_no_data("empty", "url").is_parse_error());
        assert!(!AppError::api_error(500, "", "url").is_parse_error());
        assert!(!AppError::network_timeout("url").is_parse_error());
    }

    #[test]
    fn test_invalid_url_helper() {
        let error = AppError::invalid_url("not a url", "relative URL without a base");
        assert_eq!(
            error.to_string(),
            "Invalid URL 'not a url': relative URL without a base"
        );
    }

    #[test]
    fn test_atlas_errors_display() {
        let error = AppError::atlas_missing_fragment("/account/view-profile/foo");
        assert_eq!(
            error.to_string(),
            "Redirect path does not contain an atlas skill tree: /account/view-profile/foo"
        );

        let error = AppError::AtlasPayloadTooShort { len: 4 };
        assert_eq!(error.to_string(), "Atlas skill tree payload too short: 4 bytes");
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::ApiFetch(_)));
                assert!(app_error.is_network_error());
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::ApiParse(_)));
        assert!(app_error.is_parse_error());
    }

    #[test]
    fn test_error_from_base64() {
        use base64::Engine as _;
        let decode_error = base64::engine::general_purpose::STANDARD
            .decode("A===")
            .unwrap_err();
        let app_error: AppError = decode_error.into();
        assert!(matches!(app_error, AppError::AtlasDecode(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<serde_json::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::log_setup_error("test log error"),
            AppError::api_error(500, "server error", "https://example.com"),
            AppError::network_timeout("https://example.com"),
            AppError::network_connection("https://example.com", "connection failed"),
            AppError::api_malformed_json("bad json", "https://example.com"),
            AppError::api_unexpected_structure("bad structure", "https://example.com"),
            AppError::api_no_data("no data", "https://example.com"),
            AppError::invalid_url("::", "empty host"),
            AppError::atlas_missing_fragment("/"),
            AppError::AtlasPayloadTooShort { len: 0 },
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
