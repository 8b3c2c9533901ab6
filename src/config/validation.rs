use crate::error::AppError;

/// Validates a base URL setting.
///
/// Base URLs must carry an explicit `http://` or `https://` scheme and a
/// host; everything else the URL builder would reject later anyway.
pub fn validate_base_url(name: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or_else(|| {
            AppError::config_error(format!("{name} must start with http:// or https://"))
        })?;

    if rest.trim_matches('/').is_empty() {
        return Err(AppError::config_error(format!("{name} is missing a host")));
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Every base URL must be an http(s) URL with a host
/// - A session id, when set, cannot be empty or contain whitespace
/// - The HTTP timeout must be positive
/// - If log file path is provided, it cannot be empty
///
/// Validation never touches the filesystem; the log directory is created by
/// whoever installs the log writer.
pub fn validate_config(config: &super::Config) -> Result<(), AppError> {
    validate_base_url("ninja_base_url", &config.ninja_base_url)?;
    validate_base_url("api_base_url", &config.api_base_url)?;
    validate_base_url("web_base_url", &config.web_base_url)?;

    if let Some(session_id) = &config.session_id {
        if session_id.is_empty() {
            return Err(AppError::config_error("Session id cannot be empty"));
        }
        if session_id.chars().any(char::is_whitespace) {
            return Err(AppError::config_error("Session id cannot contain whitespace"));
        }
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if config.log_file_path.as_ref().is_some_and(|p| p.is_empty()) {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
