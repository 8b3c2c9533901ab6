use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "poe_api";

// Platform config dir (e.g. ~/.config on Linux), or the current directory.
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
}

/// Path of `config.toml` inside the application directory.
pub fn get_config_path() -> String {
    app_dir().join("config.toml").to_string_lossy().to_string()
}

/// Log directory inside the application directory.
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().to_string()
}
