//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use scanner_core::MessageLog;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// RON world snapshot; the bundled demo world when unset.
    pub world_path: Option<PathBuf>,
    /// TOML navigator settings; defaults when unset.
    pub config_path: Option<PathBuf>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// Number of announcements kept for history.
    pub history_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            world_path: None,
            config_path: None,
            session_id: None,
            log_dir: None,
            history_capacity: MessageLog::DEFAULT_CAPACITY,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCANNER_WORLD` - World snapshot file (default: bundled demo)
    /// - `SCANNER_CONFIG` - Navigator settings file (default: built-in defaults)
    /// - `SCANNER_SESSION_ID` - Log session name (default: timestamp)
    /// - `SCANNER_LOG_DIR` - Log root directory (default: platform cache dir)
    /// - `SCANNER_HISTORY` - Announcement history capacity (default: 64)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        config.world_path = path("SCANNER_WORLD");
        config.config_path = path("SCANNER_CONFIG");
        config.log_dir = path("SCANNER_LOG_DIR");
        config.session_id = lookup("SCANNER_SESSION_ID").filter(|v| !v.is_empty());

        if let Some(capacity) = read_env::<usize>(&lookup, "SCANNER_HISTORY") {
            config.history_capacity = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
