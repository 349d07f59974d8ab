//! CLI configuration management.
//!
//! Optional picker settings read from `~/.rolodex/config.json`. Command
//! line flags override anything set here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Debounce window applied to the filter query when nothing else is set.
pub const DEFAULT_DELAY_MS: u64 = 300;

/// Grace window between losing focus and hiding the suggestion list.
pub const DEFAULT_CLOSE_GRACE_MS: u64 = 100;

/// Persistent CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Debounce window for the filter query, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
    /// Close grace window, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_grace_ms: Option<u64>,
    /// Roster JSON file loaded instead of the built-in roster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster: Option<PathBuf>,
}

impl CliConfig {
    /// Path to the config directory: `~/.rolodex/`.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".rolodex"))
    }

    /// Path to the config file: `~/.rolodex/config.json`.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.json"))
    }

    /// Load config from disk. Returns default if file doesn't exist or is invalid.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_sets_nothing() {
        let cfg = CliConfig::default();
        assert!(cfg.delay_ms.is_none());
        assert!(cfg.close_grace_ms.is_none());
        assert!(cfg.roster.is_none());
    }

    #[test]
    fn config_roundtrip_json() {
        let cfg = CliConfig {
            delay_ms: Some(150),
            close_grace_ms: Some(50),
            roster: Some(PathBuf::from("/tmp/people.json")),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let loaded: CliConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.delay_ms, Some(150));
        assert_eq!(loaded.close_grace_ms, Some(50));
        assert_eq!(
            loaded.roster.as_deref(),
            Some(std::path::Path::new("/tmp/people.json"))
        );
    }

    #[test]
    fn unset_fields_are_omitted_from_json() {
        let cfg = CliConfig {
            delay_ms: Some(150),
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(!json.contains("close_grace_ms"));
        assert!(!json.contains("roster"));
        let loaded: CliConfig = serde_json::from_str(&json).unwrap();
        assert!(loaded.close_grace_ms.is_none());
    }

    #[test]
    fn partial_file_parses() {
        let loaded: CliConfig = serde_json::from_str(r#"{"delay_ms": 200}"#).unwrap();
        assert_eq!(loaded.delay_ms, Some(200));
        assert!(loaded.roster.is_none());
    }

    #[test]
    fn config_path_contains_rolodex() {
        if let Some(path) = CliConfig::config_path() {
            assert!(path.to_string_lossy().contains(".rolodex"));
            assert!(path.to_string_lossy().contains("config.json"));
        }
    }
}
