//! Run configuration loaded from an optional JSON file.
//!
//! ```json
//! {
//!   "policy": {
//!     "excluded_roles": ["Bomber", "Guild Master"],
//!     "ignored_fragments": ["sarge"]
//!   },
//!   "junk_markers": ["delete", "spam"]
//! }
//! ```
//!
//! Every field is optional and falls back to the built-in default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::matching::policy::ExclusionPolicy;
use crate::parsing::signups::DEFAULT_JUNK_MARKERS;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub policy: ExclusionPolicy,

    /// Sign-up lines containing any of these are dropped
    pub junk_markers: Vec<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            policy: ExclusionPolicy::default(),
            junk_markers: DEFAULT_JUNK_MARKERS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl RosterConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Export configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = RosterConfig::from_json("{}").unwrap();
        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.policy.excluded_roles, ["Bomber", "Guild Master"]);
        assert_eq!(config.policy.ignored_fragments, ["sarge"]);
    }

    #[test]
    fn test_partial_policy() {
        let json = r#"{ "policy": { "excluded_roles": ["Healer"] } }"#;
        let config = RosterConfig::from_json(json).unwrap();
        assert_eq!(config.policy.excluded_roles, ["Healer"]);
        // Unspecified lists keep their defaults
        assert_eq!(config.policy.ignored_fragments, ["sarge"]);
        assert_eq!(config.junk_markers.len(), DEFAULT_JUNK_MARKERS.len());
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut config = RosterConfig::default();
        config.junk_markers = vec!["bogus".to_string()];
        let json = config.to_json().unwrap();
        assert_eq!(RosterConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            RosterConfig::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, r#"{ "junk_markers": [] }"#).unwrap();

        let config = RosterConfig::load_from_file(&path).unwrap();
        assert!(config.junk_markers.is_empty());

        assert!(matches!(
            RosterConfig::load_from_file(&dir.path().join("absent.json")),
            Err(ConfigError::ReadError(_))
        ));
    }
}
