//! Configuration shared by the scanning cortexes
//!
//! Settings are serde round-trippable so the host can persist them as JSON
//! and hand them back across the WASM boundary unchanged.

use serde::{Deserialize, Serialize};

/// Settings for the navigation core
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HopSettings {
    /// Hint alphabet, in priority order for single-letter labels
    #[serde(default = "default_letters")]
    pub letters: String,
    /// Case sensitivity of the flash incremental search
    #[serde(default)]
    pub flash_case_sensitive: bool,
    /// Case sensitivity of user-pattern scans
    #[serde(default)]
    pub pattern_case_sensitive: bool,
    /// Default pattern for "jump anywhere" scans (word tokens)
    #[serde(default = "default_jump_pattern")]
    pub jump_anywhere_pattern: String,
}

fn default_letters() -> String {
    "sadfjklewcmpgh".to_string()
}

fn default_jump_pattern() -> String {
    r"[\w\d]{3,}".to_string()
}

impl Default for HopSettings {
    fn default() -> Self {
        Self {
            letters: default_letters(),
            flash_case_sensitive: false,
            pattern_case_sensitive: false,
            jump_anywhere_pattern: default_jump_pattern(),
        }
    }
}

impl HopSettings {
    /// Parse settings from the host's persisted JSON. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = HopSettings::default();
        assert_eq!(settings.letters, "sadfjklewcmpgh");
        assert!(!settings.flash_case_sensitive);
        assert!(!settings.pattern_case_sensitive);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = HopSettings::from_json(r#"{"flash_case_sensitive":true}"#).unwrap();
        assert!(settings.flash_case_sensitive);
        assert_eq!(settings.letters, "sadfjklewcmpgh");
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = HopSettings::default();
        settings.letters = "abc".to_string();
        let json = settings.to_json().unwrap();
        assert_eq!(HopSettings::from_json(&json).unwrap(), settings);
    }
}
