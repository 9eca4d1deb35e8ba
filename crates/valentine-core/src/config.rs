//! Page configuration.
//!
//! Loaded from an optional JSON file and then overridden by CLI flags.
//! Every field has a default, so `{}` is a valid config.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GreetingError, GreetingResult};

/// What happens to hug reveals scheduled before the latest strength change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealPolicy {
    /// Only the most recent change may show the message.
    #[default]
    Latest,
    /// Every scheduled reveal shows the message when it fires.
    Every,
}

impl FromStr for RevealPolicy {
    type Err = GreetingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latest" => Ok(RevealPolicy::Latest),
            "every" => Ok(RevealPolicy::Every),
            other => Err(GreetingError::Config(format!("unknown reveal policy: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Delay between letter characters
    pub typing_delay_ms: u64,
    /// Wait after the last hug change before the message shows
    pub hug_reveal_delay_ms: u64,
    pub reveal_policy: RevealPolicy,
    /// Number of background stars in the sky section
    pub twinkle_count: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 50,
            hug_reveal_delay_ms: 2000,
            reveal_policy: RevealPolicy::Latest,
            twinkle_count: 50,
        }
    }
}

impl PageConfig {
    pub fn from_json_str(json: &str) -> GreetingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> GreetingResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn hug_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.hug_reveal_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = PageConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.typing_delay(), Duration::from_millis(50));
        assert_eq!(config.hug_reveal_delay(), Duration::from_secs(2));
    }

    #[test]
    fn partial_json_overrides_given_fields() {
        let config =
            PageConfig::from_json_str(r#"{"hug_reveal_delay_ms": 500, "reveal_policy": "every"}"#)
                .unwrap();
        assert_eq!(config.hug_reveal_delay_ms, 500);
        assert_eq!(config.reveal_policy, RevealPolicy::Every);
        assert_eq!(config.typing_delay_ms, 50);
        assert_eq!(config.twinkle_count, 50);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = PageConfig::from_json_str("{ typing_delay_ms: ").unwrap_err();
        assert!(matches!(err, GreetingError::Config(_)));

        let err = PageConfig::from_json_str(r#"{"cursor": "heart"}"#).unwrap_err();
        assert!(matches!(err, GreetingError::Config(_)));
    }

    #[test]
    fn reveal_policy_from_str() {
        assert_eq!("latest".parse::<RevealPolicy>().unwrap(), RevealPolicy::Latest);
        assert_eq!("EVERY".parse::<RevealPolicy>().unwrap(), RevealPolicy::Every);
        assert!("sometimes".parse::<RevealPolicy>().is_err());
    }
}
