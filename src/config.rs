use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::info;

use crate::game::campaign::Campaign;
use crate::game::catalog;

/// Where the campaign table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignSource {
    Builtin(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub campaign: CampaignSource,
    /// Fixed shuffle seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Typewriter delay per character.
    pub text_delay: Duration,
    /// Pause before each line of dialogue.
    pub line_pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            campaign: CampaignSource::Builtin("surveillance".into()),
            seed: None,
            text_delay: Duration::from_millis(25),
            line_pause: Duration::from_millis(400),
        }
    }
}

impl GameConfig {
    /// Read the `NTH_*` environment variables. Values that don't parse keep
    /// their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        let campaign = match (lookup("NTH_CAMPAIGN_FILE"), lookup("NTH_CAMPAIGN")) {
            (Some(path), _) if !path.trim().is_empty() => CampaignSource::File(PathBuf::from(path)),
            (_, Some(name)) if !name.trim().is_empty() => CampaignSource::Builtin(name.trim().to_string()),
            _ => defaults.campaign,
        };

        Self {
            campaign,
            seed: lookup("NTH_SEED").and_then(|s| s.trim().parse().ok()),
            text_delay: millis("NTH_TEXT_DELAY_MS", defaults.text_delay),
            line_pause: millis("NTH_LINE_PAUSE_MS", defaults.line_pause),
        }
    }

    /// Load and validate the configured campaign.
    pub fn load_campaign(&self) -> Result<Campaign> {
        let campaign = match &self.campaign {
            CampaignSource::Builtin(name) => {
                let campaign = catalog::builtin(name).ok_or_else(|| {
                    anyhow!("unknown campaign '{name}' (expected 'surveillance' or 'first-shift')")
                })?;
                campaign
                    .validate()
                    .with_context(|| format!("built-in campaign '{name}' is invalid"))?;
                campaign
            }
            CampaignSource::File(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read campaign file {}", path.display()))?;
                Campaign::from_json(&json)
                    .with_context(|| format!("failed to load campaign file {}", path.display()))?
            }
        };
        info!(
            "Loaded campaign '{}' ({} conversations)",
            campaign.name,
            campaign.all_conversations().len()
        );
        Ok(campaign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> GameConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), GameConfig::default());
    }

    #[test]
    fn test_reads_variables() {
        let config = config_from(&[
            ("NTH_CAMPAIGN", "first-shift"),
            ("NTH_SEED", "42"),
            ("NTH_TEXT_DELAY_MS", "0"),
            ("NTH_LINE_PAUSE_MS", "100"),
        ]);
        assert_eq!(config.campaign, CampaignSource::Builtin("first-shift".into()));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.text_delay, Duration::ZERO);
        assert_eq!(config.line_pause, Duration::from_millis(100));
    }

    #[test]
    fn test_file_overrides_builtin() {
        let config = config_from(&[
            ("NTH_CAMPAIGN", "first-shift"),
            ("NTH_CAMPAIGN_FILE", "/tmp/campaign.json"),
        ]);
        assert_eq!(
            config.campaign,
            CampaignSource::File(PathBuf::from("/tmp/campaign.json"))
        );
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        let config = config_from(&[("NTH_SEED", "soon"), ("NTH_TEXT_DELAY_MS", "-3")]);
        assert_eq!(config.seed, None);
        assert_eq!(config.text_delay, GameConfig::default().text_delay);
    }

    #[test]
    fn test_load_builtin_campaigns() {
        let config = config_from(&[("NTH_CAMPAIGN", "surveillance")]);
        assert!(config.load_campaign().unwrap().investigation.is_some());

        let config = config_from(&[("NTH_CAMPAIGN", "first-shift")]);
        assert!(config.load_campaign().unwrap().investigation.is_none());
    }

    #[test]
    fn test_unknown_campaign_is_an_error() {
        let config = config_from(&[("NTH_CAMPAIGN", "daydream")]);
        let err = config.load_campaign().unwrap_err();
        assert!(err.to_string().contains("daydream"));
    }

    #[test]
    fn test_missing_campaign_file_is_an_error() {
        let config = config_from(&[("NTH_CAMPAIGN_FILE", "/nonexistent/campaign.json")]);
        assert!(config.load_campaign().is_err());
    }
}
