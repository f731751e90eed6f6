//! podfleet.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetConfig {
    #[serde(default)]
    pub rollout: RolloutConfig,
}

/// Controller-wide defaults applied to daemon sets that do not set their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolloutConfig {
    /// Seconds a pod must stay ready before it counts as available.
    #[serde(default)]
    pub min_ready_seconds: u32,
    /// Pods allowed to be unavailable at once during a rolling update.
    #[serde(default = "default_max_unavailable")]
    pub max_unavailable: u32,
}

fn default_max_unavailable() -> u32 {
    1
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            min_ready_seconds: 0,
            max_unavailable: default_max_unavailable(),
        }
    }
}

impl FleetConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: FleetConfig = toml::from_str(content)?;
        if config.rollout.max_unavailable == 0 {
            anyhow::bail!("rollout.max_unavailable must be at least 1");
        }
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_empty() {
        let config = FleetConfig::from_toml_str("").unwrap();
        assert_eq!(config, FleetConfig::default());
        assert_eq!(config.rollout.max_unavailable, 1);
    }

    #[test]
    fn test_parse_rollout() {
        let toml_str = r#"
[rollout]
min_ready_seconds = 30
max_unavailable = 2
"#;
        let config = FleetConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.rollout.min_ready_seconds, 30);
        assert_eq!(config.rollout.max_unavailable, 2);
    }

    #[test]
    fn test_rejects_zero_max_unavailable() {
        let err = FleetConfig::from_toml_str("[rollout]\nmax_unavailable = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_unavailable"));
    }

    #[test]
    fn test_rejects_negative_min_ready() {
        assert!(FleetConfig::from_toml_str("[rollout]\nmin_ready_seconds = -5\n").is_err());
    }

    #[test]
    fn test_from_file_roundtrip() {
        let config = FleetConfig {
            rollout: RolloutConfig {
                min_ready_seconds: 10,
                max_unavailable: 4,
            },
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_toml_string().unwrap().as_bytes())
            .unwrap();

        let loaded = FleetConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
