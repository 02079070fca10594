//! DoT configuration loading

use super::ConfigError;
use crate::damage::MAX_POTENCY;
use crate::dot::{DotConfig, DotRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DotsConfig {
    #[serde(default)]
    dot_types: Vec<DotConfig>,
}

/// Load DoT configurations from a TOML file
pub fn load_dot_configs(path: &Path) -> Result<DotRegistry, ConfigError> {
    let config: DotsConfig = super::load_toml(path)?;
    build(config)
}

/// Load DoT configurations from a TOML string
pub fn parse_dot_configs(content: &str) -> Result<DotRegistry, ConfigError> {
    let config: DotsConfig = super::parse_toml(content)?;
    build(config)
}

/// DoTs bundled with the crate (level 90 potencies)
pub fn default_dot_registry() -> Result<DotRegistry, ConfigError> {
    parse_dot_configs(include_str!("../../config/dots.toml"))
}

fn build(config: DotsConfig) -> Result<DotRegistry, ConfigError> {
    let mut registry = DotRegistry::new();
    for dot in config.dot_types {
        if !(0..=MAX_POTENCY).contains(&dot.potency) {
            return Err(ConfigError::ValidationError(format!(
                "DoT {} has out-of-range potency {}",
                dot.id, dot.potency
            )));
        }
        if dot.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationError(format!(
                "DoT {} has a zero tick interval",
                dot.id
            )));
        }
        registry.register(dot);
    }
    log::debug!("Loaded {} DoT types", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dot::DEFAULT_TICK_INTERVAL_MS;
    use crate::types::Job;

    #[test]
    fn test_parse_dots() {
        let toml = r#"
[[dot_types]]
id = "demolish"
name = "Demolish"
job = "MNK"
potency = 70
duration_ms = 18000

[[dot_types]]
id = "slow"
name = "Slow"
job = "BRD"
potency = 20
duration_ms = 45000
tick_interval_ms = 5000
"#;
        let registry = parse_dot_configs(toml).unwrap();
        let demolish = registry.get("demolish").unwrap();
        assert_eq!(demolish.job, Job::Monk);
        assert_eq!(demolish.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(demolish.tick_count(), 6);
        assert_eq!(registry.get("slow").unwrap().tick_count(), 9);
    }

    #[test]
    fn test_rejects_bad_dots() {
        let negative = "[[dot_types]]\nid = \"x\"\nname = \"X\"\njob = \"BRD\"\npotency = -1\nduration_ms = 3000\n";
        assert!(matches!(
            parse_dot_configs(negative),
            Err(ConfigError::ValidationError(_))
        ));

        let huge = "[[dot_types]]\nid = \"x\"\nname = \"X\"\njob = \"BRD\"\npotency = 100001\nduration_ms = 3000\n";
        assert!(matches!(
            parse_dot_configs(huge),
            Err(ConfigError::ValidationError(_))
        ));

        let zero = "[[dot_types]]\nid = \"x\"\nname = \"X\"\njob = \"BRD\"\npotency = 10\nduration_ms = 3000\ntick_interval_ms = 0\n";
        assert!(matches!(
            parse_dot_configs(zero),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_default_registry() {
        let registry = default_dot_registry().unwrap();
        assert_eq!(registry.get("biolysis").unwrap().potency, 70);
        assert!(!registry.for_job(Job::Scholar).is_empty());
        assert!(!registry.for_job(Job::Dragoon).is_empty());
        assert!(!registry.for_job(Job::BlackMage).is_empty());
    }
}
