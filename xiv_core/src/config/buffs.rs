//! Buff preset loading

use super::ConfigError;
use crate::buff::{Buff, BuffPresets};
use std::collections::HashMap;
use std::path::Path;

/// Load buff presets from a TOML file (one table per preset name)
pub fn load_buff_presets(path: &Path) -> Result<BuffPresets, ConfigError> {
    let buffs: HashMap<String, Buff> = super::load_toml(path)?;
    Ok(BuffPresets::new(buffs))
}

/// Load buff presets from a TOML string
pub fn parse_buff_presets(content: &str) -> Result<BuffPresets, ConfigError> {
    let buffs: HashMap<String, Buff> = super::parse_toml(content)?;
    Ok(BuffPresets::new(buffs))
}

/// Get the bundled buff presets
pub fn default_buff_presets() -> BuffPresets {
    let toml = include_str!("../../config/buffs.toml");
    match parse_buff_presets(toml) {
        Ok(presets) => {
            log::debug!("Loaded {} buff presets", presets.len());
            presets
        }
        Err(e) => {
            log::warn!("Bundled buff presets failed to parse: {}", e);
            BuffPresets::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buff::StatMod;
    use crate::types::Stat;

    #[test]
    fn test_parse_presets() {
        let toml = r#"
[devilment]
crit = 200
dh = 200

[potion]
stats = [{ type = "flat", stat = "INT", amount = 223 }]
"#;
        let presets = parse_buff_presets(toml).unwrap();
        assert_eq!(presets.get("devilment"), Some(&Buff::new(200, 200, 0)));
        assert_eq!(
            presets.get("potion").unwrap().stat_mods,
            vec![StatMod::Flat {
                stat: Stat::Intelligence,
                amount: 223
            }]
        );
    }

    #[test]
    fn test_default_presets_loads_all() {
        let presets = default_buff_presets();
        assert_eq!(presets.len(), 35);

        assert_eq!(presets.get("searing_light"), Some(&Buff::damage(30)));
        assert_eq!(presets.get("chain_stratagem"), Some(&Buff::crit(100)));
        assert_eq!(presets.get("battle_voice"), Some(&Buff::direct_hit(200)));
        assert_eq!(presets.get("fight_or_flight"), Some(&Buff::damage(250)));
        assert_eq!(presets.get("party_bonus").unwrap().stat_mods.len(), 5);
    }
}
