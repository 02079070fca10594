//! Example player loadouts

use super::ConfigError;
use crate::stats::{Player, PlayerStats, StatTableProvider};
use crate::types::{Job, Stat, WeaponInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerEntry {
    job: Job,
    level: u32,
    /// Key into the `weapons` table
    weapon: String,
    /// Stats that differ from the level baseline, by short name
    #[serde(default)]
    stats: HashMap<String, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayersConfig {
    #[serde(default)]
    weapons: HashMap<String, WeaponInfo>,
    #[serde(default)]
    players: HashMap<String, PlayerEntry>,
}

/// Named example players, resolved against a level table
#[derive(Debug, Clone, Default)]
pub struct ExamplePlayers {
    players: HashMap<String, Player>,
}

impl ExamplePlayers {
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// Preset names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.players.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Load example players from a TOML file
pub fn load_example_players(
    path: &Path,
    tables: &(impl StatTableProvider + ?Sized),
) -> Result<ExamplePlayers, ConfigError> {
    let config: PlayersConfig = super::load_toml(path)?;
    resolve(config, tables)
}

/// Load example players from a TOML string
pub fn parse_example_players(
    content: &str,
    tables: &(impl StatTableProvider + ?Sized),
) -> Result<ExamplePlayers, ConfigError> {
    let config: PlayersConfig = super::parse_toml(content)?;
    resolve(config, tables)
}

/// Example players bundled with the crate
pub fn default_example_players(
    tables: &(impl StatTableProvider + ?Sized),
) -> Result<ExamplePlayers, ConfigError> {
    parse_example_players(include_str!("../../config/players.toml"), tables)
}

fn resolve(
    config: PlayersConfig,
    tables: &(impl StatTableProvider + ?Sized),
) -> Result<ExamplePlayers, ConfigError> {
    let mut players = HashMap::new();
    for (name, entry) in config.players {
        let weapon = config.weapons.get(&entry.weapon).copied().ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "player {} uses unknown weapon {}",
                name, entry.weapon
            ))
        })?;

        let mut stats = PlayerStats::base_for_level(tables, entry.level)?;
        for (name, value) in entry.stats {
            let stat: Stat = name.parse()?;
            stats.set(stat, value);
        }
        players.insert(name, Player::new(entry.job, stats, weapon));
    }
    log::debug!("Loaded {} example players", players.len());
    Ok(ExamplePlayers { players })
}
