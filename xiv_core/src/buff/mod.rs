//! Buffs - chance, damage and stat modifiers applied to a calculation
//!
//! All deltas are permille: a 5% damage increase is `50`, +10% crit chance is `100`.

mod engine;
mod presets;

pub use engine::{
    apply_crit_chance_buffs, apply_damage_buffs, apply_damage_multipliers, apply_dh_chance_buffs,
    apply_stat_buffs,
};
pub use presets::BuffPresets;

use crate::modifiers::floor_div;
use crate::stats::PlayerStats;
use crate::types::Stat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A buff as a plain value
///
/// Stat mods are applied in list order; an empty list leaves stats untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    /// Added crit chance, permille
    #[serde(default, rename = "crit")]
    pub crit_chance_delta: i64,
    /// Added direct hit chance, permille
    #[serde(default, rename = "dh")]
    pub dh_chance_delta: i64,
    /// Damage multiplier increase, permille
    #[serde(default, rename = "damage")]
    pub damage_multiplier_delta: i64,
    /// Stat mutations, applied in order
    #[serde(default, rename = "stats")]
    pub stat_mods: Vec<StatMod>,
}

impl Buff {
    pub fn new(crit_chance_delta: i64, dh_chance_delta: i64, damage_multiplier_delta: i64) -> Self {
        Buff {
            crit_chance_delta,
            dh_chance_delta,
            damage_multiplier_delta,
            stat_mods: Vec::new(),
        }
    }

    /// Pure damage-up buff
    pub fn damage(delta: i64) -> Self {
        Buff::new(0, 0, delta)
    }

    /// Pure crit-rate buff
    pub fn crit(delta: i64) -> Self {
        Buff::new(delta, 0, 0)
    }

    /// Pure direct-hit-rate buff
    pub fn direct_hit(delta: i64) -> Self {
        Buff::new(0, delta, 0)
    }

    /// Add a stat mutation after the existing ones
    pub fn with_stat_mod(mut self, stat_mod: StatMod) -> Self {
        self.stat_mods.push(stat_mod);
        self
    }

    /// Mutate `stats` in place with this buff's stat mods
    pub fn apply_to_stats(&self, stats: &mut PlayerStats) {
        for stat_mod in &self.stat_mods {
            stat_mod.apply(stats);
        }
    }

    pub fn has_stat_mods(&self) -> bool {
        !self.stat_mods.is_empty()
    }
}

/// One stat mutation carried by a buff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StatMod {
    /// stat += amount
    Flat { stat: Stat, amount: i64 },
    /// stat += min(floor(stat * permille / 1000), cap)
    Percent {
        stat: Stat,
        permille: i64,
        #[serde(default)]
        cap: Option<i64>,
    },
    /// Arbitrary transform; not loadable from config
    #[serde(skip)]
    Custom(StatFn),
}

impl StatMod {
    pub fn custom(f: impl Fn(&mut PlayerStats) + Send + Sync + 'static) -> Self {
        StatMod::Custom(StatFn(Arc::new(f)))
    }

    pub fn apply(&self, stats: &mut PlayerStats) {
        match self {
            StatMod::Flat { stat, amount } => {
                *stats.get_mut(*stat) += amount;
            }
            StatMod::Percent {
                stat,
                permille,
                cap,
            } => {
                let value = stats.get_mut(*stat);
                let bonus = floor_div(*value * permille, 1000);
                *value += match cap {
                    Some(cap) => bonus.min(*cap),
                    None => bonus,
                };
            }
            StatMod::Custom(f) => (f.0)(stats),
        }
    }
}

/// Shared stat transform function
#[derive(Clone)]
pub struct StatFn(pub Arc<dyn Fn(&mut PlayerStats) + Send + Sync>);

impl fmt::Debug for StatFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StatFn(..)")
    }
}

impl PartialEq for StatFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
