//! xiv_core - Fixed-point damage formulas for FFXIV-style combat
//!
//! This library provides:
//! - Stat tables: level, job and clan rows loaded from TOML
//! - Modifiers: per-stat fixed-point multipliers (determination, crit, speed, ...)
//! - Buffs: chance, damage and stat modifiers, plus named presets
//! - Damage: the staged integer pipeline for direct hits, DoT ticks and autos
//! - Sampling: Monte-Carlo damage distributions from a caller-owned RNG
//!
//! Every stage floors toward negative infinity at a fixed scale (100, 1000,
//! 10000 or 1,000,000), so results match the game's integer arithmetic.

pub mod buff;
pub mod config;
pub mod damage;
pub mod dot;
pub mod error;
pub mod modifiers;
pub mod prelude;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use buff::{Buff, BuffPresets, StatMod};
pub use config::{default_buff_presets, default_dot_registry, default_example_players, default_stat_tables, ConfigError};
pub use damage::{
    calc_action_damage, calc_auto_attack_damage, calc_dot_tick_damage, generate_sample_hits,
    multi_hit_damage_sample, random_variance, roll_action_damage, roll_auto_attack_damage,
    roll_dot_tick_damage, DamageKind, PreparedHit, SampledHit,
};
pub use dot::{ActiveDot, DotConfig, DotRegistry};
pub use error::{CalcError, CalcResult};
pub use stats::{Player, PlayerStats, StatTableProvider, StatTables};
pub use types::{ActionCategory, CritType, DHType, DamageElement, DamageType, Job, Role, Stat, WeaponInfo};
