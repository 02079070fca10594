//! Prelude module for convenient imports
//!
//! ```rust
//! use xiv_core::prelude::*;
//! ```

// Core types
pub use crate::types::{ActionCategory, CritType, DHType, Job, Role, Stat, WeaponInfo};
pub use crate::error::{CalcError, CalcResult};

// Stats
pub use crate::stats::{Player, PlayerStats, StatTableProvider, StatTables};

// Buffs
pub use crate::buff::{Buff, BuffPresets, StatMod};

// Damage system
pub use crate::damage::{
    calc_action_damage, calc_auto_attack_damage, calc_dot_tick_damage, generate_sample_hits,
    roll_action_damage, DamageKind, PreparedHit,
};

// DoT system
pub use crate::dot::{ActiveDot, DotConfig, DotRegistry};

// Config
pub use crate::config::{default_buff_presets, default_dot_registry, default_example_players, default_stat_tables};
