//! Stat tables and player stat snapshots

mod player;
mod tables;

pub use player::{Player, PlayerStats};
pub use tables::{ClanModifiers, JobAttributes, LevelModifiers, StatTableProvider, StatTables};
