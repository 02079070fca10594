//! Level, job and clan table loading

use super::ConfigError;
use crate::stats::{ClanModifiers, JobAttributes, LevelModifiers, StatTables};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelsConfig {
    levels: Vec<LevelModifiers>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JobsConfig {
    jobs: Vec<JobAttributes>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClansConfig {
    #[serde(default)]
    clans: Vec<ClanModifiers>,
}

/// Load stat tables from three TOML files
pub fn load_stat_tables(
    levels_path: &Path,
    jobs_path: &Path,
    clans_path: &Path,
) -> Result<StatTables, ConfigError> {
    let levels: LevelsConfig = super::load_toml(levels_path)?;
    let jobs: JobsConfig = super::load_toml(jobs_path)?;
    let clans: ClansConfig = super::load_toml(clans_path)?;
    build(levels, jobs, clans)
}

/// Load stat tables from three TOML strings
pub fn parse_stat_tables(levels: &str, jobs: &str, clans: &str) -> Result<StatTables, ConfigError> {
    let levels: LevelsConfig = super::parse_toml(levels)?;
    let jobs: JobsConfig = super::parse_toml(jobs)?;
    let clans: ClansConfig = super::parse_toml(clans)?;
    build(levels, jobs, clans)
}

/// Tables bundled with the crate
pub fn default_stat_tables() -> Result<StatTables, ConfigError> {
    parse_stat_tables(
        include_str!("../../config/levels.toml"),
        include_str!("../../config/jobs.toml"),
        include_str!("../../config/clans.toml"),
    )
}

fn build(levels: LevelsConfig, jobs: JobsConfig, clans: ClansConfig) -> Result<StatTables, ConfigError> {
    let tables = StatTables::new(levels.levels, jobs.jobs, clans.clans)?;
    log::debug!(
        "Loaded stat tables: levels {:?}, {} jobs",
        tables.level_range(),
        tables.jobs().count()
    );
    Ok(tables)
}
