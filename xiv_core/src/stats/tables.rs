//! Level, job and clan tables consumed by the modifier functions

use crate::config::ConfigError;
use crate::error::{CalcError, CalcResult};
use crate::types::{Job, Stat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-level scaling constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelModifiers {
    pub level: u32,
    /// Baseline for main attributes, determination and piety
    pub main: i64,
    /// Baseline for crit, direct hit, speed and tenacity
    pub sub: i64,
    /// Divisor for every substat formula, always > 0
    #[serde(rename = "div")]
    pub divisor: i64,
    #[serde(default)]
    pub hp: i64,
    #[serde(rename = "elmt", default)]
    pub elemental: i64,
    #[serde(default)]
    pub threat: i64,
}

/// Per-job attribute multipliers, scaled by 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAttributes {
    pub job: Job,
    pub job_id: u32,
    pub hp: i64,
    #[serde(rename = "STR")]
    pub strength: i64,
    #[serde(rename = "VIT")]
    pub vitality: i64,
    #[serde(rename = "DEX")]
    pub dexterity: i64,
    #[serde(rename = "INT")]
    pub intelligence: i64,
    #[serde(rename = "MND")]
    pub mind: i64,
}

impl JobAttributes {
    /// Attribute multiplier for one of STR/VIT/DEX/INT/MND
    pub fn get(&self, stat: Stat) -> CalcResult<i64> {
        match stat {
            Stat::Strength => Ok(self.strength),
            Stat::Vitality => Ok(self.vitality),
            Stat::Dexterity => Ok(self.dexterity),
            Stat::Intelligence => Ok(self.intelligence),
            Stat::Mind => Ok(self.mind),
            other => Err(CalcError::NotAnAttribute(other)),
        }
    }
}

/// Flat attribute deltas granted by a clan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClanModifiers {
    pub name: String,
    #[serde(rename = "STR")]
    pub strength: i64,
    #[serde(rename = "DEX")]
    pub dexterity: i64,
    #[serde(rename = "VIT")]
    pub vitality: i64,
    #[serde(rename = "INT")]
    pub intelligence: i64,
    #[serde(rename = "MND")]
    pub mind: i64,
}

impl ClanModifiers {
    pub fn get(&self, stat: Stat) -> CalcResult<i64> {
        match stat {
            Stat::Strength => Ok(self.strength),
            Stat::Vitality => Ok(self.vitality),
            Stat::Dexterity => Ok(self.dexterity),
            Stat::Intelligence => Ok(self.intelligence),
            Stat::Mind => Ok(self.mind),
            other => Err(CalcError::NotAnAttribute(other)),
        }
    }
}

/// Read-only source of level and job data
///
/// Implementations must not change after load; the pipeline may read them
/// from many threads at once.
pub trait StatTableProvider: Send + Sync {
    /// Level row for `level`
    fn level_modifiers(&self, level: u32) -> CalcResult<&LevelModifiers>;

    /// Attribute row for `job`
    fn job_attributes(&self, job: Job) -> CalcResult<&JobAttributes>;

    /// Clan row by clan name
    fn clan_modifiers(&self, clan: &str) -> CalcResult<&ClanModifiers>;
}

/// In-memory tables, sorted by level
#[derive(Debug, Clone, Default)]
pub struct StatTables {
    levels: Vec<LevelModifiers>,
    jobs: HashMap<Job, JobAttributes>,
    clans: HashMap<String, ClanModifiers>,
}

impl StatTables {
    /// Build tables from pre-parsed rows
    ///
    /// Rows may come in any order. Rejects an empty level table, duplicate
    /// or missing levels inside the loaded range, and non-positive divisors.
    pub fn new(
        mut levels: Vec<LevelModifiers>,
        jobs: Vec<JobAttributes>,
        clans: Vec<ClanModifiers>,
    ) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::ValidationError(
                "level table has no rows".to_string(),
            ));
        }
        levels.sort_by_key(|row| row.level);
        for pair in levels.windows(2) {
            if pair[0].level == pair[1].level {
                return Err(ConfigError::ValidationError(format!(
                    "level {} appears more than once",
                    pair[0].level
                )));
            }
            if pair[1].level != pair[0].level + 1 {
                return Err(ConfigError::ValidationError(format!(
                    "level table skips from {} to {}",
                    pair[0].level, pair[1].level
                )));
            }
        }
        if let Some(row) = levels.iter().find(|row| row.divisor <= 0) {
            return Err(ConfigError::ValidationError(format!(
                "level {} has non-positive divisor {}",
                row.level, row.divisor
            )));
        }

        let mut job_map = HashMap::new();
        for row in jobs {
            if job_map.insert(row.job, row).is_some() {
                return Err(ConfigError::ValidationError(format!(
                    "job {} appears more than once",
                    row.job
                )));
            }
        }

        let clans = clans.into_iter().map(|c| (c.name.clone(), c)).collect();

        Ok(StatTables {
            levels,
            jobs: job_map,
            clans,
        })
    }

    /// Lowest and highest loaded level
    pub fn level_range(&self) -> Option<(u32, u32)> {
        Some((self.levels.first()?.level, self.levels.last()?.level))
    }

    pub fn levels(&self) -> &[LevelModifiers] {
        &self.levels
    }

    pub fn jobs(&self) -> impl Iterator<Item = &JobAttributes> {
        self.jobs.values()
    }

    pub fn clan_names(&self) -> impl Iterator<Item = &str> {
        self.clans.keys().map(String::as_str)
    }
}

impl StatTableProvider for StatTables {
    fn level_modifiers(&self, level: u32) -> CalcResult<&LevelModifiers> {
        self.levels
            .binary_search_by_key(&level, |row| row.level)
            .map(|idx| &self.levels[idx])
            .map_err(|_| CalcError::InvalidLevel(level))
    }

    fn job_attributes(&self, job: Job) -> CalcResult<&JobAttributes> {
        self.jobs
            .get(&job)
            .ok_or_else(|| CalcError::InvalidJob(job.code().to_string()))
    }

    fn clan_modifiers(&self, clan: &str) -> CalcResult<&ClanModifiers> {
        self.clans
            .get(clan)
            .ok_or_else(|| CalcError::InvalidClan(clan.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_row(level: u32, main: i64, sub: i64, divisor: i64) -> LevelModifiers {
        LevelModifiers {
            level,
            main,
            sub,
            divisor,
            hp: 0,
            elemental: 0,
            threat: 0,
        }
    }

    #[test]
    fn test_level_lookup_is_order_independent() {
        let tables = StatTables::new(
            vec![level_row(90, 390, 400, 1900), level_row(89, 385, 398, 1840)],
            vec![],
            vec![],
        )
        .unwrap();

        assert_eq!(tables.level_range(), Some((89, 90)));
        assert_eq!(tables.level_modifiers(89).unwrap().divisor, 1840);
        assert_eq!(tables.level_modifiers(90).unwrap().main, 390);
        assert_eq!(
            tables.level_modifiers(88).unwrap_err(),
            CalcError::InvalidLevel(88)
        );
        assert_eq!(
            tables.level_modifiers(91).unwrap_err(),
            CalcError::InvalidLevel(91)
        );
    }

    #[test]
    fn test_rejects_bad_level_tables() {
        assert!(StatTables::new(vec![], vec![], vec![]).is_err());
        assert!(StatTables::new(
            vec![level_row(90, 390, 400, 1900), level_row(90, 390, 400, 1900)],
            vec![],
            vec![]
        )
        .is_err());
        assert!(StatTables::new(vec![level_row(90, 390, 400, 0)], vec![], vec![]).is_err());
        // A hole inside the range would make an in-range level unresolvable
        assert!(matches!(
            StatTables::new(
                vec![level_row(80, 340, 380, 1300), level_row(90, 390, 400, 1900)],
                vec![],
                vec![]
            ),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_job_and_clan() {
        let tables = StatTables::new(vec![level_row(90, 390, 400, 1900)], vec![], vec![]).unwrap();
        assert_eq!(
            tables.job_attributes(Job::Bard).unwrap_err(),
            CalcError::InvalidJob("BRD".to_string())
        );
        assert_eq!(
            tables.clan_modifiers("Lalafell").unwrap_err(),
            CalcError::InvalidClan("Lalafell".to_string())
        );
    }

    #[test]
    fn test_job_attribute_only_for_attributes() {
        let attrs = JobAttributes {
            job: Job::BlackMage,
            job_id: 25,
            hp: 105,
            strength: 45,
            vitality: 100,
            dexterity: 100,
            intelligence: 115,
            mind: 75,
        };
        assert_eq!(attrs.get(Stat::Intelligence).unwrap(), 115);
        assert_eq!(
            attrs.get(Stat::Determination).unwrap_err(),
            CalcError::NotAnAttribute(Stat::Determination)
        );
    }
}
