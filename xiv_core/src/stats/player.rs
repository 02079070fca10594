//! PlayerStats - the stat snapshot fed into every calculation

use super::tables::{LevelModifiers, StatTableProvider};
use crate::error::CalcResult;
use crate::types::{ActionCategory, Job, Stat, WeaponInfo};
use serde::{Deserialize, Serialize};

/// Raw player stats at a given level
///
/// Calculations clone this before applying buffs; the caller's copy is never
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub level: u32,
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
    #[serde(rename = "DET")]
    pub determination: i64,
    #[serde(rename = "PIE")]
    pub piety: i64,
    #[serde(rename = "CRT")]
    pub critical_hit: i64,
    #[serde(rename = "DH")]
    pub direct_hit: i64,
    #[serde(rename = "SKS")]
    pub skill_speed: i64,
    #[serde(rename = "SPS")]
    pub spell_speed: i64,
    #[serde(rename = "TNC")]
    pub tenacity: i64,
}

impl PlayerStats {
    /// Unbuffed baseline for a level: `main` for attributes/DET/PIE, `sub` for the rest
    pub fn base(level_mods: &LevelModifiers) -> Self {
        let main = level_mods.main;
        let sub = level_mods.sub;
        PlayerStats {
            level: level_mods.level,
            strength: main,
            vitality: main,
            dexterity: main,
            intelligence: main,
            mind: main,
            determination: main,
            piety: main,
            critical_hit: sub,
            direct_hit: sub,
            skill_speed: sub,
            spell_speed: sub,
            tenacity: sub,
        }
    }

    /// Baseline for a level looked up in `tables`
    pub fn base_for_level(tables: &(impl StatTableProvider + ?Sized), level: u32) -> CalcResult<Self> {
        Ok(Self::base(tables.level_modifiers(level)?))
    }

    /// Naked character stats: attributes from job and clan, substats at baseline
    ///
    /// attribute = floor(main * job_attribute / 100) + clan_delta
    pub fn for_character(
        tables: &(impl StatTableProvider + ?Sized),
        level: u32,
        job: Job,
        clan: &str,
    ) -> CalcResult<Self> {
        let level_mods = tables.level_modifiers(level)?;
        let job_attrs = tables.job_attributes(job)?;
        let clan_mods = tables.clan_modifiers(clan)?;

        let mut stats = Self::base(level_mods);
        for &stat in Stat::all().iter().filter(|s| s.is_attribute()) {
            let scaled = (level_mods.main * job_attrs.get(stat)?).div_euclid(100);
            stats.set(stat, scaled + clan_mods.get(stat)?);
        }
        Ok(stats)
    }

    /// Reset every stat to the baseline of `level_mods`
    pub fn set_stats_to_base(&mut self, level_mods: &LevelModifiers) {
        *self = Self::base(level_mods);
    }

    pub fn get(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Vitality => self.vitality,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Mind => self.mind,
            Stat::Determination => self.determination,
            Stat::Piety => self.piety,
            Stat::CriticalHit => self.critical_hit,
            Stat::DirectHit => self.direct_hit,
            Stat::SkillSpeed => self.skill_speed,
            Stat::SpellSpeed => self.spell_speed,
            Stat::Tenacity => self.tenacity,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut i64 {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Vitality => &mut self.vitality,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Mind => &mut self.mind,
            Stat::Determination => &mut self.determination,
            Stat::Piety => &mut self.piety,
            Stat::CriticalHit => &mut self.critical_hit,
            Stat::DirectHit => &mut self.direct_hit,
            Stat::SkillSpeed => &mut self.skill_speed,
            Stat::SpellSpeed => &mut self.spell_speed,
            Stat::Tenacity => &mut self.tenacity,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i64) {
        *self.get_mut(stat) = value;
    }

    /// Look a stat up by its short name ("STR", "SKS", ...)
    pub fn get_by_name(&self, name: &str) -> CalcResult<i64> {
        Ok(self.get(name.parse()?))
    }

    /// Speed stat for an action category: SKS for weaponskills and autos, SPS for spells
    pub fn speed(&self, category: ActionCategory) -> i64 {
        category.speed_stat().map_or(0, |stat| self.get(stat))
    }
}

/// Everything about the attacker a calculation needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub job: Job,
    pub stats: PlayerStats,
    #[serde(default)]
    pub weapon: WeaponInfo,
}

impl Player {
    pub fn new(job: Job, stats: PlayerStats, weapon: WeaponInfo) -> Self {
        Player { job, stats, weapon }
    }
}
