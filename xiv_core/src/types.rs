//! Core enums and small value types shared by the whole crate

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Combat role, which decides attack stat, trait bonus and DoT ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Tank,
    Healer,
    Caster,
    PhysicalRanged,
    Melee,
}

impl Role {
    /// Casters and healers scale off magic attack and use the magical DoT order
    pub fn is_magical(self) -> bool {
        matches!(self, Role::Caster | Role::Healer)
    }
}

/// Combat classes and jobs, keyed by their three-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Job {
    #[serde(rename = "GLA")]
    Gladiator,
    #[serde(rename = "PGL")]
    Pugilist,
    #[serde(rename = "MRD")]
    Marauder,
    #[serde(rename = "LNC")]
    Lancer,
    #[serde(rename = "ARC")]
    Archer,
    #[serde(rename = "CNJ")]
    Conjurer,
    #[serde(rename = "THM")]
    Thaumaturge,
    #[serde(rename = "ACN")]
    Arcanist,
    #[serde(rename = "ROG")]
    Rogue,
    #[serde(rename = "PLD")]
    Paladin,
    #[serde(rename = "MNK")]
    Monk,
    #[serde(rename = "WAR")]
    Warrior,
    #[serde(rename = "DRG")]
    Dragoon,
    #[serde(rename = "BRD")]
    Bard,
    #[serde(rename = "WHM")]
    WhiteMage,
    #[serde(rename = "BLM")]
    BlackMage,
    #[serde(rename = "SMN")]
    Summoner,
    #[serde(rename = "SCH")]
    Scholar,
    #[serde(rename = "NIN")]
    Ninja,
    #[serde(rename = "MCH")]
    Machinist,
    #[serde(rename = "DRK")]
    DarkKnight,
    #[serde(rename = "AST")]
    Astrologian,
    #[serde(rename = "SAM")]
    Samurai,
    #[serde(rename = "RDM")]
    RedMage,
    #[serde(rename = "BLU")]
    BlueMage,
    #[serde(rename = "GNB")]
    Gunbreaker,
    #[serde(rename = "DNC")]
    Dancer,
    #[serde(rename = "RPR")]
    Reaper,
    #[serde(rename = "SGE")]
    Sage,
}

impl Job {
    /// Get all jobs
    pub fn all() -> &'static [Job] {
        use Job::*;
        &[
            Gladiator, Pugilist, Marauder, Lancer, Archer, Conjurer, Thaumaturge, Arcanist,
            Rogue, Paladin, Monk, Warrior, Dragoon, Bard, WhiteMage, BlackMage, Summoner,
            Scholar, Ninja, Machinist, DarkKnight, Astrologian, Samurai, RedMage, BlueMage,
            Gunbreaker, Dancer, Reaper, Sage,
        ]
    }

    /// Three-letter job code
    pub fn code(self) -> &'static str {
        use Job::*;
        match self {
            Gladiator => "GLA",
            Pugilist => "PGL",
            Marauder => "MRD",
            Lancer => "LNC",
            Archer => "ARC",
            Conjurer => "CNJ",
            Thaumaturge => "THM",
            Arcanist => "ACN",
            Rogue => "ROG",
            Paladin => "PLD",
            Monk => "MNK",
            Warrior => "WAR",
            Dragoon => "DRG",
            Bard => "BRD",
            WhiteMage => "WHM",
            BlackMage => "BLM",
            Summoner => "SMN",
            Scholar => "SCH",
            Ninja => "NIN",
            Machinist => "MCH",
            DarkKnight => "DRK",
            Astrologian => "AST",
            Samurai => "SAM",
            RedMage => "RDM",
            BlueMage => "BLU",
            Gunbreaker => "GNB",
            Dancer => "DNC",
            Reaper => "RPR",
            Sage => "SGE",
        }
    }

    pub fn role(self) -> Role {
        use Job::*;
        match self {
            Gladiator | Marauder | Paladin | Warrior | DarkKnight | Gunbreaker => Role::Tank,
            Conjurer | WhiteMage | Scholar | Astrologian | Sage => Role::Healer,
            Thaumaturge | BlackMage | Arcanist | Summoner | RedMage | BlueMage => Role::Caster,
            Archer | Bard | Machinist | Dancer => Role::PhysicalRanged,
            Lancer | Pugilist | Rogue | Dragoon | Monk | Ninja | Samurai | Reaper => Role::Melee,
        }
    }

    pub fn is_tank(self) -> bool {
        self.role() == Role::Tank
    }

    pub fn is_healer(self) -> bool {
        self.role() == Role::Healer
    }

    pub fn is_caster(self) -> bool {
        self.role() == Role::Caster
    }

    pub fn is_physical_ranged(self) -> bool {
        self.role() == Role::PhysicalRanged
    }

    pub fn is_melee(self) -> bool {
        self.role() == Role::Melee
    }

    /// Physical attack stat: DEX for ROG/NIN and the physical ranged, STR otherwise
    pub fn attack_power_stat(self) -> Stat {
        if matches!(self, Job::Rogue | Job::Ninja) || self.is_physical_ranged() {
            Stat::Dexterity
        } else {
            Stat::Strength
        }
    }

    /// Magic attack stat: MND for healers, INT otherwise
    pub fn magic_attack_stat(self) -> Stat {
        if self.is_healer() {
            Stat::Mind
        } else {
            Stat::Intelligence
        }
    }

    /// Healing magic stat: MND for healers and SMN, INT otherwise
    pub fn healing_stat(self) -> Stat {
        if self.is_healer() || self == Job::Summoner {
            Stat::Mind
        } else {
            Stat::Intelligence
        }
    }

    /// The stat that scales this job's outgoing damage
    pub fn offensive_stat(self) -> Stat {
        if self.role().is_magical() {
            self.magic_attack_stat()
        } else {
            self.attack_power_stat()
        }
    }

    /// Base auto-attack potency: 80 for the non-DNC physical ranged, 90 otherwise
    pub fn auto_attack_potency(self) -> i64 {
        match self {
            Job::Archer | Job::Bard | Job::Machinist => 80,
            _ => 90,
        }
    }

    /// Job trait damage bonus, scaled by 100
    pub fn job_trait_mod(self) -> i64 {
        match self.role() {
            Role::Healer | Role::Caster => 130,
            Role::PhysicalRanged => 120,
            Role::Tank | Role::Melee => 100,
        }
    }

    /// Category used for the speed stat of this job's DoTs
    ///
    /// No job has DoTs scaling off both speeds, so the role decides.
    pub fn dot_category(self) -> ActionCategory {
        if self.role().is_magical() {
            ActionCategory::Spell
        } else {
            ActionCategory::Weaponskill
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Job {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Job::all()
            .iter()
            .copied()
            .find(|job| job.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::InvalidJob(s.to_string()))
    }
}

/// Player attribute, addressable by its short name ("STR", "DET", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    #[serde(rename = "STR")]
    Strength,
    #[serde(rename = "VIT")]
    Vitality,
    #[serde(rename = "DEX")]
    Dexterity,
    #[serde(rename = "INT")]
    Intelligence,
    #[serde(rename = "MND")]
    Mind,
    #[serde(rename = "DET")]
    Determination,
    #[serde(rename = "PIE")]
    Piety,
    #[serde(rename = "CRT")]
    CriticalHit,
    #[serde(rename = "DH")]
    DirectHit,
    #[serde(rename = "SKS")]
    SkillSpeed,
    #[serde(rename = "SPS")]
    SpellSpeed,
    #[serde(rename = "TNC")]
    Tenacity,
}

impl Stat {
    pub fn all() -> &'static [Stat] {
        use Stat::*;
        &[
            Strength,
            Vitality,
            Dexterity,
            Intelligence,
            Mind,
            Determination,
            Piety,
            CriticalHit,
            DirectHit,
            SkillSpeed,
            SpellSpeed,
            Tenacity,
        ]
    }

    pub fn name(self) -> &'static str {
        use Stat::*;
        match self {
            Strength => "STR",
            Vitality => "VIT",
            Dexterity => "DEX",
            Intelligence => "INT",
            Mind => "MND",
            Determination => "DET",
            Piety => "PIE",
            CriticalHit => "CRT",
            DirectHit => "DH",
            SkillSpeed => "SKS",
            SpellSpeed => "SPS",
            Tenacity => "TNC",
        }
    }

    /// Primary attributes are the ones job and clan tables carry
    pub fn is_attribute(self) -> bool {
        matches!(
            self,
            Stat::Strength | Stat::Vitality | Stat::Dexterity | Stat::Intelligence | Stat::Mind
        )
    }

    /// Stats whose level baseline is the `main` modifier (the rest use `sub`)
    pub fn uses_main_baseline(self) -> bool {
        self.is_attribute() || matches!(self, Stat::Determination | Stat::Piety)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::all()
            .iter()
            .copied()
            .find(|stat| stat.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::InvalidStatName(s.to_string()))
    }
}

/// Action category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    AutoAttack,
    Spell,
    Weaponskill,
    Ability,
    Item,
    LimitBreak,
    System,
}

impl ActionCategory {
    /// Whether the action is affected by a speed stat (GCD actions)
    pub fn is_skill_or_spell(self) -> bool {
        matches!(self, ActionCategory::Spell | ActionCategory::Weaponskill)
    }

    /// The speed stat this category scales with, if any
    pub fn speed_stat(self) -> Option<Stat> {
        match self {
            ActionCategory::Weaponskill | ActionCategory::AutoAttack => Some(Stat::SkillSpeed),
            ActionCategory::Spell => Some(Stat::SpellSpeed),
            _ => None,
        }
    }
}

/// Damage type of a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Slashing,
    Piercing,
    Blunt,
    Magical,
    Special,
}

impl DamageType {
    pub fn is_physical(self) -> bool {
        matches!(self, DamageType::Slashing | DamageType::Piercing | DamageType::Blunt)
    }
}

/// Elemental aspect of a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageElement {
    #[default]
    None,
    Fire,
    Earth,
    Ice,
    Water,
    Wind,
    Lightning,
}

/// How the critical hit outcome is resolved for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CritType {
    /// No critical hit
    #[default]
    Normal,
    /// Guaranteed critical hit
    Crit,
    /// Guaranteed critical hit; crit-rate buffs raise the multiplier instead
    ForcedCrit,
    /// Expected value over the crit chance
    Average,
}

/// How the direct hit outcome is resolved for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DHType {
    /// No direct hit
    #[default]
    Normal,
    /// Guaranteed direct hit
    DirectHit,
    /// Guaranteed direct hit; DH-rate buffs raise the multiplier and DH stat feeds determination
    ForcedDirectHit,
    /// Expected value over the direct hit chance
    Average,
}

/// Equipped weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponInfo {
    /// Weapon damage (physical or magical, whichever the job uses)
    #[serde(default = "default_weapon_damage")]
    pub damage: i64,
    /// Auto-attack value shown on the weapon
    #[serde(default = "default_weapon_damage")]
    pub auto_attack: i64,
    /// Auto-attack delay in hundredths of a second (312 = 3.12s)
    #[serde(default = "default_delay")]
    pub delay: i64,
}

fn default_weapon_damage() -> i64 {
    100
}

fn default_delay() -> i64 {
    300
}

impl Default for WeaponInfo {
    fn default() -> Self {
        WeaponInfo {
            damage: default_weapon_damage(),
            auto_attack: default_weapon_damage(),
            delay: default_delay(),
        }
    }
}

impl WeaponInfo {
    pub fn new(damage: i64, auto_attack: i64, delay: i64) -> Self {
        WeaponInfo {
            damage,
            auto_attack,
            delay,
        }
    }
}
