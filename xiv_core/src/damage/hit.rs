//! PreparedHit - every stage multiplier of one hit, resolved from buffed stats
//!
//! Resolving is the fallible part (table lookups, precondition checks).
//! Combining is infallible integer arithmetic, so a prepared hit can be
//! evaluated many times with different crit/DH outcomes and random draws.
//! A DoT snapshot is exactly this: stats and chances fixed at application,
//! outcomes rolled per tick.

use super::calculation::{random_variance, RANDOM_VARIANCE_IDENTITY};
use crate::buff::{apply_crit_chance_buffs, apply_damage_multipliers, apply_dh_chance_buffs, apply_stat_buffs, Buff};
use crate::error::{CalcError, CalcResult};
use crate::modifiers::{
    attack_power_mod, auto_attack_mod, crit_damage_mod, crit_rate, determination_mod,
    direct_hit_rate, floor_div, forced_direct_hit_determination, job_trait_mod, speed_mod,
    tenacity_mod_dps, weapon_damage_mod,
};
use crate::stats::{Player, StatTableProvider};
use crate::types::{CritType, DHType, Role};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identity for the crit and direct hit stages
pub const OUTCOME_SCALE: i64 = 1_000_000;
/// Direct hit multiplier, scaled by 1000
pub const DIRECT_HIT_MULTIPLIER: i64 = 1250;
/// Largest accepted potency
///
/// Keeps every fixed-point stage product inside i64 for any in-range stats
/// and buff stack.
pub const MAX_POTENCY: i64 = 100_000;

/// Which combination order a hit follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageKind {
    /// Spells, weaponskills and abilities that hit once
    Direct,
    /// One tick of a damage-over-time effect
    DamageOverTime,
    /// Auto-attack
    AutoAttack,
}

/// Stage multipliers for one hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitModifiers {
    /// Attack power, x100
    pub attack: i64,
    /// Determination, x1000
    pub determination: i64,
    /// Determination bonus applied on a forced direct hit, x1000
    pub forced_dh_determination: i64,
    /// Tenacity, x1000 (1000 for non-tanks)
    pub tenacity: i64,
    /// Weapon damage (or auto-attack modifier for autos), x100
    pub weapon: i64,
    /// Job trait, x100
    pub job_trait: i64,
    /// Speed, x1000 (1000 for direct hits)
    pub speed: i64,
    /// Critical hit multiplier, x1000
    pub crit_damage: i64,
    /// Base crit chance from stats, permille
    pub crit_rate: i64,
    /// Base direct hit chance from stats, permille
    pub dh_rate: i64,
}

/// One rolled damage instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampledHit {
    pub damage: i64,
    pub crit: bool,
    pub direct_hit: bool,
    pub random_variance: i64,
}

/// A hit with all stat and buff dependent work done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedHit {
    kind: DamageKind,
    role: Role,
    potency: i64,
    modifiers: HitModifiers,
    /// Crit chance added by buffs only, permille
    buff_crit: i64,
    /// Direct hit chance added by buffs only, permille
    buff_dh: i64,
    /// Damage buff deltas in application order
    damage_deltas: Vec<i64>,
}

impl PreparedHit {
    /// Resolve every modifier for `player` under `buffs`
    ///
    /// The player's stats are cloned before stat buffs run.
    pub fn new(
        tables: &(impl StatTableProvider + ?Sized),
        kind: DamageKind,
        potency: i64,
        player: &Player,
        buffs: &[Buff],
    ) -> CalcResult<Self> {
        if potency < 0 {
            return Err(CalcError::NegativePotency(potency));
        }
        if potency > MAX_POTENCY {
            return Err(CalcError::PotencyTooLarge(potency));
        }

        let job = player.job;
        let level_mods = tables.level_modifiers(player.stats.level)?;
        let job_attrs = tables.job_attributes(job)?;
        let buffed = apply_stat_buffs(&player.stats, buffs);

        let offensive_stat = job.offensive_stat();
        let weapon = match kind {
            DamageKind::AutoAttack => auto_attack_mod(&player.weapon, job_attrs, level_mods)?,
            _ => weapon_damage_mod(player.weapon.damage, job_attrs, offensive_stat, level_mods)?,
        };
        let speed = match kind {
            DamageKind::Direct => 1000,
            DamageKind::DamageOverTime => speed_mod(buffed.speed(job.dot_category()), level_mods),
            // Autos always scale with skill speed
            DamageKind::AutoAttack => speed_mod(buffed.skill_speed, level_mods),
        };
        let tenacity = if job.is_tank() {
            tenacity_mod_dps(buffed.tenacity, level_mods)
        } else {
            1000
        };

        let modifiers = HitModifiers {
            attack: attack_power_mod(buffed.get(offensive_stat), job, level_mods),
            determination: determination_mod(buffed.determination, level_mods),
            forced_dh_determination: forced_direct_hit_determination(buffed.direct_hit, level_mods),
            tenacity,
            weapon,
            job_trait: job_trait_mod(job),
            speed,
            crit_damage: crit_damage_mod(buffed.critical_hit, level_mods),
            crit_rate: crit_rate(buffed.critical_hit, level_mods),
            dh_rate: direct_hit_rate(buffed.direct_hit, level_mods),
        };
        log::trace!("{} {:?} potency {}: {:?}", job, kind, potency, modifiers);

        Ok(PreparedHit {
            kind,
            role: job.role(),
            potency,
            modifiers,
            buff_crit: apply_crit_chance_buffs(0, buffs),
            buff_dh: apply_dh_chance_buffs(0, buffs),
            damage_deltas: buffs.iter().map(|b| b.damage_multiplier_delta).collect(),
        })
    }

    pub fn kind(&self) -> DamageKind {
        self.kind
    }

    pub fn potency(&self) -> i64 {
        self.potency
    }

    pub fn modifiers(&self) -> &HitModifiers {
        &self.modifiers
    }

    /// Total crit chance (stats + buffs), permille
    pub fn crit_chance(&self) -> i64 {
        self.modifiers.crit_rate + self.buff_crit
    }

    /// Total direct hit chance (stats + buffs), permille
    pub fn dh_chance(&self) -> i64 {
        self.modifiers.dh_rate + self.buff_dh
    }

    /// Determination for a hit, including the forced direct hit bonus
    pub fn determination(&self, dh: DHType) -> i64 {
        match dh {
            DHType::ForcedDirectHit => {
                self.modifiers.determination + self.modifiers.forced_dh_determination
            }
            _ => self.modifiers.determination,
        }
    }

    /// Crit stage multiplier, x1,000,000
    pub fn crit_mod(&self, crit: CritType) -> i64 {
        let crit_damage = self.modifiers.crit_damage;
        match crit {
            CritType::Normal => OUTCOME_SCALE,
            CritType::Crit => 1000 * crit_damage,
            // Only buff-granted chance raises a guaranteed crit
            CritType::ForcedCrit => {
                crit_damage * (1000 + floor_div((crit_damage - 1000) * self.buff_crit, 1000))
            }
            CritType::Average => OUTCOME_SCALE + (crit_damage - 1000) * self.crit_chance(),
        }
    }

    /// Direct hit stage multiplier, x1,000,000
    pub fn dh_mod(&self, dh: DHType) -> i64 {
        match dh {
            DHType::Normal => OUTCOME_SCALE,
            DHType::DirectHit => 1000 * DIRECT_HIT_MULTIPLIER,
            DHType::ForcedDirectHit => {
                DIRECT_HIT_MULTIPLIER * (1000 + floor_div(250 * self.buff_dh, 1000))
            }
            DHType::Average => OUTCOME_SCALE + 250 * self.dh_chance(),
        }
    }

    /// Damage before random variance, crit and direct hit
    ///
    /// Includes the +1 that DoT ticks and autos under 100 potency receive.
    pub fn base_damage(&self, dh: DHType) -> i64 {
        let m = &self.modifiers;
        let det = self.determination(dh);
        match self.kind {
            DamageKind::Direct => {
                let d = stage(self.potency, m.attack, 100);
                let d = stage(d, det, 1000);
                let d = stage(d, m.tenacity, 1000);
                let d = stage(d, m.weapon, 100);
                stage(d, m.job_trait, 100)
            }
            DamageKind::DamageOverTime if self.role.is_magical() => {
                let d = stage(self.potency, m.weapon, 100);
                let d = stage(d, m.attack, 100);
                let d = stage(d, m.speed, 1000);
                let d = stage(d, det, 1000);
                let d = stage(d, m.tenacity, 1000);
                stage(d, m.job_trait, 100) + self.low_potency_bonus()
            }
            DamageKind::DamageOverTime | DamageKind::AutoAttack => {
                // Physical DoTs and autos share the operand order; only the
                // weapon term differs, and that was chosen in `new`
                let d = stage(self.potency, m.attack, 100);
                let d = stage(d, det, 1000);
                let d = stage(d, m.tenacity, 1000);
                let d = stage(d, m.speed, 1000);
                let d = stage(d, m.weapon, 100);
                stage(d, m.job_trait, 100) + self.low_potency_bonus()
            }
        }
    }

    /// Final damage for one crit/DH resolution and one random draw
    pub fn damage(&self, crit: CritType, dh: DHType, random_variance: i64) -> i64 {
        let base = self.base_damage(dh);
        let crit_mod = self.crit_mod(crit);
        let dh_mod = self.dh_mod(dh);

        let d = match self.kind {
            DamageKind::Direct | DamageKind::AutoAttack => {
                let d = stage(base, crit_mod, OUTCOME_SCALE);
                let d = stage(d, dh_mod, OUTCOME_SCALE);
                stage(d, random_variance, RANDOM_VARIANCE_IDENTITY)
            }
            // DoT ticks draw variance before crit and direct hit
            DamageKind::DamageOverTime => {
                let d = stage(base, random_variance, RANDOM_VARIANCE_IDENTITY);
                let d = stage(d, crit_mod, OUTCOME_SCALE);
                stage(d, dh_mod, OUTCOME_SCALE)
            }
        };

        apply_damage_multipliers(d, self.damage_deltas.iter().copied())
    }

    /// Roll crit, direct hit and variance independently and compute the damage
    pub fn roll(&self, rng: &mut impl Rng) -> SampledHit {
        let direct_hit = roll_permille(rng, self.dh_chance());
        let crit = roll_permille(rng, self.crit_chance());
        let random_variance = random_variance(rng);

        let crit_type = if crit { CritType::Crit } else { CritType::Normal };
        let dh_type = if direct_hit {
            DHType::DirectHit
        } else {
            DHType::Normal
        };

        SampledHit {
            damage: self.damage(crit_type, dh_type, random_variance),
            crit,
            direct_hit,
            random_variance,
        }
    }

    fn low_potency_bonus(&self) -> i64 {
        i64::from(self.potency < 100)
    }
}

/// One fixed-point stage: floor(damage * modifier / scale)
#[inline]
fn stage(damage: i64, modifier: i64, scale: i64) -> i64 {
    floor_div(damage * modifier, scale)
}

/// True with probability `chance`/1000
fn roll_permille(rng: &mut impl Rng, chance: i64) -> bool {
    rng.gen_range(0..1000) < chance
}
