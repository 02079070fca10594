//! Offensive modifiers: attack power, weapon damage, auto-attack, job trait

use super::floor_div;
use crate::error::{CalcError, CalcResult};
use crate::stats::{JobAttributes, LevelModifiers};
use crate::types::{Job, Stat, WeaponInfo};

/// Attack power slope for a job at a level
///
/// Tanks carry a correction factor from their level 1 trait. Only levels 80
/// and 90 are confirmed for tanks; the lower bands are an approximation and
/// are kept as-is.
pub fn attack_power_coefficient(job: Job, level: u32) -> i64 {
    let level = i64::from(level);
    if job.is_tank() {
        if level > 80 {
            // Linear between the confirmed level 80 and 90 values
            115 + floor_div((level - 80) * 41, 10)
        } else if level > 70 {
            115
        } else {
            75
        }
    } else if level > 80 {
        165 + (level - 80) * 3
    } else if level > 70 {
        125 + (level - 70) * 4
    } else if level > 50 {
        75 + floor_div((level - 50) * 5, 2)
    } else {
        75
    }
}

/// Attack power (or attack magic potency) multiplier, scaled by 100
///
/// floor(coefficient * (stat - main) / main) + 100
pub fn attack_power_mod(attack_stat: i64, job: Job, level_mods: &LevelModifiers) -> i64 {
    let coefficient = attack_power_coefficient(job, level_mods.level);
    floor_div(coefficient * (attack_stat - level_mods.main), level_mods.main) + 100
}

/// Weapon damage multiplier, scaled by 100
///
/// `stat_used` is the attribute the action scales with (MND for a healer's
/// cure, STR for a dragoon's weaponskill, ...).
pub fn weapon_damage_mod(
    weapon_damage: i64,
    job_attrs: &JobAttributes,
    stat_used: Stat,
    level_mods: &LevelModifiers,
) -> CalcResult<i64> {
    let attr = job_attrs.get(stat_used)?;
    Ok(floor_div(level_mods.main * attr, 1000) + weapon_damage)
}

/// Auto-attack multiplier, scaled by 100
///
/// Weapon damage term scaled by the weapon's delay relative to 3.00s. Always
/// uses the job's physical attack attribute, even for casters.
pub fn auto_attack_mod(
    weapon: &WeaponInfo,
    job_attrs: &JobAttributes,
    level_mods: &LevelModifiers,
) -> CalcResult<i64> {
    if weapon.delay <= 0 {
        return Err(CalcError::NonPositiveDelay(weapon.delay));
    }
    let attr = job_attrs.get(job_attrs.job.attack_power_stat())?;
    let base = floor_div(level_mods.main * attr, 1000) + weapon.damage;
    Ok(floor_div(base * weapon.delay, 300))
}

/// Job trait damage bonus, scaled by 100
pub fn job_trait_mod(job: Job) -> i64 {
    job.job_trait_mod()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(level: u32, main: i64, sub: i64, divisor: i64) -> LevelModifiers {
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

    fn dragoon() -> JobAttributes {
        JobAttributes {
            job: Job::Dragoon,
            job_id: 22,
            hp: 115,
            strength: 115,
            vitality: 105,
            dexterity: 100,
            intelligence: 45,
            mind: 65,
        }
    }

    #[test]
    fn test_attack_power_coefficients() {
        assert_eq!(attack_power_coefficient(Job::BlackMage, 90), 195);
        assert_eq!(attack_power_coefficient(Job::BlackMage, 80), 165);
        assert_eq!(attack_power_coefficient(Job::BlackMage, 75), 145);
        assert_eq!(attack_power_coefficient(Job::BlackMage, 60), 100);
        assert_eq!(attack_power_coefficient(Job::BlackMage, 55), 87);
        assert_eq!(attack_power_coefficient(Job::BlackMage, 30), 75);

        assert_eq!(attack_power_coefficient(Job::Gunbreaker, 90), 156);
        assert_eq!(attack_power_coefficient(Job::Gunbreaker, 85), 135);
        assert_eq!(attack_power_coefficient(Job::Gunbreaker, 80), 115);
        assert_eq!(attack_power_coefficient(Job::Gunbreaker, 60), 75);
    }

    #[test]
    fn test_attack_power_mod() {
        let lv = level(90, 390, 400, 1900);
        // floor(195 * 2981 / 390) + 100
        assert_eq!(attack_power_mod(3371, Job::BlackMage, &lv), 1590);
        assert_eq!(attack_power_mod(390, Job::BlackMage, &lv), 100);
        // Below main floors toward negative infinity
        assert_eq!(attack_power_mod(389, Job::BlackMage, &lv), 99);
    }

    #[test]
    fn test_weapon_damage_mod() {
        let lv = level(90, 390, 400, 1900);
        // floor(390 * 115 / 1000) + 132 = 44 + 132
        assert_eq!(weapon_damage_mod(132, &dragoon(), Stat::Strength, &lv).unwrap(), 176);
        assert_eq!(
            weapon_damage_mod(132, &dragoon(), Stat::Tenacity, &lv).unwrap_err(),
            CalcError::NotAnAttribute(Stat::Tenacity)
        );
    }

    #[test]
    fn test_auto_attack_mod() {
        let lv = level(90, 390, 400, 1900);
        let weapon = WeaponInfo::new(132, 137, 312);
        // floor(176 * 312 / 300)
        assert_eq!(auto_attack_mod(&weapon, &dragoon(), &lv).unwrap(), 183);

        let broken = WeaponInfo::new(132, 137, 0);
        assert_eq!(
            auto_attack_mod(&broken, &dragoon(), &lv).unwrap_err(),
            CalcError::NonPositiveDelay(0)
        );
    }
}
