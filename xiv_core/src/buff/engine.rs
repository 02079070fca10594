//! Applying buff lists to stats, chances and damage

use super::Buff;
use crate::modifiers::floor_div;
use crate::stats::PlayerStats;

/// Clone `stats` and run every buff's stat mods over the copy, in list order
pub fn apply_stat_buffs(stats: &PlayerStats, buffs: &[Buff]) -> PlayerStats {
    let mut buffed = *stats;
    for buff in buffs {
        buff.apply_to_stats(&mut buffed);
    }
    buffed
}

/// Add every buff's crit chance delta to `base_chance` (permille)
pub fn apply_crit_chance_buffs(base_chance: i64, buffs: &[Buff]) -> i64 {
    base_chance + buffs.iter().map(|b| b.crit_chance_delta).sum::<i64>()
}

/// Add every buff's direct hit chance delta to `base_chance` (permille)
pub fn apply_dh_chance_buffs(base_chance: i64, buffs: &[Buff]) -> i64 {
    base_chance + buffs.iter().map(|b| b.dh_chance_delta).sum::<i64>()
}

/// Multiply damage by each buff in turn, flooring after every buff
///
/// Because each buff is its own truncation point, reordering the list can
/// move the result. For buffs of 5% or less the shift is at most one per
/// extra buff; bigger buffs can exceed that.
pub fn apply_damage_buffs(damage: i64, buffs: &[Buff]) -> i64 {
    apply_damage_multipliers(damage, buffs.iter().map(|b| b.damage_multiplier_delta))
}

/// [`apply_damage_buffs`] over bare permille deltas
pub fn apply_damage_multipliers(damage: i64, deltas: impl IntoIterator<Item = i64>) -> i64 {
    deltas
        .into_iter()
        .fold(damage, |acc, delta| floor_div(acc * (1000 + delta), 1000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buff::StatMod;
    use crate::stats::LevelModifiers;
    use crate::types::Stat;

    fn stats() -> PlayerStats {
        PlayerStats::base(&LevelModifiers {
            level: 90,
            main: 390,
            sub: 400,
            divisor: 1900,
            hp: 3000,
            elemental: 0,
            threat: 0,
        })
    }

    #[test]
    fn test_stat_buffs_clone_first() {
        let original = stats();
        let buffs = vec![Buff::default().with_stat_mod(StatMod::Flat {
            stat: Stat::Mind,
            amount: 50,
        })];

        let buffed = apply_stat_buffs(&original, &buffs);
        assert_eq!(buffed.mind, 440);
        assert_eq!(original.mind, 390);
    }

    #[test]
    fn test_stat_buff_order_matters() {
        let flat = Buff::default().with_stat_mod(StatMod::Flat {
            stat: Stat::Strength,
            amount: 110,
        });
        let percent = Buff::default().with_stat_mod(StatMod::Percent {
            stat: Stat::Strength,
            permille: 100,
            cap: None,
        });

        // (390 + 110) * 1.1 = 550
        let a = apply_stat_buffs(&stats(), &[flat.clone(), percent.clone()]);
        // 390 + 39 + 110 = 539
        let b = apply_stat_buffs(&stats(), &[percent, flat]);
        assert_eq!(a.strength, 550);
        assert_eq!(b.strength, 539);
    }

    #[test]
    fn test_chance_buffs_sum() {
        let buffs = vec![Buff::crit(100), Buff::new(200, 200, 0), Buff::direct_hit(30)];
        assert_eq!(apply_crit_chance_buffs(263, &buffs), 563);
        assert_eq!(apply_dh_chance_buffs(217, &buffs), 447);
        assert_eq!(apply_crit_chance_buffs(0, &[]), 0);
    }

    #[test]
    fn test_damage_buffs_floor_each_step() {
        // 1001 * 1.03 = 1031.03 -> 1031; 1031 * 1.05 = 1082.55 -> 1082
        let buffs = vec![Buff::damage(30), Buff::damage(50)];
        assert_eq!(apply_damage_buffs(1001, &buffs), 1082);
        // 1001 * 1.05 = 1051.05 -> 1051; 1051 * 1.03 = 1082.53 -> 1082
        let reversed = vec![Buff::damage(50), Buff::damage(30)];
        assert_eq!(apply_damage_buffs(1001, &reversed), 1082);
        assert_eq!(apply_damage_buffs(1001, &[]), 1001);
    }
}
