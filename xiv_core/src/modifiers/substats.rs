//! Substat modifiers: crit, direct hit, determination, speed, tenacity, piety, defense

use super::{
    ceil_div, floor_div, CRT_DMG_MOD, CRT_RATE_MOD, DEF_MOD, DET_MOD, DH_MOD, PIE_MOD, SPD_MOD,
    TNC_MOD,
};
use crate::stats::LevelModifiers;

/// Critical hit chance in permille: floor(200 * (CRT - sub) / div) + 50
pub fn crit_rate(crit: i64, level_mods: &LevelModifiers) -> i64 {
    floor_div(CRT_RATE_MOD * (crit - level_mods.sub), level_mods.divisor) + 50
}

/// Critical hit multiplier, scaled by 1000: 1400 + floor(200 * (CRT - sub) / div)
pub fn crit_damage_mod(crit: i64, level_mods: &LevelModifiers) -> i64 {
    1400 + floor_div(CRT_DMG_MOD * (crit - level_mods.sub), level_mods.divisor)
}

/// Direct hit chance in permille: floor(550 * (DH - sub) / div)
pub fn direct_hit_rate(direct_hit: i64, level_mods: &LevelModifiers) -> i64 {
    floor_div(DH_MOD * (direct_hit - level_mods.sub), level_mods.divisor)
}

/// Determination multiplier, scaled by 1000: 1000 + floor(140 * (DET - main) / div)
pub fn determination_mod(determination: i64, level_mods: &LevelModifiers) -> i64 {
    1000 + floor_div(DET_MOD * (determination - level_mods.main), level_mods.divisor)
}

/// Extra determination a guaranteed direct hit gets from the DH stat
///
/// floor(140 * (DH - sub) / div), added on top of [`determination_mod`].
pub fn forced_direct_hit_determination(direct_hit: i64, level_mods: &LevelModifiers) -> i64 {
    floor_div(DET_MOD * (direct_hit - level_mods.sub), level_mods.divisor)
}

/// Speed multiplier for DoTs and autos, scaled by 1000
pub fn speed_mod(speed: i64, level_mods: &LevelModifiers) -> i64 {
    1000 + floor_div(SPD_MOD * (speed - level_mods.sub), level_mods.divisor)
}

/// Recast time in centiseconds for a base recast of `gcd_ms` milliseconds
///
/// floor(gcd_ms * (1000 + ceil(130 * (sub - speed) / div)) / 10000); 2500ms
/// at baseline speed is 250 (2.50s).
pub fn gcd_mod(speed: i64, gcd_ms: i64, level_mods: &LevelModifiers) -> i64 {
    let reduction = ceil_div(SPD_MOD * (level_mods.sub - speed), level_mods.divisor);
    floor_div(gcd_ms * (1000 + reduction), 10000)
}

/// Tenacity outgoing damage multiplier, scaled by 1000
pub fn tenacity_mod_dps(tenacity: i64, level_mods: &LevelModifiers) -> i64 {
    1000 + floor_div(TNC_MOD * (tenacity - level_mods.sub), level_mods.divisor)
}

/// Tenacity incoming damage multiplier, scaled by 1000 (decreases with tenacity)
pub fn tenacity_mod_mitigation(tenacity: i64, level_mods: &LevelModifiers) -> i64 {
    1000 - floor_div(TNC_MOD * (tenacity - level_mods.sub), level_mods.divisor)
}

/// Extra MP regenerated per tick from piety
pub fn piety_mp_regen(piety: i64, level_mods: &LevelModifiers) -> i64 {
    floor_div(PIE_MOD * (piety - level_mods.main), level_mods.divisor)
}

/// Incoming damage multiplier from defense or magic defense, scaled by 100
pub fn defense_mod(defense: i64, level_mods: &LevelModifiers) -> i64 {
    100 - floor_div(DEF_MOD * defense, level_mods.divisor)
}
