//! Stat modifiers - one raw stat plus level constants in, one fixed-point multiplier out
//!
//! Every function floors toward negative infinity. Stats below the level
//! baseline give negative numerators, so plain `/` (which truncates toward
//! zero) would be wrong there; [`floor_div`] is used throughout instead.

mod attack;
mod substats;

pub use attack::{
    attack_power_coefficient, attack_power_mod, auto_attack_mod, job_trait_mod, weapon_damage_mod,
};
pub use substats::{
    crit_damage_mod, crit_rate, defense_mod, determination_mod, direct_hit_rate,
    forced_direct_hit_determination, gcd_mod, piety_mp_regen, speed_mod, tenacity_mod_dps,
    tenacity_mod_mitigation,
};

/// Determination scaling constant
pub const DET_MOD: i64 = 140;
/// Tenacity scaling constant
pub const TNC_MOD: i64 = 100;
/// Skill/spell speed scaling constant
pub const SPD_MOD: i64 = 130;
/// Critical hit rate scaling constant
pub const CRT_RATE_MOD: i64 = 200;
/// Critical hit damage scaling constant
pub const CRT_DMG_MOD: i64 = 200;
/// Direct hit rate scaling constant
pub const DH_MOD: i64 = 550;
/// Piety scaling constant
pub const PIE_MOD: i64 = 150;
/// Defense scaling constant
pub const DEF_MOD: i64 = 15;

/// Integer division rounded toward negative infinity; `divisor` must be positive
#[inline]
pub fn floor_div(numerator: i64, divisor: i64) -> i64 {
    numerator.div_euclid(divisor)
}

/// Integer division rounded toward positive infinity; `divisor` must be positive
#[inline]
pub fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    -(-numerator).div_euclid(divisor)
}
