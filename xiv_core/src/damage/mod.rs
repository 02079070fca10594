//! Damage system - fixed-point damage pipeline and hit sampling

mod calculation;
mod generator;
mod hit;

pub use calculation::{
    calc_action_damage, calc_auto_attack_damage, calc_dot_tick_damage, random_variance,
    roll_action_damage, roll_auto_attack_damage, roll_dot_tick_damage, RANDOM_VARIANCE_IDENTITY,
    RANDOM_VARIANCE_MAX, RANDOM_VARIANCE_MIN,
};
pub use generator::{generate_sample_hits, multi_hit_damage_sample, MultiHitSamples, SampleHits};
pub use hit::{
    DamageKind, HitModifiers, PreparedHit, SampledHit, DIRECT_HIT_MULTIPLIER, MAX_POTENCY,
    OUTCOME_SCALE,
};
