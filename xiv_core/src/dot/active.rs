//! ActiveDot - an applied DoT with its stats snapshotted

use super::DotConfig;
use crate::buff::Buff;
use crate::damage::{DamageKind, PreparedHit, RANDOM_VARIANCE_IDENTITY};
use crate::error::CalcResult;
use crate::stats::{Player, StatTableProvider};
use crate::types::{CritType, DHType};
use rand::Rng;

/// A DoT on a target
///
/// Stats, chances and damage buffs are fixed when the DoT is applied.
/// Later changes to the player or the buff list do not reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDot {
    /// DoT type ID
    pub dot_id: String,
    hit: PreparedHit,
    ticks_remaining: u32,
    total_ticks: u32,
}

impl ActiveDot {
    /// Snapshot `player` under `buffs` and start the DoT
    pub fn apply(
        tables: &(impl StatTableProvider + ?Sized),
        config: &DotConfig,
        player: &Player,
        buffs: &[Buff],
    ) -> CalcResult<Self> {
        let hit = PreparedHit::new(tables, DamageKind::DamageOverTime, config.potency, player, buffs)?;
        let total_ticks = config.tick_count();
        log::debug!(
            "Applied {} ({} ticks, crit {}, dh {})",
            config.id,
            total_ticks,
            hit.crit_chance(),
            hit.dh_chance()
        );
        Ok(ActiveDot {
            dot_id: config.id.clone(),
            hit,
            ticks_remaining: total_ticks,
            total_ticks,
        })
    }

    /// Resolve the next tick with explicit outcomes; `None` once expired
    pub fn tick(&mut self, crit: CritType, dh: DHType, random_variance: i64) -> Option<i64> {
        if !self.is_active() {
            return None;
        }
        self.ticks_remaining -= 1;
        Some(self.hit.damage(crit, dh, random_variance))
    }

    /// Roll crit, direct hit and variance for the next tick
    pub fn roll_tick(&mut self, rng: &mut impl Rng) -> Option<i64> {
        if !self.is_active() {
            return None;
        }
        self.ticks_remaining -= 1;
        Some(self.hit.roll(rng).damage)
    }

    pub fn is_active(&self) -> bool {
        self.ticks_remaining > 0
    }

    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }

    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    /// The snapshot every tick is computed from
    pub fn snapshot(&self) -> &PreparedHit {
        &self.hit
    }

    /// Expected damage of one tick, averaging crit and direct hit
    pub fn expected_tick_damage(&self) -> i64 {
        self.hit
            .damage(CritType::Average, DHType::Average, RANDOM_VARIANCE_IDENTITY)
    }

    /// Expected damage of all remaining ticks
    pub fn expected_remaining_damage(&self) -> i64 {
        self.expected_tick_damage() * i64::from(self.ticks_remaining)
    }
}
