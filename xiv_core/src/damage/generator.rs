//! Monte-Carlo hit sampling
//!
//! Each sampled hit rolls direct hit, then crit, then random variance from
//! the caller's RNG. Stat buffs and chances are resolved once per sampler.

use super::hit::{DamageKind, PreparedHit, SampledHit};
use crate::buff::Buff;
use crate::error::CalcResult;
use crate::stats::{Player, StatTableProvider};
use rand::Rng;

/// Finite sequence of sampled direct-action damage
///
/// Borrows the RNG mutably, so a second sampler over the same RNG continues
/// the stream rather than repeating it.
#[derive(Debug)]
pub struct SampleHits<'r, R: Rng> {
    hit: PreparedHit,
    remaining: usize,
    rng: &'r mut R,
}

impl<'r, R: Rng> SampleHits<'r, R> {
    /// Roll the next hit, keeping the crit/DH outcome
    pub fn next_hit(&mut self) -> Option<SampledHit> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.hit.roll(&mut *self.rng))
    }

    /// The resolved hit every sample is drawn from
    pub fn prepared(&self) -> &PreparedHit {
        &self.hit
    }
}

impl<'r, R: Rng> Iterator for SampleHits<'r, R> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.next_hit().map(|hit| hit.damage)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'r, R: Rng> ExactSizeIterator for SampleHits<'r, R> {}

/// Sample `n` hits of a direct action at `potency`
pub fn generate_sample_hits<'r, R: Rng>(
    tables: &(impl StatTableProvider + ?Sized),
    n: usize,
    potency: i64,
    player: &Player,
    buffs: &[Buff],
    rng: &'r mut R,
) -> CalcResult<SampleHits<'r, R>> {
    let hit = PreparedHit::new(tables, DamageKind::Direct, potency, player, buffs)?;
    log::debug!(
        "Sampling {} hits of potency {} for {}: crit {}, dh {}",
        n,
        potency,
        player.job,
        hit.crit_chance(),
        hit.dh_chance()
    );
    Ok(SampleHits {
        hit,
        remaining: n,
        rng,
    })
}

/// Finite sequence of combined damage for a multi-hit action
///
/// Each item rolls every component hit independently and sums them.
#[derive(Debug)]
pub struct MultiHitSamples<'r, R: Rng> {
    hits: Vec<PreparedHit>,
    remaining: usize,
    rng: &'r mut R,
}

impl<'r, R: Rng> Iterator for MultiHitSamples<'r, R> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let rng = &mut *self.rng;
        Some(self.hits.iter().map(|hit| hit.roll(&mut *rng).damage).sum())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'r, R: Rng> ExactSizeIterator for MultiHitSamples<'r, R> {}

/// Sample `n` combined values of a multi-hit action, one hit per potency
pub fn multi_hit_damage_sample<'r, R: Rng>(
    tables: &(impl StatTableProvider + ?Sized),
    n: usize,
    potencies: &[i64],
    player: &Player,
    buffs: &[Buff],
    rng: &'r mut R,
) -> CalcResult<MultiHitSamples<'r, R>> {
    let hits = potencies
        .iter()
        .map(|&potency| PreparedHit::new(tables, DamageKind::Direct, potency, player, buffs))
        .collect::<CalcResult<Vec<_>>>()?;
    log::debug!(
        "Sampling {} multi-hit values over potencies {:?} for {}",
        n,
        potencies,
        player.job
    );
    Ok(MultiHitSamples {
        hits,
        remaining: n,
        rng,
    })
}
