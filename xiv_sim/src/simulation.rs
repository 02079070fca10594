//! Damage sampling runs and their summary statistics

use rand::Rng;
use xiv_core::damage::{generate_sample_hits, multi_hit_damage_sample, DamageKind, PreparedHit};
use xiv_core::{Buff, CalcResult, Player, StatTableProvider};

/// Result of one sampling run
#[derive(Debug, Clone, Default)]
pub struct DamageSample {
    pub samples: Vec<i64>,
    pub crit_count: usize,
    pub direct_hit_count: usize,
}

impl DamageSample {
    /// Sample `n` hits of one kind, tracking crit and direct hit counts
    pub fn run(
        tables: &(impl StatTableProvider + ?Sized),
        kind: DamageKind,
        potency: i64,
        player: &Player,
        buffs: &[Buff],
        n: usize,
        rng: &mut impl Rng,
    ) -> CalcResult<Self> {
        let mut result = DamageSample {
            samples: Vec::with_capacity(n),
            ..Default::default()
        };

        let mut record = |damage: i64, crit: bool, direct_hit: bool| {
            result.samples.push(damage);
            result.crit_count += usize::from(crit);
            result.direct_hit_count += usize::from(direct_hit);
        };

        match kind {
            DamageKind::Direct => {
                let mut hits = generate_sample_hits(tables, n, potency, player, buffs, rng)?;
                while let Some(hit) = hits.next_hit() {
                    record(hit.damage, hit.crit, hit.direct_hit);
                }
            }
            DamageKind::DamageOverTime | DamageKind::AutoAttack => {
                let prepared = PreparedHit::new(tables, kind, potency, player, buffs)?;
                for _ in 0..n {
                    let hit = prepared.roll(rng);
                    record(hit.damage, hit.crit, hit.direct_hit);
                }
            }
        }

        Ok(result)
    }

    /// Sample `n` combined values of a multi-hit direct action
    ///
    /// Outcome counts are not tracked per component hit.
    pub fn run_multi_hit(
        tables: &(impl StatTableProvider + ?Sized),
        potencies: &[i64],
        player: &Player,
        buffs: &[Buff],
        n: usize,
        rng: &mut impl Rng,
    ) -> CalcResult<Self> {
        let samples = multi_hit_damage_sample(tables, n, potencies, player, buffs, rng)?.collect();
        Ok(DamageSample {
            samples,
            ..Default::default()
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn min(&self) -> Option<i64> {
        self.samples.iter().copied().min()
    }

    pub fn max(&self) -> Option<i64> {
        self.samples.iter().copied().max()
    }

    /// Mean damage per sample
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<i64>() as f64 / self.samples.len() as f64
    }

    /// Population standard deviation
    pub fn std_dev(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .samples
            .iter()
            .map(|&s| {
                let d = s as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / self.samples.len() as f64;
        variance.sqrt()
    }

    /// Nearest-rank percentile, `p` in [0, 100]
    pub fn percentile(&self, p: u32) -> Option<i64> {
        if self.samples.is_empty() {
            return None;
        }
        let mut sorted = self.samples.clone();
        sorted.sort_unstable();
        let rank = (p.min(100) as usize * sorted.len()).div_ceil(100).max(1);
        Some(sorted[rank - 1])
    }

    /// Crit rate in percent
    pub fn crit_rate(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.crit_count as f64 / self.samples.len() as f64 * 100.0
    }

    /// Direct hit rate in percent
    pub fn direct_hit_rate(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.direct_hit_count as f64 / self.samples.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use xiv_core::{default_example_players, default_stat_tables};

    #[test]
    fn test_direct_sample() {
        let tables = default_stat_tables().unwrap();
        let players = default_example_players(&tables).unwrap();
        let blm = players.get("blm90").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let result = DamageSample::run(&tables, DamageKind::Direct, 280, blm, &[], 2000, &mut rng).unwrap();
        assert_eq!(result.len(), 2000);
        assert!(result.min().unwrap() >= 10225);
        assert!(result.crit_rate() > 20.0 && result.crit_rate() < 33.0);
        assert!(result.mean() > 10764.0);
        assert!(result.std_dev() > 0.0);
    }

    #[test]
    fn test_dot_and_auto_samples() {
        let tables = default_stat_tables().unwrap();
        let players = default_example_players(&tables).unwrap();
        let drg = players.get("drg80").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let dot = DamageSample::run(&tables, DamageKind::DamageOverTime, 45, drg, &[], 500, &mut rng).unwrap();
        let auto = DamageSample::run(&tables, DamageKind::AutoAttack, 90, drg, &[], 500, &mut rng).unwrap();
        assert_eq!(dot.len(), 500);
        assert_eq!(auto.len(), 500);
        assert!(dot.crit_count > 0);
    }

    #[test]
    fn test_percentiles() {
        let sample = DamageSample {
            samples: vec![5, 1, 4, 2, 3],
            ..Default::default()
        };
        assert_eq!(sample.percentile(0), Some(1));
        assert_eq!(sample.percentile(50), Some(3));
        assert_eq!(sample.percentile(100), Some(5));
        assert_eq!(DamageSample::default().percentile(50), None);
        assert_eq!(sample.mean(), 3.0);
    }

    #[test]
    fn test_multi_hit() {
        let tables = default_stat_tables().unwrap();
        let players = default_example_players(&tables).unwrap();
        let blm = players.get("blm90").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let result = DamageSample::run_multi_hit(&tables, &[100, 100, 100], blm, &[], 300, &mut rng).unwrap();
        assert_eq!(result.len(), 300);
        assert_eq!(result.crit_count, 0);
    }
}
