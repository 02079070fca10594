//! xiv_sim - Monte-Carlo damage sampler
//!
//! Samples the damage distribution of one action for an example player and
//! prints summary statistics plus a text histogram.

mod error;
mod histogram;
mod simulation;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use error::SimError;
use histogram::Histogram;
use simulation::DamageSample;
use xiv_core::damage::{DamageKind, RANDOM_VARIANCE_IDENTITY};
use xiv_core::{
    default_buff_presets, default_dot_registry, default_example_players, default_stat_tables,
    ActiveDot, CritType, DHType, PreparedHit,
};

/// Hit kinds selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Direct,
    Dot,
    Auto,
}

impl From<Kind> for DamageKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Direct => DamageKind::Direct,
            Kind::Dot => DamageKind::DamageOverTime,
            Kind::Auto => DamageKind::AutoAttack,
        }
    }
}

/// Sample the damage distribution of one action
#[derive(Parser, Debug)]
#[command(name = "xiv_sim")]
#[command(author, version, about = "Sample FFXIV damage distributions", long_about = None)]
struct Args {
    /// Example player preset (e.g., blm90, drg80)
    #[arg(short = 'p', long = "player", default_value = "blm90")]
    player: String,

    /// Action potency (ignored for auto-attacks and named DoTs)
    #[arg(short = 'P', long = "potency", default_value_t = 280)]
    potency: i64,

    /// Hit kind
    #[arg(short = 'k', long = "kind", value_enum, default_value_t = Kind::Direct)]
    kind: Kind,

    /// Named DoT from the bundled registry; implies --kind dot
    #[arg(short = 'd', long = "dot")]
    dot: Option<String>,

    /// Extra hit potencies for a multi-hit action (comma separated)
    #[arg(short = 'm', long = "multi-hit", value_delimiter = ',')]
    multi_hit: Vec<i64>,

    /// Number of samples
    #[arg(short = 'n', long = "samples", default_value_t = 10_000)]
    samples: usize,

    /// RNG seed (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Buff presets to apply (comma separated, e.g. searing_light,embolden)
    #[arg(short = 'b', long = "buffs", value_delimiter = ',')]
    buffs: Vec<String>,

    /// Histogram bins
    #[arg(long = "bins", default_value_t = 40)]
    bins: usize,

    /// List players, buffs and DoTs, then exit
    #[arg(short = 'l', long = "list")]
    list: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Hit kind to sample; a named DoT overrides `--kind`
fn hit_kind(args: &Args) -> Result<DamageKind, SimError> {
    let kind = if args.dot.is_some() {
        DamageKind::DamageOverTime
    } else {
        args.kind.into()
    };
    if !args.multi_hit.is_empty() && kind != DamageKind::Direct {
        return Err(SimError::MultiHitKind(format!("{:?}", kind)));
    }
    Ok(kind)
}

fn run(args: &Args) -> Result<(), SimError> {
    let tables = default_stat_tables()?;
    let players = default_example_players(&tables)?;
    let presets = default_buff_presets();
    let dots = default_dot_registry()?;

    if args.list {
        println!("Players: {}", players.names().join(", "));
        println!("Buffs:   {}", presets.names().join(", "));
        println!("DoTs:    {}", dots.ids().join(", "));
        return Ok(());
    }

    if args.samples == 0 {
        return Err(SimError::NoSamples);
    }

    let player = players
        .get(&args.player)
        .ok_or_else(|| SimError::UnknownPlayer(args.player.clone()))?;
    let buffs = presets.resolve(&args.buffs)?;

    let dot = match &args.dot {
        Some(id) => Some(dots.get(id).ok_or_else(|| SimError::UnknownDot(id.clone()))?),
        None => None,
    };
    let kind = hit_kind(args)?;
    let potency = match (dot, kind) {
        (Some(dot), _) => dot.potency,
        (None, DamageKind::AutoAttack) => player.job.auto_attack_potency(),
        _ => args.potency,
    };

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    log::info!(
        "{} {:?} potency {} x{} with buffs {:?}",
        player.job,
        kind,
        potency,
        args.samples,
        args.buffs
    );

    let result = if args.multi_hit.is_empty() {
        DamageSample::run(&tables, kind, potency, player, &buffs, args.samples, &mut rng)?
    } else {
        let mut potencies = vec![potency];
        potencies.extend_from_slice(&args.multi_hit);
        DamageSample::run_multi_hit(&tables, &potencies, player, &buffs, args.samples, &mut rng)?
    };

    let hit = PreparedHit::new(&tables, kind, potency, player, &buffs)?;
    println!(
        "{} ({}) {:?}, potency {}, {} samples",
        args.player, player.job, kind, potency, result.len()
    );
    println!(
        "  crit chance {:.1}%  direct hit chance {:.1}%",
        hit.crit_chance() as f64 / 10.0,
        hit.dh_chance() as f64 / 10.0
    );
    println!(
        "  normal {}  expected {}",
        hit.damage(CritType::Normal, DHType::Normal, RANDOM_VARIANCE_IDENTITY),
        hit.damage(CritType::Average, DHType::Average, RANDOM_VARIANCE_IDENTITY)
    );
    println!(
        "  min {}  p50 {}  p90 {}  max {}",
        result.min().unwrap_or(0),
        result.percentile(50).unwrap_or(0),
        result.percentile(90).unwrap_or(0),
        result.max().unwrap_or(0)
    );
    println!("  mean {:.1}  std dev {:.1}", result.mean(), result.std_dev());
    if args.multi_hit.is_empty() {
        println!(
            "  sampled crit {:.1}%  sampled direct hit {:.1}%",
            result.crit_rate(),
            result.direct_hit_rate()
        );
    }

    if let Some(config) = dot {
        let active = ActiveDot::apply(&tables, config, player, &buffs)?;
        println!(
            "  {} over {} ticks: expected total {}",
            config.name,
            active.total_ticks(),
            active.expected_remaining_damage()
        );
    }

    println!();
    print!("{}", Histogram::new(&result.samples, args.bins).render(50));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("xiv_sim").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_hit_kind_from_flags() {
        assert_eq!(hit_kind(&parse(&[])).unwrap(), DamageKind::Direct);
        assert_eq!(hit_kind(&parse(&["-k", "auto"])).unwrap(), DamageKind::AutoAttack);
        assert_eq!(
            hit_kind(&parse(&["-k", "auto", "-d", "dia"])).unwrap(),
            DamageKind::DamageOverTime
        );
        assert_eq!(
            hit_kind(&parse(&["-m", "100,100"])).unwrap(),
            DamageKind::Direct
        );
    }

    #[test]
    fn test_multi_hit_requires_direct() {
        for argv in [
            &["-k", "dot", "-m", "100"][..],
            &["-k", "auto", "-m", "100,50"][..],
            &["-d", "dia", "-m", "100"][..],
        ] {
            assert!(matches!(
                hit_kind(&parse(argv)),
                Err(SimError::MultiHitKind(_))
            ));
        }
    }
}
