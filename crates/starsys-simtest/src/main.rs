//! Starsys Headless Generation Harness
//!
//! Generates systems in-process and validates them: structural invariants
//! across many seeds, stellar class rates against the classification table,
//! and name shape. Prints one sample system as text or JSON.
//!
//! Usage:
//!   cargo run -p starsys-simtest
//!   cargo run -p starsys-simtest -- --seed 7 --count 5000 --verbose
//!   cargo run -p starsys-simtest -- --config balance.json --json

use std::collections::HashMap;
use std::ops::Range;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use starsys_core::generation::{CLASS_TABLE, MAIN_SEQUENCE_CHANCE};
use starsys_core::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "starsys-simtest", about = "Generate and validate star systems")]
struct Args {
    /// Seed of the first system; the sweep uses consecutive seeds
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of systems to validate
    #[arg(long, default_value_t = 2000)]
    count: u64,

    /// JSON file with generator config overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the sample system as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Show passing checks too
    #[arg(long)]
    verbose: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let seeds = seed_range(args.seed, args.count)?;
    let draws = class_draws(args.count)?;
    info!("seeds {:?} with config {:?}", seeds, config);
    let generator = SystemGenerator::with_config(config)?;

    println!("=== Starsys Generation Harness ===\n");

    let sample = generator.generate_seeded(args.seed);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&sample)?);
    } else {
        print!("{}", sample);
    }
    println!();

    let systems: Vec<System> = seeds
        .map(|seed| generator.generate_seeded(seed))
        .collect();

    let mut results = Vec::new();

    // 1. Structural invariants
    results.extend(validate_structure(&systems, generator.config()));

    // 2. Naming
    results.extend(validate_names(&systems, generator.config()));

    // 3. Stellar class rates
    results.extend(validate_class_rates(args.seed, draws));

    // ── Summary ──
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    GeneratorConfig::from_json_str(&json).with_context(|| format!("loading {}", path.display()))
}

/// Consecutive seeds swept by the harness.
fn seed_range(seed: u64, count: u64) -> anyhow::Result<Range<u64>> {
    let end = seed
        .checked_add(count)
        .with_context(|| format!("--seed {} plus --count {} overflows u64", seed, count))?;
    Ok(seed..end)
}

/// Classifier draws for the rate checks: ten per system, at least 10k.
fn class_draws(count: u64) -> anyhow::Result<u64> {
    let draws = count
        .checked_mul(10)
        .with_context(|| format!("--count {} is too large", count))?;
    Ok(draws.max(10_000))
}

fn check(name: &str, failures: usize, ok_detail: &str) -> TestResult {
    TestResult {
        name: name.into(),
        passed: failures == 0,
        detail: if failures == 0 {
            ok_detail.into()
        } else {
            format!("{} systems violate this", failures)
        },
    }
}

// ── 1. Structure ────────────────────────────────────────────────────────

fn validate_structure(systems: &[System], config: &GeneratorConfig) -> Vec<TestResult> {
    println!("--- Structure ---");
    let mut results = Vec::new();

    let bad_star_count = systems
        .iter()
        .filter(|s| {
            let n = s.star_count();
            if s.system_type.is_remnant() {
                n != 1
            } else {
                n < config.min_stars || n > config.max_stars
            }
        })
        .count();
    results.push(check(
        "star_count_in_range",
        bad_star_count,
        "star counts within configured range",
    ));

    let bad_remnant = systems
        .iter()
        .filter(|s| s.stars.iter().any(|star| !star.is_stellar()) && s.star_count() != 1)
        .count();
    results.push(check(
        "remnant_stands_alone",
        bad_remnant,
        "neutron stars and black holes are always alone",
    ));

    let bad_planets = systems
        .iter()
        .filter(|s| {
            if s.primary().is_stellar() {
                s.planet_count() > config.max_planets || s.planet_count() < config.min_planets
            } else {
                s.planet_count() != 0
            }
        })
        .count();
    results.push(check(
        "planets_only_around_stars",
        bad_planets,
        "planet counts match primary",
    ));

    let unsorted = systems
        .iter()
        .filter(|s| s.stars.windows(2).any(|w| w[0].size() < w[1].size()))
        .count();
    results.push(check("stars_sorted", unsorted, "stars largest first"));

    let mut by_type: HashMap<&'static str, usize> = HashMap::new();
    for s in systems {
        *by_type.entry(s.system_type.label()).or_default() += 1;
    }
    let mut breakdown: Vec<_> = by_type.into_iter().collect();
    breakdown.sort();
    results.push(TestResult {
        name: "system_type_breakdown".into(),
        passed: true,
        detail: breakdown
            .iter()
            .map(|(label, n)| format!("{}={}", label, n))
            .collect::<Vec<_>>()
            .join(", "),
    });

    results
}

// ── 2. Names ────────────────────────────────────────────────────────────

fn validate_names(systems: &[System], config: &GeneratorConfig) -> Vec<TestResult> {
    println!("--- Names ---");
    let mut results = Vec::new();

    let bad_case = systems
        .iter()
        .filter(|s| {
            let mut chars = s.name.chars();
            !matches!(chars.next(), Some(c) if c.is_uppercase())
                || !chars.all(|c| c.is_lowercase())
        })
        .count();
    results.push(check("name_capitalized", bad_case, "names capitalized"));

    // Shortest syllable is one letter, longest three.
    let bad_length = systems
        .iter()
        .filter(|s| {
            let len = s.name.len();
            len < config.name_syllables || len > config.name_syllables * 3
        })
        .count();
    results.push(check(
        "name_length",
        bad_length,
        "name lengths fit syllable count",
    ));

    let bad_bodies = systems
        .iter()
        .filter(|s| {
            let stars_ok = s
                .stars
                .iter()
                .all(|star| star.name().starts_with(&format!("{} ", s.name)));
            let planets_ok = s.planets.iter().enumerate().all(|(i, p)| {
                p.name() == format!("{} {}", s.name, (b'b' + i as u8) as char)
            });
            !(stars_ok && planets_ok)
        })
        .count();
    results.push(check(
        "body_names_derived",
        bad_bodies,
        "star and planet names derive from system name",
    ));

    results
}

// ── 3. Stellar classes ──────────────────────────────────────────────────

fn validate_class_rates(seed: u64, draws: u64) -> Vec<TestResult> {
    println!("--- Stellar Classes ---");
    let mut results = Vec::new();

    let classifier = StellarClassifier::new();
    let mut rng = seeded_rng(seed);
    let mut main_sequence = 0u64;
    let mut by_class: HashMap<StellarClass, u64> = HashMap::new();

    for _ in 0..draws {
        let attributes = classifier.classify(&mut rng);
        if let Some(class) = attributes.class {
            main_sequence += 1;
            *by_class.entry(class).or_default() += 1;
        }
    }

    let rate = main_sequence as f64 / draws as f64;
    results.push(TestResult {
        name: "main_sequence_rate".into(),
        passed: (rate - MAIN_SEQUENCE_CHANCE).abs() < 0.02,
        detail: format!("{:.3} over {} draws", rate, draws),
    });

    // Only the common classes have enough samples to check tightly.
    let mut lower = 0.0;
    for row in CLASS_TABLE.iter() {
        let expected = row.threshold - lower;
        lower = row.threshold;
        let observed =
            *by_class.get(&row.class).unwrap_or(&0) as f64 / main_sequence.max(1) as f64;
        let tolerance = (expected * 0.25).max(0.005);
        results.push(TestResult {
            name: format!("class_{}_rate", row.class),
            passed: (observed - expected).abs() <= tolerance,
            detail: format!("observed {:.4}, expected {:.4}", observed, expected),
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_range_is_consecutive() {
        assert_eq!(seed_range(7, 3).unwrap(), 7..10);
        assert_eq!(seed_range(u64::MAX, 0).unwrap(), u64::MAX..u64::MAX);
    }

    #[test]
    fn test_seed_range_overflow_is_an_error() {
        assert!(seed_range(u64::MAX, 2).is_err());
        assert!(seed_range(u64::MAX - 1, 2).is_err());
    }

    #[test]
    fn test_class_draws() {
        assert_eq!(class_draws(5).unwrap(), 10_000);
        assert_eq!(class_draws(2000).unwrap(), 20_000);
        assert!(class_draws(u64::MAX / 5).is_err());
    }
}
