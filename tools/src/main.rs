//! sim-runner: headless Monte Carlo runner for compounding stake sequences.
//!
//! Usage:
//!   sim-runner --seed 12345 --trials 5000 --rounds 200
//!   sim-runner --config run.json --json
//!   sim-runner --seed 7 --ledger

use anyhow::Result;
use stake_sim_core::{
    config::RunnerConfig,
    distribution::{sample_trajectory_indices, Histogram},
    engine::{SimEngine, SimulationResult},
    stats::Statistics,
    trial::RoundOutcome,
    types::RunId,
};
use std::env;

#[derive(serde::Serialize)]
struct RunReport<'a> {
    run_id: &'a str,
    seed: u64,
    generated_at: String,
    statistics: Option<Statistics>,
    histogram: Histogram,
    sampled_trials: Vec<usize>,
    detailed_trial: &'a [RoundOutcome],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_mode = args.iter().any(|a| a == "--json");
    let show_ledger = args.iter().any(|a| a == "--ledger");

    let mut config = match find_arg(&args, "--config") {
        Some(path) => RunnerConfig::load(path)?,
        None => RunnerConfig::default(),
    };
    config.params.trials = parse_arg(&args, "--trials", config.params.trials);
    config.params.rounds = parse_arg(&args, "--rounds", config.params.rounds);
    if let Some(seed) = find_parsed(&args, "--seed") {
        config.seed = Some(seed);
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    let run_id: RunId = match config.seed {
        Some(seed) => format!("run-{seed}"),
        None => format!("run-{}", uuid::Uuid::new_v4()),
    };

    let params = config.params.clone().into_parameters()?;
    let engine = SimEngine::new(run_id.clone(), params)?;

    if !json_mode {
        println!("Stake Monte Carlo: sim-runner");
        println!("  run_id:    {run_id}");
        println!("  seed:      {seed}");
        println!("  capital:   {:.2}", engine.params().initial_capital);
        println!("  rounds:    {}", engine.params().rounds);
        println!("  trials:    {}", engine.params().trials);
        println!();
    }

    let result = engine.run_seeded(seed)?;
    let histogram = Histogram::from_values(&result.final_capitals, config.histogram_bins);

    if json_mode {
        let report = RunReport {
            run_id: &run_id,
            seed,
            generated_at: chrono::Utc::now().to_rfc3339(),
            statistics: result.statistics(),
            histogram,
            sampled_trials: sample_trajectory_indices(result.trial_count(), config.chart_lines),
            detailed_trial: &result.detailed_trial,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&result, &histogram);
        if show_ledger {
            print_ledger(&result.detailed_trial);
        }
    }

    Ok(())
}

fn print_summary(result: &SimulationResult, histogram: &Histogram) {
    println!("=== FINAL CAPITAL ===");
    match result.statistics() {
        Some(s) => {
            println!("  minimum:     {:.2}", s.minimum);
            println!("  maximum:     {:.2}", s.maximum);
            println!("  mean:        {:.2}", s.mean);
            println!("  median:      {:.2}", s.median);
            println!("  std dev:     {:.2}", s.std_dev);
            println!("  above mean:  {} ({:.1}%)", s.above_mean, s.above_mean_pct);
        }
        None => println!("  (no trials completed)"),
    }

    println!();
    println!("=== DISTRIBUTION ===");
    let peak = histogram.bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bin in &histogram.bins {
        let bar = "#".repeat(bin.count * 40 / peak);
        println!("  {:>12.2} .. {:>12.2} | {:>6} {bar}", bin.min, bin.max, bin.count);
    }
}

fn print_ledger(ledger: &[RoundOutcome]) {
    println!();
    println!("=== TRIAL #1 ===");
    println!("  {:>6}  {:<5}  {:>8}  {:>14}  {:>14}", "round", "kind", "rate", "delta", "capital");
    for line in ledger {
        println!(
            "  {:>6}  {:<5}  {:>7.2}%  {:>14.2}  {:>14.2}",
            line.round, line.kind, line.rate_pct, line.delta, line.capital_after
        );
    }
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Value of `flag` parsed as `T`. A present but unparsable value is
/// logged and treated as absent.
fn find_parsed<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = find_arg(args, flag)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {flag} {raw:?}: not a valid value");
            None
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    find_parsed(args, flag).unwrap_or(default)
}

fn clock_seed() -> u64 {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .map(|n| n as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn valid_seed_is_parsed() {
        let argv = args(&["sim-runner", "--seed", "12345"]);
        assert_eq!(find_parsed::<u64>(&argv, "--seed"), Some(12345));
    }

    #[test]
    fn unparsable_seed_is_treated_as_absent() {
        let _ = env_logger::builder().is_test(true).try_init();
        let argv = args(&["sim-runner", "--seed", "12x45"]);
        assert_eq!(find_parsed::<u64>(&argv, "--seed"), None);
        assert_eq!(find_parsed::<u64>(&args(&["sim-runner"]), "--seed"), None);
    }

    #[test]
    fn unparsable_count_keeps_default() {
        let argv = args(&["sim-runner", "--trials", "many"]);
        assert_eq!(parse_arg(&argv, "--trials", 1000i64), 1000);
        let argv = args(&["sim-runner", "--trials", "250"]);
        assert_eq!(parse_arg(&argv, "--trials", 1000i64), 250);
    }
}
