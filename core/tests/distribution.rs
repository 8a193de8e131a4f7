//! Histogram and chart sampling over a real run.

use stake_sim_core::{
    config::RunnerConfig,
    distribution::{sample_trajectory_indices, Histogram},
    engine::SimEngine,
};

#[test]
fn histogram_covers_every_trial() {
    let config = RunnerConfig::default_test();
    let params = config.params.clone().into_parameters().unwrap();
    let result = SimEngine::new("hist".into(), params)
        .unwrap()
        .run_seeded(config.seed.unwrap())
        .unwrap();

    let hist = Histogram::from_values(&result.final_capitals, config.histogram_bins);
    let stats = result.statistics().unwrap();

    assert_eq!(hist.bins.len(), config.histogram_bins);
    assert_eq!(hist.total(), result.trial_count());
    assert_eq!(hist.bins[0].min, stats.minimum);
    assert!((hist.bins.last().unwrap().max - stats.maximum).abs() < 1e-9);
}

#[test]
fn sampled_indices_address_real_trajectories() {
    let config = RunnerConfig::default_test();
    let params = config.params.clone().into_parameters().unwrap();
    let result = SimEngine::new("sample".into(), params)
        .unwrap()
        .run_seeded(1)
        .unwrap();

    let picks = sample_trajectory_indices(result.trial_count(), config.chart_lines);
    assert_eq!(picks.len(), config.chart_lines);
    assert_eq!(picks[0], 0);
    assert!(picks.iter().all(|i| *i < result.trajectories.len()));
    assert!(picks.windows(2).all(|w| w[0] < w[1]));
}
