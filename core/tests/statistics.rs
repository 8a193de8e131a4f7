//! Summary statistics over final capitals.

use stake_sim_core::{
    engine::simulate,
    params::{RateRange, SimulationParameters},
    rng::{ScriptedSource, SimRng},
    stats::Statistics,
};

fn stats(values: &[f64]) -> Statistics {
    Statistics::from_values(values).expect("non-empty input")
}

#[test]
fn median_even_count_averages_central_pair() {
    assert_eq!(stats(&[100.0, 80.0, 110.0, 90.0]).median, 95.0);
}

#[test]
fn median_odd_count_takes_central_value() {
    assert_eq!(stats(&[120.0, 100.0, 80.0, 110.0, 90.0]).median, 100.0);
}

#[test]
fn single_value_collapses_everything() {
    let s = stats(&[1234.5]);
    assert_eq!(s.count, 1);
    assert_eq!(s.minimum, 1234.5);
    assert_eq!(s.maximum, 1234.5);
    assert_eq!(s.mean, 1234.5);
    assert_eq!(s.median, 1234.5);
    assert_eq!(s.std_dev, 0.0);
    assert_eq!(s.above_mean, 0);
    assert_eq!(s.above_mean_pct, 0.0);
}

#[test]
fn std_dev_uses_population_divisor() {
    // mean 5, squared deviations sum to 32, 32 / 8 = 4
    let s = stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert_eq!(s.mean, 5.0);
    assert!((s.std_dev - 2.0).abs() < 1e-12, "std dev {}", s.std_dev);
}

#[test]
fn above_mean_is_strict() {
    let s = stats(&[80.0, 90.0, 100.0, 110.0, 120.0]);
    assert_eq!(s.mean, 100.0);
    assert_eq!(s.above_mean, 2);
    assert!((s.above_mean_pct - 40.0).abs() < 1e-12);
}

#[test]
fn identical_values_have_none_above_mean() {
    let s = stats(&[500.0; 6]);
    assert_eq!(s.above_mean, 0);
    assert_eq!(s.std_dev, 0.0);
}

#[test]
fn identical_inexact_values_keep_mean_at_the_value() {
    // 0.7 * 3 and 0.1 * 3 do not sum exactly in binary floating point.
    for value in [0.7, 0.1] {
        let s = stats(&[value; 3]);
        assert!(
            s.minimum <= s.mean && s.mean <= s.maximum,
            "mean {} outside [{}, {}]",
            s.mean,
            s.minimum,
            s.maximum
        );
        assert_eq!(s.mean, value);
        assert_eq!(s.above_mean, 0, "no value can sit above an all-equal mean");
        assert_eq!(s.above_mean_pct, 0.0);
        assert_eq!(s.std_dev, 0.0);
    }
}

#[test]
fn flat_run_has_none_above_mean() {
    // Every round wins at a 0% rate, so all three finals stay at 0.7.
    let params = SimulationParameters {
        initial_capital: 0.7,
        rounds: 1,
        trials: 3,
        loss_probability: 0.0,
        profit_rate: RateRange::new(0.0, 0.1),
        loss_rate: RateRange::new(0.05, 0.10),
    };
    let result = simulate(&params, &mut ScriptedSource::new(vec![0.5, 0.0])).unwrap();
    assert_eq!(result.final_capitals, vec![0.7, 0.7, 0.7]);

    let s = result.statistics().unwrap();
    assert_eq!(s.above_mean, 0);
    assert!(s.minimum <= s.mean && s.mean <= s.maximum);
}

#[test]
fn bounds_hold_over_simulated_finals() {
    let params = SimulationParameters {
        initial_capital: 1000.0,
        rounds: 50,
        trials: 400,
        loss_probability: 0.45,
        profit_rate: RateRange::new(0.05, 0.15),
        loss_rate: RateRange::new(0.05, 0.10),
    };
    let result = simulate(&params, &mut SimRng::new(9)).unwrap();
    let s = result.statistics().unwrap();

    assert!(s.minimum <= s.mean && s.mean <= s.maximum);
    assert!(s.minimum <= s.median && s.median <= s.maximum);
    assert!(s.above_mean <= s.count - 1, "the maximum alone can't be all");
    assert!(s.above_mean > 0, "spread finals must have some above mean");
    assert_eq!(s.count, 400);
}
