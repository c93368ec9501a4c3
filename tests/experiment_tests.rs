//! Aggregator behavior over many trials.

use excess_odds::core::{ExperimentConfig, SimRng};
use excess_odds::experiment::{Experiment, Tally};
use excess_odds::trial::{run_trial, DrawPrinter, Silent};

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_fixed_seed_fixed_tally() {
    let config = ExperimentConfig::default().with_seed(12345);

    let a = Experiment::new(config.clone()).run(&mut Silent).unwrap();
    let b = Experiment::new(config).run(&mut Silent).unwrap();

    assert_eq!(a.trials(), 10_000);
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_differ() {
    // Tallies could coincide by chance; compare the full outcome streams.
    let mut rng1 = SimRng::new(1);
    let mut rng2 = SimRng::new(2);

    let a: Vec<_> = (0..200).map(|_| run_trial(&mut rng1, &mut Silent).unwrap()).collect();
    let b: Vec<_> = (0..200).map(|_| run_trial(&mut rng2, &mut Silent).unwrap()).collect();

    assert_ne!(a, b);
}

#[test]
fn test_second_run_continues_stream() {
    let config = ExperimentConfig::default().with_trials(1_000).with_seed(8);
    let mut experiment = Experiment::new(config.clone());
    let first = experiment.run(&mut Silent).unwrap();
    let second = experiment.run(&mut Silent).unwrap();

    let combined = Experiment::new(config.with_trials(2_000))
        .run(&mut Silent)
        .unwrap();

    let mut merged = first;
    merged.merge(&second);
    assert_eq!(merged, combined);
}

#[test]
fn test_printer_output_is_independent_of_tally() {
    let config = ExperimentConfig::default().with_trials(100).with_seed(99);

    let silent = Experiment::new(config.clone()).run(&mut Silent).unwrap();
    let mut printer = DrawPrinter::new(Vec::new());
    let printed = Experiment::new(config).run(&mut printer).unwrap();

    assert_eq!(silent, printed);

    let text = String::from_utf8(printer.into_inner()).unwrap();
    assert!(text.lines().all(|l| l.starts_with("card = ")));
    assert!(text.lines().count() >= 400, "every trial turns at least four cards");
}

// =============================================================================
// Statistical Tests
// =============================================================================

#[test]
fn test_win_rate_near_half() {
    let config = ExperimentConfig::default().with_trials(100_000).with_seed(7);
    let tally = Experiment::new(config).run(&mut Silent).unwrap();

    assert_eq!(tally.trials(), 100_000);
    let rate = tally.win_rate();
    assert!(
        (rate - 0.5).abs() < 0.01,
        "win rate {rate} too far from 0.5 (stderr {})",
        tally.std_error()
    );
}

#[test]
fn test_tally_bounds_and_parity() {
    for (trials, seed) in [(1u32, 1u64), (2, 2), (17, 3), (1_000, 4), (1_001, 5)] {
        let config = ExperimentConfig::default().with_trials(trials).with_seed(seed);
        let tally: Tally = Experiment::new(config).run(&mut Silent).unwrap();

        let n = i64::from(trials);
        assert!((-n..=n).contains(&tally.net()));
        assert_eq!(tally.net().rem_euclid(2), n.rem_euclid(2));
    }
}
