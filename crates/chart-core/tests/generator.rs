// File: crates/chart-core/tests/generator.rs
// Purpose: Properties of the synthetic random walk.

use ratechart_core::observation::check_sequence;
use ratechart_core::synthetic::{clamp_rate, date_from_index, reflect_volume};
use ratechart_core::{generate, generate_with, FixedRandom, GeneratorParams, SeededRandom, TimeZoneMode};

#[test]
fn default_walk_shape() {
    let data = generate(&mut SeededRandom::new(7));
    assert_eq!(data.len(), 4999);

    let report = check_sequence(&data);
    assert!(report.is_strictly_ascending(), "dates must increase: {report:?}");
    assert!(report.min_rate.unwrap() >= 100);
    assert!(report.min_volume.unwrap() >= 0);
}

#[test]
fn many_seeds_respect_floor_and_reflection() {
    for seed in 0..20 {
        let data = generate(&mut SeededRandom::new(seed));
        assert!(data.iter().all(|o| o.rate >= 100 && o.volume >= 0), "seed {seed}");
    }
}

#[test]
fn fixed_draws_give_golden_sequence() {
    let data = generate(&mut FixedRandom { unit: 0.5, positive: true });
    assert_eq!((data[0].rate, data[0].volume), (1010, 10250));
    assert_eq!((data[1].rate, data[1].volume), (1020, 10500));
    assert_eq!(data[4998].rate, 1000 + 10 * 4999);
    assert_eq!(data[4998].volume, 10_000 + 250 * 4999);
}

#[test]
fn downward_walk_hits_floor_and_reflects() {
    let data = generate(&mut FixedRandom { unit: 0.99, positive: false });
    // rate: 1000 - 20 per step (round(-19.8) = -20) until the floor holds it.
    assert_eq!(data[0].rate, 980);
    assert_eq!(data[100].rate, 100);
    assert!(data.iter().all(|o| o.rate >= 100 && o.volume >= 0));
    // volume: 10000 - 495 per step, flipping sign once it would go negative.
    assert_eq!(data[0].volume, 9505);
}

#[test]
fn clamp_and_reflect_are_idempotent() {
    for v in [-500, -1, 0, 99, 100, 101, 5000] {
        let once = clamp_rate(v, 100);
        assert_eq!(clamp_rate(once, 100), once);
        let once = reflect_volume(v);
        assert_eq!(reflect_volume(once), once);
    }
}

#[test]
fn first_point_is_new_year_2010() {
    let params = GeneratorParams { zone: TimeZoneMode::Utc, ..GeneratorParams::default() };
    let data = generate_with(&mut SeededRandom::new(1), &params);
    assert_eq!(data[0].date, 1_262_304_000_000);
    assert_eq!(data[1].date - data[0].date, 86_400_000);
    // Index 32 rolls into February.
    let feb = chrono::NaiveDate::from_ymd_opt(2010, 2, 1).unwrap();
    assert_eq!(date_from_index(params.epoch, 32, TimeZoneMode::Utc), TimeZoneMode::Utc.midnight_millis(feb));
}

#[test]
fn same_seed_same_walk() {
    let a = generate(&mut SeededRandom::new(42));
    let b = generate(&mut SeededRandom::new(42));
    assert_eq!(a, b);
}
