// File: crates/chart-core/src/synthetic.rs
// Summary: Random-walk generator producing one rate/volume observation per day.

use chrono::NaiveDate;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::observation::Observation;
use crate::time::{add_days, TimeZoneMode};

/// Source of the two draws used per random step.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Coin flip choosing the step direction.
    fn positive(&mut self) -> bool {
        self.unit() < 0.5
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn unit(&mut self) -> f64 { (**self).unit() }
    fn positive(&mut self) -> bool { (**self).positive() }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn unit(&mut self) -> f64 { (**self).unit() }
    fn positive(&mut self) -> bool { (**self).positive() }
}

/// Unseeded thread-local generator; output differs on every run.
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self { Self(rand::rng()) }
}

impl Default for ThreadRandom {
    fn default() -> Self { Self::new() }
}

impl RandomSource for ThreadRandom {
    fn unit(&mut self) -> f64 { self.0.random::<f64>() }
}

/// Reproducible generator for demos and benches.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self { Self(StdRng::seed_from_u64(seed)) }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f64 { self.0.random::<f64>() }
}

/// Constant draws, used for golden outputs.
#[derive(Clone, Copy, Debug)]
pub struct FixedRandom {
    pub unit: f64,
    pub positive: bool,
}

impl RandomSource for FixedRandom {
    fn unit(&mut self) -> f64 { self.unit }
    fn positive(&mut self) -> bool { self.positive }
}

#[derive(Clone, Debug)]
pub struct GeneratorParams {
    pub start_rate: i64,
    pub start_volume: i64,
    /// Largest absolute rate change per step (exclusive).
    pub rate_step: f64,
    /// Largest absolute volume change per step (exclusive).
    pub volume_step: f64,
    pub rate_floor: i64,
    pub count: u32,
    /// Calendar date of index 1.
    pub epoch: NaiveDate,
    pub zone: TimeZoneMode,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            start_rate: 1000,
            start_volume: 10_000,
            rate_step: 20.0,
            volume_step: 500.0,
            rate_floor: 100,
            count: 4999,
            epoch: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
            zone: TimeZoneMode::Local,
        }
    }
}

/// Generate the default 4999-point sequence.
pub fn generate(rng: &mut dyn RandomSource) -> Vec<Observation> {
    generate_with(rng, &GeneratorParams::default())
}

pub fn generate_with(rng: &mut dyn RandomSource, params: &GeneratorParams) -> Vec<Observation> {
    let mut rate = params.start_rate;
    let mut volume = params.start_volume;
    let mut out = Vec::with_capacity(params.count as usize);
    for i in 1..=i64::from(params.count) {
        rate = clamp_rate(rate + signed_step(rng, params.rate_step), params.rate_floor);
        volume = reflect_volume(volume + signed_step(rng, params.volume_step));
        out.push(Observation {
            date: date_from_index(params.epoch, i, params.zone),
            rate,
            volume,
        });
    }
    out
}

/// Raise `rate` to `floor` when it falls below it.
#[inline]
pub fn clamp_rate(rate: i64, floor: i64) -> i64 {
    if rate < floor { floor } else { rate }
}

/// Flip the sign of a negative volume; non-negative values pass through.
#[inline]
pub fn reflect_volume(volume: i64) -> i64 {
    if volume < 0 { -volume } else { volume }
}

/// Epoch millis of `epoch + (index - 1)` days at midnight.
///
/// Day overflow rolls into later months, so index 32 is February 1st.
pub fn date_from_index(epoch: NaiveDate, index: i64, zone: TimeZoneMode) -> i64 {
    zone.midnight_millis(add_days(epoch, index - 1))
}

/// Round half toward positive infinity (`-2.5 -> -2`, `2.5 -> 3`).
#[inline]
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

fn signed_step(rng: &mut dyn RandomSource, magnitude: f64) -> i64 {
    // Direction is drawn before magnitude.
    let sign = if rng.positive() { 1.0 } else { -1.0 };
    round_half_up(sign * rng.unit() * magnitude)
}
