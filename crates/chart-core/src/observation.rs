// File: crates/chart-core/src/observation.rs
// Summary: Observation model (date/rate/volume triple) and sequence diagnostics.

use serde::{Deserialize, Serialize};

/// One time-stamped point of the displayed sequence.
///
/// Field names double as the binding keys used by the series (`date` drives
/// the shared X axis, `rate` and `volume` the two value panes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Milliseconds since the Unix epoch.
    pub date: i64,
    pub rate: i64,
    pub volume: i64,
}

impl Observation {
    pub const fn new(date: i64, rate: i64, volume: i64) -> Self {
        Self { date, rate, volume }
    }

    #[inline]
    pub fn x(&self) -> f64 { self.date as f64 }
}

/// Result of [`check_sequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceReport {
    pub len: usize,
    /// Index of the first point whose date is not strictly greater than its predecessor.
    pub first_unordered: Option<usize>,
    pub min_rate: Option<i64>,
    pub min_volume: Option<i64>,
}

impl SequenceReport {
    pub fn is_strictly_ascending(&self) -> bool { self.first_unordered.is_none() }
}

/// Inspect a sequence for ordering and value bounds. Diagnostic only: supplied
/// data is bound as-is regardless of the outcome.
pub fn check_sequence(data: &[Observation]) -> SequenceReport {
    let first_unordered = data
        .windows(2)
        .position(|w| w[1].date <= w[0].date)
        .map(|i| i + 1);
    SequenceReport {
        len: data.len(),
        first_unordered,
        min_rate: data.iter().map(|o| o.rate).min(),
        min_volume: data.iter().map(|o| o.volume).min(),
    }
}
