// File: crates/chart-core/src/axis.rs
// Summary: Value and date axis models: headers, stacking ratios, ranges and grouping intervals.

use crate::grouping::{choose_interval, Interval, TimeUnit};

/// Vertical value axis owning one pane of the stack.
#[derive(Clone, Debug)]
pub struct ValueAxis {
    /// Bold header label drawn above the pane.
    pub header: String,
    /// Share of the combined pane height.
    pub height_ratio: f32,
    /// Labels on the right-hand side.
    pub opposite: bool,
    /// Keep zero inside the range (column series grow from zero).
    pub include_zero: bool,
    pub min: f64,
    pub max: f64,
}

impl ValueAxis {
    pub fn new(header: impl Into<String>, height_ratio: f32) -> Self {
        Self { header: header.into(), height_ratio, opposite: true, include_zero: false, min: 0.0, max: 1.0 }
    }

    pub fn with_zero(mut self) -> Self {
        self.include_zero = true;
        self
    }

    /// Fit the range to `data` (min, max) with a 2% margin; keeps the previous
    /// range when there is no data.
    pub fn fit(&mut self, data: Option<(f64, f64)>) {
        let Some((mut lo, mut hi)) = data else { return };
        if self.include_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        if (hi - lo).abs() < 1e-9 { hi = lo + 1.0; }
        let m = (hi - lo) * 0.02;
        self.min = if self.include_zero && lo >= 0.0 { lo } else { lo - m };
        self.max = hi + m;
    }
}

/// Shared horizontal date axis.
#[derive(Clone, Debug)]
pub struct DateAxis {
    pub base_interval: Interval,
    /// Group points into coarser intervals when they do not fit the plot width.
    pub group_data: bool,
    /// Candidate intervals when grouping, finest first.
    pub group_intervals: Vec<Interval>,
    /// How far the window may be panned past the data, as a fraction of its width.
    pub max_deviation: f64,
    /// Show a date tooltip under the cursor.
    pub tooltip: bool,
    /// Minimum horizontal pixels per grouped point.
    pub min_px_per_point: f32,
}

impl DateAxis {
    pub fn new(base_interval: Interval) -> Self {
        Self {
            base_interval,
            group_data: false,
            group_intervals: vec![
                Interval::DAY,
                Interval::WEEK,
                Interval::MONTH,
                Interval::new(TimeUnit::Month, 3),
                Interval::new(TimeUnit::Month, 12),
            ],
            max_deviation: 0.0,
            tooltip: false,
            min_px_per_point: 2.0,
        }
    }

    pub fn with_group_intervals(mut self, intervals: Vec<Interval>) -> Self {
        self.group_intervals = intervals;
        self
    }

    /// Interval used to display `span_ms` across `plot_width` pixels.
    pub fn current_interval(&self, span_ms: f64, plot_width: f32) -> Interval {
        if !self.group_data || self.group_intervals.is_empty() {
            return self.base_interval;
        }
        let max_points = (plot_width / self.min_px_per_point.max(0.1)).floor().max(1.0) as usize;
        choose_interval(span_ms, max_points, &self.group_intervals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::DAY_MS;

    #[test]
    fn fit_adds_margin() {
        let mut a = ValueAxis::new("Exchange Rate", 0.7);
        a.fit(Some((100.0, 200.0)));
        assert!((a.min - 98.0).abs() < 1e-9);
        assert!((a.max - 202.0).abs() < 1e-9);
    }

    #[test]
    fn fit_volume_starts_at_zero() {
        let mut a = ValueAxis::new("Volume", 0.3).with_zero();
        a.fit(Some((5_000.0, 15_000.0)));
        assert_eq!(a.min, 0.0);
        assert!((a.max - 15_300.0).abs() < 1e-9);
    }

    #[test]
    fn grouping_kicks_in_for_dense_spans() {
        let mut axis = DateAxis::new(Interval::DAY);
        let span = 4998.0 * DAY_MS as f64;
        assert_eq!(axis.current_interval(span, 900.0), Interval::DAY);
        axis.group_data = true;
        assert_eq!(axis.current_interval(span, 900.0), Interval::MONTH);
        assert_eq!(axis.current_interval(60.0 * DAY_MS as f64, 900.0), Interval::DAY);
    }

    #[test]
    fn single_candidate_always_used() {
        let mut axis = DateAxis::new(Interval::DAY).with_group_intervals(vec![Interval::WEEK]);
        axis.group_data = true;
        assert_eq!(axis.current_interval(10.0 * DAY_MS as f64, 900.0), Interval::WEEK);
    }
}
