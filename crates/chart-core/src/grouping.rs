// File: crates/chart-core/src/grouping.rs
// Summary: Date-axis data grouping (day/week/month buckets) with per-series aggregation.

use chrono::{Datelike, NaiveDate};

use crate::time::{add_days, TimeZoneMode, DAY_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Day,
    Week,
    Month,
}

/// A calendar interval such as "1 day" or "3 months".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub unit: TimeUnit,
    pub count: u32,
}

impl Interval {
    pub const DAY: Interval = Interval { unit: TimeUnit::Day, count: 1 };
    pub const WEEK: Interval = Interval { unit: TimeUnit::Week, count: 1 };
    pub const MONTH: Interval = Interval { unit: TimeUnit::Month, count: 1 };

    pub const fn new(unit: TimeUnit, count: u32) -> Self {
        Self { unit, count: if count == 0 { 1 } else { count } }
    }

    /// Nominal length, used only to estimate bucket counts.
    pub fn approx_ms(&self) -> f64 {
        let days = match self.unit {
            TimeUnit::Day => 1.0,
            TimeUnit::Week => 7.0,
            TimeUnit::Month => 30.4375,
        };
        days * self.count as f64 * DAY_MS as f64
    }

    /// Bucket key of `date`; consecutive keys are consecutive buckets.
    fn key(&self, date: NaiveDate) -> i64 {
        let n = i64::from(self.count);
        match self.unit {
            TimeUnit::Day => i64::from(date.num_days_from_ce()).div_euclid(n),
            // 0001-01-01 (day 1 from CE) is a Monday.
            TimeUnit::Week => {
                let monday = i64::from(date.num_days_from_ce()) - i64::from(date.weekday().num_days_from_monday());
                (monday - 1).div_euclid(7 * n)
            }
            TimeUnit::Month => (i64::from(date.year()) * 12 + i64::from(date.month0())).div_euclid(n),
        }
    }

    /// First calendar date of bucket `key`.
    fn start(&self, key: i64) -> NaiveDate {
        let n = i64::from(self.count);
        let ce1 = NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or_default();
        match self.unit {
            TimeUnit::Day => add_days(ce1, key * n - 1),
            TimeUnit::Week => add_days(ce1, key * 7 * n),
            TimeUnit::Month => {
                let m = key * n;
                NaiveDate::from_ymd_opt(m.div_euclid(12) as i32, m.rem_euclid(12) as u32 + 1, 1).unwrap_or(ce1)
            }
        }
    }
}

/// How the values of one bucket collapse into one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregate {
    Open,
    Last,
    Sum,
    High,
    Low,
    Average,
}

/// Group (epoch ms, value) points into calendar buckets.
///
/// Points must be ordered by x; each output point sits at its bucket start.
pub fn group(points: &[(f64, f64)], interval: Interval, aggregate: Aggregate, zone: TimeZoneMode) -> Vec<(f64, f64)> {
    if interval == Interval::DAY && points.windows(2).all(|w| w[1].0 - w[0].0 >= DAY_MS as f64 - 3_600_000.0) {
        // Already at most one point per day.
        return points.to_vec();
    }
    let mut out: Vec<(f64, f64)> = Vec::new();
    let mut current: Option<(i64, Acc)> = None;
    for &(x, y) in points {
        let Some(date) = zone.date_of(x as i64) else { continue };
        let key = interval.key(date);
        match current.as_mut() {
            Some((k, acc)) if *k == key => acc.push(y),
            _ => {
                if let Some((k, acc)) = current.take() {
                    out.push((zone.midnight_millis(interval.start(k)) as f64, acc.finish(aggregate)));
                }
                current = Some((key, Acc::new(y)));
            }
        }
    }
    if let Some((k, acc)) = current {
        out.push((zone.midnight_millis(interval.start(k)) as f64, acc.finish(aggregate)));
    }
    out
}

/// Smallest candidate whose bucket count for `span_ms` fits `max_points`;
/// the last (coarsest) candidate otherwise.
pub fn choose_interval(span_ms: f64, max_points: usize, candidates: &[Interval]) -> Interval {
    let max_points = max_points.max(1) as f64;
    candidates
        .iter()
        .copied()
        .find(|iv| span_ms / iv.approx_ms() <= max_points)
        .or_else(|| candidates.last().copied())
        .unwrap_or(Interval::DAY)
}

struct Acc {
    open: f64,
    last: f64,
    sum: f64,
    high: f64,
    low: f64,
    n: usize,
}

impl Acc {
    fn new(y: f64) -> Self {
        Self { open: y, last: y, sum: y, high: y, low: y, n: 1 }
    }

    fn push(&mut self, y: f64) {
        self.last = y;
        self.sum += y;
        self.high = self.high.max(y);
        self.low = self.low.min(y);
        self.n += 1;
    }

    fn finish(&self, aggregate: Aggregate) -> f64 {
        match aggregate {
            Aggregate::Open => self.open,
            Aggregate::Last => self.last,
            Aggregate::Sum => self.sum,
            Aggregate::High => self.high,
            Aggregate::Low => self.low,
            Aggregate::Average => self.sum / self.n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> f64 {
        TimeZoneMode::Utc.midnight_millis(NaiveDate::from_ymd_opt(y, m, d).unwrap()) as f64
    }

    #[test]
    fn weeks_start_on_monday() {
        // 2010-01-01 is a Friday; 2010-01-04 a Monday.
        let iv = Interval::WEEK;
        let fri = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        assert_eq!(iv.start(iv.key(fri)), NaiveDate::from_ymd_opt(2009, 12, 28).unwrap());
        let mon = NaiveDate::from_ymd_opt(2010, 1, 4).unwrap();
        assert_eq!(iv.start(iv.key(mon)), mon);
    }

    #[test]
    fn month_buckets() {
        let pts = vec![(day(2010, 1, 30), 1.0), (day(2010, 1, 31), 2.0), (day(2010, 2, 1), 4.0)];
        let g = group(&pts, Interval::MONTH, Aggregate::Sum, TimeZoneMode::Utc);
        assert_eq!(g, vec![(day(2010, 1, 1), 3.0), (day(2010, 2, 1), 4.0)]);
    }

    #[test]
    fn weekly_sum_preserves_total() {
        let pts: Vec<(f64, f64)> = (1..=31).map(|d| (day(2010, 1, d), d as f64)).collect();
        let g = group(&pts, Interval::WEEK, Aggregate::Sum, TimeZoneMode::Utc);
        // Dec 28 .. Jan 31 spans five Monday-aligned weeks.
        assert_eq!(g.len(), 5);
        assert_eq!(g.iter().map(|p| p.1).sum::<f64>(), (1..=31).sum::<i32>() as f64);
        // first bucket holds Jan 1-3
        assert_eq!(g[0], (day(2009, 12, 28), 6.0));
    }

    #[test]
    fn last_keeps_bucket_close() {
        let pts = vec![(day(2010, 1, 4), 10.0), (day(2010, 1, 5), 12.0), (day(2010, 1, 11), 7.0)];
        let g = group(&pts, Interval::WEEK, Aggregate::Last, TimeZoneMode::Utc);
        assert_eq!(g, vec![(day(2010, 1, 4), 12.0), (day(2010, 1, 11), 7.0)]);
    }

    #[test]
    fn choose_interval_picks_finest_that_fits() {
        let cands = [Interval::DAY, Interval::WEEK, Interval::MONTH];
        let span = 4998.0 * DAY_MS as f64;
        assert_eq!(choose_interval(span, 5000, &cands), Interval::DAY);
        assert_eq!(choose_interval(span, 800, &cands), Interval::WEEK);
        assert_eq!(choose_interval(span, 200, &cands), Interval::MONTH);
        assert_eq!(choose_interval(span, 10, &cands), Interval::MONTH);
    }
}
