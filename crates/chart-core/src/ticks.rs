// File: crates/chart-core/src/ticks.rs
// Summary: Grid/tick layout helpers for value and date axes.

use chrono::NaiveDate;

use crate::grouping::{Interval, TimeUnit};
use crate::time::{add_days, TimeZoneMode};

/// Round `raw` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 2.5 { 2.5 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Round-numbered ticks inside `[min, max]`, about `target` of them.
pub fn value_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) { return vec![min]; }
    let step = nice_step((max - min) / target.max(1) as f64);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut v = first;
    while v <= max + step * 1e-9 {
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        v += step;
    }
    out
}

/// Date tick positions (epoch ms) for `[min_ms, max_ms]` with at most about
/// `max_ticks` labels, plus the unit used to format them.
pub fn date_ticks(min_ms: f64, max_ms: f64, max_ticks: usize, zone: TimeZoneMode) -> (Vec<(f64, NaiveDate)>, TimeUnit) {
    const CANDIDATES: [Interval; 9] = [
        Interval::new(TimeUnit::Day, 1),
        Interval::new(TimeUnit::Day, 2),
        Interval::new(TimeUnit::Week, 1),
        Interval::new(TimeUnit::Week, 2),
        Interval::new(TimeUnit::Month, 1),
        Interval::new(TimeUnit::Month, 3),
        Interval::new(TimeUnit::Month, 6),
        Interval::new(TimeUnit::Month, 12),
        Interval::new(TimeUnit::Month, 24),
    ];
    let (Some(d0), Some(d1)) = (zone.date_of(min_ms as i64), zone.date_of(max_ms as i64)) else {
        return (Vec::new(), TimeUnit::Day);
    };
    let interval = crate::grouping::choose_interval(max_ms - min_ms, max_ticks, &CANDIDATES);

    let mut out = Vec::new();
    let mut date = align(d0, interval);
    while date <= d1 {
        let ms = zone.midnight_millis(date) as f64;
        if ms >= min_ms && ms <= max_ms { out.push((ms, date)); }
        let next = step(date, interval);
        if next <= date { break; }
        date = next;
    }
    (out, interval.unit)
}

fn align(date: NaiveDate, iv: Interval) -> NaiveDate {
    use chrono::Datelike;
    match iv.unit {
        TimeUnit::Day => date,
        TimeUnit::Week => add_days(date, -i64::from(date.weekday().num_days_from_monday())),
        TimeUnit::Month => {
            let m0 = date.month0() - date.month0() % iv.count.clamp(1, 12);
            NaiveDate::from_ymd_opt(date.year(), m0 + 1, 1).unwrap_or(date)
        }
    }
}

fn step(date: NaiveDate, iv: Interval) -> NaiveDate {
    match iv.unit {
        TimeUnit::Day => add_days(date, i64::from(iv.count)),
        TimeUnit::Week => add_days(date, 7 * i64::from(iv.count)),
        TimeUnit::Month => date
            .checked_add_months(chrono::Months::new(iv.count))
            .unwrap_or(NaiveDate::MAX),
    }
}
