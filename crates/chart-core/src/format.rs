// File: crates/chart-core/src/format.rs
// Summary: Number, change-percent and date label formatting for axes, legends and tooltips.

use chrono::{Datelike, NaiveDate};

use crate::grouping::TimeUnit;

/// Format with thousands separators and at most two decimals (`#,###.##`).
pub fn number(v: f64) -> String {
    if !v.is_finite() {
        return String::from("-");
    }
    let rounded = (v.abs() * 100.0).round() / 100.0;
    let int_part = rounded.trunc() as u64;
    let frac = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if frac > 0 {
        let f = format!("{frac:02}");
        grouped.push('.');
        grouped.push_str(f.trim_end_matches('0'));
    }
    if v < 0.0 && (int_part > 0 || frac > 0) {
        grouped.insert(0, '-');
    }
    grouped
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Up,
    Down,
    Flat,
}

/// Percent change from `prev` to `current`; `None` when `prev` is zero.
pub fn change_percent(prev: f64, current: f64) -> Option<f64> {
    if prev == 0.0 { None } else { Some((current - prev) / prev.abs() * 100.0) }
}

/// Signed percent text: `+1,234.5`, `-0.42`, or `0`.
pub fn change_text(pct: f64) -> (String, Change) {
    let shown = (pct * 100.0).round() / 100.0;
    if shown > 0.0 {
        (format!("+{}", number(shown)), Change::Up)
    } else if shown < 0.0 {
        (number(shown), Change::Down)
    } else {
        (String::from("0"), Change::Flat)
    }
}

/// Axis label for a bucket start date at the given grouping unit.
pub fn date_label(date: NaiveDate, unit: TimeUnit) -> String {
    match unit {
        TimeUnit::Day | TimeUnit::Week => date.format("%b %d").to_string(),
        TimeUnit::Month if date.month() == 1 => date.format("%Y").to_string(),
        TimeUnit::Month => date.format("%b").to_string(),
    }
}

/// Full date for cursor tooltips.
pub fn tooltip_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_and_decimals() {
        assert_eq!(number(0.0), "0");
        assert_eq!(number(999.0), "999");
        assert_eq!(number(1000.0), "1,000");
        assert_eq!(number(1234567.891), "1,234,567.89");
        assert_eq!(number(-10250.5), "-10,250.5");
        assert_eq!(number(0.004), "0");
    }

    #[test]
    fn change_classification() {
        assert_eq!(change_text(1.0), (String::from("+1"), Change::Up));
        assert_eq!(change_text(-0.421), (String::from("-0.42"), Change::Down));
        assert_eq!(change_text(0.001), (String::from("0"), Change::Flat));
        assert_eq!(change_percent(0.0, 5.0), None);
        assert!((change_percent(1000.0, 1010.0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn month_labels_show_year_in_january() {
        let jan = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        let mar = NaiveDate::from_ymd_opt(2011, 3, 1).unwrap();
        assert_eq!(date_label(jan, TimeUnit::Month), "2011");
        assert_eq!(date_label(mar, TimeUnit::Month), "Mar");
        assert_eq!(date_label(mar, TimeUnit::Day), "Mar 01");
    }
}
