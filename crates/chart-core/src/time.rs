// File: crates/chart-core/src/time.rs
// Summary: Calendar <-> epoch millisecond conversions in a selectable time zone.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::Deserialize;

pub const DAY_MS: i64 = 86_400_000;

/// Zone used to interpret calendar dates.
///
/// `Local` reproduces browser `Date` semantics (midnight in the host zone);
/// `Utc` makes timestamps independent of the machine running the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeZoneMode {
    #[default]
    Local,
    Utc,
}

impl TimeZoneMode {
    /// Epoch milliseconds of midnight at the start of `date`.
    pub fn midnight_millis(self, date: NaiveDate) -> i64 {
        let midnight = date.and_time(NaiveTime::MIN);
        match self {
            TimeZoneMode::Utc => midnight.and_utc().timestamp_millis(),
            TimeZoneMode::Local => first_instant(midnight, |t| {
                Local.from_local_datetime(t).earliest().map(|dt| dt.timestamp_millis())
            })
            .unwrap_or_else(|| midnight.and_utc().timestamp_millis()),
        }
    }

    /// Calendar date containing the instant `ms`.
    pub fn date_of(self, ms: i64) -> Option<NaiveDate> {
        match self {
            TimeZoneMode::Utc => DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.date_naive()),
            TimeZoneMode::Local => Local.timestamp_millis_opt(ms).earliest().map(|dt| dt.date_naive()),
        }
    }
}

const GAP_STEP_MINUTES: i64 = 15;

/// First wall-clock time at or after `start`, in quarter-hour steps within the
/// same day, that `resolve` maps to an instant. A DST gap at midnight moves the
/// start of the day forward to the end of the gap.
fn first_instant(start: NaiveDateTime, resolve: impl Fn(&NaiveDateTime) -> Option<i64>) -> Option<i64> {
    let steps = 24 * 60 / GAP_STEP_MINUTES;
    (0..steps)
        .map(|i| start + chrono::Duration::minutes(i * GAP_STEP_MINUTES))
        .find_map(|t| resolve(&t))
}

/// Calendar date at `offset` days from `epoch` (negative offsets allowed).
pub fn add_days(epoch: NaiveDate, offset: i64) -> NaiveDate {
    epoch
        .checked_add_signed(chrono::Duration::days(offset))
        .unwrap_or(if offset < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_midnight_of_2010_01_01() {
        let d = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        assert_eq!(TimeZoneMode::Utc.midnight_millis(d), 1_262_304_000_000);
    }

    #[test]
    fn date_of_inverts_midnight() {
        let d = NaiveDate::from_ymd_opt(2012, 2, 29).unwrap();
        for zone in [TimeZoneMode::Utc, TimeZoneMode::Local] {
            let ms = zone.midnight_millis(d);
            assert_eq!(zone.date_of(ms), Some(d));
        }
    }

    #[test]
    fn midnight_in_dst_gap_moves_to_end_of_gap() {
        // Zone five hours west of UTC whose clocks skip 00:00..01:00.
        let zone = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
        let d = NaiveDate::from_ymd_opt(2011, 3, 13).unwrap();
        let midnight = d.and_time(NaiveTime::MIN);
        let gap_end = d.and_hms_opt(1, 0, 0).unwrap();
        let ms = first_instant(midnight, |t| {
            (*t >= gap_end).then(|| zone.from_local_datetime(t).unwrap().timestamp_millis())
        })
        .unwrap();
        assert_eq!(ms, d.and_hms_opt(6, 0, 0).unwrap().and_utc().timestamp_millis());
        assert_eq!(zone.timestamp_millis_opt(ms).unwrap().date_naive(), d);
    }

    #[test]
    fn add_days_rolls_over_months() {
        let d = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        assert_eq!(add_days(d, 31), NaiveDate::from_ymd_opt(2010, 2, 1).unwrap());
        assert_eq!(add_days(d, -1), NaiveDate::from_ymd_opt(2009, 12, 31).unwrap());
    }
}
