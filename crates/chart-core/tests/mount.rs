// File: crates/chart-core/tests/mount.rs
// Purpose: Source selection and ViewChart mount/unmount lifecycle.

use chrono::NaiveDate;
use ratechart_core::synthetic::FixedRandom;
use ratechart_core::{
    select, ChartConfig, GeneratorParams, Observation, Origin, SeededRandom, SourcePolicy, TimeZoneMode, ViewChart,
    ViewChartProps,
};

fn supplied() -> Vec<Observation> {
    vec![Observation::new(1_700_000_000_000, 50, -5)]
}

#[test]
fn absent_data_binds_synthetic_walk() {
    let view = ViewChart::mount(ViewChartProps::new(None), &ChartConfig::default(), &mut SeededRandom::new(3)).unwrap();
    assert_eq!(view.origin(), Origin::Synthetic);
    assert_eq!(view.bound().len(), 4999);
    let jan1 = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    assert_eq!(view.bound()[0].date, TimeZoneMode::Local.midnight_millis(jan1));
    assert!(view.staged().is_none());
    assert_eq!(view.title(), "Historical Chart");
}

#[test]
fn supplied_point_is_bound_as_is() {
    let props = ViewChartProps::new(Some(supplied()));
    let view = ViewChart::mount(props, &ChartConfig::default(), &mut SeededRandom::new(3)).unwrap();
    assert_eq!(view.origin(), Origin::Supplied);
    assert_eq!(view.bound(), supplied().as_slice());
    // Out-of-range values are not validated.
    assert_eq!(view.bound()[0].rate, 50);
    assert_eq!(view.bound()[0].volume, -5);
}

#[test]
fn always_synthetic_only_stages_supplied_data() {
    let props = ViewChartProps::new(Some(supplied())).with_policy(SourcePolicy::AlwaysSynthetic);
    let view = ViewChart::mount(props, &ChartConfig::default(), &mut SeededRandom::new(3)).unwrap();
    assert_eq!(view.origin(), Origin::Synthetic);
    assert_eq!(view.bound().len(), 4999);
    assert_eq!(view.staged(), Some(supplied().as_slice()));
}

#[test]
fn empty_supplied_sequence_is_still_supplied() {
    let sel = select(Some(Vec::new()), SourcePolicy::PreferSupplied, &mut FixedRandom { unit: 0.5, positive: true }, &GeneratorParams::default());
    assert_eq!(sel.origin, Origin::Supplied);
    assert!(sel.bound.is_empty());
}

#[test]
fn series_share_the_bound_sequence() {
    let view = ViewChart::mount(ViewChartProps::new(None), &ChartConfig::default(), &mut SeededRandom::new(9)).unwrap();
    let chart = view.root().chart();
    let n = view.bound().len();
    assert_eq!(chart.rate_series.data_xy.len(), n);
    assert_eq!(chart.volume_series.data_xy.len(), n);
    assert_eq!(chart.scrollbar.series.data_xy.len(), n);
    assert_eq!(chart.rate_series.data_xy[0], (view.bound()[0].date as f64, view.bound()[0].rate as f64));
    assert_eq!(chart.volume_series.data_xy[0].1, view.bound()[0].volume as f64);
}

#[test]
fn unmount_releases_root_once() {
    let view = ViewChart::mount(ViewChartProps::new(None), &ChartConfig::default(), &mut SeededRandom::new(1)).unwrap();
    let watch = view.watch();
    assert!(!watch.is_released());
    view.unmount();
    assert_eq!(watch.release_count(), 1);
}

#[test]
fn dropping_view_releases_root_once() {
    let watch = {
        let view = ViewChart::mount(ViewChartProps::new(None), &ChartConfig::default(), &mut SeededRandom::new(1)).unwrap();
        view.watch()
    };
    assert_eq!(watch.release_count(), 1);
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let mut cfg = ChartConfig::default();
    cfg.canvas.height = 0;
    assert!(ViewChart::mount(ViewChartProps::new(None), &cfg, &mut SeededRandom::new(1)).is_err());
}

#[test]
fn seeded_config_mounts_reproducibly() {
    let mut cfg = ChartConfig::default();
    cfg.data.seed = Some(11);
    let a = ViewChart::mount_with_config(ViewChartProps::new(None), &cfg).unwrap();
    let b = ViewChart::mount_with_config(ViewChartProps::new(None), &cfg).unwrap();
    assert_eq!(a.bound(), b.bound());
}

#[test]
fn configured_policy_applies_to_config_mount() {
    let mut cfg = ChartConfig::default();
    cfg.data.policy = SourcePolicy::AlwaysSynthetic;
    cfg.data.seed = Some(5);
    let view = ViewChart::mount_with_config(ViewChartProps::new(Some(supplied())), &cfg).unwrap();
    assert_eq!(view.origin(), Origin::Synthetic);
    assert_eq!(view.bound().len(), 4999);
    assert_eq!(view.staged(), Some(supplied().as_slice()));
}
