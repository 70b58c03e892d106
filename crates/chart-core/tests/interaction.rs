// File: crates/chart-core/tests/interaction.rs
// Purpose: Pan/zoom, scrollbar and cursor behavior on a mounted view.

use ratechart_core::{ChartConfig, Interval, MountedView, SeededRandom, ViewChart, ViewChartProps, Window};

fn mounted() -> MountedView {
    ViewChart::mount(ViewChartProps::new(None), &ChartConfig::default(), &mut SeededRandom::new(21)).unwrap()
}

fn window(view: &MountedView) -> Window { view.root().chart().window }

fn plot_center(view: &MountedView) -> (f32, f32) {
    let p = view.layout().value.plot;
    ((p.left + p.right) * 0.5, (p.top + p.bottom) * 0.5)
}

#[test]
fn wheel_y_zooms_around_pointer() {
    let mut view = mounted();
    let (cx, _) = plot_center(&view);
    view.wheel(0.0, -300.0, cx);
    let w = window(&view);
    assert!(w.width() < 0.8 && w.width() > 0.7, "{w:?}");
    assert!((w.start + w.end - 1.0).abs() < 1e-3, "zoom should stay centred: {w:?}");

    view.wheel(0.0, 300.0, cx);
    assert!((window(&view).width() - 1.0).abs() < 1e-6);
}

#[test]
fn wheel_x_and_drag_pan() {
    let mut view = mounted();
    let (cx, cy) = plot_center(&view);
    view.wheel(0.0, -300.0, cx);
    let zoomed = window(&view);

    view.wheel(50.0, 0.0, cx);
    let after_wheel = window(&view);
    assert!(after_wheel.start > zoomed.start);
    assert!((after_wheel.width() - zoomed.width()).abs() < 1e-9);

    view.pointer_down(cx, cy);
    view.pointer_move(cx + 100.0, cy);
    view.pointer_up();
    let after_drag = window(&view);
    assert!(after_drag.start < after_wheel.start, "content follows the pointer");

    // Released: further moves do not pan.
    view.pointer_move(cx + 300.0, cy);
    assert_eq!(window(&view), after_drag);
}

#[test]
fn scrollbar_click_and_thumb_drag() {
    let mut view = mounted();
    let (cx, _) = plot_center(&view);
    view.wheel(0.0, -300.0, cx);

    let track = view.layout().scrollbar;
    let y = (track.top + track.bottom) * 0.5;
    view.pointer_down(track.left + 2.0, y);
    view.pointer_up();
    let w = window(&view);
    assert_eq!(w.start, 0.0);

    let (_, thumb_right) = view.root().chart().scrollbar.thumb_px(&track, w);
    let mid = (track.left + thumb_right) * 0.5;
    view.pointer_down(mid, y);
    view.pointer_move(mid + 10_000.0, y);
    view.pointer_up();
    let w2 = window(&view);
    assert!((w2.end - 1.0).abs() < 1e-9, "thumb stops at the end of the data: {w2:?}");
    assert!((w2.width() - w.width()).abs() < 1e-9);
}

#[test]
fn grouping_follows_visible_span() {
    let mut view = mounted();
    let (cx, _) = plot_center(&view);
    let plot_w = view.root().plot_width();
    assert_eq!(view.root().chart().display_interval(plot_w), Interval::MONTH);
    view.wheel(0.0, -3000.0, cx);
    assert_eq!(view.root().chart().display_interval(plot_w), Interval::DAY);
}

#[test]
fn cursor_readout_and_legend() {
    let mut view = mounted();
    let (cx, cy) = plot_center(&view);
    view.pointer_move(cx, cy);

    let layout = view.layout();
    let chart = view.root().chart();
    let ro = chart.readout(&layout).expect("cursor over plot");
    assert!(ro.rate.is_some() && ro.volume.is_some());
    assert!(ro.rate_change_percent.is_some());

    let items = chart.legend_items(&chart.value_legend, Some(&ro), layout.value.plot.width());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "rate");
    assert!(!items[0].value_text.is_empty());

    let (rate_tip, volume_tip) = chart.tooltip_texts(&ro);
    assert!(rate_tip.unwrap().starts_with("rate: "));
    assert!(volume_tip.is_some());

    view.pointer_leave();
    assert!(view.root().chart().readout(&view.layout()).is_none());
}

#[test]
fn value_axes_fit_visible_data() {
    let view = mounted();
    let chart = view.root().chart();
    let plot_w = view.root().plot_width();
    let axis = &chart.value_axis;
    assert!(axis.min < axis.max);
    for (_, y) in chart.visible_points(&chart.rate_series, plot_w) {
        assert!(y >= axis.min && y <= axis.max, "{y} outside [{}, {}]", axis.min, axis.max);
    }
    assert_eq!(chart.volume_axis.min, 0.0);
    assert!(chart.volume_axis.max > 0.0);
}
