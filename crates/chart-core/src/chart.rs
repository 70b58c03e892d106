// File: crates/chart-core/src/chart.rs
// Summary: RateChart object graph (stacked rate/volume panes on a shared date axis), binding and interaction.

use tracing::debug;

use crate::axis::{DateAxis, ValueAxis};
use crate::cursor::{CursorReadout, XyCursor};
use crate::format::change_percent;
use crate::grouping::{Aggregate, Interval};
use crate::layout::{Layout, Rect};
use crate::legend::{fill_template, Legend, LegendItem, SeriesRef, TemplateValues};
use crate::observation::Observation;
use crate::scale::DateScale;
use crate::scrollbar::{Grip, XyScrollbar};
use crate::series::{nearest_index, y_range_within, Field, Series};
use crate::theme::Theme;
use crate::time::TimeZoneMode;
use crate::types::{Insets, HEIGHT, TITLE_HEIGHT, WIDTH};
use crate::view::Window;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    /// Chart canvas height; the title band is added on top when `title` is set.
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to keep snapshots free of font differences.
    pub draw_labels: bool,
    pub title: Option<String>,
    /// Entrance animation progress in `[0, 1]`.
    pub appear_progress: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            title: None,
            appear_progress: 1.0,
        }
    }
}

impl RenderOptions {
    pub fn title_height(&self) -> i32 {
        if self.title.is_some() { TITLE_HEIGHT } else { 0 }
    }

    /// Full surface height including the title band.
    pub fn surface_height(&self) -> i32 { self.height + self.title_height() }

    /// Chart canvas below the title band.
    pub fn canvas_rect(&self) -> Rect {
        let top = self.title_height() as f32;
        Rect::from_ltrb(0.0, top, self.width as f32, top + self.height as f32)
    }
}

/// What a wheel axis does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelAction {
    None,
    PanX,
    ZoomX,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Drag {
    Plot { last_x: f32 },
    Scrollbar { grip: Grip, last_x: f32 },
}

pub struct RateChart {
    pub date_axis: DateAxis,
    pub value_axis: ValueAxis,
    pub volume_axis: ValueAxis,
    pub rate_series: Series,
    pub volume_series: Series,
    pub value_legend: Legend,
    pub volume_legend: Legend,
    pub cursor: XyCursor,
    pub scrollbar: XyScrollbar,
    pub window: Window,
    pub pan_x: bool,
    pub pan_y: bool,
    pub wheel_x: WheelAction,
    pub wheel_y: WheelAction,
    pub zone: TimeZoneMode,
    drag: Option<Drag>,
}

impl RateChart {
    pub fn new(zone: TimeZoneMode) -> Self {
        let mut date_axis = DateAxis::new(Interval::DAY);
        date_axis.group_data = true;
        date_axis.max_deviation = 0.5;
        date_axis.tooltip = true;

        let rate_series = Series::line("rate", Field::Rate)
            .with_grouped(Aggregate::Last)
            .with_legend_value_text("{valueY}")
            .with_tooltip_text("{name}: {valueY} {valueYChangePercent}%");
        let volume_series = Series::column("", Field::Volume)
            .with_grouped(Aggregate::Sum)
            .with_legend_value_text("{valueY}")
            .with_tooltip_text("{valueY}");

        Self {
            date_axis,
            value_axis: ValueAxis::new("Exchange Rate", 0.7),
            volume_axis: ValueAxis::new("Volume", 0.3).with_zero(),
            rate_series,
            volume_series,
            value_legend: Legend::new(vec![SeriesRef::Rate]),
            volume_legend: Legend::new(vec![SeriesRef::Volume]),
            cursor: XyCursor::default(),
            scrollbar: XyScrollbar::new(50.0),
            window: Window::FULL,
            pan_x: true,
            pan_y: false,
            wheel_x: WheelAction::PanX,
            wheel_y: WheelAction::ZoomX,
            zone,
            drag: None,
        }
    }

    /// Set the same sequence on the rate, volume and scrollbar series and reset the view.
    pub fn bind(&mut self, data: &[Observation], plot_width: f32) {
        self.rate_series.bind(data);
        self.volume_series.bind(data);
        self.scrollbar.bind(data, self.zone);
        self.window = Window::FULL;
        self.autoscale(plot_width);
        debug!(len = data.len(), "bound sequence to rate, volume and scrollbar series");
    }

    pub fn series(&self, r: SeriesRef) -> &Series {
        match r {
            SeriesRef::Rate => &self.rate_series,
            SeriesRef::Volume => &self.volume_series,
        }
    }

    pub fn layout(&self, opts: &RenderOptions) -> Layout {
        let total = (self.value_axis.height_ratio + self.volume_axis.height_ratio).max(f32::EPSILON);
        Layout::compute(opts.canvas_rect(), &opts.insets, self.value_axis.height_ratio / total, self.scrollbar.height)
    }

    pub fn full_x_range(&self) -> Option<(f64, f64)> { self.rate_series.x_extent() }

    pub fn visible_x_range(&self) -> Option<(f64, f64)> {
        let (a, b) = self.full_x_range()?;
        Some(self.window.to_x_range(a, b))
    }

    /// Grouping interval for the current window at `plot_width` pixels.
    pub fn display_interval(&self, plot_width: f32) -> Interval {
        match self.visible_x_range() {
            Some((a, b)) => self.date_axis.current_interval(b - a, plot_width),
            None => self.date_axis.base_interval,
        }
    }

    /// Grouped points of `series` inside the window, plus one neighbour on each
    /// side so lines run to the plot edges.
    pub fn visible_points(&self, series: &Series, plot_width: f32) -> Vec<(f64, f64)> {
        let Some((x0, x1)) = self.visible_x_range() else { return Vec::new() };
        let pts = series.grouped_xy(self.display_interval(plot_width), self.zone);
        let lo = pts.partition_point(|p| p.0 < x0).saturating_sub(1);
        let hi = (pts.partition_point(|p| p.0 <= x1) + 1).min(pts.len());
        pts[lo..hi].to_vec()
    }

    /// Fit both value axes to the data in the window.
    pub fn autoscale(&mut self, plot_width: f32) {
        let Some((x0, x1)) = self.visible_x_range() else { return };
        let interval = self.display_interval(plot_width);
        let rate = self.rate_series.grouped_xy(interval, self.zone);
        let volume = self.volume_series.grouped_xy(interval, self.zone);
        self.value_axis.fit(y_range_within(&rate, x0, x1));
        self.volume_axis.fit(y_range_within(&volume, x0, x1));
    }

    pub fn set_window(&mut self, window: Window, plot_width: f32) {
        self.window = window.clamped(self.date_axis.max_deviation);
        self.autoscale(plot_width);
    }

    /// Drag-pan: content follows the pointer.
    pub fn pan_by_pixels(&mut self, dx: f32, layout: &Layout) {
        if !self.pan_x { return; }
        let plot_w = layout.value.plot.width().max(1.0);
        let delta = -f64::from(dx) / f64::from(plot_w) * self.window.width();
        self.window = self.window.panned(delta, self.date_axis.max_deviation);
        self.autoscale(plot_w);
    }

    /// Zoom around the pixel column `x_px`; `factor > 1` zooms in.
    pub fn zoom_at_pixel(&mut self, factor: f64, x_px: f32, layout: &Layout) {
        let (l, r) = layout.plot_x();
        let anchor = f64::from((x_px - l) / (r - l).max(1.0));
        self.window = self.window.zoomed(anchor, factor, self.date_axis.max_deviation);
        self.autoscale(r - l);
    }

    /// Wheel deltas in pixels (positive `dy` scrolls down, which zooms out).
    pub fn wheel(&mut self, dx: f32, dy: f32, x_px: f32, layout: &Layout) {
        for (delta, action) in [(dx, self.wheel_x), (dy, self.wheel_y)] {
            if delta == 0.0 { continue; }
            match action {
                WheelAction::None => {}
                WheelAction::PanX => self.pan_by_pixels(-delta, layout),
                WheelAction::ZoomX => self.zoom_at_pixel(1.1f64.powf(-f64::from(delta) / 100.0), x_px, layout),
            }
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, layout: &Layout) {
        if let Some(grip) = self.scrollbar.hit_test(&layout.scrollbar, self.window, x, y) {
            self.drag = Some(Drag::Scrollbar { grip, last_x: x });
        } else if layout.scrollbar.contains(x, y) {
            let w = self.scrollbar.jump_to(&layout.scrollbar, self.window, x);
            self.set_window(w, layout.value.plot.width());
        } else if in_panes(layout, x, y) {
            self.drag = Some(Drag::Plot { last_x: x });
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, layout: &Layout) {
        self.cursor.position = if in_panes(layout, x, y) { Some((x, y)) } else { None };
        match self.drag {
            Some(Drag::Plot { last_x }) => {
                self.pan_by_pixels(x - last_x, layout);
                self.drag = Some(Drag::Plot { last_x: x });
            }
            Some(Drag::Scrollbar { grip, last_x }) => {
                let w = self.scrollbar.drag(grip, &layout.scrollbar, self.window, x - last_x);
                self.set_window(w, layout.value.plot.width());
                self.drag = Some(Drag::Scrollbar { grip, last_x: x });
            }
            None => {}
        }
    }

    pub fn pointer_up(&mut self) { self.drag = None; }

    pub fn pointer_leave(&mut self) {
        self.cursor.position = None;
        self.drag = None;
    }

    /// Data under the cursor, snapped to the nearest grouped rate point.
    pub fn readout(&self, layout: &Layout) -> Option<CursorReadout> {
        let (cx, cy) = self.cursor.position?;
        let (x0, x1) = self.visible_x_range()?;
        let (l, r) = layout.plot_x();
        let scale = DateScale::new(l, r, x0, x1);
        let interval = self.display_interval(r - l);
        let rate = self.rate_series.grouped_xy(interval, self.zone);
        let volume = self.volume_series.grouped_xy(interval, self.zone);

        let i = nearest_index(&rate, scale.from_px(cx))?;
        let date = rate[i].0;
        let prev = if i > 0 { Some(rate[i - 1].1) } else { None };
        let vol = nearest_index(&volume, date).filter(|&j| volume[j].0 == date).map(|j| volume[j].1);
        Some(CursorReadout {
            x_px: scale.to_px(date),
            y_px: cy,
            date,
            interval,
            rate: Some(rate[i].1),
            rate_change_percent: prev.and_then(|p| change_percent(p, rate[i].1)),
            volume: vol,
        })
    }

    /// Legend entries for `legend`: cursor values when hovering, otherwise the
    /// last visible value of each series.
    pub fn legend_items(&self, legend: &Legend, readout: Option<&CursorReadout>, plot_width: f32) -> Vec<LegendItem> {
        legend
            .series
            .iter()
            .map(|&r| {
                let s = self.series(r);
                let value = match (readout, r) {
                    (Some(ro), SeriesRef::Rate) => ro.rate,
                    (Some(ro), SeriesRef::Volume) => ro.volume,
                    (None, _) => self.last_visible_value(s, plot_width),
                };
                let template = s.legend_value_text.as_deref().unwrap_or("");
                LegendItem {
                    label: s.name.clone(),
                    value_text: fill_template(template, &TemplateValues { name: &s.name, value_y: value, change_percent: None }),
                    color_index: s.color_index,
                }
            })
            .collect()
    }

    fn last_visible_value(&self, series: &Series, plot_width: f32) -> Option<f64> {
        let (_, x1) = self.visible_x_range()?;
        self.visible_points(series, plot_width).iter().rev().find(|p| p.0 <= x1).map(|p| p.1)
    }

    /// Tooltip texts for the readout: (rate, volume).
    pub fn tooltip_texts(&self, ro: &CursorReadout) -> (Option<String>, Option<String>) {
        let text = |s: &Series, value: Option<f64>, change: Option<f64>| {
            let tpl = s.tooltip_text.as_deref()?;
            value.map(|v| fill_template(tpl, &TemplateValues { name: &s.name, value_y: Some(v), change_percent: change }))
        };
        (
            text(&self.rate_series, ro.rate, ro.rate_change_percent.or(Some(0.0))),
            text(&self.volume_series, ro.volume, None),
        )
    }
}

impl Default for RateChart {
    fn default() -> Self { Self::new(TimeZoneMode::default()) }
}

fn in_panes(layout: &Layout, x: f32, y: f32) -> bool {
    let (l, r) = layout.plot_x();
    x >= l && x <= r && y >= layout.value.header.top && y <= layout.volume.plot.bottom
}
