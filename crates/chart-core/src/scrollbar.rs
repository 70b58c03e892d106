// File: crates/chart-core/src/scrollbar.rs
// Summary: Horizontal range-selection scrollbar with its own weekly-grouped mini series.

use crate::axis::{DateAxis, ValueAxis};
use crate::grouping::{Aggregate, Interval};
use crate::layout::Rect;
use crate::observation::Observation;
use crate::series::{y_range_within, Field, Series};
use crate::time::TimeZoneMode;
use crate::view::{Window, MIN_WINDOW};

/// Half width of the grab zone around each grip, in pixels.
pub const GRIP_HALF_WIDTH: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
}

/// Part of the scrollbar under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grip {
    Start,
    End,
    Thumb,
}

#[derive(Clone, Debug)]
pub struct XyScrollbar {
    pub orientation: Orientation,
    pub height: f32,
    pub date_axis: DateAxis,
    pub value_axis: ValueAxis,
    pub series: Series,
}

impl XyScrollbar {
    pub fn new(height: f32) -> Self {
        let mut date_axis = DateAxis::new(Interval::DAY).with_group_intervals(vec![Interval::WEEK]);
        date_axis.group_data = true;
        Self {
            orientation: Orientation::Horizontal,
            height,
            date_axis,
            value_axis: ValueAxis::new("", 1.0),
            series: Series::line("", Field::Rate).with_grouped(Aggregate::Last).with_fill_opacity(0.3),
        }
    }

    pub fn bind(&mut self, data: &[Observation], zone: TimeZoneMode) {
        self.series.bind(data);
        let pts = self.mini_points(f32::MAX, zone);
        self.value_axis.fit(y_range_within(&pts, f64::NEG_INFINITY, f64::INFINITY));
    }

    /// Mini series over the full span, grouped for a track `width` pixels wide.
    pub fn mini_points(&self, width: f32, zone: TimeZoneMode) -> Vec<(f64, f64)> {
        let Some((a, b)) = self.series.x_extent() else { return Vec::new() };
        let interval = self.date_axis.current_interval(b - a, width);
        self.series.grouped_xy(interval, zone)
    }

    /// Thumb extent in pixels, clipped to the track.
    pub fn thumb_px(&self, track: &Rect, window: Window) -> (f32, f32) {
        let w = track.width();
        let l = track.left + (window.start.clamp(0.0, 1.0) as f32) * w;
        let r = track.left + (window.end.clamp(0.0, 1.0) as f32) * w;
        (l, r.max(l))
    }

    pub fn hit_test(&self, track: &Rect, window: Window, x: f32, y: f32) -> Option<Grip> {
        if y < track.top || y > track.bottom || x < track.left - GRIP_HALF_WIDTH || x > track.right + GRIP_HALF_WIDTH {
            return None;
        }
        let (l, r) = self.thumb_px(track, window);
        if (x - l).abs() <= GRIP_HALF_WIDTH { return Some(Grip::Start); }
        if (x - r).abs() <= GRIP_HALF_WIDTH { return Some(Grip::End); }
        if x > l && x < r { return Some(Grip::Thumb); }
        None
    }

    /// Window after dragging `grip` by `dx_px`. The scrollbar never leaves the data.
    pub fn drag(&self, grip: Grip, track: &Rect, window: Window, dx_px: f32) -> Window {
        let d = f64::from(dx_px) / f64::from(track.width().max(1.0));
        match grip {
            Grip::Start => {
                let start = (window.start + d).clamp(0.0, (window.end - MIN_WINDOW).max(0.0));
                Window::new(start, window.end)
            }
            Grip::End => {
                let end = (window.end + d).clamp((window.start + MIN_WINDOW).min(1.0), 1.0);
                Window::new(window.start, end)
            }
            Grip::Thumb => window.panned(d, 0.0),
        }
    }

    /// Centre the thumb on a click at `x` outside it.
    pub fn jump_to(&self, track: &Rect, window: Window, x: f32) -> Window {
        let at = f64::from((x - track.left) / track.width().max(1.0));
        let half = window.width() * 0.5;
        Window::new(at - half, at + half).clamped(0.0)
    }
}
