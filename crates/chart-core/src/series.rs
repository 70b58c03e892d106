// File: crates/chart-core/src/series.rs
// Summary: Series model: an Observation field bound to a line or column encoding on a shared date axis.

use crate::grouping::{group, Aggregate, Interval};
use crate::observation::Observation;
use crate::time::TimeZoneMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Column,
}

/// Observation field a series reads its Y value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Rate,
    Volume,
}

impl Field {
    #[inline]
    pub fn value(self, o: &Observation) -> f64 {
        match self {
            Field::Rate => o.rate as f64,
            Field::Volume => o.volume as f64,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub series_type: SeriesType,
    pub field: Field,
    /// How grouped buckets collapse.
    pub grouped: Aggregate,
    /// Palette index of stroke and fill.
    pub color_index: usize,
    pub stroke_width: f32,
    /// Area fill under a line, or column body opacity.
    pub fill_opacity: Option<f32>,
    /// Text template shown next to the legend entry.
    pub legend_value_text: Option<String>,
    /// Text template for the cursor tooltip.
    pub tooltip_text: Option<String>,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, series_type: SeriesType, field: Field) -> Self {
        Self {
            name: name.into(),
            series_type,
            field,
            grouped: Aggregate::Last,
            color_index: 0,
            stroke_width: if series_type == SeriesType::Line { 1.5 } else { 0.2 },
            fill_opacity: if series_type == SeriesType::Column { Some(1.0) } else { None },
            legend_value_text: None,
            tooltip_text: None,
            data_xy: Vec::new(),
        }
    }

    pub fn line(name: impl Into<String>, field: Field) -> Self { Self::new(name, SeriesType::Line, field) }

    pub fn column(name: impl Into<String>, field: Field) -> Self { Self::new(name, SeriesType::Column, field) }

    pub fn with_grouped(mut self, aggregate: Aggregate) -> Self {
        self.grouped = aggregate;
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn with_legend_value_text(mut self, template: impl Into<String>) -> Self {
        self.legend_value_text = Some(template.into());
        self
    }

    pub fn with_tooltip_text(mut self, template: impl Into<String>) -> Self {
        self.tooltip_text = Some(template.into());
        self
    }

    /// Replace the series data with `(date, field)` pairs from `data`.
    pub fn bind(&mut self, data: &[Observation]) {
        let field = self.field;
        self.data_xy = data.iter().map(|o| (o.x(), field.value(o))).collect();
    }

    /// Data collapsed to `interval` using this series' aggregate.
    pub fn grouped_xy(&self, interval: Interval, zone: TimeZoneMode) -> Vec<(f64, f64)> {
        group(&self.data_xy, interval, self.grouped, zone)
    }

    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let first = self.data_xy.first()?.0;
        let last = self.data_xy.last()?.0;
        Some((first.min(last), first.max(last)))
    }
}

/// Min/max of y over points whose x lies in `[x_min, x_max]`.
pub fn y_range_within(points: &[(f64, f64)], x_min: f64, x_max: f64) -> Option<(f64, f64)> {
    points
        .iter()
        .filter(|p| p.0 >= x_min && p.0 <= x_max)
        .fold(None, |acc, &(_, y)| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
}

/// Index of the point with x closest to `x`; points must be sorted by x.
pub fn nearest_index(points: &[(f64, f64)], x: f64) -> Option<usize> {
    if points.is_empty() { return None; }
    let i = points.partition_point(|p| p.0 < x);
    if i == 0 { return Some(0); }
    if i >= points.len() { return Some(points.len() - 1); }
    let before = x - points[i - 1].0;
    let after = points[i].0 - x;
    Some(if before <= after { i - 1 } else { i })
}
