// File: crates/chart-core/src/cursor.rs
// Summary: XY cursor: pointer position and the data readout snapped to the nearest grouped point.

use crate::grouping::Interval;

#[derive(Clone, Copy, Debug, Default)]
pub struct XyCursor {
    /// Pointer position in surface pixels while it hovers the chart.
    pub position: Option<(f32, f32)>,
}

/// Values under the cursor, for tooltips and legends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorReadout {
    /// Snapped X pixel of the data point.
    pub x_px: f32,
    pub y_px: f32,
    /// Bucket start (epoch ms).
    pub date: f64,
    pub interval: Interval,
    pub rate: Option<f64>,
    /// Change against the previous grouped rate point.
    pub rate_change_percent: Option<f64>,
    pub volume: Option<f64>,
}
