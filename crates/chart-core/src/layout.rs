// File: crates/chart-core/src/layout.rs
// Summary: Pixel layout of the stacked panes, date label band and scrollbar.

use crate::types::Insets;

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { (self.right - self.left).max(0.0) }
    pub fn height(&self) -> f32 { (self.bottom - self.top).max(0.0) }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

impl From<Rect> for skia_safe::Rect {
    fn from(r: Rect) -> Self { skia_safe::Rect::from_ltrb(r.left, r.top, r.right, r.bottom) }
}

/// One value axis region: header band (title + legend) above the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pane {
    pub header: Rect,
    pub plot: Rect,
}

pub const HEADER_HEIGHT: f32 = 26.0;
pub const DATE_BAND_HEIGHT: f32 = 22.0;
/// Extra space above the volume header.
pub const VOLUME_HEADER_PADDING: f32 = 10.0;
const SCROLLBAR_GAP: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub canvas: Rect,
    pub value: Pane,
    pub volume: Pane,
    pub date_band: Rect,
    pub scrollbar: Rect,
    /// X where the right-hand value labels start.
    pub label_x: f32,
}

impl Layout {
    /// Split `canvas` top to bottom: value pane, volume pane, date labels, scrollbar.
    /// `value_ratio` is the value pane's share of the combined pane height.
    pub fn compute(canvas: Rect, insets: &Insets, value_ratio: f32, scrollbar_height: f32) -> Self {
        let left = canvas.left + insets.left as f32;
        let right = (canvas.right - insets.right as f32).max(left + 1.0);
        let top = canvas.top + insets.top as f32;
        let bottom = (canvas.bottom - insets.bottom as f32).max(top + 1.0);

        let scrollbar = Rect::from_ltrb(left, (bottom - scrollbar_height).max(top), right, bottom);
        let date_bottom = (scrollbar.top - SCROLLBAR_GAP).max(top);
        let date_band = Rect::from_ltrb(left, (date_bottom - DATE_BAND_HEIGHT).max(top), right, date_bottom);

        let panes_h = (date_band.top - top).max(0.0);
        let ratio = value_ratio.clamp(0.0, 1.0);
        let split = top + panes_h * ratio;

        let value = pane(left, right, top, split, 0.0);
        let volume = pane(left, right, split, date_band.top, VOLUME_HEADER_PADDING);
        Self { canvas, value, volume, date_band, scrollbar, label_x: right + 6.0 }
    }

    /// Both panes share the X mapping; either plot rect gives the horizontal extent.
    pub fn plot_x(&self) -> (f32, f32) { (self.value.plot.left, self.value.plot.right) }
}

fn pane(left: f32, right: f32, top: f32, bottom: f32, padding_top: f32) -> Pane {
    let header_top = (top + padding_top).min(bottom);
    let header_bottom = (header_top + HEADER_HEIGHT).min(bottom);
    Pane {
        header: Rect::from_ltrb(left, header_top, right, header_bottom),
        plot: Rect::from_ltrb(left, header_bottom, right, bottom),
    }
}
