// File: crates/chart-core/src/view.rs
// Summary: Visible window over the full date span, shared by the main chart and the scrollbar.

/// Visible fraction `[start, end]` of the full date span. Values may leave
/// `[0, 1]` by up to the date axis' max deviation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub start: f64,
    pub end: f64,
}

/// Narrowest window allowed, as a fraction of the full span.
pub const MIN_WINDOW: f64 = 0.002;

impl Window {
    pub const FULL: Window = Window { start: 0.0, end: 1.0 };

    pub fn new(start: f64, end: f64) -> Self {
        if start <= end { Self { start, end } } else { Self { start: end, end: start } }
    }

    pub fn width(&self) -> f64 { self.end - self.start }

    /// Map onto absolute x coordinates of a full span `[x_min, x_max]`.
    pub fn to_x_range(&self, x_min: f64, x_max: f64) -> (f64, f64) {
        let span = x_max - x_min;
        (x_min + self.start * span, x_min + self.end * span)
    }

    /// Keep the window at least `MIN_WINDOW` wide, at most full width plus
    /// deviation on each side, and no further than `max_deviation` widths
    /// past either end of the data.
    pub fn clamped(self, max_deviation: f64) -> Self {
        let dev = max_deviation.max(0.0);
        let width = self.width().clamp(MIN_WINDOW, 1.0);
        let lo = -dev * width;
        let hi = 1.0 + dev * width;
        let mut start = self.start;
        if self.width() < MIN_WINDOW || self.width() > 1.0 {
            let mid = (self.start + self.end) * 0.5;
            start = mid - width * 0.5;
        }
        start = start.clamp(lo, hi - width);
        Self { start, end: start + width }
    }

    /// Shift by `delta` (fraction of the full span), keeping the width.
    pub fn panned(self, delta: f64, max_deviation: f64) -> Self {
        Self { start: self.start + delta, end: self.end + delta }.clamped(max_deviation)
    }

    /// Zoom around `anchor` (position inside the window, 0 = start, 1 = end).
    /// `factor > 1` zooms in.
    pub fn zoomed(self, anchor: f64, factor: f64, max_deviation: f64) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 { factor } else { 1.0 };
        let anchor = anchor.clamp(0.0, 1.0);
        let pivot = self.start + anchor * self.width();
        let width = self.width() / factor;
        Self { start: pivot - anchor * width, end: pivot - anchor * width + width }.clamped(max_deviation)
    }
}

impl Default for Window {
    fn default() -> Self { Self::FULL }
}
