// File: crates/chart-core/src/scale.rs
// Summary: Date (X) and Value (Y) scale transforms between data and pixels.

/// Logical X coordinate (epoch milliseconds).
pub type Logical = f64;
/// Value Y coordinate (rate or volume).
pub type Value = f64;

/// Horizontal date scale mapping `[x_min, x_max]` onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct DateScale {
    pub left_px: f32,
    pub right_px: f32,
    pub x_min: Logical,
    pub x_max: Logical,
}

impl DateScale {
    pub fn new(left_px: f32, right_px: f32, x_min: Logical, x_max: Logical) -> Self {
        let x_max = if (x_max - x_min).abs() < 1e-9 { x_min + 1.0 } else { x_max };
        Self { left_px, right_px, x_min, x_max }
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        self.left_px + ((x - self.x_min) / (self.x_max - self.x_min)) as f32 * (self.right_px - self.left_px)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> Logical {
        let w = (self.right_px - self.left_px).max(1.0);
        self.x_min + ((px - self.left_px) / w) as f64 * (self.x_max - self.x_min)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_scale_round_trips_endpoints() {
        let s = DateScale::new(10.0, 110.0, 1000.0, 2000.0);
        assert_eq!(s.to_px(1000.0), 10.0);
        assert_eq!(s.to_px(2000.0), 110.0);
        assert!((s.from_px(60.0) - 1500.0).abs() < 1e-6);
    }

    #[test]
    fn value_scale_grows_upward() {
        let s = ValueScale::new_linear(0.0, 100.0, 0.0, 50.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(50.0), 0.0);
        assert!(s.to_px(40.0) < s.to_px(10.0));
    }
}
