// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Chart canvas height in logical units.
pub const HEIGHT: i32 = 500;
/// Height of the title band drawn above the canvas by the view.
pub const TITLE_HEIGHT: i32 = 40;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Value labels sit on the right (opposite) side.
    fn default() -> Self {
        Self::new(12, 72, 8, 8)
    }
}
