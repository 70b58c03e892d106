// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming: surface colors plus a stepped series palette.

use skia_safe as skia;

/// Ordered series colors; `get_index(i)` walks the list `step` entries at a time.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub colors: [skia::Color; 8],
    pub step: usize,
}

impl Palette {
    pub fn get_index(&self, i: usize) -> skia::Color {
        self.colors[(i * self.step.max(1)) % self.colors.len()]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub header_label: skia::Color,
    pub legend_label: skia::Color,
    pub crosshair: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_label: skia::Color,
    pub column_stroke: skia::Color,
    pub change_up: skia::Color,
    pub change_down: skia::Color,
    pub change_flat: skia::Color,
    pub scrollbar_track: skia::Color,
    pub scrollbar_thumb: skia::Color,
    pub scrollbar_grip: skia::Color,
    pub palette: Palette,
}

const BASE_PALETTE: [skia::Color; 8] = [
    skia::Color::new(0xFF67_B7DC),
    skia::Color::new(0xFF64_94DC),
    skia::Color::new(0xFF67_71DC),
    skia::Color::new(0xFF80_67DC),
    skia::Color::new(0xFFA3_67DC),
    skia::Color::new(0xFFC7_67DC),
    skia::Color::new(0xFFDC_67CE),
    skia::Color::new(0xFFDC_67AB),
];

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            title: skia::Color::from_argb(255, 120, 190, 240),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 180, 180, 190),
            header_label: skia::Color::from_argb(255, 235, 235, 245),
            legend_label: skia::Color::from_argb(255, 210, 210, 220),
            crosshair: skia::Color::from_argb(255, 150, 150, 160),
            tooltip_background: skia::Color::from_argb(235, 30, 30, 34),
            tooltip_label: skia::Color::from_argb(255, 235, 235, 245),
            column_stroke: skia::Color::WHITE,
            change_up: skia::Color::from_argb(255, 0x00, 0xff, 0x00),
            change_down: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            change_flat: skia::Color::from_argb(255, 0x99, 0x99, 0x99),
            scrollbar_track: skia::Color::from_argb(255, 28, 28, 32),
            scrollbar_thumb: skia::Color::from_argb(60, 255, 255, 255),
            scrollbar_grip: skia::Color::from_argb(255, 200, 200, 210),
            palette: Palette { colors: BASE_PALETTE, step: 2 },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 236, 244, 252),
            title: skia::Color::from_argb(255, 29, 72, 115),
            grid: skia::Color::from_argb(255, 218, 226, 235),
            axis_label: skia::Color::from_argb(255, 60, 60, 70),
            header_label: skia::Color::from_argb(255, 20, 20, 30),
            legend_label: skia::Color::from_argb(255, 40, 40, 50),
            crosshair: skia::Color::from_argb(255, 100, 100, 110),
            tooltip_background: skia::Color::from_argb(240, 255, 255, 255),
            tooltip_label: skia::Color::from_argb(255, 20, 20, 30),
            column_stroke: skia::Color::WHITE,
            change_up: skia::Color::from_argb(255, 0x00, 0xb0, 0x00),
            change_down: skia::Color::from_argb(255, 0xd0, 0x00, 0x00),
            change_flat: skia::Color::from_argb(255, 0x99, 0x99, 0x99),
            scrollbar_track: skia::Color::from_argb(255, 225, 232, 240),
            scrollbar_thumb: skia::Color::from_argb(70, 0, 0, 0),
            scrollbar_grip: skia::Color::from_argb(255, 90, 90, 100),
            palette: Palette { colors: BASE_PALETTE, step: 2 },
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_steps_by_two() {
        let p = Theme::dark().palette;
        assert_eq!(p.get_index(0), BASE_PALETTE[0]);
        assert_eq!(p.get_index(1), BASE_PALETTE[2]);
        assert_eq!(p.get_index(4), BASE_PALETTE[0]);
    }

    #[test]
    fn find_falls_back_to_dark() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("nope").name, "dark");
    }
}
