// File: crates/chart-core/src/legend.rs
// Summary: Per-axis legends listing series with their current value text.

use crate::format;

/// Which chart series a legend entry refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesRef {
    Rate,
    Volume,
}

/// Legend placed in an axis header.
#[derive(Clone, Debug)]
pub struct Legend {
    pub series: Vec<SeriesRef>,
    /// Square color marker instead of a line/column glyph.
    pub use_default_marker: bool,
}

impl Legend {
    pub fn new(series: Vec<SeriesRef>) -> Self {
        Self { series, use_default_marker: true }
    }
}

/// A rendered legend entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub value_text: String,
    pub color_index: usize,
}

/// Values available to a text template.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateValues<'a> {
    pub name: &'a str,
    pub value_y: Option<f64>,
    pub change_percent: Option<f64>,
}

/// Substitute `{name}`, `{valueY}` and `{valueYChangePercent}` in `template`.
/// Missing values render as empty text.
pub fn fill_template(template: &str, values: &TemplateValues<'_>) -> String {
    let value = values.value_y.map(format::number).unwrap_or_default();
    let change = values.change_percent.map(|p| format::change_text(p).0).unwrap_or_default();
    template
        .replace("{name}", values.name)
        .replace("{valueYChangePercent}", &change)
        .replace("{valueY}", &value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_substitution() {
        let v = TemplateValues { name: "rate", value_y: Some(1010.0), change_percent: Some(1.0) };
        assert_eq!(fill_template("{name}: {valueY} {valueYChangePercent}%", &v), "rate: 1,010 +1%");
        assert_eq!(fill_template("{valueY}", &TemplateValues::default()), "");
    }
}
