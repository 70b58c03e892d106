// File: crates/chart-core/src/root.rs
// Summary: Root visualization context: owns the chart graph and render settings, released exactly once.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::animation::Appear;
use crate::chart::{RateChart, RenderOptions};
use crate::error::Result;
use crate::layout::Layout;
use crate::time::TimeZoneMode;

#[derive(Clone, Debug)]
pub struct RootOptions {
    pub render: RenderOptions,
    pub zone: TimeZoneMode,
    pub scrollbar_height: f32,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self { render: RenderOptions::default(), zone: TimeZoneMode::default(), scrollbar_height: 50.0 }
    }
}

/// Handle to one chart context. Dropping it (or calling [`Root::dispose`])
/// tears the context down; there is no global registry to look it up by name.
pub struct Root {
    chart: RateChart,
    render: RenderOptions,
    appear: Option<Appear>,
    releases: Rc<Cell<u32>>,
    released: bool,
}

/// Observer of a root's teardown, usable after the root is gone.
#[derive(Clone, Debug)]
pub struct RootWatch(Rc<Cell<u32>>);

impl RootWatch {
    pub fn is_released(&self) -> bool { self.0.get() > 0 }
    pub fn release_count(&self) -> u32 { self.0.get() }
}

impl Root {
    pub fn new(options: RootOptions) -> Self {
        let mut chart = RateChart::new(options.zone);
        chart.scrollbar.height = options.scrollbar_height;
        debug!(width = options.render.width, height = options.render.height, "root created");
        Self { chart, render: options.render, appear: None, releases: Rc::new(Cell::new(0)), released: false }
    }

    pub fn chart(&self) -> &RateChart { &self.chart }
    pub fn chart_mut(&mut self) -> &mut RateChart { &mut self.chart }
    pub fn render_options(&self) -> &RenderOptions { &self.render }

    pub fn layout(&self) -> Layout { self.chart.layout(&self.render) }

    /// Plot width in pixels for the current layout.
    pub fn plot_width(&self) -> f32 {
        let (l, r) = self.layout().plot_x();
        r - l
    }

    pub fn start_appear(&mut self, appear: Appear) {
        debug!(duration_ms = appear.duration.as_millis() as u64, delay_ms = appear.delay.as_millis() as u64, "appear started");
        self.appear = Some(appear);
    }

    /// Entrance progress at `elapsed` since mount; fully shown without an animation.
    pub fn appear_progress(&self, elapsed: Duration) -> f32 {
        self.appear.map_or(1.0, |a| a.progress(elapsed))
    }

    pub fn options_at(&self, elapsed: Duration) -> RenderOptions {
        RenderOptions { appear_progress: self.appear_progress(elapsed), ..self.render.clone() }
    }

    pub fn render_png(&self, elapsed: Duration) -> Result<Vec<u8>> {
        self.chart.render_to_png_bytes(&self.options_at(elapsed))
    }

    pub fn render_rgba8(&self, elapsed: Duration) -> Result<(Vec<u8>, i32, i32, usize)> {
        self.chart.render_to_rgba8(&self.options_at(elapsed))
    }

    pub fn watch(&self) -> RootWatch { RootWatch(Rc::clone(&self.releases)) }

    pub fn dispose(self) {}

    fn release(&mut self) {
        if self.released { return; }
        self.released = true;
        self.appear = None;
        self.chart.bind(&[], 0.0);
        self.releases.set(self.releases.get() + 1);
        debug!("root disposed");
    }
}

impl Drop for Root {
    fn drop(&mut self) { self.release(); }
}
