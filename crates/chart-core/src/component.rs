// File: crates/chart-core/src/component.rs
// Summary: ViewChart: titled 500-unit chart mounted once from optional supplied data.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::layout::Layout;
use crate::observation::Observation;
use crate::root::{Root, RootOptions, RootWatch};
use crate::source::{select, Origin, SourcePolicy};
use crate::synthetic::{RandomSource, SeededRandom, ThreadRandom};

pub const TITLE: &str = "Historical Chart";

/// Inputs of one mount. Only `data_chart` comes from the caller in the
/// embedded widget; `policy` defaults to binding supplied data when present.
#[derive(Clone, Debug, Default)]
pub struct ViewChartProps {
    pub data_chart: Option<Vec<Observation>>,
    pub policy: SourcePolicy,
}

impl ViewChartProps {
    pub fn new(data_chart: Option<Vec<Observation>>) -> Self {
        Self { data_chart, policy: SourcePolicy::default() }
    }

    pub fn with_policy(mut self, policy: SourcePolicy) -> Self {
        self.policy = policy;
        self
    }
}

pub struct ViewChart;

impl ViewChart {
    /// Build the chart, pick the sequence, bind it and start the appear animation.
    ///
    /// Runs once per mount; the bound sequence is never replaced afterwards.
    pub fn mount(props: ViewChartProps, config: &ChartConfig, rng: &mut dyn RandomSource) -> Result<MountedView> {
        let render = config.render_options();
        if render.width <= 0 || render.height <= 0 {
            return Err(ChartError::Surface { width: render.width, height: render.height });
        }
        let mut root = Root::new(RootOptions { render, zone: config.data.time_zone, scrollbar_height: config.scrollbar.height });

        let selection = select(props.data_chart, props.policy, rng, &config.generator_params());
        let plot_width = root.plot_width();
        root.chart_mut().bind(&selection.bound, plot_width);
        root.start_appear(config.appear());
        info!(origin = ?selection.origin, len = selection.bound.len(), "view mounted");

        Ok(MountedView { root, bound: selection.bound, staged: selection.staged, origin: selection.origin })
    }

    /// Mount with the source policy and random source named by the config.
    /// `data.policy` replaces `props.policy`; the walk is seeded when `data.seed` is set.
    pub fn mount_with_config(props: ViewChartProps, config: &ChartConfig) -> Result<MountedView> {
        let props = ViewChartProps { policy: config.data.policy, ..props };
        match config.data.seed {
            Some(seed) => Self::mount(props, config, &mut SeededRandom::new(seed)),
            None => Self::mount(props, config, &mut ThreadRandom::new()),
        }
    }
}

/// A mounted view. Unmounting (or dropping) disposes its root.
pub struct MountedView {
    root: Root,
    bound: Vec<Observation>,
    staged: Option<Vec<Observation>>,
    origin: Origin,
}

impl MountedView {
    /// Title of the view; drawn into frames only when the config carries one.
    pub fn title(&self) -> &str {
        self.root.render_options().title.as_deref().unwrap_or(TITLE)
    }

    pub fn bound(&self) -> &[Observation] { &self.bound }
    pub fn staged(&self) -> Option<&[Observation]> { self.staged.as_deref() }
    pub fn origin(&self) -> Origin { self.origin }
    pub fn root(&self) -> &Root { &self.root }
    pub fn watch(&self) -> RootWatch { self.root.watch() }
    pub fn layout(&self) -> Layout { self.root.layout() }

    /// PNG frame at `elapsed` since mount.
    pub fn render_png(&self, elapsed: Duration) -> Result<Vec<u8>> { self.root.render_png(elapsed) }

    pub fn render_rgba8(&self, elapsed: Duration) -> Result<(Vec<u8>, i32, i32, usize)> {
        self.root.render_rgba8(elapsed)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let layout = self.layout();
        self.root.chart_mut().pointer_down(x, y, &layout);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let layout = self.layout();
        self.root.chart_mut().pointer_move(x, y, &layout);
    }

    pub fn pointer_up(&mut self) { self.root.chart_mut().pointer_up(); }
    pub fn pointer_leave(&mut self) { self.root.chart_mut().pointer_leave(); }

    pub fn wheel(&mut self, dx: f32, dy: f32, x: f32) {
        let layout = self.layout();
        self.root.chart_mut().wheel(dx, dy, x, &layout);
    }

    pub fn unmount(self) {
        debug!("view unmounting");
        self.root.dispose();
    }
}
