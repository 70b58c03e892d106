// File: crates/chart-core/src/config.rs
// Summary: Layered configuration (built-in TOML, optional file, RATECHART__* environment).

use std::collections::BTreeMap;
use std::path::Path;

use config::{Environment, File, FileFormat};
use serde::Deserialize;

use crate::animation::Appear;
use crate::chart::RenderOptions;
use crate::error::Result;
use crate::source::SourcePolicy;
use crate::synthetic::GeneratorParams;
use crate::theme;
use crate::time::TimeZoneMode;

const DEFAULTS: &str = include_str!("../config/default.toml");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartConfig {
    pub canvas: Canvas,
    pub theme: ThemeConfig,
    pub data: Data,
    pub animation: Animation,
    pub scrollbar: Scrollbar,
    pub logging: Logging,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Canvas {
    pub width: i32,
    pub height: i32,
    pub title: Option<String>,
    pub draw_labels: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Data {
    pub policy: SourcePolicy,
    /// Fixed seed for the synthetic walk; unseeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    pub time_zone: TimeZoneMode,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Animation {
    pub duration_ms: u64,
    pub delay_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Scrollbar {
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Logging {
    pub level: String,
    #[serde(default)]
    pub crates: BTreeMap<String, String>,
}

impl Logging {
    /// `EnvFilter` directives: the default level followed by per-crate levels.
    pub fn levels(&self) -> String {
        let mut out = self.level.clone();
        for (krate, level) in &self.crates {
            out.push_str(&format!(",{krate}={level}"));
        }
        out
    }
}

impl ChartConfig {
    /// Built-in defaults, then `path` (TOML) if given, then `RATECHART__SECTION__KEY` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml));
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        let cfg = builder
            .add_source(Environment::with_prefix("RATECHART").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.canvas.width,
            height: self.canvas.height,
            theme: theme::find(&self.theme.name),
            draw_labels: self.canvas.draw_labels,
            title: self.canvas.title.clone(),
            ..RenderOptions::default()
        }
    }

    pub fn appear(&self) -> Appear {
        Appear::new(self.animation.duration_ms, self.animation.delay_ms)
    }

    pub fn generator_params(&self) -> GeneratorParams {
        GeneratorParams { zone: self.data.time_zone, ..GeneratorParams::default() }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas { width: 1024, height: 500, title: Some(String::from("Historical Chart")), draw_labels: true },
            theme: ThemeConfig { name: String::from("dark") },
            data: Data { policy: SourcePolicy::PreferSupplied, seed: None, time_zone: TimeZoneMode::Local },
            animation: Animation { duration_ms: 1000, delay_ms: 100 },
            scrollbar: Scrollbar { height: 50.0 },
            logging: Logging {
                level: String::from("info"),
                crates: BTreeMap::from([(String::from("ratechart_core"), String::from("info"))]),
            },
        }
    }
}
