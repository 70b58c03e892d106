// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the data model, view component and rendering API.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod component;
pub mod config;
pub mod cursor;
pub mod error;
pub mod format;
pub mod grouping;
pub mod import;
pub mod layout;
pub mod legend;
pub mod observation;
pub mod render;
pub mod root;
pub mod scale;
pub mod scrollbar;
pub mod series;
pub mod source;
pub mod synthetic;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod time;
pub mod types;
pub mod view;

pub use animation::Appear;
pub use chart::{RateChart, RenderOptions, WheelAction};
pub use component::{MountedView, ViewChart, ViewChartProps, TITLE};
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use grouping::{Aggregate, Interval, TimeUnit};
pub use import::load_observations;
pub use observation::Observation;
pub use root::{Root, RootOptions, RootWatch};
pub use source::{select, Origin, Selection, SourcePolicy};
pub use synthetic::{generate, generate_with, FixedRandom, GeneratorParams, RandomSource, SeededRandom, ThreadRandom};
pub use text::TextShaper;
pub use theme::Theme;
pub use time::TimeZoneMode;
pub use view::Window;
