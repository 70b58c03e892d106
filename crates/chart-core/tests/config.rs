// File: crates/chart-core/tests/config.rs
// Purpose: Configuration layering: built-in defaults, file overrides, environment overrides.

use std::io::Write;

use ratechart_core::{ChartConfig, SourcePolicy, TimeZoneMode};

// Single test: environment variables are process-wide.
#[test]
fn layers_apply_in_order() {
    let defaults = ChartConfig::load(None).expect("defaults");
    assert_eq!(defaults, ChartConfig::default());

    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    writeln!(
        file,
        "[data]\npolicy = \"always-synthetic\"\nseed = 7\ntime_zone = \"utc\"\n\n[theme]\nname = \"light\"\n"
    )
    .unwrap();
    let from_file = ChartConfig::load(Some(file.path())).expect("file layer");
    assert_eq!(from_file.data.policy, SourcePolicy::AlwaysSynthetic);
    assert_eq!(from_file.data.seed, Some(7));
    assert_eq!(from_file.data.time_zone, TimeZoneMode::Utc);
    assert_eq!(from_file.render_options().theme.name, "light");
    assert_eq!(from_file.canvas.height, 500);

    std::env::set_var("RATECHART__CANVAS__WIDTH", "800");
    let from_env = ChartConfig::load(Some(file.path()));
    std::env::remove_var("RATECHART__CANVAS__WIDTH");
    let from_env = from_env.expect("env layer");
    assert_eq!(from_env.canvas.width, 800);
    assert_eq!(from_env.data.seed, Some(7));

    let missing = ChartConfig::load(Some(std::path::Path::new("does/not/exist.toml")));
    assert!(missing.is_err());
}
