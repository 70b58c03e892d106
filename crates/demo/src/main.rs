// File: crates/demo/src/main.rs
// Summary: Demo mounts ViewChart (optionally with CSV/JSON observations) and writes appear frames to PNGs.
// Usage: ratechart-demo [--data <file.csv|file.json>] [--out <dir>] [--policy prefer-supplied|always-synthetic]
//                       [--seed <u64>] [--config <file.toml>]

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use ratechart_core::{load_observations, ChartConfig, Origin, SourcePolicy, ViewChart, ViewChartProps};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Frame times (ms since mount) written alongside the settled frame.
const APPEAR_FRAMES_MS: [u64; 4] = [100, 250, 500, 800];

#[derive(Debug, Default)]
struct Args {
    data: Option<PathBuf>,
    out: Option<PathBuf>,
    policy: Option<SourcePolicy>,
    seed: Option<u64>,
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    let mut cfg = ChartConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    init_logger(&cfg);
    if let Some(policy) = args.policy {
        cfg.data.policy = policy;
    }
    if args.seed.is_some() {
        cfg.data.seed = args.seed;
    }

    let supplied = match &args.data {
        Some(path) => {
            let data = load_observations(path).with_context(|| format!("failed to load observations from '{}'", path.display()))?;
            info!(path = %path.display(), len = data.len(), "loaded observations");
            Some(data)
        }
        None => None,
    };

    let props = ViewChartProps { data_chart: supplied, policy: cfg.data.policy };
    let view = ViewChart::mount_with_config(props, &cfg).context("failed to mount view")?;
    match view.origin() {
        Origin::Supplied => println!("Bound {} supplied observations", view.bound().len()),
        Origin::Synthetic => println!("Bound {} synthetic observations", view.bound().len()),
    }
    if let Some(staged) = view.staged() {
        println!("  ({} supplied observations staged, not bound)", staged.len());
    }

    let out_dir = args.out.unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("failed to create '{}'", out_dir.display()))?;

    for ms in APPEAR_FRAMES_MS {
        let path = out_dir.join(format!("view_chart_appear_{ms:04}ms.png"));
        write_frame(&view.render_png(Duration::from_millis(ms))?, &path)?;
    }
    let settled = cfg.appear().delay + cfg.appear().duration;
    let path = out_dir.join("view_chart.png");
    write_frame(&view.render_png(settled)?, &path)?;

    view.unmount();
    Ok(())
}

fn init_logger(cfg: &ChartConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.logging.levels())))
        .init();
}

fn write_frame(bytes: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(flag) = it.next() {
        let mut value = || it.next().with_context(|| format!("missing value for {flag}"));
        match flag.as_str() {
            "--data" => args.data = Some(PathBuf::from(value()?)),
            "--out" => args.out = Some(PathBuf::from(value()?)),
            "--config" => args.config = Some(PathBuf::from(value()?)),
            "--seed" => {
                let raw = value()?;
                args.seed = Some(raw.parse().with_context(|| format!("invalid seed '{raw}'"))?);
            }
            "--policy" => {
                args.policy = Some(match value()?.as_str() {
                    "prefer-supplied" => SourcePolicy::PreferSupplied,
                    "always-synthetic" => SourcePolicy::AlwaysSynthetic,
                    other => anyhow::bail!("unknown policy '{other}' (expected prefer-supplied or always-synthetic)"),
                });
            }
            other => anyhow::bail!("unknown argument '{other}'"),
        }
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Result<Args> { parse_args(v.iter().map(|s| s.to_string())) }

    #[test]
    fn parses_all_flags() {
        let a = args(&["--data", "d.csv", "--out", "o", "--policy", "always-synthetic", "--seed", "9"]).unwrap();
        assert_eq!(a.data, Some(PathBuf::from("d.csv")));
        assert_eq!(a.out, Some(PathBuf::from("o")));
        assert_eq!(a.policy, Some(SourcePolicy::AlwaysSynthetic));
        assert_eq!(a.seed, Some(9));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(args(&["--seed"]).is_err());
        assert!(args(&["--seed", "x"]).is_err());
        assert!(args(&["--policy", "sometimes"]).is_err());
        assert!(args(&["--verbose"]).is_err());
    }
}
