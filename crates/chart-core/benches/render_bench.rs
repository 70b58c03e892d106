// File: crates/chart-core/benches/render_bench.rs
// Summary: Full-frame render cost of a mounted view at several canvas widths.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratechart_core::{ChartConfig, Result, SeededRandom, ViewChart, ViewChartProps};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &width in &[800i32, 1600i32] {
        group.bench_function(format!("view_{width}"), |b| {
            let mut cfg = ChartConfig::default();
            cfg.canvas.width = width;
            cfg.canvas.draw_labels = false;
            let Ok(view) = ViewChart::mount(ViewChartProps::new(None), &cfg, &mut SeededRandom::new(1)) else {
                return;
            };
            b.iter(|| -> Result<()> {
                let bytes = view.render_png(Duration::from_secs(2))?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
