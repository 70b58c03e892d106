// File: crates/chart-core/src/render.rs
// Summary: Headless rendering pipeline for RateChart using Skia CPU raster surfaces.

use std::io::Cursor;

use skia_safe as skia;

use crate::chart::{RateChart, RenderOptions};
use crate::cursor::CursorReadout;
use crate::error::{ChartError, Result};
use crate::format::{self, Change};
use crate::layout::{Layout, Pane, Rect};
use crate::legend::{Legend, LegendItem};
use crate::scale::{DateScale, ValueScale};
use crate::series::{Series, SeriesType};
use crate::text::{TextKind, TextShaper};
use crate::theme::Theme;
use crate::ticks::{date_ticks, value_ticks};

const LABEL_SIZE: f32 = 11.0;
const HEADER_SIZE: f32 = 13.0;
const TITLE_SIZE: f32 = 20.0;

impl RateChart {
    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart and encode it as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w as u32, h as u32, px).ok_or(ChartError::ReadPixels)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render into an unpremultiplied RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (opts.width.max(1), opts.surface_height().max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(ChartError::Surface { width: w, height: h })?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((px, w, h, stride))
    }

    /// Draw the full chart onto `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        canvas.clear(theme.background);

        if let (Some(title), Some(sh)) = (&opts.title, &shaper) {
            sh.draw_left(canvas, title, 12.0, opts.title_height() as f32 * 0.7, TITLE_SIZE, theme.title, TextKind::Bold);
        }

        let layout = self.layout(opts);
        let (l, r) = layout.plot_x();
        let plot_w = r - l;
        let progress = opts.appear_progress.clamp(0.0, 1.0);

        let readout = self.readout(&layout);
        let value_items = self.legend_items(&self.value_legend, readout.as_ref(), plot_w);
        let volume_items = self.legend_items(&self.volume_legend, readout.as_ref(), plot_w);
        if let Some(sh) = &shaper {
            draw_header(canvas, sh, theme, &layout.value, &self.value_axis.header, &self.value_legend, &value_items);
            draw_header(canvas, sh, theme, &layout.volume, &self.volume_axis.header, &self.volume_legend, &volume_items);
        }

        let Some((x0, x1)) = self.visible_x_range() else {
            draw_scrollbar_track(canvas, theme, &layout.scrollbar);
            return;
        };
        let xs = DateScale::new(l, r, x0, x1);
        let value_scale = ValueScale::new_linear(layout.value.plot.top, layout.value.plot.bottom, self.value_axis.min, self.value_axis.max);
        let volume_scale = ValueScale::new_linear(layout.volume.plot.top, layout.volume.plot.bottom, self.volume_axis.min, self.volume_axis.max);

        // Grid
        let (dticks, dunit) = date_ticks(x0, x1, (plot_w / 90.0).max(2.0) as usize, self.zone);
        let vticks = value_ticks(self.value_axis.min, self.value_axis.max, 6);
        let qticks = value_ticks(self.volume_axis.min, self.volume_axis.max, 3);
        let mut grid = stroke(theme.grid, 1.0);
        grid.set_anti_alias(false);
        for pane in [&layout.value, &layout.volume] {
            for &(x, _) in &dticks {
                let px = xs.to_px(x);
                canvas.draw_line((px, pane.plot.top), (px, pane.plot.bottom), &grid);
            }
        }
        for &v in &vticks {
            let py = value_scale.to_px(v);
            canvas.draw_line((l, py), (r, py), &grid);
        }
        for &v in &qticks {
            let py = volume_scale.to_px(v);
            canvas.draw_line((l, py), (r, py), &grid);
        }

        // Series
        let rate_pts = self.visible_points(&self.rate_series, plot_w);
        let volume_pts = self.visible_points(&self.volume_series, plot_w);
        clipped(canvas, &layout.volume.plot, || {
            draw_columns(canvas, theme, &self.volume_series, &volume_pts, &xs, &volume_scale, progress);
        });
        clipped(canvas, &layout.value.plot, || {
            draw_line(canvas, theme, &self.rate_series, &rate_pts, &xs, &value_scale, progress);
        });

        // Labels
        if let Some(sh) = &shaper {
            for &v in &vticks {
                let py = value_scale.to_px(v);
                if py > layout.value.plot.top + LABEL_SIZE {
                    sh.draw_left(canvas, &format::number(v), layout.label_x, py - 2.0, LABEL_SIZE, theme.axis_label, TextKind::Numeric);
                }
            }
            for &v in &qticks {
                let py = volume_scale.to_px(v);
                if py > layout.volume.plot.top + LABEL_SIZE {
                    sh.draw_left(canvas, &format::number(v), layout.label_x, py - 2.0, LABEL_SIZE, theme.axis_label, TextKind::Numeric);
                }
            }
            let edge = plot_w * 0.01;
            for &(x, date) in &dticks {
                let px = xs.to_px(x);
                if px >= l + edge && px <= r - edge {
                    sh.draw_centered(canvas, &format::date_label(date, dunit), px, layout.date_band.top + 15.0, LABEL_SIZE, theme.axis_label, TextKind::Regular);
                }
            }
        }

        self.draw_scrollbar(canvas, theme, &layout, progress);

        if let Some(ro) = &readout {
            self.draw_cursor(canvas, shaper.as_ref(), theme, &layout, ro, &value_scale, &volume_scale);
        }
    }

    fn draw_scrollbar(&self, canvas: &skia::Canvas, theme: &Theme, layout: &Layout, progress: f32) {
        let track = &layout.scrollbar;
        draw_scrollbar_track(canvas, theme, track);
        let pts = self.scrollbar.mini_points(track.width(), self.zone);
        if let Some((a, b)) = self.scrollbar.series.x_extent() {
            let xs = DateScale::new(track.left, track.right, a, b);
            let ys = ValueScale::new_linear(track.top + 4.0, track.bottom - 2.0, self.scrollbar.value_axis.min, self.scrollbar.value_axis.max);
            clipped(canvas, track, || draw_line(canvas, theme, &self.scrollbar.series, &pts, &xs, &ys, progress));
        }

        let (tl, tr) = self.scrollbar.thumb_px(track, self.window);
        let mut thumb = fill(theme.scrollbar_thumb);
        thumb.set_anti_alias(true);
        canvas.draw_rect(skia::Rect::from_ltrb(tl, track.top, tr, track.bottom), &thumb);
        let grip = fill(theme.scrollbar_grip);
        for gx in [tl, tr] {
            let rect = skia::RRect::new_rect_xy(skia::Rect::from_ltrb(gx - 4.0, track.top + 12.0, gx + 4.0, track.bottom - 12.0), 2.0, 2.0);
            canvas.draw_rrect(rect, &grip);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cursor(
        &self,
        canvas: &skia::Canvas,
        shaper: Option<&TextShaper>,
        theme: &Theme,
        layout: &Layout,
        ro: &CursorReadout,
        value_scale: &ValueScale,
        volume_scale: &ValueScale,
    ) {
        let (l, r) = layout.plot_x();
        let line = stroke(theme.crosshair, 1.0);
        for pane in [&layout.value, &layout.volume] {
            canvas.draw_line((ro.x_px, pane.plot.top), (ro.x_px, pane.plot.bottom), &line);
        }
        if ro.y_px >= layout.value.plot.top && ro.y_px <= layout.volume.plot.bottom {
            canvas.draw_line((l, ro.y_px), (r, ro.y_px), &line);
        }

        let Some(sh) = shaper else { return };
        let (rate_text, volume_text) = self.tooltip_texts(ro);
        if let (Some(text), Some(v)) = (rate_text, ro.rate) {
            let change = ro.rate_change_percent.map(|p| format::change_text(p).1).unwrap_or(Change::Flat);
            let stroke_color = theme.palette.get_index(self.rate_series.color_index);
            let accent = match change {
                Change::Up => theme.change_up,
                Change::Down => theme.change_down,
                Change::Flat => theme.change_flat,
            };
            tooltip(canvas, sh, theme, &text, ro.x_px, value_scale.to_px(v), (l, r), stroke_color, Some(accent));
        }
        if let (Some(text), Some(v)) = (volume_text, ro.volume) {
            let stroke_color = theme.palette.get_index(self.volume_series.color_index);
            tooltip(canvas, sh, theme, &text, ro.x_px, volume_scale.to_px(v), (l, r), stroke_color, None);
        }
        if self.date_axis.tooltip {
            if let Some(date) = self.zone.date_of(ro.date as i64) {
                let text = format::tooltip_date(date);
                let w = sh.measure_width(&text, LABEL_SIZE, TextKind::Regular) + 12.0;
                let bg = fill(theme.tooltip_background);
                let band = &layout.date_band;
                let x = ro.x_px.clamp(l + w * 0.5, r - w * 0.5);
                canvas.draw_rect(skia::Rect::from_ltrb(x - w * 0.5, band.top + 1.0, x + w * 0.5, band.bottom - 1.0), &bg);
                sh.draw_centered(canvas, &text, x, band.top + 15.0, LABEL_SIZE, theme.tooltip_label, TextKind::Regular);
            }
        }
    }
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_color(color);
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_color(color);
    p.set_anti_alias(false);
    p.set_style(skia::paint::Style::Fill);
    p
}

/// Scale a color's alpha by `progress` (entrance fade).
fn fade(color: skia::Color, factor: f32) -> skia::Color {
    color.with_a((color.a() as f32 * factor.clamp(0.0, 1.0)).round() as u8)
}

fn clipped(canvas: &skia::Canvas, rect: &Rect, draw: impl FnOnce()) {
    canvas.save();
    canvas.clip_rect(skia::Rect::from(*rect), skia::ClipOp::Intersect, true);
    draw();
    canvas.restore();
}

fn draw_line(canvas: &skia::Canvas, theme: &Theme, series: &Series, pts: &[(f64, f64)], xs: &DateScale, ys: &ValueScale, progress: f32) {
    if pts.len() < 2 || series.series_type != SeriesType::Line {
        return;
    }
    let color = theme.palette.get_index(series.color_index);
    let mut path = skia::Path::new();
    path.move_to((xs.to_px(pts[0].0), ys.to_px(pts[0].1)));
    for &(x, y) in &pts[1..] {
        path.line_to((xs.to_px(x), ys.to_px(y)));
    }

    if let Some(opacity) = series.fill_opacity {
        let mut area = path.clone();
        let last = pts[pts.len() - 1].0;
        area.line_to((xs.to_px(last), ys.bottom_px));
        area.line_to((xs.to_px(pts[0].0), ys.bottom_px));
        area.close();
        let mut p = fill(fade(color, opacity * progress));
        p.set_anti_alias(true);
        canvas.draw_path(&area, &p);
    }
    canvas.draw_path(&path, &stroke(fade(color, progress), series.stroke_width));
}

fn draw_columns(canvas: &skia::Canvas, theme: &Theme, series: &Series, pts: &[(f64, f64)], xs: &DateScale, ys: &ValueScale, progress: f32) {
    if pts.is_empty() || series.series_type != SeriesType::Column {
        return;
    }
    // Column width from the median spacing between neighbouring buckets.
    let mut gaps: Vec<f32> = pts.windows(2).map(|w| xs.to_px(w[1].0) - xs.to_px(w[0].0)).collect();
    gaps.sort_by(|a, b| a.total_cmp(b));
    let slot = gaps.get(gaps.len() / 2).copied().unwrap_or(8.0).max(1.0);
    let half = (slot * 0.8 * 0.5).max(0.5);

    let color = theme.palette.get_index(series.color_index);
    let body = fill(fade(color, series.fill_opacity.unwrap_or(1.0) * progress));
    let outline = stroke(fade(theme.column_stroke, progress), series.stroke_width);
    let base = ys.to_px(0.0f64.max(ys.vmin));
    for &(x, y) in pts {
        let cx = xs.to_px(x);
        let top = base - (base - ys.to_px(y)) * progress;
        let rect = skia::Rect::from_ltrb(cx - half, top.min(base), cx + half, base.max(top + 0.5));
        canvas.draw_rect(rect, &body);
        if slot >= 4.0 {
            canvas.draw_rect(rect, &outline);
        }
    }
}

fn draw_scrollbar_track(canvas: &skia::Canvas, theme: &Theme, track: &Rect) {
    canvas.draw_rect(skia::Rect::from(*track), &fill(theme.scrollbar_track));
}

fn draw_header(canvas: &skia::Canvas, sh: &TextShaper, theme: &Theme, pane: &Pane, header: &str, legend: &Legend, items: &[LegendItem]) {
    let baseline = pane.header.top + 18.0;
    let mut x = pane.header.left + 2.0;
    if !header.is_empty() {
        x += sh.draw_left(canvas, header, x, baseline, HEADER_SIZE, theme.header_label, TextKind::Bold) + 14.0;
    }
    for item in items {
        let color = theme.palette.get_index(item.color_index);
        if legend.use_default_marker {
            canvas.draw_rect(skia::Rect::from_ltrb(x, baseline - 10.0, x + 12.0, baseline + 2.0), &fill(color));
        } else {
            canvas.draw_line((x, baseline - 4.0), (x + 12.0, baseline - 4.0), &stroke(color, 2.0));
        }
        x += 18.0;
        if !item.label.is_empty() {
            x += sh.draw_left(canvas, &item.label, x, baseline, LABEL_SIZE + 1.0, theme.legend_label, TextKind::Regular) + 6.0;
        }
        x += sh.draw_left(canvas, &item.value_text, x, baseline, LABEL_SIZE + 1.0, theme.legend_label, TextKind::Numeric) + 14.0;
    }
}

/// Tooltip box beside the point at (`x`, `y`), flipping sides near the right edge.
#[allow(clippy::too_many_arguments)]
fn tooltip(
    canvas: &skia::Canvas,
    sh: &TextShaper,
    theme: &Theme,
    text: &str,
    x: f32,
    y: f32,
    (l, r): (f32, f32),
    border: skia::Color,
    accent: Option<skia::Color>,
) {
    let w = sh.measure_width(text, LABEL_SIZE, TextKind::Regular) + 16.0;
    let h = LABEL_SIZE + 10.0;
    let left = if x + 10.0 + w <= r { x + 10.0 } else { (x - 10.0 - w).max(l) };
    let rect = skia::Rect::from_ltrb(left, y - h * 0.5, left + w, y + h * 0.5);
    canvas.draw_rect(rect, &fill(theme.tooltip_background));
    canvas.draw_rect(rect, &stroke(border, 1.0));
    if let Some(accent) = accent {
        canvas.draw_rect(skia::Rect::from_ltrb(left, rect.top, left + 3.0, rect.bottom), &fill(accent));
    }
    sh.draw_left(canvas, text, left + 8.0, y + LABEL_SIZE * 0.4, LABEL_SIZE, theme.tooltip_label, TextKind::Regular);
}
