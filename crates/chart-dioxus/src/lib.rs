// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus ViewChart component (desktop only): title plus a 500px chart fed by PNG frames.
// Notes:
// - UI deps stay behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The chart is mounted once per component instance and disposed in `use_drop`.

use ratechart_core::{ChartConfig, Observation};

/// Config used by the component: file-free defaults plus environment overrides,
/// with the title moved out of the frame into the page heading.
pub fn component_config() -> ChartConfig {
    let mut cfg = ChartConfig::load(None).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to built-in chart config");
        ChartConfig::default()
    });
    cfg.canvas.title = None;
    cfg
}

/// Sample payload for the demo launcher: `None` lets the chart synthesize its walk.
pub fn demo_data() -> Option<Vec<Observation>> { None }

#[cfg(feature = "desktop")]
pub mod ui {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use base64::Engine as _;
    use dioxus::prelude::*;
    use ratechart_core::component::{MountedView, ViewChart as ChartView, ViewChartProps, TITLE};
    use ratechart_core::Observation;

    type Shared = Rc<RefCell<Option<MountedView>>>;

    fn frame_src(view: &Shared, elapsed: Duration) -> Option<String> {
        let guard = view.borrow();
        let bytes = guard.as_ref()?.render_png(elapsed).ok()?;
        let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
        Some(format!("data:image/png;base64,{b64}"))
    }

    /// Titled chart. `data_chart` is read once at mount; later prop changes are ignored.
    #[component]
    pub fn ViewChart(#[props(default)] data_chart: Option<Vec<Observation>>) -> Element {
        let cfg = use_hook(super::component_config);
        let view: Shared = use_hook(|| {
            let mounted = ChartView::mount_with_config(ViewChartProps::new(data_chart.clone()), &cfg);
            if let Err(e) = &mounted {
                tracing::error!(error = %e, "chart mount failed");
            }
            Rc::new(RefCell::new(mounted.ok()))
        });
        let mounted_at = use_hook(Instant::now);
        let mut src = use_signal(|| Option::<String>::None);

        {
            let view = view.clone();
            use_drop(move || {
                if let Some(v) = view.borrow_mut().take() {
                    v.unmount();
                }
            });
        }

        {
            let view = view.clone();
            let appear = cfg.appear();
            use_future(move || {
                let view = view.clone();
                async move {
                    loop {
                        let elapsed = mounted_at.elapsed();
                        src.set(frame_src(&view, elapsed));
                        if appear.is_finished(elapsed) {
                            break;
                        }
                        tokio::time::sleep(Duration::from_millis(33)).await;
                    }
                }
            });
        }

        let redraw = {
            let view = view.clone();
            move || {
                let settled = mounted_at.elapsed();
                src.set(frame_src(&view, settled));
            }
        };

        let height = cfg.canvas.height;
        let on_move = {
            let (view, mut redraw) = (view.clone(), redraw.clone());
            move |evt: MouseEvent| {
                let p = evt.element_coordinates();
                if let Some(v) = view.borrow_mut().as_mut() { v.pointer_move(p.x as f32, p.y as f32); }
                redraw();
            }
        };
        let on_down = {
            let (view, mut redraw) = (view.clone(), redraw.clone());
            move |evt: MouseEvent| {
                let p = evt.element_coordinates();
                if let Some(v) = view.borrow_mut().as_mut() { v.pointer_down(p.x as f32, p.y as f32); }
                redraw();
            }
        };
        let on_up = {
            let view = view.clone();
            move |_: MouseEvent| {
                if let Some(v) = view.borrow_mut().as_mut() { v.pointer_up(); }
            }
        };
        let on_leave = {
            let (view, mut redraw) = (view.clone(), redraw.clone());
            move |_: MouseEvent| {
                if let Some(v) = view.borrow_mut().as_mut() { v.pointer_leave(); }
                redraw();
            }
        };
        let on_wheel = {
            let (view, mut redraw) = (view.clone(), redraw.clone());
            move |evt: WheelEvent| {
                let d = evt.delta().strip_units();
                let p = evt.element_coordinates();
                if let Some(v) = view.borrow_mut().as_mut() { v.wheel(d.x as f32, d.y as f32, p.x as f32); }
                redraw();
            }
        };

        rsx! {
            div {
                h3 { style: "margin:0 0 8px 0; font-family:sans-serif; color:#ddd;", "{TITLE}" }
                div {
                    style: "position:relative; width:100%; height:{height}px; background:#121214;",
                    onmousemove: on_move,
                    onmousedown: on_down,
                    onmouseup: on_up,
                    onmouseleave: on_leave,
                    onwheel: on_wheel,
                    if let Some(src) = &*src.read() {
                        img { style: "display:block; user-select:none;", draggable: "false", src: "{src}" }
                    }
                }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! { ViewChart { data_chart: super::demo_data() } }
        }

        let cfg = dioxus_desktop::Config::new()
            .with_background_color((18, 18, 20, 255))
            .with_prerendered("<style>html,body{margin:0;padding:12px;background:#121214}</style>".to_string());
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("ratechart-dioxus built without `desktop` feature; enable features to run UI demo")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_config_keeps_title_out_of_frame() {
        let cfg = component_config();
        assert!(cfg.canvas.title.is_none());
        assert_eq!(cfg.render_options().surface_height(), cfg.canvas.height);
    }
}
