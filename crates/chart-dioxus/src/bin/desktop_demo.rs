// File: crates/chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop ViewChart demo.

#[cfg(feature = "desktop")]
fn main() {
    if let Err(e) = ratechart_dioxus::ui::run_demo_ui() {
        eprintln!("ratechart-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = ratechart_dioxus::run_demo_ui() {
        eprintln!("{e}");
    }
}
