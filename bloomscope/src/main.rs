//! BloomScope Dashboard
//!
//! Presents mock satellite-derived vegetation bloom data across five pages:
//! the overview dashboard (map, year slider, key metrics, NDVI trend), the
//! data pipeline, detection models, case studies and the implementation
//! guide.
//!
//! Data flow:
//! 1. `bloom-core` embeds `fixtures/bloom_events.csv` and
//!    `fixtures/ndvi_series.csv` with `include_str!`.
//! 2. On mount, the CSVs are parsed into a `Dataset` stored in `AppState`.
//! 3. The sidebar switches `AppState::current_page`; the shell renders the
//!    matching view.
//! 4. The dashboard derives the selected year's events, metrics and chart
//!    series on every render and hands the series to D3.js.

mod views;

use bloom_core::dataset::Dataset;
use bloom_ui::components::{ErrorDisplay, LoadingSpinner, Sidebar};
use bloom_ui::state::AppState;
use bloom_ui::theme;
use dioxus::prelude::*;

/// DOM element the app mounts into.
const ROOT_NAME: &str = "bloomscope-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_NAME))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded fixtures on mount
    use_effect(move || match Dataset::embedded() {
        Ok(dataset) => state.install_dataset(dataset),
        Err(e) => state.fail(format!("Failed to load bloom data: {:#}", e)),
    });

    let page = state.current_page();
    let shell_style = format!(
        "display: flex; height: 100vh; background: {}; color: #f3f4f6; font-family: {};",
        theme::BG_APP,
        theme::FONT_STACK
    );

    rsx! {
        div {
            style: "{shell_style}",
            Sidebar {
                current: page,
                on_navigate: move |next| state.set_current_page(next),
            }
            main {
                style: "flex: 1; padding: 40px; overflow-y: auto;",
                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                } else if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    {views::render_content(page)}
                }
            }
        }
    }
}
