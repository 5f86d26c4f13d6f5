//! Overview dashboard: bloom map, year slider, key metrics and NDVI trend.

use bloom_core::vegetation::month_abbrev;
use bloom_data::dashboard::DashboardSnapshot;
use bloom_data::series::chart_points;
use bloom_data::years::YearRange;
use bloom_ui::components::{
    BloomMap, ChartContainer, ChartHeader, EmptyState, LoadingSpinner, MetricsPanel, PageHeader,
    YearSlider,
};
use bloom_ui::js_bridge;
use bloom_ui::state::AppState;
use bloom_ui::theme;
use dioxus::prelude::*;

pub const TITLE: &str = "Global Bloom Dashboard";

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "ndvi-trend-chart";

#[component]
pub fn DashboardView() -> Element {
    let mut state = use_context::<AppState>();

    // Redraw the trend chart whenever the selected year or dataset changes
    use_effect(move || {
        let year = (state.selected_year)();
        let guard = state.dataset.read();
        let Some(dataset) = &*guard else {
            return;
        };
        let Some(series) = dataset.series_for_year(year) else {
            log::info!("no NDVI series for {}, clearing chart", year);
            js_bridge::destroy_chart(CHART_ID);
            return;
        };

        js_bridge::init_charts();
        let data_json = serde_json::to_string(&chart_points(series)).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": format!("Global Average NDVI {}", year),
            "yAxisLabel": "NDVI",
            "valueLabel": "NDVI",
            "color": theme::ACCENT,
            "yMax": 1.0,
        }))
        .unwrap_or_default();
        js_bridge::render_area_chart(CHART_ID, &data_json, &config_json);
    });

    // Leaving the dashboard cancels any render still waiting on the container
    use_drop(|| js_bridge::destroy_chart(CHART_ID));

    let year = state.selected_year();
    let (snapshot, range) = match &*state.dataset.read() {
        Some(dataset) => (
            DashboardSnapshot::derive(dataset, year),
            YearRange::from_dataset(dataset),
        ),
        None => return rsx! { LoadingSpinner {} },
    };
    let peak_month = snapshot.peak_month.map(|m| month_abbrev(m).to_string());
    let map_panel_style = format!("{} grid-column: span 2; height: 60vh;", theme::CARD);

    rsx! {
        div {
            PageHeader {
                title: TITLE.to_string(),
                subtitle: "Visualizing vegetation phenology from space.".to_string(),
            }
            div {
                style: "display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 24px; margin-bottom: 24px;",
                div {
                    style: "{map_panel_style}",
                    BloomMap { events: snapshot.events.clone() }
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 24px;",
                    if let Some(range) = range {
                        YearSlider {
                            year: year,
                            range: range,
                            on_change: move |y| state.set_selected_year(y),
                        }
                    } else {
                        EmptyState { message: "No year has both bloom events and NDVI data.".to_string() }
                    }
                    MetricsPanel {
                        year: year,
                        metrics: snapshot.metrics,
                        peak_month: peak_month,
                    }
                }
            }
            div {
                style: theme::CARD,
                ChartHeader {
                    title: format!("Global Average Vegetation Index (NDVI) Trend - {}", year),
                    unit_description: "NDVI, unitless (0 = bare ground, 1 = dense green vegetation)".to_string(),
                }
                if snapshot.chart.is_some() {
                    ChartContainer { id: CHART_ID.to_string(), min_height: 256 }
                } else {
                    EmptyState { message: format!("No NDVI data available for {}.", year) }
                }
            }
        }
    }
}
