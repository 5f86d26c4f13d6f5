//! "Key Metrics" panel.

use crate::theme;
use bloom_data::metrics::BloomMetrics;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricsPanelProps {
    pub year: i32,
    pub metrics: BloomMetrics,
    /// Abbreviated month name, `None` when the year has no NDVI series
    pub peak_month: Option<String>,
}

/// Count, mean intensity and peak month for the selected year. Missing
/// values render as "N/A".
#[component]
pub fn MetricsPanel(props: MetricsPanelProps) -> Element {
    let MetricsPanelProps { year, metrics, peak_month } = props;
    let title_style = format!(
        "margin: 0 0 16px 0; font-size: 18px; font-weight: 600; color: {};",
        theme::ACCENT
    );
    let mean = metrics.mean_intensity_display().to_string();
    let peak = peak_month.unwrap_or_else(|| "N/A".to_string());

    rsx! {
        div {
            style: theme::CARD,
            h3 { style: "{title_style}", "Key Metrics ({year})" }
            MetricRow { label: "Total Blooms Detected:".to_string(), value: metrics.count.to_string() }
            MetricRow { label: "Avg. Intensity:".to_string(), value: mean }
            MetricRow { label: "Peak Bloom Month:".to_string(), value: peak }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MetricRowProps {
    label: String,
    value: String,
}

#[component]
fn MetricRow(props: MetricRowProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin: 12px 0;",
            span { style: "color: #9ca3af;", "{props.label}" }
            span { style: "font-weight: bold; font-size: 24px; color: #ffffff;", "{props.value}" }
        }
    }
}
