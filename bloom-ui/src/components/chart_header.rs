//! Section heading inside a dashboard panel.

use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Panel title
    pub title: String,
    /// Y-axis unit explanation (e.g., "NDVI, unitless")
    #[props(default = String::new())]
    pub unit_description: String,
}

/// Green panel heading with an optional unit line.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let title_style = format!(
        "margin: 0 0 16px 0; font-size: 18px; font-weight: 600; color: {};",
        theme::ACCENT
    );
    rsx! {
        div {
            h3 {
                style: "{title_style}",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: -12px 0 12px 0; font-size: 12px; color: #9ca3af;",
                    "Y-axis: {props.unit_description}"
                }
            }
        }
    }
}
