use bloom_core::catalog::{PIPELINE_LEAD, PIPELINE_STEPS};
use bloom_ui::components::{LeadPanel, PageHeader, StepCard};
use bloom_ui::theme;
use dioxus::prelude::*;

pub const TITLE: &str = "Data & Preprocessing Pipeline";

#[component]
pub fn PipelineView() -> Element {
    let grid_style = theme::grid(240);
    rsx! {
        div {
            PageHeader {
                title: TITLE.to_string(),
                subtitle: "From raw satellite imagery to analysis-ready insights.".to_string(),
            }
            div {
                style: "{grid_style} margin-bottom: 24px;",
                for step in PIPELINE_STEPS {
                    StepCard { key: "{step.title}", step: step }
                }
            }
            LeadPanel { role: PIPELINE_LEAD }
        }
    }
}
