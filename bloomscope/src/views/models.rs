use bloom_core::catalog::{DETECTION_MODELS, MODELS_LEAD};
use bloom_ui::components::{LeadPanel, ModelCard, PageHeader};
use bloom_ui::theme;
use dioxus::prelude::*;

pub const TITLE: &str = "Detection & Analysis Models";

#[component]
pub fn ModelsView() -> Element {
    let grid_style = theme::grid(360);
    rsx! {
        div {
            PageHeader {
                title: TITLE.to_string(),
                subtitle: "Algorithms for identifying, monitoring, and predicting bloom events.".to_string(),
            }
            div {
                style: "{grid_style} margin-bottom: 24px;",
                for model in DETECTION_MODELS {
                    ModelCard { key: "{model.title}", model: model }
                }
            }
            LeadPanel { role: MODELS_LEAD }
        }
    }
}
