//! Detection model card with optional accuracy badge.

use super::TagList;
use crate::theme;
use bloom_core::catalog::DetectionModel;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ModelCardProps {
    pub model: DetectionModel,
}

#[component]
pub fn ModelCard(props: ModelCardProps) -> Element {
    let model = props.model;
    let card_style = format!(
        "{} display: flex; flex-direction: column; height: 100%; border: 1px solid {};",
        theme::CARD,
        theme::BORDER
    );
    let category_style = format!("margin: 0; font-size: 14px; font-weight: 600; color: {};", theme::ACCENT);

    rsx! {
        div {
            style: "{card_style}",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start;",
                div {
                    p { style: "{category_style}", "{model.category}" }
                    h3 {
                        style: "margin: 0; font-size: 20px; font-weight: bold; color: #ffffff;",
                        "{model.title}"
                    }
                }
                if let Some(accuracy) = model.accuracy {
                    div {
                        style: "text-align: right;",
                        p { style: "margin: 0; font-size: 24px; font-weight: bold; color: #ffffff;", "{accuracy}%" }
                        p { style: "margin: 0; font-size: 12px; color: #9ca3af;", "Accuracy" }
                    }
                }
            }
            p { style: "margin: 16px 0; color: #9ca3af; flex-grow: 1;", "{model.description}" }
            TagList { heading: "Tools:".to_string(), tags: model.tools.to_vec() }
        }
    }
}
