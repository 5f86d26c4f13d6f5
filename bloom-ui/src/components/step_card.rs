//! Pipeline stage card.

use super::TagList;
use crate::theme;
use bloom_core::catalog::PipelineStep;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StepCardProps {
    pub step: PipelineStep,
}

#[component]
pub fn StepCard(props: StepCardProps) -> Element {
    let step = props.step;
    let card_style = format!("{} display: flex; flex-direction: column; height: 100%;", theme::CARD);
    rsx! {
        div {
            style: "{card_style}",
            h3 {
                style: "margin: 0 0 16px 0; font-size: 20px; font-weight: bold; color: #ffffff;",
                "{step.title}"
            }
            p { style: "margin: 0; color: #9ca3af; flex-grow: 1;", "{step.description}" }
            TagList { heading: "Skills/Tools:".to_string(), tags: step.tools.to_vec() }
        }
    }
}
