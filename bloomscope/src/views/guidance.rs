use bloom_core::catalog::{
    GUIDELINE_SECTIONS, GUIDE_INTRO, NARRATIVE_BACKEND_EXAMPLE, PROPOSED_ENDPOINTS,
};
use bloom_ui::components::{GuidelineBlock, PageHeader};
use bloom_ui::theme;
use dioxus::prelude::*;

pub const TITLE: &str = "Implementation Guide";

#[component]
pub fn GuidanceView() -> Element {
    let [data_step, detection_step, tooling_step] = GUIDELINE_SECTIONS;
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 32px;",
            PageHeader { title: TITLE.to_string(), subtitle: GUIDE_INTRO.to_string() }
            GuidelineBlock { section: data_step }
            ProposedEndpoints {}
            GuidelineBlock { section: detection_step }
            GuidelineBlock { section: tooling_step }
            BackendExample {}
        }
    }
}

/// The REST surface a future backend would expose. Documentation only.
#[component]
fn ProposedEndpoints() -> Element {
    let card_style = format!("{} border: 1px solid {};", theme::CARD, theme::BORDER);
    rsx! {
        div {
            style: "{card_style}",
            h4 { style: "margin: 0 0 12px 0; font-weight: bold; color: #ffffff;", "Proposed API Endpoints" }
            ul {
                style: "margin: 0; padding-left: 20px; color: #9ca3af;",
                for endpoint in PROPOSED_ENDPOINTS {
                    li {
                        key: "{endpoint.path}",
                        style: "margin: 6px 0;",
                        code {
                            style: "color: #86efac;",
                            "{endpoint.method} {endpoint.path}"
                        }
                        " returns {endpoint.returns}."
                    }
                }
            }
        }
    }
}

#[component]
fn BackendExample() -> Element {
    rsx! {
        div {
            style: "padding: 16px; background: #111827; border-radius: 8px;",
            h4 {
                style: "margin: 0; font-weight: bold; color: #ffffff;",
                "Example Narrative Backend Logic (Node.js/Express):"
            }
            pre {
                style: "font-size: 12px; color: #d1d5db; background: #000000; padding: 8px; border-radius: 4px; margin-top: 8px; overflow-x: auto;",
                code { "{NARRATIVE_BACKEND_EXAMPLE}" }
            }
        }
    }
}
