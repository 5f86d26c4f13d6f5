use bloom_core::catalog::{CASE_STUDIES, CASE_STUDIES_LEAD};
use bloom_ui::components::{CaseStudyCard, LeadPanel, PageHeader};
use bloom_ui::theme;
use dioxus::prelude::*;

pub const TITLE: &str = "Applications & Case Studies";

#[component]
pub fn CaseStudiesView() -> Element {
    let grid_style = theme::grid(400);
    rsx! {
        div {
            PageHeader {
                title: TITLE.to_string(),
                subtitle: "Connecting technical outputs to real-world impact.".to_string(),
            }
            div {
                style: "{grid_style} margin-bottom: 24px;",
                for study in CASE_STUDIES {
                    CaseStudyCard { key: "{study.title}", study: study }
                }
            }
            LeadPanel { role: CASE_STUDIES_LEAD }
        }
    }
}
