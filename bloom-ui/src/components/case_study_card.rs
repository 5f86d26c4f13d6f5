//! Case study card with a header image.

use crate::theme;
use bloom_core::catalog::CaseStudy;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CaseStudyCardProps {
    pub study: CaseStudy,
}

#[component]
pub fn CaseStudyCard(props: CaseStudyCardProps) -> Element {
    let study = props.study;
    let application_style = format!(
        "margin: 0 0 8px 0; font-size: 14px; font-weight: 600; color: {};",
        theme::ACCENT
    );
    rsx! {
        div {
            style: "background: #1f2937; border-radius: 12px; overflow: hidden; box-shadow: 0 10px 15px rgba(0,0,0,0.3);",
            div {
                style: "position: relative; height: 192px;",
                img {
                    src: study.image_url,
                    alt: study.title,
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
                div {
                    style: "position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.7), transparent);",
                }
                div {
                    style: "position: absolute; bottom: 0; left: 0; padding: 16px;",
                    h3 { style: "margin: 0; font-size: 20px; font-weight: bold; color: #ffffff;", "{study.title}" }
                    p { style: "margin: 0; font-size: 14px; color: #d1d5db;", "{study.location}" }
                }
            }
            div {
                style: "padding: 24px;",
                p { style: "{application_style}", "{study.application}" }
                p { style: "margin: 0; color: #9ca3af;", "{study.narrative}" }
            }
        }
    }
}
