//! One lead's block on the implementation guide.

use crate::theme;
use bloom_core::catalog::GuidelineSection;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct GuidelineBlockProps {
    pub section: GuidelineSection,
}

#[component]
pub fn GuidelineBlock(props: GuidelineBlockProps) -> Element {
    let section = props.section;
    let card_style = format!("{} border: 1px solid {};", theme::CARD, theme::BORDER);
    let title_style = format!("margin: 0; font-size: 24px; font-weight: bold; color: {};", theme::ACCENT);

    rsx! {
        div {
            style: "{card_style}",
            h2 { style: "{title_style}", "{section.title}" }
            p {
                style: "margin: 4px 0 16px 0; color: #d1d5db; font-weight: 500;",
                "For the "
                strong { "{section.lead}" }
            }
            p { style: "color: #9ca3af;", "{section.summary}" }
            ul {
                style: "color: #9ca3af; padding-left: 20px;",
                for item in section.items.iter() {
                    li {
                        key: "{item.heading}",
                        style: "margin: 6px 0;",
                        strong { style: "color: #e5e7eb;", "{item.heading}: " }
                        "{item.body}"
                    }
                }
            }
        }
    }
}
