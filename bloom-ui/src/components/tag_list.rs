//! Row of monospace tool/skill chips.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TagListProps {
    pub heading: String,
    pub tags: Vec<&'static str>,
}

#[component]
pub fn TagList(props: TagListProps) -> Element {
    rsx! {
        div {
            style: "margin-top: 16px;",
            h4 {
                style: "margin: 0 0 8px 0; font-weight: 600; color: #d1d5db;",
                "{props.heading}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for tag in props.tags.iter() {
                    span {
                        key: "{tag}",
                        style: "background: #374151; color: #86efac; font-size: 12px; font-family: monospace; padding: 4px 8px; border-radius: 4px;",
                        "{tag}"
                    }
                }
            }
        }
    }
}
