//! Responsibility summary under an explainer page.

use crate::theme;
use bloom_core::catalog::LeadRole;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LeadPanelProps {
    pub role: LeadRole,
}

#[component]
pub fn LeadPanel(props: LeadPanelProps) -> Element {
    let role = props.role;
    rsx! {
        div {
            style: theme::CARD,
            h3 {
                style: "margin: 0 0 8px 0; font-size: 20px; font-weight: bold; color: #ffffff;",
                "{role.title}"
            }
            p { style: "margin: 0; color: #9ca3af;", "{role.description}" }
        }
    }
}
