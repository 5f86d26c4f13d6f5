//! Title block at the top of every page.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    pub subtitle: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header {
            style: "margin-bottom: 24px;",
            h1 {
                style: "margin: 0; font-size: 30px; font-weight: bold; color: #ffffff;",
                "{props.title}"
            }
            p {
                style: "margin: 4px 0 0 0; color: #9ca3af;",
                "{props.subtitle}"
            }
        }
    }
}
