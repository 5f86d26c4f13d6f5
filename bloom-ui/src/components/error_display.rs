//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #450a0a; color: #fca5a5; border-radius: 8px; border: 1px solid #7f1d1d;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
