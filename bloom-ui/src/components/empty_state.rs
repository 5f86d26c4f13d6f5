//! Placeholder for panels with nothing to show.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub message: String,
}

/// Muted notice used when the selected year has no data.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: 120px; border: 1px dashed #374151; border-radius: 8px; color: #9ca3af; font-style: italic;",
            "{props.message}"
        }
    }
}
