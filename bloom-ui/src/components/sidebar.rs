//! Persistent navigation panel.

use crate::navigation::{nav_entries, NavEntry};
use crate::theme;
use bloom_core::page::Page;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Page whose entry is highlighted
    pub current: Page,
    /// Called with the page the user clicked
    pub on_navigate: EventHandler<Page>,
}

/// Left-hand navigation list. Clicking an entry asks the owner to switch pages
/// through `on_navigate`; the highlight follows `current`.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let entries = nav_entries(props.current);
    let on_navigate = props.on_navigate;
    let aside_style = format!(
        "width: 256px; flex-shrink: 0; background: {}; padding: 16px; display: flex; flex-direction: column; justify-content: space-between; box-shadow: 0 25px 50px rgba(0,0,0,0.5);",
        theme::BG_PANEL
    );
    let brand_style = format!(
        "display: flex; align-items: center; gap: 8px; margin-bottom: 40px; padding: 8px; color: {};",
        theme::ACCENT
    );

    rsx! {
        aside {
            style: "{aside_style}",
            div {
                div {
                    style: "{brand_style}",
                    span { style: "font-size: 28px;", "\u{1F33C}" }
                    h1 {
                        style: "margin: 0; font-size: 20px; font-weight: bold; color: #ffffff;",
                        "BloomScope"
                    }
                }
                nav {
                    ul {
                        style: "list-style: none; margin: 0; padding: 0;",
                        for entry in entries {
                            NavItem {
                                key: "{entry.label}",
                                entry: entry,
                                on_select: on_navigate,
                            }
                        }
                    }
                }
            }
            div {
                style: "text-align: center; font-size: 12px; color: #9ca3af; padding: 8px;",
                p { style: "margin: 2px 0;", "Powered by Rust & Dioxus" }
                p { style: "margin: 2px 0;", "\u{00A9} 2024" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavItemProps {
    entry: NavEntry,
    on_select: EventHandler<Page>,
}

/// A single sidebar entry.
#[component]
fn NavItem(props: NavItemProps) -> Element {
    let NavItemProps { entry, on_select } = props;
    let style = if entry.active {
        format!(
            "display: flex; align-items: center; padding: 12px; margin: 4px 0; border-radius: 8px; cursor: pointer; background: {}; color: #ffffff; font-weight: 600;",
            theme::ACCENT_STRONG
        )
    } else {
        "display: flex; align-items: center; padding: 12px; margin: 4px 0; border-radius: 8px; cursor: pointer; color: #e5e7eb;".to_string()
    };
    let page = entry.page;
    let aria = if entry.active { "page" } else { "false" };

    rsx! {
        li {
            style: "{style}",
            "data-page": page.slug(),
            aria_current: aria,
            onclick: move |_| on_select.call(page),
            "{entry.label}"
        }
    }
}
