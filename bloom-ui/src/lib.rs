//! Shared Dioxus components, app state and D3.js bridge for BloomScope.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `navigation`: Sidebar entries and active-page highlighting
//! - `theme`: Inline style fragments for the dark palette
//! - `components`: Reusable RSX components (sidebar, map, cards, etc.)

pub mod components;
pub mod js_bridge;
pub mod navigation;
pub mod state;
pub mod theme;
