//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the session's reactive signals into a single struct
//! provided by the shell with `use_context_provider`. Only the shell and the
//! views it owns write to it; leaf components receive values and
//! `EventHandler` callbacks as props.

use bloom_core::dataset::Dataset;
use bloom_core::page::Page;
use bloom_data::years::YearRange;
use dioxus::prelude::*;

/// Shared application state for the BloomScope app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Parsed fixtures (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Page shown in the content region
    pub current_page: Signal<Page>,
    /// Year selected on the dashboard
    pub selected_year: Signal<i32>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            current_page: Signal::new(Page::default()),
            selected_year: Signal::new(0),
        }
    }

    pub fn current_page(&self) -> Page {
        (self.current_page)()
    }

    /// Replace the current page unconditionally.
    pub fn set_current_page(&mut self, page: Page) {
        log::debug!("navigate: {} -> {}", self.current_page.peek().slug(), page.slug());
        self.current_page.set(page);
    }

    pub fn selected_year(&self) -> i32 {
        (self.selected_year)()
    }

    /// Replace the selected year unconditionally. Range limits are enforced
    /// by the slider, not here.
    pub fn set_selected_year(&mut self, year: i32) {
        log::debug!("selected year: {}", year);
        self.selected_year.set(year);
    }

    /// Install a freshly loaded dataset and select its latest year.
    pub fn install_dataset(&mut self, dataset: Dataset) {
        match YearRange::from_dataset(&dataset) {
            Some(range) => self.selected_year.set(range.max),
            None => log::warn!("dataset has no year with both events and NDVI data"),
        }
        self.dataset.set(Some(dataset));
        self.loading.set(false);
    }

    /// Record a fatal load error.
    pub fn fail(&mut self, message: String) {
        log::error!("{}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
