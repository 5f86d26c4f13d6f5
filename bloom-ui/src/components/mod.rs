//! Reusable Dioxus RSX components for BloomScope.

mod bloom_map;
mod case_study_card;
mod chart_container;
mod chart_header;
mod empty_state;
mod error_display;
mod guideline_section;
mod lead_panel;
mod loading_spinner;
mod metrics_panel;
mod model_card;
mod page_header;
mod sidebar;
mod step_card;
mod tag_list;
mod year_slider;

pub use bloom_map::BloomMap;
pub use case_study_card::CaseStudyCard;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use guideline_section::GuidelineBlock;
pub use lead_panel::LeadPanel;
pub use loading_spinner::LoadingSpinner;
pub use metrics_panel::MetricsPanel;
pub use model_card::ModelCard;
pub use page_header::PageHeader;
pub use sidebar::Sidebar;
pub use step_card::StepCard;
pub use tag_list::TagList;
pub use year_slider::YearSlider;
