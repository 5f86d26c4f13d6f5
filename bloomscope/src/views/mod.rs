//! One view per navigation destination.

mod case_studies;
mod dashboard;
mod guidance;
mod models;
mod pipeline;

use bloom_core::page::Page;
use dioxus::prelude::*;

pub use case_studies::CaseStudiesView;
pub use dashboard::DashboardView;
pub use guidance::GuidanceView;
pub use models::ModelsView;
pub use pipeline::PipelineView;

/// The view for `page`. Every page maps to exactly one view.
pub fn render_content(page: Page) -> Element {
    match page {
        Page::Overview => rsx! { DashboardView {} },
        Page::Pipeline => rsx! { PipelineView {} },
        Page::Models => rsx! { ModelsView {} },
        Page::CaseStudies => rsx! { CaseStudiesView {} },
        Page::Guidance => rsx! { GuidanceView {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::dataset::Dataset;
    use bloom_ui::state::AppState;

    #[derive(Props, Clone, PartialEq)]
    struct ContentProps {
        page: Page,
    }

    /// The content region alone, with the embedded dataset already installed.
    #[component]
    fn Content(props: ContentProps) -> Element {
        use_context_provider(|| {
            let mut state = AppState::new();
            state.install_dataset(Dataset::embedded().unwrap());
            state
        });
        render_content(props.page)
    }

    fn render_page(page: Page) -> String {
        let mut dom = VirtualDom::new_with_props(Content, ContentProps { page });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn expected_title(page: Page) -> &'static str {
        match page {
            Page::Overview => "Global Bloom Dashboard",
            Page::Pipeline => "Data &amp; Preprocessing Pipeline",
            Page::Models => "Detection &amp; Analysis Models",
            Page::CaseStudies => "Applications &amp; Case Studies",
            Page::Guidance => "Implementation Guide",
        }
    }

    #[test]
    fn test_each_page_renders_its_own_view() {
        for page in Page::ALL {
            let html = render_page(page);
            assert_eq!(html.matches("<h1").count(), 1, "{:?}: {}", page, html);
            for other in Page::ALL {
                let heading = format!(">{}</h1>", expected_title(other));
                assert_eq!(html.contains(&heading), other == page, "{:?} vs {:?}", page, other);
            }
        }
    }

    #[test]
    fn test_dashboard_shows_latest_year() {
        let html = render_page(Page::Overview);
        assert!(html.contains("Key Metrics (2024)"));
        assert!(html.contains("ndvi-trend-chart"));
    }

    #[test]
    fn test_unknown_slug_renders_dashboard() {
        assert_eq!(
            render_page(Page::from_slug("no-such-page")),
            render_page(Page::Overview)
        );
    }
}
