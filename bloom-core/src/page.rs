/// A navigation destination in the dashboard.
///
/// The set is closed: every page the sidebar can select is listed here, and
/// the shell matches on it exhaustively to pick the view to render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Map, year slider, key metrics and NDVI trend.
    #[default]
    Overview,
    /// Data collection and preprocessing steps.
    Pipeline,
    /// Detection and analysis model catalog.
    Models,
    /// Application case studies.
    CaseStudies,
    /// Next steps for each project lead.
    Guidance,
}

impl Page {
    /// All pages in sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Overview,
        Page::Pipeline,
        Page::Models,
        Page::CaseStudies,
        Page::Guidance,
    ];

    /// URL-style identifier (e.g. "data-pipeline").
    pub fn slug(self) -> &'static str {
        match self {
            Page::Overview => "dashboard",
            Page::Pipeline => "data-pipeline",
            Page::Models => "detection-models",
            Page::CaseStudies => "case-studies",
            Page::Guidance => "guidance",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Page::Overview => "Dashboard",
            Page::Pipeline => "Data Pipeline",
            Page::Models => "Detection Models",
            Page::CaseStudies => "Case Studies",
            Page::Guidance => "Implementation Guide",
        }
    }

    /// Resolve a slug to a page. Unknown or empty slugs fall back to
    /// [`Page::Overview`].
    ///
    /// Navigation currently passes `Page` values directly; this is the entry
    /// point for a future URL router or deep link.
    pub fn from_slug(slug: &str) -> Page {
        let slug = slug.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == slug)
            .unwrap_or_else(|| {
                if !slug.is_empty() {
                    log::debug!("unknown page slug {:?}, using dashboard", slug);
                }
                Page::default()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Page;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_overview() {
        assert_eq!(Page::default(), Page::Overview);
    }

    #[test]
    fn test_from_slug_known() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), page);
        }
        assert_eq!(Page::from_slug(" case-studies "), Page::CaseStudies);
    }

    #[test]
    fn test_from_slug_unknown_falls_back() {
        for slug in ["", "settings", "Dashboard", "data_pipeline", "404"] {
            assert_eq!(Page::from_slug(slug), Page::Overview, "slug {:?}", slug);
        }
    }

    #[test]
    fn test_slugs_and_labels_unique() {
        let slugs: HashSet<_> = Page::ALL.iter().map(|p| p.slug()).collect();
        let labels: HashSet<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(slugs.len(), 5);
        assert_eq!(labels.len(), 5);
        assert_eq!(Page::Guidance.label(), "Implementation Guide");
    }
}
