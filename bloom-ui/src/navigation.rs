//! Sidebar model: which entries to show and which one is highlighted.

use bloom_core::page::Page;

/// One sidebar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

/// Sidebar entries in display order, with exactly the entry for `current`
/// marked active.
pub fn nav_entries(current: Page) -> Vec<NavEntry> {
    Page::ALL
        .into_iter()
        .map(|page| NavEntry {
            page,
            label: page.label(),
            active: page == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<&str> = nav_entries(Page::Overview).iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Data Pipeline",
                "Detection Models",
                "Case Studies",
                "Implementation Guide"
            ]
        );
    }

    #[test]
    fn test_single_active_entry_follows_navigation() {
        for current in Page::ALL {
            let entries = nav_entries(current);
            let active: Vec<&NavEntry> = entries.iter().filter(|e| e.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].page, current);
        }
    }

    #[test]
    fn test_unknown_slug_highlights_dashboard() {
        let entries = nav_entries(Page::from_slug("missing-page"));
        assert!(entries[0].active);
        assert_eq!(entries[0].page, Page::Overview);
    }
}
