//! Derived views over bloom observations.
//!
//! Everything here is a pure function of the dataset and the selected year,
//! recomputed on each render.

/// Selecting the events of one year.
pub mod filter {
    use bloom_core::bloom_event::BloomEvent;

    /// Events whose year equals `year`, in input order.
    pub fn events_for_year(events: &[BloomEvent], year: i32) -> Vec<BloomEvent> {
        events.iter().filter(|e| e.year == year).cloned().collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn event(id: &str, year: i32, intensity: f64) -> BloomEvent {
            BloomEvent {
                id: id.to_string(),
                lat: 0.0,
                lng: 0.0,
                intensity,
                name: format!("Bloom {}", id),
                year,
            }
        }

        #[test]
        fn test_events_for_year_keeps_order() {
            let events = vec![
                event("a", 2023, 0.9),
                event("b", 2024, 0.5),
                event("c", 2023, 0.7),
                event("d", 2023, 0.1),
            ];
            let filtered = events_for_year(&events, 2023);
            let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["a", "c", "d"]);
            assert!(filtered.iter().all(|e| e.year == 2023));
        }

        #[test]
        fn test_events_for_missing_year() {
            let events = vec![event("a", 2023, 0.9)];
            assert!(events_for_year(&events, 2025).is_empty());
            assert!(events_for_year(&[], 2023).is_empty());
        }
    }
}

/// Aggregate figures shown in the "Key Metrics" panel.
pub mod metrics {
    use bloom_core::bloom_event::BloomEvent;
    use serde::Serialize;
    use std::fmt;

    /// Count and mean intensity of a set of events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct BloomMetrics {
        pub count: usize,
        /// round(100 × mean intensity); `None` when there are no events
        pub mean_intensity_pct: Option<u32>,
    }

    impl BloomMetrics {
        pub fn from_events(events: &[BloomEvent]) -> BloomMetrics {
            let count = events.len();
            let mean_intensity_pct = if count == 0 {
                None
            } else {
                let total: f64 = events.iter().map(|e| e.intensity).sum();
                let pct = (total / count as f64 * 100.0).round();
                Some(pct.clamp(0.0, 100.0) as u32)
            };
            BloomMetrics {
                count,
                mean_intensity_pct,
            }
        }

        /// Mean intensity for display, e.g. "80%" or "N/A".
        pub fn mean_intensity_display(&self) -> MeanIntensity {
            MeanIntensity(self.mean_intensity_pct)
        }
    }

    /// Display wrapper for an optional percentage.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MeanIntensity(pub Option<u32>);

    impl fmt::Display for MeanIntensity {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.0 {
                Some(pct) => write!(f, "{}%", pct),
                None => write!(f, "N/A"),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::filter::events_for_year;

        fn event(id: &str, year: i32, intensity: f64) -> BloomEvent {
            BloomEvent {
                id: id.to_string(),
                lat: 10.0,
                lng: 20.0,
                intensity,
                name: id.to_string(),
                year,
            }
        }

        fn scenario() -> Vec<BloomEvent> {
            vec![
                event("1", 2023, 0.9),
                event("2", 2023, 0.7),
                event("3", 2024, 0.5),
            ]
        }

        #[test]
        fn test_metrics_for_selected_year() {
            let filtered = events_for_year(&scenario(), 2023);
            assert_eq!(filtered.len(), 2);
            let metrics = BloomMetrics::from_events(&filtered);
            assert_eq!(metrics.count, 2);
            assert_eq!(metrics.mean_intensity_pct, Some(80));
            assert_eq!(metrics.mean_intensity_display().to_string(), "80%");
        }

        #[test]
        fn test_metrics_for_empty_year() {
            let filtered = events_for_year(&scenario(), 2025);
            let metrics = BloomMetrics::from_events(&filtered);
            assert_eq!(metrics.count, 0);
            assert_eq!(metrics.mean_intensity_pct, None);
            assert_eq!(metrics.mean_intensity_display().to_string(), "N/A");
        }

        #[test]
        fn test_count_matches_filter_length() {
            let events = scenario();
            for year in [2022, 2023, 2024, 2025] {
                let filtered = events_for_year(&events, year);
                assert_eq!(BloomMetrics::from_events(&filtered).count, filtered.len());
            }
        }

        #[test]
        fn test_mean_within_percentage_bounds() {
            for intensities in [vec![0.0], vec![1.0], vec![0.0, 1.0, 0.333], vec![0.999; 5]] {
                let events: Vec<BloomEvent> = intensities
                    .iter()
                    .enumerate()
                    .map(|(i, v)| event(&i.to_string(), 2023, *v))
                    .collect();
                let pct = BloomMetrics::from_events(&events).mean_intensity_pct.unwrap();
                assert!(pct <= 100, "{:?} -> {}", intensities, pct);
            }
        }

        #[test]
        fn test_mean_rounds_half_up() {
            let events = vec![event("a", 2023, 0.25), event("b", 2023, 0.5)];
            // 37.5 -> 38
            assert_eq!(BloomMetrics::from_events(&events).mean_intensity_pct, Some(38));
        }
    }
}

/// Equirectangular placement of events on the bloom map.
pub mod projection {
    use serde::Serialize;

    /// A point on the unit square; (0, 0) is the top-left corner
    /// (180°W, 90°N).
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct MapPoint {
        pub x: f64,
        pub y: f64,
    }

    impl MapPoint {
        /// CSS offsets in percent for an absolutely positioned marker.
        pub fn percent(&self) -> (f64, f64) {
            (self.x * 100.0, self.y * 100.0)
        }
    }

    /// Project latitude/longitude onto the unit square with no geodesic
    /// correction. Suitable only for coarse placement.
    pub fn project(lat: f64, lng: f64) -> MapPoint {
        MapPoint {
            x: ((lng + 180.0) / 360.0).clamp(0.0, 1.0),
            y: ((-lat + 90.0) / 180.0).clamp(0.0, 1.0),
        }
    }

    /// Visual weight of a marker; both fields grow with intensity.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct MarkerStyle {
        pub opacity: f64,
        pub scale: f64,
    }

    impl MarkerStyle {
        pub fn for_intensity(intensity: f64) -> MarkerStyle {
            let intensity = intensity.clamp(0.0, 1.0);
            MarkerStyle {
                opacity: intensity,
                scale: 0.5 + intensity,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn close(a: f64, b: f64) -> bool {
            (a - b).abs() < 1e-3
        }

        #[test]
        fn test_project_tokyo() {
            let p = project(35.68, 139.69);
            assert!(close(p.x, 0.888), "x = {}", p.x);
            assert!(close(p.y, 0.302), "y = {}", p.y);
        }

        #[test]
        fn test_project_corners() {
            assert_eq!(project(90.0, -180.0), MapPoint { x: 0.0, y: 0.0 });
            assert_eq!(project(-90.0, 180.0), MapPoint { x: 1.0, y: 1.0 });
            assert_eq!(project(0.0, 0.0), MapPoint { x: 0.5, y: 0.5 });
        }

        #[test]
        fn test_percent() {
            let (left, top) = project(0.0, 90.0).percent();
            assert!(close(left, 75.0));
            assert!(close(top, 50.0));
        }

        #[test]
        fn test_marker_style_monotonic() {
            let mut previous = MarkerStyle::for_intensity(0.0);
            for step in 1..=10 {
                let style = MarkerStyle::for_intensity(step as f64 / 10.0);
                assert!(style.opacity > previous.opacity);
                assert!(style.scale > previous.scale);
                previous = style;
            }
            assert_eq!(MarkerStyle::for_intensity(2.0), MarkerStyle::for_intensity(1.0));
        }
    }
}

/// The range of years the year slider may select.
pub mod years {
    use bloom_core::dataset::Dataset;

    /// Inclusive year bounds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct YearRange {
        pub min: i32,
        pub max: i32,
    }

    impl YearRange {
        /// Years covered by both the bloom events and the NDVI series.
        ///
        /// Returns `None` when the two sources share no year.
        pub fn from_dataset(dataset: &Dataset) -> Option<YearRange> {
            let shared: Vec<i32> = dataset
                .event_years()
                .into_iter()
                .filter(|y| dataset.series.contains_key(y))
                .collect();
            let range = YearRange {
                min: *shared.first()?,
                max: *shared.last()?,
            };
            log::debug!("year range {}..={}", range.min, range.max);
            Some(range)
        }

        pub fn contains(&self, year: i32) -> bool {
            (self.min..=self.max).contains(&year)
        }

        pub fn clamp(&self, year: i32) -> i32 {
            year.clamp(self.min, self.max)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_embedded_range() {
            let dataset = Dataset::embedded().unwrap();
            let range = YearRange::from_dataset(&dataset).unwrap();
            assert_eq!(range, YearRange { min: 2023, max: 2024 });
            assert!(range.contains(2023));
            assert!(!range.contains(2025));
        }

        #[test]
        fn test_clamp() {
            let range = YearRange { min: 2023, max: 2024 };
            assert_eq!(range.clamp(1999), 2023);
            assert_eq!(range.clamp(2024), 2024);
            assert_eq!(range.clamp(2099), 2024);
        }

        #[test]
        fn test_no_shared_year() {
            let mut dataset = Dataset::embedded().unwrap();
            dataset.series.clear();
            assert_eq!(YearRange::from_dataset(&dataset), None);
        }
    }
}

/// Feeding the NDVI trend chart.
pub mod series {
    use bloom_core::vegetation::{MonthlySample, VegetationSeries};
    use chrono::Month;
    use serde::Serialize;

    /// A `{label, value}` pair as consumed by the area chart.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ChartPoint {
        pub label: &'static str,
        pub value: f64,
    }

    /// The series' samples as chart points, unmodified and in month order.
    pub fn chart_points(series: &VegetationSeries) -> Vec<ChartPoint> {
        series
            .samples
            .iter()
            .map(|s: &MonthlySample| ChartPoint {
                label: s.label(),
                value: s.ndvi,
            })
            .collect()
    }

    /// Month with the highest NDVI; the earliest wins on ties.
    pub fn peak_month(series: &VegetationSeries) -> Option<Month> {
        let mut best: Option<&MonthlySample> = None;
        for sample in &series.samples {
            match best {
                Some(b) if sample.ndvi <= b.ndvi => {}
                _ => best = Some(sample),
            }
        }
        best.map(|s| s.month)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use bloom_core::dataset::Dataset;

        #[test]
        fn test_chart_points_pass_through() {
            let dataset = Dataset::embedded().unwrap();
            let series = dataset.series_for_year(2023).unwrap();
            let points = chart_points(series);
            assert_eq!(points.len(), 12);
            assert_eq!(points[0], ChartPoint { label: "Jan", value: 0.2 });
            assert_eq!(points[4], ChartPoint { label: "May", value: 0.75 });
            assert_eq!(points[11].label, "Dec");
        }

        #[test]
        fn test_peak_month_shipped_years() {
            let dataset = Dataset::embedded().unwrap();
            for year in [2023, 2024] {
                let series = dataset.series_for_year(year).unwrap();
                assert_eq!(peak_month(series), Some(Month::May));
            }
        }

        #[test]
        fn test_peak_month_ties_and_empty() {
            let flat = VegetationSeries {
                year: 2030,
                samples: vec![
                    MonthlySample { month: Month::January, ndvi: 0.5 },
                    MonthlySample { month: Month::February, ndvi: 0.5 },
                ],
            };
            assert_eq!(peak_month(&flat), Some(Month::January));
            let empty = VegetationSeries { year: 2030, samples: Vec::new() };
            assert_eq!(peak_month(&empty), None);
        }

        #[test]
        fn test_chart_points_serialize() {
            let json = serde_json::to_string(&ChartPoint { label: "Mar", value: 0.4 }).unwrap();
            assert_eq!(json, r#"{"label":"Mar","value":0.4}"#);
        }
    }
}

/// Everything the dashboard shows for one selected year.
pub mod dashboard {
    use crate::filter::events_for_year;
    use crate::metrics::BloomMetrics;
    use crate::series::{chart_points, peak_month, ChartPoint};
    use bloom_core::bloom_event::BloomEvent;
    use bloom_core::dataset::Dataset;
    use chrono::Month;

    /// Derived dashboard data for a year.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DashboardSnapshot {
        pub year: i32,
        pub events: Vec<BloomEvent>,
        pub metrics: BloomMetrics,
        /// `None` when the year has no NDVI series
        pub chart: Option<Vec<ChartPoint>>,
        pub peak_month: Option<Month>,
    }

    impl DashboardSnapshot {
        pub fn derive(dataset: &Dataset, year: i32) -> DashboardSnapshot {
            let events = events_for_year(&dataset.events, year);
            let metrics = BloomMetrics::from_events(&events);
            let series = dataset.series_for_year(year);
            DashboardSnapshot {
                year,
                events,
                metrics,
                chart: series.map(chart_points),
                peak_month: series.and_then(peak_month),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_derive_shipped_years() {
            let dataset = Dataset::embedded().unwrap();
            let s2023 = DashboardSnapshot::derive(&dataset, 2023);
            assert_eq!(s2023.metrics.count, 4);
            // (0.9 + 0.7 + 0.95 + 0.5) / 4 = 0.7625
            assert_eq!(s2023.metrics.mean_intensity_pct, Some(76));
            assert_eq!(s2023.chart.as_ref().map(Vec::len), Some(12));
            assert_eq!(s2023.peak_month, Some(Month::May));

            let s2024 = DashboardSnapshot::derive(&dataset, 2024);
            assert_eq!(s2024.metrics.count, 3);
            // (0.6 + 0.8 + 0.85) / 3 = 0.75
            assert_eq!(s2024.metrics.mean_intensity_pct, Some(75));
        }

        #[test]
        fn test_derive_year_without_data() {
            let dataset = Dataset::embedded().unwrap();
            let snapshot = DashboardSnapshot::derive(&dataset, 2025);
            assert!(snapshot.events.is_empty());
            assert_eq!(snapshot.metrics.count, 0);
            assert_eq!(snapshot.metrics.mean_intensity_display().to_string(), "N/A");
            assert_eq!(snapshot.chart, None);
            assert_eq!(snapshot.peak_month, None);
        }

        #[test]
        fn test_derive_is_repeatable() {
            let dataset = Dataset::embedded().unwrap();
            let once = DashboardSnapshot::derive(&dataset, 2024);
            let twice = DashboardSnapshot::derive(&dataset, 2024);
            assert_eq!(once, twice);
        }
    }
}
