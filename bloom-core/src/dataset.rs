//! The full set of mock observations shown by the dashboard.

use crate::bloom_event::{self, BloomEvent};
use crate::vegetation::{self, VegetationSeries};
use anyhow::Context;
use std::collections::BTreeMap;

/// Bloom events plus NDVI series keyed by year.
///
/// Loaded once at mount; views only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub events: Vec<BloomEvent>,
    pub series: BTreeMap<i32, VegetationSeries>,
}

impl Dataset {
    /// Parse both CSV sources.
    pub fn from_csv(events_csv: &str, ndvi_csv: &str) -> anyhow::Result<Dataset> {
        let events =
            BloomEvent::parse_bloom_event_csv(events_csv).context("failed to load bloom events")?;
        let series =
            VegetationSeries::parse_ndvi_csv(ndvi_csv).context("failed to load NDVI series")?;
        log::info!(
            "dataset loaded: {} bloom events, NDVI series for {:?}",
            events.len(),
            series.keys().collect::<Vec<_>>()
        );
        Ok(Dataset { events, series })
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> anyhow::Result<Dataset> {
        Dataset::from_csv(bloom_event::CSV_OBJECT, vegetation::CSV_OBJECT)
    }

    /// NDVI series for a year, if one exists.
    pub fn series_for_year(&self, year: i32) -> Option<&VegetationSeries> {
        self.series.get(&year)
    }

    /// Distinct years that have bloom events, ascending.
    pub fn event_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.events.iter().map(|e| e.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}
