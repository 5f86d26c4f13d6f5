use anyhow::{bail, Context};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Embedded CSV data for all detected bloom events.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/bloom_events.csv");

/// A single geolocated detection of a flowering event.
///
/// Events are read-only once loaded; the dashboard only filters and
/// aggregates them.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BloomEvent {
    /// Unique identifier within the dataset
    pub id: String,
    /// Latitude in decimal degrees, [-90, 90]
    pub lat: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub lng: f64,
    /// Detection intensity, [0, 1]
    pub intensity: f64,
    /// Human-readable name (e.g., "Cherry Blossoms, Japan")
    pub name: String,
    /// Calendar year of the detection
    pub year: i32,
}

impl BloomEvent {
    /// Check the coordinate and intensity ranges.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            bail!("event {}: latitude {} outside [-90, 90]", self.id, self.lat);
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            bail!("event {}: longitude {} outside [-180, 180]", self.id, self.lng);
        }
        if !(0.0..=1.0).contains(&self.intensity) {
            bail!("event {}: intensity {} outside [0, 1]", self.id, self.intensity);
        }
        Ok(())
    }

    /// Parse a CSV string of bloom events.
    ///
    /// Expected CSV columns: id, lat, lng, intensity, name, year.
    /// Rows are returned in file order. Duplicate ids and out-of-range
    /// values are rejected.
    pub fn parse_bloom_event_csv(csv_object: &str) -> anyhow::Result<Vec<BloomEvent>> {
        let mut events: Vec<BloomEvent> = Vec::new();
        let mut seen_ids = HashSet::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        for (index, row) in rdr.deserialize::<BloomEvent>().enumerate() {
            // header is line 1
            let line = index + 2;
            let event = row.with_context(|| format!("bloom event CSV line {}", line))?;
            event
                .validate()
                .with_context(|| format!("bloom event CSV line {}", line))?;
            if !seen_ids.insert(event.id.clone()) {
                bail!("bloom event CSV line {}: duplicate id {:?}", line, event.id);
            }
            events.push(event);
        }
        log::debug!("parsed {} bloom events", events.len());
        Ok(events)
    }
}
