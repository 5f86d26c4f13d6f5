//! Monthly vegetation index (NDVI) series, one per year.

use anyhow::{anyhow, bail, Context};
use chrono::Month;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Embedded CSV data for the global average NDVI per month.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/ndvi_series.csv");

/// Number of samples in a complete series.
pub const MONTHS_PER_YEAR: usize = 12;

/// One month of vegetation index data.
#[derive(Debug, PartialEq, Clone)]
pub struct MonthlySample {
    pub month: Month,
    /// Normalized Difference Vegetation Index, typically [0, 1]
    pub ndvi: f64,
}

impl MonthlySample {
    /// Three-letter month abbreviation used as the chart's x-axis label.
    pub fn label(&self) -> &'static str {
        month_abbrev(self.month)
    }
}

/// Three-letter abbreviation of a calendar month ("Jan" .. "Dec").
pub fn month_abbrev(month: Month) -> &'static str {
    &month.name()[..3]
}

/// The twelve monthly samples for one year, in calendar order.
#[derive(Debug, PartialEq, Clone)]
pub struct VegetationSeries {
    pub year: i32,
    pub samples: Vec<MonthlySample>,
}

/// Raw CSV row before month parsing.
#[derive(Debug, Deserialize)]
struct NdviRow {
    year: i32,
    month: String,
    ndvi: f64,
}

impl VegetationSeries {
    /// Check that the series holds exactly January through December in order.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.samples.len() != MONTHS_PER_YEAR {
            bail!(
                "NDVI series {}: expected {} months, found {}",
                self.year,
                MONTHS_PER_YEAR,
                self.samples.len()
            );
        }
        for (index, sample) in self.samples.iter().enumerate() {
            if sample.month.number_from_month() as usize != index + 1 {
                bail!(
                    "NDVI series {}: {} out of calendar order at position {}",
                    self.year,
                    sample.month.name(),
                    index + 1
                );
            }
        }
        Ok(())
    }

    /// Parse a CSV string of monthly samples into one series per year.
    ///
    /// Expected CSV columns: year, month, ndvi. Month accepts short or long
    /// English names. Rows must be grouped so that each year's months appear
    /// in calendar order; every year must be complete.
    pub fn parse_ndvi_csv(csv_object: &str) -> anyhow::Result<BTreeMap<i32, VegetationSeries>> {
        let mut series: BTreeMap<i32, VegetationSeries> = BTreeMap::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        for (index, row) in rdr.deserialize::<NdviRow>().enumerate() {
            let line = index + 2;
            let row = row.with_context(|| format!("NDVI CSV line {}", line))?;
            let month = row
                .month
                .parse::<Month>()
                .map_err(|_| anyhow!("NDVI CSV line {}: unknown month {:?}", line, row.month))?;
            series
                .entry(row.year)
                .or_insert_with(|| VegetationSeries {
                    year: row.year,
                    samples: Vec::with_capacity(MONTHS_PER_YEAR),
                })
                .samples
                .push(MonthlySample {
                    month,
                    ndvi: row.ndvi,
                });
        }
        for s in series.values() {
            s.validate()?;
        }
        log::debug!("parsed NDVI series for {} years", series.len());
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::{month_abbrev, VegetationSeries, CSV_OBJECT};
    use chrono::Month;

    fn year_csv(year: i32, months: &[&str]) -> String {
        let mut csv_data = String::from("year,month,ndvi\n");
        for (i, m) in months.iter().enumerate() {
            csv_data.push_str(&format!("{},{},{}\n", year, m, 0.1 + i as f64 * 0.05));
        }
        csv_data
    }

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    #[test]
    fn test_parse_complete_year() {
        let series = VegetationSeries::parse_ndvi_csv(&year_csv(2030, &MONTHS)).unwrap();
        assert_eq!(series.len(), 1);
        let s = &series[&2030];
        assert_eq!(s.samples.len(), 12);
        assert_eq!(s.samples[0].month, Month::January);
        assert_eq!(s.samples[11].label(), "Dec");
    }

    #[test]
    fn test_rejects_incomplete_year() {
        assert!(VegetationSeries::parse_ndvi_csv(&year_csv(2030, &MONTHS[..11])).is_err());
    }

    #[test]
    fn test_rejects_out_of_order_months() {
        let mut months = MONTHS;
        months.swap(3, 4);
        let err = VegetationSeries::parse_ndvi_csv(&year_csv(2030, &months)).unwrap_err();
        assert!(err.to_string().contains("out of calendar order"));
    }

    #[test]
    fn test_rejects_unknown_month() {
        let mut months = MONTHS;
        months[5] = "Smarch";
        let err = VegetationSeries::parse_ndvi_csv(&year_csv(2030, &months)).unwrap_err();
        assert!(err.to_string().contains("unknown month"));
    }

    #[test]
    fn test_month_abbrev() {
        assert_eq!(month_abbrev(Month::May), "May");
        assert_eq!(month_abbrev(Month::September), "Sep");
    }

    #[test]
    fn test_embedded_fixture() {
        let series = VegetationSeries::parse_ndvi_csv(CSV_OBJECT).unwrap();
        assert_eq!(series.keys().copied().collect::<Vec<_>>(), vec![2023, 2024]);
        let s2024 = &series[&2024];
        assert_eq!(s2024.samples[4].label(), "May");
        assert!((s2024.samples[4].ndvi - 0.8).abs() < f64::EPSILON);
    }
}
