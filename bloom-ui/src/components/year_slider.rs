//! Range input for choosing the dashboard year.

use crate::theme;
use bloom_data::years::YearRange;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct YearSliderProps {
    /// Currently selected year
    pub year: i32,
    /// Years the slider may select
    pub range: YearRange,
    /// Called with the new year, already clamped to `range`
    pub on_change: EventHandler<i32>,
}

/// Parse raw slider input into a year inside `range`.
///
/// Returns `None` for input that is not an integer.
pub fn parse_year_input(raw: &str, range: YearRange) -> Option<i32> {
    let value = raw.trim().parse::<i32>().ok()?;
    if !range.contains(value) {
        log::debug!(
            "year {} outside {}..={}, clamping",
            value,
            range.min,
            range.max
        );
    }
    Some(range.clamp(value))
}

/// Slider bound to `range`. Values that do not parse as integers are ignored.
#[component]
pub fn YearSlider(props: YearSliderProps) -> Element {
    let range = props.range;
    let on_change = props.on_change;
    let on_input = move |evt: Event<FormData>| match parse_year_input(&evt.value(), range) {
        Some(year) => on_change.call(year),
        None => log::warn!("ignoring non-numeric year input {:?}", evt.value()),
    };
    let title_style = format!(
        "margin: 0 0 16px 0; font-size: 18px; font-weight: 600; color: {};",
        theme::ACCENT
    );
    let input_style = format!("width: 100%; accent-color: {}; cursor: pointer;", theme::ACCENT_STRONG);

    rsx! {
        div {
            style: theme::CARD,
            h3 { style: "{title_style}", "Controls" }
            label {
                r#for: "year-slider",
                style: "display: block; margin-bottom: 8px; font-size: 14px; color: #d1d5db;",
                "Year: "
                span { style: "font-weight: bold; color: #ffffff;", "{props.year}" }
            }
            input {
                id: "year-slider",
                r#type: "range",
                min: "{range.min}",
                max: "{range.max}",
                step: "1",
                value: "{props.year}",
                style: "{input_style}",
                oninput: on_input,
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 12px; color: #9ca3af;",
                span { "{range.min}" }
                span { "{range.max}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: YearRange = YearRange { min: 2023, max: 2024 };

    #[test]
    fn test_input_inside_range_passes_through() {
        assert_eq!(parse_year_input("2023", RANGE), Some(2023));
        assert_eq!(parse_year_input(" 2024 ", RANGE), Some(2024));
    }

    #[test]
    fn test_input_outside_range_is_clamped() {
        assert_eq!(parse_year_input("1999", RANGE), Some(2023));
        assert_eq!(parse_year_input("2031", RANGE), Some(2024));
    }

    #[test]
    fn test_non_numeric_input_is_ignored() {
        assert_eq!(parse_year_input("", RANGE), None);
        assert_eq!(parse_year_input("twenty", RANGE), None);
    }
}
