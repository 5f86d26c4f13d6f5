//! Image-backed world map with one marker per bloom event.

use bloom_core::bloom_event::BloomEvent;
use bloom_data::projection::{project, MarkerStyle};
use dioxus::prelude::*;

/// Backdrop image for the map panel.
const MAP_IMAGE_URL: &str = "https://picsum.photos/seed/map/1200/800";

#[derive(Props, Clone, PartialEq)]
pub struct BloomMapProps {
    /// Events for the selected year
    pub events: Vec<BloomEvent>,
}

/// Markers are placed with an equirectangular projection onto the panel, so
/// the backdrop should be an equirectangular world image.
#[component]
pub fn BloomMap(props: BloomMapProps) -> Element {
    rsx! {
        div {
            style: "position: relative; width: 100%; height: 100%; min-height: 360px; background: #374151; border-radius: 8px; overflow: hidden;",
            img {
                src: MAP_IMAGE_URL,
                alt: "World Map",
                style: "width: 100%; height: 100%; object-fit: cover; opacity: 0.3; position: absolute; inset: 0;",
            }
            div {
                style: "position: absolute; inset: 0;",
                for event in props.events.iter() {
                    BloomMarker { key: "{event.id}", event: event.clone() }
                }
            }
            div {
                style: "position: absolute; top: 16px; left: 16px; background: rgba(0,0,0,0.5); padding: 8px; border-radius: 6px;",
                h3 { style: "margin: 0; color: #ffffff; font-weight: 600;", "Global Bloom Hotspots" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BloomMarkerProps {
    event: BloomEvent,
}

#[component]
fn BloomMarker(props: BloomMarkerProps) -> Element {
    let event = &props.event;
    let (left, top) = project(event.lat, event.lng).percent();
    let marker = MarkerStyle::for_intensity(event.intensity);
    let anchor_style = format!(
        "position: absolute; left: {:.3}%; top: {:.3}%; transform: translate(-50%, -50%);",
        left, top
    );
    let dot_style = format!(
        "width: 16px; height: 16px; border-radius: 50%; background: #4ade80; border: 2px solid #ffffff; opacity: {:.2}; transform: scale({:.2});",
        marker.opacity, marker.scale
    );
    let title = format!("{} ({:.0}%)", event.name, event.intensity * 100.0);

    rsx! {
        div {
            style: "{anchor_style}",
            div {
                style: "{dot_style}",
                title: "{title}",
            }
        }
    }
}
