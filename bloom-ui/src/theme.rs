//! Inline style fragments shared by the components.

pub const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

pub const BG_APP: &str = "#111827";
pub const BG_PANEL: &str = "#1f2937";
pub const BORDER: &str = "#374151";
pub const ACCENT: &str = "#4ade80";
pub const ACCENT_STRONG: &str = "#22c55e";

/// Rounded dark card used by every panel.
pub const CARD: &str = "background: #1f2937; padding: 24px; border-radius: 12px; box-shadow: 0 10px 15px rgba(0,0,0,0.3);";

/// Responsive grid with the given minimum column width in pixels.
pub fn grid(min_column_px: u32) -> String {
    format!(
        "display: grid; grid-template-columns: repeat(auto-fill, minmax({}px, 1fr)); gap: 24px;",
        min_column_px
    )
}
