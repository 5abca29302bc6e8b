//! Colors - Design Kit Palette

use gpui::{rgb, rgba, Rgba};

/// Design Kit color palette - All colors are accessed via associated functions
pub struct KitColors;

impl KitColors {
    // Brand colors
    /// Primary brand - Indigo
    pub fn primary() -> Rgba { rgb(0x4f46e5) }
    /// Primary hover
    pub fn primary_hover() -> Rgba { rgb(0x4338ca) }
    /// Primary pressed
    pub fn primary_pressed() -> Rgba { rgb(0x3730a3) }
    /// Primary tint (soft backgrounds)
    pub fn primary_soft() -> Rgba { rgb(0xeef2ff) }

    // Neutral colors
    /// Neutral solid
    pub fn neutral() -> Rgba { rgb(0x4b5563) }
    /// Neutral tint
    pub fn neutral_soft() -> Rgba { rgb(0xf3f4f6) }

    // Background colors
    /// Page background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Surface background (cards, tables, inputs)
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Fully transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark or solid backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Success tint
    pub fn success_soft() -> Rgba { rgb(0xdcfce7) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Warning tint
    pub fn warning_soft() -> Rgba { rgb(0xfef3c7) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Danger tint
    pub fn danger_soft() -> Rgba { rgb(0xfee2e2) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x3b82f6) }
    /// Info tint
    pub fn info_soft() -> Rgba { rgb(0xdbeafe) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Strong border (inputs, unchecked controls)
    pub fn border_strong() -> Rgba { rgb(0xd1d5db) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x6366f1) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }
    /// Selected row background
    pub fn table_row_selected() -> Rgba { rgb(0xeef2ff) }

    // Control colors
    /// Star rating filled
    pub fn rating_filled() -> Rgba { rgb(0xfbbf24) }
    /// Star rating empty
    pub fn rating_empty() -> Rgba { rgb(0xd1d5db) }
    /// Progress / slider track
    pub fn track() -> Rgba { rgb(0xe5e7eb) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}
