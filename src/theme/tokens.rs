//! Style Tokens
//!
//! Static lookup tables from enumerated props to concrete styles. Each
//! table is an exhaustive `match`, so adding a variant fails to compile
//! until every table covers it.

use gpui::Rgba;

use super::colors::KitColors;
use super::typography::Typography;

/// Component size shared by all atoms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Small
    Small,
    /// Medium (default)
    #[default]
    Medium,
    /// Large
    Large,
}

/// Semantic color of a component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    #[default]
    Primary,
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

/// How a tone is applied to a surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Fill {
    /// Solid background, light text
    #[default]
    Solid,
    /// Tinted background, toned text
    Soft,
    /// Transparent background, toned border and text
    Outline,
}

/// Spacing and type metrics for a size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub padding_x: f32,
    pub padding_y: f32,
    pub font_size: f32,
    pub height: f32,
    pub gap: f32,
}

/// Metrics lookup keyed by size
pub fn size_metrics(size: Size) -> SizeMetrics {
    match size {
        Size::Small => SizeMetrics {
            padding_x: 8.0,
            padding_y: 2.0,
            font_size: Typography::TEXT_XS,
            height: 24.0,
            gap: 4.0,
        },
        Size::Medium => SizeMetrics {
            padding_x: 12.0,
            padding_y: 6.0,
            font_size: Typography::TEXT_SM,
            height: 32.0,
            gap: 6.0,
        },
        Size::Large => SizeMetrics {
            padding_x: 16.0,
            padding_y: 10.0,
            font_size: Typography::TEXT_BASE,
            height: 40.0,
            gap: 8.0,
        },
    }
}

/// Solid and tinted colors for a tone
#[derive(Debug, Clone, Copy)]
pub struct TonePalette {
    pub solid: Rgba,
    pub soft: Rgba,
}

/// Palette lookup keyed by tone
pub fn tone_palette(tone: Tone) -> TonePalette {
    match tone {
        Tone::Primary => TonePalette { solid: KitColors::primary(), soft: KitColors::primary_soft() },
        Tone::Neutral => TonePalette { solid: KitColors::neutral(), soft: KitColors::neutral_soft() },
        Tone::Success => TonePalette { solid: KitColors::success(), soft: KitColors::success_soft() },
        Tone::Warning => TonePalette { solid: KitColors::warning(), soft: KitColors::warning_soft() },
        Tone::Danger => TonePalette { solid: KitColors::danger(), soft: KitColors::danger_soft() },
        Tone::Info => TonePalette { solid: KitColors::info(), soft: KitColors::info_soft() },
    }
}

/// Resolved colors of a filled surface
#[derive(Debug, Clone, Copy)]
pub struct SurfaceStyle {
    pub bg: Rgba,
    pub text: Rgba,
    pub border: Rgba,
}

/// Surface lookup keyed by (tone, fill)
pub fn surface_style(tone: Tone, fill: Fill) -> SurfaceStyle {
    let palette = tone_palette(tone);
    match fill {
        Fill::Solid => SurfaceStyle {
            bg: palette.solid,
            text: KitColors::text_light(),
            border: palette.solid,
        },
        Fill::Soft => SurfaceStyle {
            bg: palette.soft,
            text: palette.solid,
            border: palette.soft,
        },
        Fill::Outline => SurfaceStyle {
            bg: KitColors::transparent(),
            text: palette.solid,
            border: palette.solid,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_metrics_grow_with_size() {
        let small = size_metrics(Size::Small);
        let medium = size_metrics(Size::Medium);
        let large = size_metrics(Size::Large);
        assert!(small.height < medium.height && medium.height < large.height);
        assert!(small.font_size < medium.font_size && medium.font_size < large.font_size);
    }

    #[test]
    fn outline_surface_is_transparent() {
        let style = surface_style(Tone::Danger, Fill::Outline);
        assert_eq!(style.bg.a, 0.0);
        assert_eq!(style.text, KitColors::danger());
    }

    #[test]
    fn solid_surface_uses_light_text() {
        let style = surface_style(Tone::Success, Fill::Solid);
        assert_eq!(style.bg, KitColors::success());
        assert_eq!(style.text, KitColors::text_light());
    }

    #[test]
    fn size_deserializes_lowercase() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            size: Size,
        }
        let parsed: Wrapper = toml::from_str("size = \"large\"").expect("parse");
        assert_eq!(parsed.size, Size::Large);
    }
}
