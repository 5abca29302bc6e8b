//! ProgressBar Component

use gpui::{div, prelude::*, px, relative, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::theme::colors::KitColors;
use crate::theme::tokens::{tone_palette, Size, Tone};

/// Percentage of `value` in `[0, max]`, clamped to `[0, 100]`
pub fn percent_of(value: f64, max: f64) -> f32 {
    if !value.is_finite() || !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    ((value / max) * 100.0).clamp(0.0, 100.0) as f32
}

/// Bar thickness keyed by size
pub fn bar_height(size: Size) -> f32 {
    match size {
        Size::Small => 4.0,
        Size::Medium => 8.0,
        Size::Large => 12.0,
    }
}

/// A horizontal progress bar
#[derive(IntoElement)]
pub struct ProgressBar {
    percent: f32,
    tone: Tone,
    size: Size,
    show_label: bool,
}

impl ProgressBar {
    /// Create a bar from a percentage; values outside `[0, 100]` are clamped
    pub fn new(percent: f32) -> Self {
        Self {
            percent: percent_of(percent as f64, 100.0),
            tone: Tone::Primary,
            size: Size::Medium,
            show_label: false,
        }
    }

    /// Create a bar from a value and its maximum
    pub fn from_value(value: f64, max: f64) -> Self {
        Self::new(percent_of(value, max))
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Show the percentage next to the bar
    pub fn show_label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }
}

impl RenderOnce for ProgressBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let height = bar_height(self.size);
        let fill = tone_palette(self.tone).solid;

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .flex_1()
                    .h(px(height))
                    .rounded_full()
                    .bg(KitColors::track())
                    .overflow_hidden()
                    .child(
                        div()
                            .h_full()
                            .w(relative(self.percent / 100.0))
                            .rounded_full()
                            .bg(fill),
                    ),
            )
            .when(self.show_label, |el| {
                el.child(
                    div()
                        .flex_none()
                        .text_xs()
                        .text_color(KitColors::text_secondary())
                        .child(format!("{:.0}%", self.percent)),
                )
            })
    }
}
