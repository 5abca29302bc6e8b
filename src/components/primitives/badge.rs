//! Badge Component
//!
//! A compact pill for counts and statuses.

use gpui::{div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::tokens::{size_metrics, surface_style, Fill, Size, Tone};

/// What a badge shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeContent {
    Text(SharedString),
    Count { value: u32, max: u32 },
    Dot,
}

/// Count text, capped as `max+`
pub fn count_label(value: u32, max: u32) -> String {
    if value > max {
        format!("{max}+")
    } else {
        value.to_string()
    }
}

/// A badge component
#[derive(IntoElement)]
pub struct Badge {
    content: BadgeContent,
    tone: Tone,
    fill: Fill,
    size: Size,
}

impl Badge {
    /// Text badge
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self::with_content(BadgeContent::Text(text.into()))
    }

    /// Numeric badge capped at 99
    pub fn count(value: u32) -> Self {
        Self::with_content(BadgeContent::Count { value, max: 99 })
    }

    /// Status dot without text
    pub fn dot() -> Self {
        Self::with_content(BadgeContent::Dot)
    }

    fn with_content(content: BadgeContent) -> Self {
        Self {
            content,
            tone: Tone::Primary,
            fill: Fill::Solid,
            size: Size::Medium,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Change the count cap
    pub fn max(mut self, max: u32) -> Self {
        if let BadgeContent::Count { max: cap, .. } = &mut self.content {
            *cap = max;
        }
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = surface_style(self.tone, self.fill);
        let metrics = size_metrics(self.size);

        let text: Option<SharedString> = match self.content {
            BadgeContent::Text(text) => Some(text),
            BadgeContent::Count { value, max } => Some(count_label(value, max).into()),
            BadgeContent::Dot => None,
        };

        match text {
            None => div()
                .size(px(metrics.gap + 2.0))
                .rounded_full()
                .bg(style.bg),
            Some(text) => div()
                .px(px(metrics.padding_x * 0.75))
                .py(px(metrics.padding_y * 0.5))
                .rounded_full()
                .bg(style.bg)
                .border_1()
                .border_color(style.border)
                .text_color(style.text)
                .text_size(px(metrics.font_size - 2.0))
                .font_weight(gpui::FontWeight::MEDIUM)
                .child(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_caps_at_max() {
        assert_eq!(count_label(5, 99), "5");
        assert_eq!(count_label(99, 99), "99");
        assert_eq!(count_label(120, 99), "99+");
    }

    #[test]
    fn max_only_applies_to_counts() {
        let badge = Badge::count(12).max(9);
        assert_eq!(badge.content, BadgeContent::Count { value: 12, max: 9 });
        let badge = Badge::new("New").max(9);
        assert_eq!(badge.content, BadgeContent::Text("New".into()));
    }
}
