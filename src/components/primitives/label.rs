//! Label Component
//!
//! Form field label with optional required mark and helper text.

use gpui::{div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::colors::KitColors;
use crate::theme::tokens::{size_metrics, Size};

/// Label state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelState {
    #[default]
    Default,
    Disabled,
    Error,
}

/// Label and helper colors keyed by state
pub fn label_colors(state: LabelState) -> (gpui::Rgba, gpui::Rgba) {
    match state {
        LabelState::Default => (KitColors::text_primary(), KitColors::text_secondary()),
        LabelState::Disabled => (KitColors::text_muted(), KitColors::text_muted()),
        LabelState::Error => (KitColors::text_primary(), KitColors::danger()),
    }
}

#[derive(IntoElement)]
pub struct Label {
    text: SharedString,
    helper: Option<SharedString>,
    required: bool,
    state: LabelState,
    size: Size,
}

impl Label {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            helper: None,
            required: false,
            state: LabelState::Default,
            size: Size::Medium,
        }
    }

    pub fn helper(mut self, helper: impl Into<SharedString>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn state(mut self, state: LabelState) -> Self {
        self.state = state;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for Label {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (text_color, helper_color) = label_colors(self.state);
        let font_size = size_metrics(self.size).font_size;

        div()
            .flex()
            .flex_col()
            .gap_0p5()
            .child(
                div()
                    .flex()
                    .gap_0p5()
                    .text_size(px(font_size))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(text_color)
                    .child(self.text)
                    .when(self.required, |el| el.child(div().text_color(KitColors::danger()).child("*"))),
            )
            .when_some(self.helper, |el, helper| {
                el.child(
                    div()
                        .text_size(px(font_size - 2.0))
                        .text_color(helper_color)
                        .child(helper),
                )
            })
    }
}
