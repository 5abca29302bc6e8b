//! Tag Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::tokens::{size_metrics, surface_style, Fill, Size, Tone};

/// A labelled tag, optionally removable
#[derive(IntoElement)]
pub struct Tag {
    label: SharedString,
    tone: Tone,
    fill: Fill,
    size: Size,
    on_remove: Option<(ElementId, Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>)>,
}

impl Tag {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            tone: Tone::Neutral,
            fill: Fill::Soft,
            size: Size::Medium,
            on_remove: None,
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

    /// Show a close mark that calls `handler`
    pub fn on_remove(
        mut self,
        id: impl Into<ElementId>,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_remove = Some((id.into(), Box::new(handler)));
        self
    }
}

impl RenderOnce for Tag {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = surface_style(self.tone, self.fill);
        let metrics = size_metrics(self.size);

        div()
            .flex()
            .flex_none()
            .items_center()
            .gap_1()
            .px(px(metrics.padding_x * 0.75))
            .py(px(metrics.padding_y * 0.5))
            .rounded_md()
            .bg(style.bg)
            .border_1()
            .border_color(style.border)
            .text_color(style.text)
            .text_size(px(metrics.font_size - 1.0))
            .child(self.label)
            .when_some(self.on_remove, |el, (id, handler)| {
                el.child(
                    div()
                        .id(id)
                        .cursor_pointer()
                        .opacity(0.7)
                        .hover(|s| s.opacity(1.0))
                        .on_click(handler)
                        .child("×"),
                )
            })
    }
}
