//! Toggle (switch) Component

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::KitColors;
use crate::theme::tokens::Size;

/// Track and knob dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleMetrics {
    pub track_width: f32,
    pub track_height: f32,
    pub knob: f32,
}

/// Dimension lookup keyed by size
pub fn toggle_metrics(size: Size) -> ToggleMetrics {
    match size {
        Size::Small => ToggleMetrics { track_width: 28.0, track_height: 16.0, knob: 12.0 },
        Size::Medium => ToggleMetrics { track_width: 36.0, track_height: 20.0, knob: 16.0 },
        Size::Large => ToggleMetrics { track_width: 44.0, track_height: 24.0, knob: 20.0 },
    }
}

/// Knob offset from the left edge of the track
pub fn knob_offset(metrics: ToggleMetrics, on: bool) -> f32 {
    let inset = (metrics.track_height - metrics.knob) / 2.0;
    if on {
        metrics.track_width - metrics.knob - inset
    } else {
        inset
    }
}

/// A switch; the parent owns the value
#[derive(IntoElement)]
pub struct Toggle {
    id: ElementId,
    on: bool,
    label: Option<SharedString>,
    size: Size,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Toggle {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            on: false,
            label: None,
            size: Size::Medium,
            disabled: false,
            on_change: None,
        }
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the requested value
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Toggle {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let metrics = toggle_metrics(self.size);
        let on = self.on;
        let track = if on { KitColors::primary() } else { KitColors::border_strong() };

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .relative()
                    .w(px(metrics.track_width))
                    .h(px(metrics.track_height))
                    .rounded_full()
                    .bg(track)
                    .child(
                        div()
                            .absolute()
                            .top(px((metrics.track_height - metrics.knob) / 2.0))
                            .left(px(knob_offset(metrics, on)))
                            .size(px(metrics.knob))
                            .rounded_full()
                            .bg(KitColors::surface()),
                    ),
            )
            .when_some(self.label, |el, label| {
                el.child(div().text_sm().text_color(KitColors::text_primary()).child(label))
            })
            .when(self.disabled, |el| el.opacity(0.5))
            .when_some(self.on_change.filter(|_| !self.disabled), |el, handler| {
                el.cursor_pointer()
                    .on_click(move |_event, window, cx| handler(!on, window, cx))
            })
    }
}
