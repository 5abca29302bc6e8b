//! RadioButton Component

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::KitColors;
use crate::theme::tokens::{size_metrics, Size};

/// A single radio button; the parent owns the selection
#[derive(IntoElement)]
pub struct RadioButton {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    size: Size,
    disabled: bool,
    on_select: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl RadioButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            size: Size::Medium,
            disabled: false,
            on_select: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
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

    /// Called when an unchecked radio is clicked
    pub fn on_select(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for RadioButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let outer = size_metrics(self.size).font_size + 2.0;
        let border = if self.checked { KitColors::primary() } else { KitColors::border_strong() };
        let clickable = !self.disabled && !self.checked;

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .size(px(outer))
                    .rounded_full()
                    .border_1()
                    .border_color(border)
                    .bg(KitColors::surface())
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(self.checked, |el| {
                        el.child(div().size(px(outer / 2.0)).rounded_full().bg(KitColors::primary()))
                    }),
            )
            .when_some(self.label, |el, label| {
                el.child(div().text_sm().text_color(KitColors::text_primary()).child(label))
            })
            .when(self.disabled, |el| el.opacity(0.5))
            .when_some(self.on_select.filter(|_| clickable), |el, handler| {
                el.cursor_pointer().on_click(move |_event, window, cx| handler(window, cx))
            })
    }
}

/// One option of a radio group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    pub value: String,
    pub label: SharedString,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A vertical group of radio buttons with a single selected value
#[derive(IntoElement)]
pub struct RadioGroup {
    id: ElementId,
    options: Vec<RadioOption>,
    selected: Option<String>,
    size: Size,
    on_change: Option<Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>>,
}

impl RadioGroup {
    pub fn new(id: impl Into<ElementId>, options: Vec<RadioOption>) -> Self {
        Self {
            id: id.into(),
            options,
            selected: None,
            size: Size::Medium,
            on_change: None,
        }
    }

    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for RadioGroup {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selected = self.selected;
        let on_change = self.on_change;
        let size = self.size;

        div()
            .id(self.id)
            .flex()
            .flex_col()
            .gap_2()
            .children(self.options.into_iter().enumerate().map(|(i, option)| {
                let checked = selected.as_deref() == Some(option.value.as_str());
                let radio = RadioButton::new(("radio", i))
                    .checked(checked)
                    .size(size)
                    .label(option.label);
                match on_change.clone() {
                    Some(handler) => {
                        let value = option.value;
                        radio.on_select(move |window, cx| handler(&value, window, cx))
                    }
                    None => radio,
                }
            }))
    }
}
