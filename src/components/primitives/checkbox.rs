//! Checkbox Component

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::KitColors;

/// Visual mark of a checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMark {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckMark {
    /// Indeterminate wins over checked, as for a partial "select all"
    pub fn resolve(checked: bool, indeterminate: bool) -> Self {
        if indeterminate {
            CheckMark::Indeterminate
        } else if checked {
            CheckMark::Checked
        } else {
            CheckMark::Unchecked
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            CheckMark::Unchecked => "",
            CheckMark::Checked => "✓",
            CheckMark::Indeterminate => "−",
        }
    }

    /// Value requested by a click. An indeterminate box selects everything.
    pub fn next_value(self) -> bool {
        !matches!(self, CheckMark::Checked)
    }
}

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    indeterminate: bool,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            indeterminate: false,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Show the "some but not all" mark
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mark = CheckMark::resolve(self.checked, self.indeterminate);
        let filled = mark != CheckMark::Unchecked;
        let on_change = self.on_change;

        let (checkbox_bg, border_color) = if filled {
            (KitColors::primary(), KitColors::primary())
        } else {
            (KitColors::surface(), KitColors::border_strong())
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .child(
                div()
                    .size(px(18.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(border_color)
                    .bg(checkbox_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(KitColors::text_light())
                    .text_size(px(12.0))
                    .child(mark.glyph()),
            );

        if let Some(label) = self.label {
            checkbox = checkbox.child(
                div()
                    .text_sm()
                    .text_color(KitColors::text_primary())
                    .child(label),
            );
        }

        if !self.disabled {
            if let Some(handler) = on_change {
                checkbox = checkbox.on_click(move |_event, window, cx| {
                    handler(mark.next_value(), window, cx);
                });
            }
        } else {
            checkbox = checkbox.opacity(0.5);
        }

        checkbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indeterminate_click_selects_all() {
        let mark = CheckMark::resolve(false, true);
        assert_eq!(mark, CheckMark::Indeterminate);
        assert!(mark.next_value());
    }

    #[test]
    fn checked_click_clears() {
        assert!(!CheckMark::resolve(true, false).next_value());
        assert!(CheckMark::resolve(false, false).next_value());
    }
}
