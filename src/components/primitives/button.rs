//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::KitColors;
use crate::theme::tokens::{size_metrics, Size, SurfaceStyle};

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Primary action button
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Bordered, transparent button
    Outline,
    /// Danger button (red)
    Danger,
    /// Ghost button (transparent)
    Ghost,
}

/// Interaction state used for styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonState {
    #[default]
    Default,
    Hover,
    Pressed,
    Disabled,
}

/// Style lookup keyed by (variant, state)
pub fn button_style(variant: ButtonVariant, state: ButtonState) -> SurfaceStyle {
    use ButtonState as S;
    use ButtonVariant as V;

    let transparent = KitColors::transparent();
    match (variant, state) {
        (V::Primary, S::Default) => SurfaceStyle { bg: KitColors::primary(), text: KitColors::text_light(), border: KitColors::primary() },
        (V::Primary, S::Hover) => SurfaceStyle { bg: KitColors::primary_hover(), text: KitColors::text_light(), border: KitColors::primary_hover() },
        (V::Primary, S::Pressed) => SurfaceStyle { bg: KitColors::primary_pressed(), text: KitColors::text_light(), border: KitColors::primary_pressed() },
        (V::Secondary, S::Default) => SurfaceStyle { bg: KitColors::neutral_soft(), text: KitColors::text_primary(), border: KitColors::neutral_soft() },
        (V::Secondary, S::Hover) => SurfaceStyle { bg: KitColors::border(), text: KitColors::text_primary(), border: KitColors::border() },
        (V::Secondary, S::Pressed) => SurfaceStyle { bg: KitColors::border_strong(), text: KitColors::text_primary(), border: KitColors::border_strong() },
        (V::Outline, S::Default) => SurfaceStyle { bg: transparent, text: KitColors::primary(), border: KitColors::primary() },
        (V::Outline, S::Hover) => SurfaceStyle { bg: KitColors::primary_soft(), text: KitColors::primary(), border: KitColors::primary() },
        (V::Outline, S::Pressed) => SurfaceStyle { bg: KitColors::primary_soft(), text: KitColors::primary_pressed(), border: KitColors::primary_pressed() },
        (V::Danger, S::Default) => SurfaceStyle { bg: KitColors::danger(), text: KitColors::text_light(), border: KitColors::danger() },
        (V::Danger, S::Hover | S::Pressed) => SurfaceStyle { bg: gpui::rgb(0xdc2626), text: KitColors::text_light(), border: gpui::rgb(0xdc2626) },
        (V::Ghost, S::Default) => SurfaceStyle { bg: transparent, text: KitColors::text_secondary(), border: transparent },
        (V::Ghost, S::Hover | S::Pressed) => SurfaceStyle { bg: KitColors::neutral_soft(), text: KitColors::text_primary(), border: transparent },
        (_, S::Disabled) => SurfaceStyle { bg: KitColors::neutral_soft(), text: KitColors::text_muted(), border: KitColors::border() },
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: Size,
    disabled: bool,
    loading: bool,
    pressed: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: Size::Medium,
            disabled: false,
            loading: false,
            pressed: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Show the pressed look, driven by the owner's press feedback
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    fn state(&self) -> ButtonState {
        if self.disabled || self.loading {
            ButtonState::Disabled
        } else if self.pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Default
        }
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let state = self.state();
        let style = button_style(self.variant, state);
        let hover = button_style(self.variant, ButtonState::Hover);
        let metrics = size_metrics(self.size);
        let interactive = state != ButtonState::Disabled;

        let label = if self.loading {
            "Loading...".into()
        } else {
            self.label
        };

        let mut element = div()
            .id(self.id)
            .h(px(metrics.height))
            .px(px(metrics.padding_x))
            .flex()
            .items_center()
            .justify_center()
            .bg(style.bg)
            .border_1()
            .border_color(style.border)
            .text_color(style.text)
            .text_size(px(metrics.font_size))
            .rounded_md()
            .child(label);

        if interactive {
            element = element
                .cursor_pointer()
                .hover(|s| s.bg(hover.bg).border_color(hover.border).text_color(hover.text));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_style_is_shared_by_all_variants() {
        let a = button_style(ButtonVariant::Primary, ButtonState::Disabled);
        let b = button_style(ButtonVariant::Danger, ButtonState::Disabled);
        assert_eq!(a.bg, b.bg);
        assert_eq!(a.text, KitColors::text_muted());
    }

    #[test]
    fn loading_wins_over_pressed() {
        let button = Button::new("b", "Go").pressed(true).loading(true);
        assert_eq!(button.state(), ButtonState::Disabled);
        let button = Button::new("b", "Go").pressed(true);
        assert_eq!(button.state(), ButtonState::Pressed);
    }

    #[test]
    fn ghost_is_transparent_at_rest() {
        assert_eq!(button_style(ButtonVariant::Ghost, ButtonState::Default).bg.a, 0.0);
    }
}
