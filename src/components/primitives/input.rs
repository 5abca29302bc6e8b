//! Input Component
//!
//! Single-line text field. The visual state is resolved once per render
//! from the parent-supplied state and the local focus and typing flags.

use gpui::{
    div, prelude::*, px, Context, ElementId, EventEmitter, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, Rgba, SharedString, Styled, Subscription, Window,
};

use crate::theme::colors::KitColors;
use crate::theme::tokens::{size_metrics, Size};

/// Visual state of an input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    #[default]
    Default,
    Focus,
    Typing,
    Filled,
    Error,
    Warning,
    Success,
}

/// Resolve the visual state.
///
/// Precedence: explicit > typing > focus > filled > default.
pub fn resolve_input_state(
    explicit: Option<InputState>,
    focused: bool,
    typing: bool,
    has_value: bool,
) -> InputState {
    if let Some(state) = explicit {
        return state;
    }
    if focused && typing {
        InputState::Typing
    } else if focused {
        InputState::Focus
    } else if has_value {
        InputState::Filled
    } else {
        InputState::Default
    }
}

/// Border and message colors keyed by state
pub fn input_state_colors(state: InputState) -> (Rgba, Rgba) {
    match state {
        InputState::Default => (KitColors::border(), KitColors::text_secondary()),
        InputState::Focus => (KitColors::border_focus(), KitColors::text_secondary()),
        InputState::Typing => (KitColors::primary(), KitColors::text_secondary()),
        InputState::Filled => (KitColors::border_strong(), KitColors::text_secondary()),
        InputState::Error => (KitColors::danger(), KitColors::danger()),
        InputState::Warning => (KitColors::warning(), KitColors::warning()),
        InputState::Success => (KitColors::success(), KitColors::success()),
    }
}

/// Emitted on every edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Change(String),
}

/// Edit produced by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
enum Edit {
    Insert(String),
    Backspace,
}

fn edit_for_key(key: &str, key_char: Option<&str>, has_modifier: bool) -> Option<Edit> {
    if key == "backspace" {
        return Some(Edit::Backspace);
    }
    if has_modifier {
        return None;
    }
    key_char
        .filter(|text| !text.is_empty() && text.chars().all(|c| !c.is_control()))
        .map(|text| Edit::Insert(text.to_string()))
}

/// A text input entity
pub struct Input {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    label: Option<SharedString>,
    message: Option<SharedString>,
    state: Option<InputState>,
    size: Size,
    disabled: bool,
    typing: bool,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<InputEvent> for Input {}

impl Input {
    /// Create a new input
    pub fn new(id: impl Into<ElementId>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let subscriptions = vec![cx.on_blur(&focus_handle, window, |this, _window, cx| {
            this.typing = false;
            cx.notify();
        })];

        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            label: None,
            message: None,
            state: None,
            size: Size::Medium,
            disabled: false,
            typing: false,
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
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

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>, cx: &mut Context<Self>) {
        self.value = value.into();
        cx.notify();
    }

    /// Force a visual state; `None` hands control back to focus and typing
    pub fn set_state(&mut self, state: Option<InputState>, cx: &mut Context<Self>) {
        self.state = state;
        cx.notify();
    }

    /// Message shown under the field, colored by state
    pub fn set_label(&mut self, label: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.label = Some(label.into());
        cx.notify();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.placeholder = placeholder.into();
        cx.notify();
    }

    pub fn set_message(&mut self, message: Option<SharedString>, cx: &mut Context<Self>) {
        self.message = message;
        cx.notify();
    }

    pub fn set_disabled(&mut self, disabled: bool, cx: &mut Context<Self>) {
        self.disabled = disabled;
        cx.notify();
    }

    fn apply_edit(&mut self, edit: Edit) -> bool {
        match edit {
            Edit::Insert(text) => self.value.push_str(&text),
            Edit::Backspace => {
                if self.value.pop().is_none() {
                    return false;
                }
            }
        }
        self.typing = true;
        true
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let keystroke = &event.keystroke;
        let modifiers = keystroke.modifiers;
        let has_modifier = modifiers.control || modifiers.alt || modifiers.platform;
        let Some(edit) = edit_for_key(&keystroke.key, keystroke.key_char.as_deref(), has_modifier) else {
            return;
        };
        if self.apply_edit(edit) {
            cx.emit(InputEvent::Change(self.value.clone()));
            cx.stop_propagation();
            cx.notify();
        }
    }
}

impl Focusable for Input {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Input {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let focused = self.focus_handle.is_focused(window);
        let state = resolve_input_state(self.state, focused, self.typing, !self.value.is_empty());
        let (border_color, message_color) = input_state_colors(state);
        let metrics = size_metrics(self.size);

        let (display_text, text_color) = if self.value.is_empty() {
            (self.placeholder.clone(), KitColors::input_placeholder())
        } else {
            (SharedString::from(self.value.clone()), KitColors::text_primary())
        };

        div()
            .flex()
            .flex_col()
            .gap_1()
            .when_some(self.label.clone(), |el, label| {
                el.child(div().text_sm().text_color(KitColors::text_primary()).child(label))
            })
            .child(
                div()
                    .id(self.id.clone())
                    .track_focus(&self.focus_handle)
                    .on_key_down(cx.listener(Self::on_key_down))
                    .on_click(cx.listener(|this, _event, window, _cx| {
                        if !this.disabled {
                            this.focus_handle.focus(window);
                        }
                    }))
                    .flex()
                    .items_center()
                    .h(px(metrics.height))
                    .px(px(metrics.padding_x))
                    .min_w(px(200.0))
                    .bg(KitColors::surface())
                    .border_1()
                    .border_color(border_color)
                    .rounded_md()
                    .text_size(px(metrics.font_size))
                    .text_color(text_color)
                    .child(display_text)
                    .when(state == InputState::Typing, |el| {
                        el.child(div().w(px(1.0)).h(px(metrics.font_size + 2.0)).bg(KitColors::primary()))
                    })
                    .when(self.disabled, |el| el.opacity(0.5).cursor_not_allowed())
                    .when(!self.disabled, |el| el.cursor_text()),
            )
            .when_some(self.message.clone(), |el, message| {
                el.child(div().text_xs().text_color(message_color).child(message))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_state_wins() {
        assert_eq!(resolve_input_state(Some(InputState::Error), true, true, true), InputState::Error);
        assert_eq!(resolve_input_state(Some(InputState::Success), false, false, false), InputState::Success);
    }

    #[test]
    fn typing_beats_focus_beats_filled() {
        assert_eq!(resolve_input_state(None, true, true, true), InputState::Typing);
        assert_eq!(resolve_input_state(None, true, false, true), InputState::Focus);
        assert_eq!(resolve_input_state(None, false, false, true), InputState::Filled);
        assert_eq!(resolve_input_state(None, false, false, false), InputState::Default);
    }

    #[test]
    fn typing_without_focus_is_not_typing() {
        assert_eq!(resolve_input_state(None, false, true, true), InputState::Filled);
    }

    #[test]
    fn key_mapping() {
        assert_eq!(edit_for_key("a", Some("a"), false), Some(Edit::Insert("a".into())));
        assert_eq!(edit_for_key("backspace", None, false), Some(Edit::Backspace));
        assert_eq!(edit_for_key("c", Some("c"), true), None);
        assert_eq!(edit_for_key("left", None, false), None);
        assert_eq!(edit_for_key("enter", Some("\n"), false), None);
    }
}
