//! InputNumbers Component
//!
//! Integer field with decrement and increment buttons. The pressed button
//! keeps its pressed visual for a short time after the click.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, Context, ElementId, EventEmitter, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Stateful, Styled, Task, Window, Div,
};

use crate::constants::PRESS_RESET_MS;
use crate::helpers::PressFeedback;
use crate::theme::colors::KitColors;
use crate::theme::tokens::{size_metrics, Size};

/// Which stepper button was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepButton {
    Decrement,
    Increment,
}

/// Integer value bounded by `[min, max]`, moved in `step` increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl Default for NumberRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            step: 1,
        }
    }
}

impl NumberRange {
    pub fn new(min: i64, max: i64, step: i64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            step: step.max(1),
        }
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    pub fn increment(&self, value: i64) -> i64 {
        self.clamp(value.saturating_add(self.step))
    }

    pub fn decrement(&self, value: i64) -> i64 {
        self.clamp(value.saturating_sub(self.step))
    }

    pub fn can_increment(&self, value: i64) -> bool {
        value < self.max
    }

    pub fn can_decrement(&self, value: i64) -> bool {
        value > self.min
    }
}

/// Emitted when the value changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputNumbersEvent {
    Change(i64),
}

/// A numeric stepper input entity
pub struct InputNumbers {
    id: ElementId,
    value: i64,
    range: NumberRange,
    size: Size,
    disabled: bool,
    press: PressFeedback<StepButton>,
    reset_task: Option<Task<()>>,
}

impl EventEmitter<InputNumbersEvent> for InputNumbers {}

impl InputNumbers {
    pub fn new(id: impl Into<ElementId>, range: NumberRange) -> Self {
        Self {
            id: id.into(),
            value: range.min,
            range,
            size: Size::Medium,
            disabled: false,
            press: PressFeedback::new(),
            reset_task: None,
        }
    }

    pub fn value(mut self, value: i64) -> Self {
        self.value = self.range.clamp(value);
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

    pub fn current(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64, cx: &mut Context<Self>) {
        self.value = self.range.clamp(value);
        cx.notify();
    }

    /// Apply a button press, returning the new value if it changed
    fn apply_step(&mut self, button: StepButton) -> Option<i64> {
        let next = match button {
            StepButton::Decrement => self.range.decrement(self.value),
            StepButton::Increment => self.range.increment(self.value),
        };
        if next == self.value {
            return None;
        }
        self.value = next;
        Some(next)
    }

    fn step(&mut self, button: StepButton, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        if let Some(value) = self.apply_step(button) {
            tracing::debug!("Number input {:?} -> {}", button, value);
            cx.emit(InputNumbersEvent::Change(value));
        }
        self.show_pressed(button, cx);
        cx.notify();
    }

    /// Show the pressed visual and schedule its reset. Replacing the task
    /// cancels any reset still pending from an earlier press.
    fn show_pressed(&mut self, button: StepButton, cx: &mut Context<Self>) {
        let token = self.press.press(button);
        let task = cx.spawn(async move |handle, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(PRESS_RESET_MS))
                .await;
            let _ = handle.update(cx, |this, cx| {
                if this.press.release(token) {
                    cx.notify();
                }
            });
        });
        self.reset_task = Some(task);
    }

    fn render_button(&self, button: StepButton, cx: &mut Context<Self>) -> Stateful<Div> {
        let metrics = size_metrics(self.size);
        let (glyph, enabled, id) = match button {
            StepButton::Decrement => ("−", self.range.can_decrement(self.value), "decrement"),
            StepButton::Increment => ("+", self.range.can_increment(self.value), "increment"),
        };
        let enabled = enabled && !self.disabled;
        let bg = if self.press.is_pressed(button) {
            KitColors::primary_soft()
        } else {
            KitColors::surface()
        };

        div()
            .id(id)
            .size(px(metrics.height))
            .flex()
            .items_center()
            .justify_center()
            .bg(bg)
            .text_size(px(metrics.font_size + 2.0))
            .text_color(if enabled { KitColors::text_primary() } else { KitColors::text_muted() })
            .when(enabled, |el| {
                el.cursor_pointer()
                    .hover(|s| s.bg(KitColors::table_row_hover()))
                    .on_click(cx.listener(move |this, _event, _window, cx| this.step(button, cx)))
            })
            .child(glyph)
    }
}

impl Render for InputNumbers {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let metrics = size_metrics(self.size);

        div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .border_1()
            .border_color(KitColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_button(StepButton::Decrement, cx))
            .child(
                div()
                    .min_w(px(metrics.height * 1.5))
                    .h(px(metrics.height))
                    .flex()
                    .items_center()
                    .justify_center()
                    .border_x_1()
                    .border_color(KitColors::border())
                    .text_size(px(metrics.font_size))
                    .text_color(KitColors::text_primary())
                    .child(SharedString::from(self.value.to_string())),
            )
            .child(self.render_button(StepButton::Increment, cx))
            .when(self.disabled, |el| el.opacity(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_and_decrement_clamp() {
        let range = NumberRange::new(0, 10, 3);
        assert_eq!(range.increment(9), 10);
        assert_eq!(range.increment(10), 10);
        assert_eq!(range.decrement(2), 0);
        assert_eq!(range.decrement(7), 4);
    }

    #[test]
    fn range_normalises_arguments() {
        let range = NumberRange::new(5, -5, 0);
        assert_eq!((range.min, range.max, range.step), (-5, 5, 1));
    }

    #[test]
    fn boundaries_disable_buttons() {
        let range = NumberRange::new(1, 3, 1);
        assert!(!range.can_decrement(1));
        assert!(range.can_increment(1));
        assert!(!range.can_increment(3));
    }

    #[test]
    fn apply_step_reports_only_changes() {
        let mut input = InputNumbers::new("qty", NumberRange::new(0, 2, 1)).value(1);
        assert_eq!(input.apply_step(StepButton::Increment), Some(2));
        assert_eq!(input.apply_step(StepButton::Increment), None);
        assert_eq!(input.current(), 2);
        assert_eq!(input.apply_step(StepButton::Decrement), Some(1));
    }

    #[test]
    fn initial_value_is_clamped() {
        let input = InputNumbers::new("qty", NumberRange::new(0, 5, 1)).value(42);
        assert_eq!(input.current(), 5);
    }
}
