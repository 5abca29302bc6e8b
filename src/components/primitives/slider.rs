//! Slider Component

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, relative, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::constants::MAX_SLIDER_SEGMENTS;
use crate::theme::colors::KitColors;
use crate::theme::tokens::{size_metrics, Size};

/// Clamp `value` into `[min, max]` and round it to the nearest step from `min`
pub fn snap(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !value.is_finite() {
        return lo;
    }
    let clamped = value.clamp(lo, hi);
    if step <= 0.0 || !step.is_finite() {
        return clamped;
    }
    let snapped = lo + ((clamped - lo) / step).round() * step;
    snapped.min(hi)
}

/// Position of `value` along the track in `[0, 1]`
pub fn fraction(value: f64, min: f64, max: f64) -> f32 {
    if max <= min || !value.is_finite() {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0) as f32
}

/// Snapped value at a track fraction
pub fn value_at_fraction(frac: f32, min: f64, max: f64, step: f64) -> f64 {
    let frac = f64::from(frac.clamp(0.0, 1.0));
    snap(min + frac * (max - min), min, max, step)
}

/// Number of clickable track segments
fn segment_count(min: f64, max: f64, step: f64) -> usize {
    if max <= min || step <= 0.0 {
        return 1;
    }
    let steps = ((max - min) / step).round() as usize;
    steps.clamp(1, MAX_SLIDER_SEGMENTS)
}

/// A horizontal slider. Clicking the track selects the nearest step.
#[derive(IntoElement)]
pub struct Slider {
    id: ElementId,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    size: Size,
    width: f32,
    disabled: bool,
    show_value: bool,
    on_change: Option<Rc<dyn Fn(f64, &mut Window, &mut App) + 'static>>,
}

impl Slider {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            value: 0.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            size: Size::Medium,
            width: 240.0,
            disabled: false,
            show_value: false,
            on_change: None,
        }
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    /// Called with the snapped value of the clicked position
    pub fn on_change(mut self, handler: impl Fn(f64, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Slider {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let value = snap(self.value, self.min, self.max, self.step);
        let frac = fraction(value, self.min, self.max);
        let track_height = (size_metrics(self.size).height / 8.0).max(4.0);
        let thumb = track_height * 3.0;
        let segments = segment_count(self.min, self.max, self.step);
        let (min, max, step) = (self.min, self.max, self.step);
        let handler = self.on_change.filter(|_| !self.disabled);

        let track = div()
            .relative()
            .w(px(self.width))
            .h(px(thumb))
            .flex()
            .items_center()
            .child(
                div()
                    .absolute()
                    .left_0()
                    .w_full()
                    .h(px(track_height))
                    .rounded_full()
                    .bg(KitColors::track()),
            )
            .child(
                div()
                    .absolute()
                    .left_0()
                    .w(relative(frac))
                    .h(px(track_height))
                    .rounded_full()
                    .bg(KitColors::primary()),
            )
            .child(
                div()
                    .absolute()
                    .left(px(frac * (self.width - thumb)))
                    .size(px(thumb))
                    .rounded_full()
                    .border_2()
                    .border_color(KitColors::primary())
                    .bg(KitColors::surface()),
            )
            .child(
                // Invisible click targets laid over the track
                div().absolute().left_0().top_0().size_full().flex().children((0..=segments).map(
                    |i| {
                        let target = value_at_fraction(i as f32 / segments as f32, min, max, step);
                        let cell = div().id(("slider-seg", i)).flex_1().h_full();
                        match handler.clone() {
                            Some(handler) => cell
                                .cursor_pointer()
                                .on_click(move |_event, window, cx| handler(target, window, cx)),
                            None => cell,
                        }
                    },
                )),
            );

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_3()
            .child(track)
            .when(self.show_value, |el| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(KitColors::text_secondary())
                        .child(SharedString::from(format_value(value, step))),
                )
            })
            .when(self.disabled, |el| el.opacity(0.5))
    }
}

fn format_value(value: f64, step: f64) -> String {
    if step.fract() == 0.0 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_step() {
        assert_eq!(snap(23.0, 0.0, 100.0, 5.0), 25.0);
        assert_eq!(snap(22.4, 0.0, 100.0, 5.0), 20.0);
        assert_eq!(snap(7.0, 2.0, 20.0, 4.0), 6.0);
    }

    #[test]
    fn snap_clamps_into_range() {
        assert_eq!(snap(-10.0, 0.0, 100.0, 1.0), 0.0);
        assert_eq!(snap(250.0, 0.0, 100.0, 1.0), 100.0);
        // The last step may overshoot max
        assert_eq!(snap(99.0, 0.0, 10.0, 3.0), 9.0);
        assert_eq!(snap(f64::NAN, 0.0, 10.0, 1.0), 0.0);
    }

    #[test]
    fn zero_step_only_clamps() {
        assert_eq!(snap(3.3, 0.0, 10.0, 0.0), 3.3);
    }

    #[test]
    fn fraction_maps_back_to_value() {
        assert_eq!(fraction(50.0, 0.0, 100.0), 0.5);
        assert_eq!(fraction(5.0, 5.0, 5.0), 0.0);
        assert_eq!(value_at_fraction(0.5, 0.0, 100.0, 10.0), 50.0);
        assert_eq!(value_at_fraction(0.33, 0.0, 100.0, 10.0), 30.0);
        assert_eq!(value_at_fraction(2.0, 0.0, 100.0, 10.0), 100.0);
    }

    #[test]
    fn segments_are_capped() {
        assert_eq!(segment_count(0.0, 10.0, 1.0), 10);
        assert_eq!(segment_count(0.0, 1000.0, 1.0), MAX_SLIDER_SEGMENTS);
        assert_eq!(segment_count(0.0, 0.0, 1.0), 1);
    }
}
