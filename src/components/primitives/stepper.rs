//! Stepper, StepperLine and StepperGroup Components
//!
//! A group lays out numbered steps joined by lines. Step status is derived
//! from the group's current step, and the joining line width comes from a
//! lookup keyed by (size, step count).

use gpui::{
    div, prelude::*, px, App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::theme::colors::KitColors;
use crate::theme::tokens::{size_metrics, Size};

/// Progress of one step relative to the current step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    #[default]
    Upcoming,
}

impl StepStatus {
    /// Status of the 1-based step `index` when `current` is active
    pub fn derive(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => Self::Completed,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }
}

const MIN_TABLE_STEPS: usize = 2;
const MAX_TABLE_STEPS: usize = 6;

/// Line width between steps, keyed by (size, step count).
/// Step counts outside 2..=6 use the nearest entry.
pub fn line_width(size: Size, steps: usize) -> f32 {
    let steps = steps.clamp(MIN_TABLE_STEPS, MAX_TABLE_STEPS);
    match (size, steps) {
        (Size::Small, 2) => 160.0,
        (Size::Small, 3) => 112.0,
        (Size::Small, 4) => 80.0,
        (Size::Small, 5) => 64.0,
        (Size::Small, _) => 48.0,
        (Size::Medium, 2) => 200.0,
        (Size::Medium, 3) => 140.0,
        (Size::Medium, 4) => 100.0,
        (Size::Medium, 5) => 80.0,
        (Size::Medium, _) => 64.0,
        (Size::Large, 2) => 240.0,
        (Size::Large, 3) => 168.0,
        (Size::Large, 4) => 120.0,
        (Size::Large, 5) => 96.0,
        (Size::Large, _) => 80.0,
    }
}

fn circle_diameter(size: Size) -> f32 {
    size_metrics(size).height
}

/// A single numbered step marker
#[derive(IntoElement)]
pub struct Stepper {
    number: usize,
    status: StepStatus,
    label: Option<SharedString>,
    size: Size,
}

impl Stepper {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            status: StepStatus::default(),
            label: None,
            size: Size::Medium,
        }
    }

    pub fn status(mut self, status: StepStatus) -> Self {
        self.status = status;
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
}

impl RenderOnce for Stepper {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let diameter = circle_diameter(self.size);
        let (bg, border, text) = match self.status {
            StepStatus::Completed => (KitColors::primary(), KitColors::primary(), KitColors::text_light()),
            StepStatus::Active => (KitColors::primary_soft(), KitColors::primary(), KitColors::primary()),
            StepStatus::Upcoming => (KitColors::surface(), KitColors::border(), KitColors::text_muted()),
        };
        let glyph: SharedString = match self.status {
            StepStatus::Completed => "✓".into(),
            _ => self.number.to_string().into(),
        };

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_1()
            .child(
                div()
                    .size(px(diameter))
                    .rounded_full()
                    .border_2()
                    .border_color(border)
                    .bg(bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(size_metrics(self.size).font_size))
                    .text_color(text)
                    .child(glyph),
            )
            .when_some(self.label, |el, label| {
                let color = match self.status {
                    StepStatus::Upcoming => KitColors::text_muted(),
                    _ => KitColors::text_primary(),
                };
                el.child(div().text_xs().text_color(color).child(label))
            })
    }
}

/// The connector between two steps
#[derive(IntoElement)]
pub struct StepperLine {
    width: f32,
    completed: bool,
}

impl StepperLine {
    pub fn new(width: f32) -> Self {
        Self { width, completed: false }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl RenderOnce for StepperLine {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let color = if self.completed { KitColors::primary() } else { KitColors::border() };
        div().w(px(self.width)).h(px(2.0)).bg(color)
    }
}

/// A row of steps with connecting lines
#[derive(IntoElement)]
pub struct StepperGroup {
    id: ElementId,
    labels: Vec<SharedString>,
    current: usize,
    size: Size,
}

impl StepperGroup {
    pub fn new(id: impl Into<ElementId>, labels: impl IntoIterator<Item = impl Into<SharedString>>) -> Self {
        Self {
            id: id.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            current: 1,
            size: Size::Medium,
        }
    }

    /// 1-based current step
    pub fn current(mut self, current: usize) -> Self {
        self.current = current;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Derived status of every step
    pub fn statuses(&self) -> Vec<StepStatus> {
        (1..=self.labels.len())
            .map(|index| StepStatus::derive(index, self.current))
            .collect()
    }
}

impl RenderOnce for StepperGroup {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let statuses = self.statuses();
        let width = line_width(self.size, self.labels.len());
        // Lines sit at the circle's vertical center
        let line_offset = circle_diameter(self.size) / 2.0 - 1.0;
        let size = self.size;

        let mut row = div().id(self.id).flex().items_start();
        for (i, (label, status)) in self.labels.into_iter().zip(statuses).enumerate() {
            if i > 0 {
                row = row.child(
                    div()
                        .mt(px(line_offset))
                        .child(StepperLine::new(width).completed(status != StepStatus::Upcoming)),
                );
            }
            row = row.child(Stepper::new(i + 1).status(status).label(label).size(size));
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_derives_from_current_step() {
        let group = StepperGroup::new("steps", ["A", "B", "C", "D"]).current(3);
        assert_eq!(
            group.statuses(),
            vec![
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::Active,
                StepStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn current_past_the_end_completes_everything() {
        let group = StepperGroup::new("steps", ["A", "B"]).current(5);
        assert!(group.statuses().iter().all(|s| *s == StepStatus::Completed));
    }

    #[test]
    fn line_width_shrinks_with_more_steps() {
        for size in [Size::Small, Size::Medium, Size::Large] {
            for steps in MIN_TABLE_STEPS..MAX_TABLE_STEPS {
                assert!(line_width(size, steps) > line_width(size, steps + 1));
            }
        }
        assert!(line_width(Size::Small, 3) < line_width(Size::Large, 3));
    }

    #[test]
    fn line_width_clamps_step_count() {
        assert_eq!(line_width(Size::Medium, 0), line_width(Size::Medium, 2));
        assert_eq!(line_width(Size::Medium, 12), line_width(Size::Medium, 6));
    }
}
