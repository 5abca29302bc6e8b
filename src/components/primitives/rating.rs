//! Rating Component
//!
//! Five-star rating display, optionally clickable.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, StatefulInteractiveElement, Styled, Window,
};

use crate::constants::RATING_STARS;
use crate::theme::colors::KitColors;
use crate::theme::tokens::{size_metrics, Size};

/// Filled and empty star counts, always summing to five
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarCounts {
    pub filled: u8,
    pub empty: u8,
}

/// Stars for a rating value. Rounds to the nearest star and clamps to
/// `[0, 5]`; non-finite values show no stars.
pub fn star_counts(value: f64) -> StarCounts {
    let filled = if value.is_finite() {
        value.round().clamp(0.0, RATING_STARS as f64) as u8
    } else {
        0
    };
    StarCounts {
        filled,
        empty: RATING_STARS - filled,
    }
}

type RateHandler = Rc<dyn Fn(u8, &mut Window, &mut App) + 'static>;

/// A star rating
#[derive(IntoElement)]
pub struct Rating {
    counts: StarCounts,
    size: Size,
    on_rate: Option<(ElementId, RateHandler)>,
}

impl Rating {
    pub fn new(value: f64) -> Self {
        Self::from_counts(star_counts(value))
    }

    pub fn from_counts(counts: StarCounts) -> Self {
        Self {
            counts,
            size: Size::Small,
            on_rate: None,
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Make stars clickable; the handler receives the clicked star (1-5)
    pub fn on_rate(mut self, id: impl Into<ElementId>, handler: impl Fn(u8, &mut Window, &mut App) + 'static) -> Self {
        self.on_rate = Some((id.into(), Rc::new(handler)));
        self
    }
}

impl RenderOnce for Rating {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let font_size = size_metrics(self.size).font_size + 2.0;
        let filled = self.counts.filled;
        let handler = self.on_rate.as_ref().map(|(_, h)| h.clone());

        let stars = (1..=RATING_STARS).map(move |star| {
            let lit = star <= filled;
            div()
                .id(("star", star as usize))
                .text_size(px(font_size))
                .text_color(if lit {
                    KitColors::rating_filled()
                } else {
                    KitColors::rating_empty()
                })
                .when_some(handler.clone(), |el, handler| {
                    el.cursor_pointer()
                        .on_click(move |_event: &ClickEvent, window, cx| handler(star, window, cx))
                })
                .child(if lit { "★" } else { "☆" })
        });

        let row = div().flex().items_center().gap_0p5();
        match self.on_rate {
            Some((id, _)) => row.id(id).children(stars).into_any_element(),
            None => row.children(stars).into_any_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_stars() {
        assert_eq!(star_counts(3.0), StarCounts { filled: 3, empty: 2 });
    }

    #[test]
    fn out_of_range_is_capped() {
        assert_eq!(star_counts(7.0), StarCounts { filled: 5, empty: 0 });
        assert_eq!(star_counts(-2.0), StarCounts { filled: 0, empty: 5 });
        assert_eq!(star_counts(f64::INFINITY), StarCounts { filled: 0, empty: 5 });
    }

    #[test]
    fn fractional_values_round() {
        assert_eq!(star_counts(3.6).filled, 4);
        assert_eq!(star_counts(3.4).filled, 3);
    }
}
