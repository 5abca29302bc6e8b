//! Pagination
//!
//! Page-label generation, page state and the footer component.

use std::ops::Range;
use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, Div, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, Stateful, StatefulInteractiveElement, Styled, Window,
};

use super::controllable::Controllable;
use crate::theme::colors::KitColors;

/// One entry of the page navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// Page labels for the footer.
///
/// Shows the first and last page plus the current page and its direct
/// neighbours. A gap hiding exactly one page shows that page instead of
/// an ellipsis. Nothing is shown for a single page.
pub fn page_labels(current_page: usize, total_pages: usize) -> Vec<PageLabel> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);
    let mut shown = vec![1, current.saturating_sub(1), current, current + 1, total_pages];
    shown.retain(|&p| (1..=total_pages).contains(&p));
    shown.sort_unstable();
    shown.dedup();

    let mut labels = Vec::with_capacity(shown.len() + 2);
    let mut previous: Option<usize> = None;
    for page in shown {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                2 => labels.push(PageLabel::Page(prev + 1)),
                _ => labels.push(PageLabel::Ellipsis),
            }
        }
        labels.push(PageLabel::Page(page));
        previous = Some(page);
    }
    labels
}

/// Current page, owned locally or by the parent
#[derive(Debug, Clone)]
pub struct PaginationController {
    current: Controllable<usize>,
    /// Total supplied by the parent (rows are already one page)
    external_total: Option<usize>,
    page_size: usize,
}

impl PaginationController {
    /// Table pages its own rows
    pub fn uncontrolled(page_size: usize) -> Self {
        Self {
            current: Controllable::Uncontrolled(1),
            external_total: None,
            page_size: page_size.max(1),
        }
    }

    /// Parent owns the page; the rows handed to the table are that page
    pub fn controlled(current_page: usize, total_pages: usize) -> Self {
        Self {
            current: Controllable::Controlled(current_page.max(1)),
            external_total: Some(total_pages.max(1)),
            page_size: usize::MAX,
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.current.is_controlled()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size of a self-paging table; resets to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current.update(|page| *page = 1);
    }

    /// Replace the parent-owned page and total
    pub fn sync(&mut self, current_page: usize, total_pages: usize) {
        if self.current.sync(current_page.max(1)) {
            self.external_total = Some(total_pages.max(1));
        }
    }

    pub fn total_pages(&self, row_count: usize) -> usize {
        match self.external_total {
            Some(total) => total,
            None => row_count.div_ceil(self.page_size).max(1),
        }
    }

    /// Current page clamped into `[1, total_pages]`
    pub fn current_page(&self, row_count: usize) -> usize {
        (*self.current.get()).clamp(1, self.total_pages(row_count))
    }

    /// Request a page. Returns the page to report, if it differs from the
    /// current one.
    pub fn go_to(&mut self, page: usize, row_count: usize) -> Option<usize> {
        let target = page.clamp(1, self.total_pages(row_count));
        if target == self.current_page(row_count) {
            return None;
        }
        self.current.update(|current| *current = target);
        tracing::debug!(page = target, "page change requested");
        Some(target)
    }

    /// Row indices visible on the current page
    pub fn page_range(&self, row_count: usize) -> Range<usize> {
        if self.external_total.is_some() {
            return 0..row_count;
        }
        let start = (self.current_page(row_count) - 1).saturating_mul(self.page_size);
        let start = start.min(row_count);
        let end = start.saturating_add(self.page_size).min(row_count);
        start..end
    }
}

type PageChangeHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Pagination footer component
#[derive(IntoElement)]
pub struct Pagination {
    id: ElementId,
    current_page: usize,
    total_pages: usize,
    summary: Option<SharedString>,
    on_page_change: Option<PageChangeHandler>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(id: impl Into<ElementId>, current_page: usize, total_pages: usize) -> Self {
        Self {
            id: id.into(),
            current_page,
            total_pages,
            summary: None,
            on_page_change: None,
        }
    }

    /// Text shown on the left, e.g. the item count
    pub fn summary(mut self, summary: impl Into<SharedString>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn nav_button(
        handler: Option<PageChangeHandler>,
        id: &'static str,
        glyph: &'static str,
        target: usize,
        enabled: bool,
    ) -> Stateful<Div> {
        let mut btn = div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_sm()
            .text_color(if enabled {
                KitColors::text_primary()
            } else {
                KitColors::text_muted()
            })
            .child(glyph);

        if enabled {
            btn = btn
                .cursor_pointer()
                .hover(|s| s.bg(KitColors::table_row_hover()));
            if let Some(handler) = handler {
                btn = btn.on_click(move |_event: &ClickEvent, window, cx| handler(target, window, cx));
            }
        }

        btn
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let total = self.total_pages;
        let labels = page_labels(current, total);

        let on_change = self.on_page_change;

        let prev = Self::nav_button(on_change.clone(), "prev-page", "←", current.saturating_sub(1), current > 1);
        let next = Self::nav_button(on_change.clone(), "next-page", "→", current + 1, current < total);

        let pages: Vec<Stateful<Div>> = labels.into_iter().enumerate().map(|(i, label)| match label {
            PageLabel::Ellipsis => div()
                .id(("page-gap", i))
                .px_2()
                .text_sm()
                .text_color(KitColors::text_muted())
                .child("…"),
            PageLabel::Page(page) => {
                let active = page == current;
                div()
                    .id(("page", page))
                    .min_w(px(28.0))
                    .px_2()
                    .py_1()
                    .rounded_sm()
                    .text_sm()
                    .flex()
                    .justify_center()
                    .when(active, |el| el.bg(KitColors::primary()).text_color(KitColors::text_light()))
                    .when(!active, |el| {
                        el.text_color(KitColors::text_primary())
                            .cursor_pointer()
                            .hover(|s| s.bg(KitColors::table_row_hover()))
                    })
                    .when_some(
                        on_change.clone().filter(|_| !active),
                        |el, handler| el.on_click(move |_event: &ClickEvent, window, cx| handler(page, window, cx)),
                    )
                    .child(page.to_string())
            }
        }).collect();

        div()
            .id(self.id)
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(KitColors::border())
            .child(
                div()
                    .text_sm()
                    .text_color(KitColors::text_secondary())
                    .children(self.summary),
            )
            .when(total > 1, |el| {
                el.child(
                    div()
                        .flex()
                        .items_center()
                        .gap_1()
                        .child(prev)
                        .children(pages)
                        .child(next),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLabel::{Ellipsis, Page};

    #[test]
    fn single_page_has_no_labels() {
        assert!(page_labels(1, 1).is_empty());
        assert!(page_labels(1, 0).is_empty());
    }

    #[test]
    fn first_page_of_ten() {
        assert_eq!(page_labels(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
    }

    #[test]
    fn last_page_of_ten_has_no_trailing_ellipsis() {
        let labels = page_labels(10, 10);
        assert_eq!(labels, vec![Page(1), Ellipsis, Page(9), Page(10)]);
        assert_ne!(labels.last(), Some(&Ellipsis));
    }

    #[test]
    fn middle_page_has_two_gaps() {
        assert_eq!(
            page_labels(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn single_hidden_page_is_shown_instead_of_ellipsis() {
        assert_eq!(
            page_labels(4, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_labels(7, 10),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn small_totals_show_every_page() {
        assert_eq!(page_labels(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(page_labels(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_labels(1, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn labels_never_repeat_or_start_with_ellipsis() {
        for total in 2..=15 {
            for current in 1..=total {
                let labels = page_labels(current, total);
                assert_eq!(labels.first(), Some(&Page(1)));
                assert_eq!(labels.last(), Some(&Page(total)));
                let pages: Vec<_> = labels
                    .iter()
                    .filter_map(|l| match l {
                        Page(p) => Some(*p),
                        Ellipsis => None,
                    })
                    .collect();
                assert!(pages.windows(2).all(|w| w[0] < w[1]), "{current}/{total}");
                assert!(pages.contains(&current));
            }
        }
    }

    #[test]
    fn out_of_range_current_page_is_clamped() {
        assert_eq!(page_labels(42, 10), page_labels(10, 10));
        assert_eq!(page_labels(0, 10), page_labels(1, 10));
    }

    #[test]
    fn self_paging_slices_rows() {
        let mut pagination = PaginationController::uncontrolled(10);
        assert_eq!(pagination.total_pages(25), 3);
        assert_eq!(pagination.page_range(25), 0..10);
        assert_eq!(pagination.go_to(3, 25), Some(3));
        assert_eq!(pagination.page_range(25), 20..25);
        assert_eq!(pagination.go_to(3, 25), None);
        assert_eq!(pagination.go_to(99, 25), None);
    }

    #[test]
    fn shrinking_rows_clamps_current_page() {
        let mut pagination = PaginationController::uncontrolled(10);
        pagination.go_to(3, 25);
        assert_eq!(pagination.current_page(5), 1);
        assert_eq!(pagination.page_range(5), 0..5);
    }

    #[test]
    fn empty_table_has_one_page() {
        let pagination = PaginationController::uncontrolled(10);
        assert_eq!(pagination.total_pages(0), 1);
        assert_eq!(pagination.page_range(0), 0..0);
    }

    #[test]
    fn controlled_page_only_reports() {
        let mut pagination = PaginationController::controlled(2, 5);
        assert_eq!(pagination.go_to(3, 10), Some(3));
        assert_eq!(pagination.current_page(10), 2);
        assert_eq!(pagination.page_range(10), 0..10);

        pagination.sync(3, 5);
        assert_eq!(pagination.current_page(10), 3);
    }
}
