//! DataTable Component
//!
//! A data table with sorting, row selection and pagination. Each of the
//! three concerns is either owned by the table or controlled by the parent;
//! user intents are always reported as [`DataTableEvent`]s.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Div, ElementId, EventEmitter, IntoElement,
    ParentElement, Render, SharedString, Stateful, Styled, Window,
};
use serde_json::Value;

use super::cell::{render_cell, resolve_cell, CellActions};
use super::column::{Column, ColumnKind, ColumnWidth};
use super::pagination::{Pagination, PaginationController};
use super::row::RowRecord;
use super::selection::{SelectionChange, SelectionController, SelectionSummary};
use super::sort::{SortController, SortDirection, SortState};
use crate::components::primitives::checkbox::Checkbox;
use crate::constants::{DEFAULT_PAGE_SIZE, SELECT_COLUMN_WIDTH};
use crate::i18n::{t, Locale};
use crate::theme::colors::KitColors;
use crate::theme::tokens::{size_metrics, Size};

static NULL: Value = Value::Null;

/// Events emitted by the table for its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataTableEvent {
    Sort { column_key: String, direction: SortDirection },
    RowSelect { row_id: String, selected: bool },
    SelectAll { selected: bool },
    PageChange { page: usize },
    Edit { row_id: String },
    Delete { row_id: String },
}

/// Visual variant of the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableVariant {
    /// Row separators only
    #[default]
    Plain,
    /// Alternating row backgrounds
    Striped,
    /// Separators between columns as well
    Bordered,
}

/// Style switches resolved from a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableVariantStyle {
    pub striped: bool,
    pub column_borders: bool,
}

/// Variant lookup
pub fn table_variant_style(variant: TableVariant) -> TableVariantStyle {
    match variant {
        TableVariant::Plain => TableVariantStyle { striped: false, column_borders: false },
        TableVariant::Striped => TableVariantStyle { striped: true, column_borders: false },
        TableVariant::Bordered => TableVariantStyle { striped: false, column_borders: true },
    }
}

/// Row height lookup keyed by table size
pub fn table_row_height(size: Size) -> f32 {
    size_metrics(size).height + 16.0
}

/// DataTable component
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<RowRecord>,
    selection: SelectionController,
    sort: SortController,
    pagination: PaginationController,
    selectable: bool,
    loading: bool,
    size: Size,
    variant: TableVariant,
    locale: Locale,
    empty_message: Option<SharedString>,
}

impl EventEmitter<DataTableEvent> for DataTable {}

impl DataTable {
    /// Create a table that owns its selection, sort and pagination
    pub fn new(columns: Vec<Column>, rows: Vec<RowRecord>) -> Self {
        Self {
            columns,
            rows,
            selection: SelectionController::uncontrolled(),
            sort: SortController::default(),
            pagination: PaginationController::uncontrolled(DEFAULT_PAGE_SIZE),
            selectable: true,
            loading: false,
            size: Size::Medium,
            variant: TableVariant::Plain,
            locale: Locale::default(),
            empty_message: None,
        }
    }

    /// Let the parent own the selected ids
    pub fn controlled_selection(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.selection = SelectionController::controlled(ids);
        self
    }

    /// Let the parent own the sort state
    pub fn controlled_sort(mut self, state: Option<SortState>) -> Self {
        self.sort = SortController::controlled(state);
        self
    }

    /// Let the parent own the page; `rows` is then the current page only
    pub fn controlled_pagination(mut self, current_page: usize, total_pages: usize) -> Self {
        self.pagination = PaginationController::controlled(current_page, total_pages);
        self
    }

    /// Rows per page for a self-paging table
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.pagination.set_page_size(page_size);
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<RowRecord>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = Some(message.into());
    }

    /// Parent update of a controlled selection
    pub fn set_selected_row_ids(&mut self, ids: impl IntoIterator<Item = String>) {
        self.selection.sync(ids);
    }

    /// Parent update of the "all rows selected" flag
    pub fn set_all_rows_selected(&mut self, all: Option<bool>) {
        self.selection.sync_all_selected(all);
    }

    /// Parent update of a controlled sort
    pub fn set_sort(&mut self, state: Option<SortState>) {
        self.sort.sync(state);
    }

    /// Parent update of controlled pagination
    pub fn set_page(&mut self, current_page: usize, total_pages: usize) {
        self.pagination.sync(current_page, total_pages);
    }

    pub fn selection_summary(&self) -> SelectionSummary {
        self.selection.summary(&self.rows)
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.selected_ids(&self.rows)
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.state()
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page(self.rows.len())
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.rows.len())
    }

    /// Rows of the current page in display order
    pub fn visible_rows(&self) -> Vec<&RowRecord> {
        let sorted = self.sort.sorted(&self.rows);
        let range = self.pagination.page_range(sorted.len());
        sorted[range].to_vec()
    }

    // Intent handling. Each returns the event to report, if any.

    pub fn apply_sort(&mut self, column_key: &str) -> Option<DataTableEvent> {
        let state = self.sort.toggle_sort(&self.columns, column_key)?;
        Some(DataTableEvent::Sort {
            column_key: state.column_key,
            direction: state.direction,
        })
    }

    pub fn apply_select_all(&mut self, selected: bool) -> Option<DataTableEvent> {
        let change = self.selection.select_all(&self.rows, selected);
        Some(selection_event(change))
    }

    pub fn apply_select_row(&mut self, row_id: &str, selected: bool) -> Option<DataTableEvent> {
        let change = self.selection.select_row(row_id, selected);
        Some(selection_event(change))
    }

    pub fn apply_page(&mut self, page: usize) -> Option<DataTableEvent> {
        let page = self.pagination.go_to(page, self.rows.len())?;
        Some(DataTableEvent::PageChange { page })
    }

    fn dispatch(&mut self, event: Option<DataTableEvent>, cx: &mut Context<Self>) {
        if let Some(event) = event {
            tracing::debug!(?event, "data table event");
            cx.emit(event);
            cx.notify();
        }
    }

    /// Toggle sorting on a column
    pub fn toggle_sort(&mut self, column_key: &str, cx: &mut Context<Self>) {
        let event = self.apply_sort(column_key);
        self.dispatch(event, cx);
    }

    /// Select or clear all rows
    pub fn select_all(&mut self, selected: bool, cx: &mut Context<Self>) {
        let event = self.apply_select_all(selected);
        self.dispatch(event, cx);
    }

    /// Select or clear one row
    pub fn select_row(&mut self, row_id: &str, selected: bool, cx: &mut Context<Self>) {
        let event = self.apply_select_row(row_id, selected);
        self.dispatch(event, cx);
    }

    /// Navigate to a page
    pub fn go_to_page(&mut self, page: usize, cx: &mut Context<Self>) {
        let event = self.apply_page(page);
        self.dispatch(event, cx);
    }

    fn cell_container(&self, width: ColumnWidth) -> Div {
        let cell = div().px_3().overflow_hidden();
        let cell = match width {
            ColumnWidth::Fixed(w) => cell.w(px(w)).flex_none(),
            ColumnWidth::Flex { min } => cell.flex_1().when_some(min, |el, min| el.min_w(px(min))),
        };
        cell.when(table_variant_style(self.variant).column_borders, |el| {
            el.border_r_1().border_color(KitColors::border())
        })
    }

    /// Render the header row
    fn render_header(&self, cx: &mut Context<Self>) -> Div {
        let summary = self.selection_summary();
        let entity = cx.entity();

        div()
            .h(px(table_row_height(self.size)))
            .w_full()
            .flex()
            .items_center()
            .bg(KitColors::table_header_bg())
            .border_b_1()
            .border_color(KitColors::border())
            .when(self.selectable, |el| {
                el.child(
                    div().w(px(SELECT_COLUMN_WIDTH)).flex_none().px_3().child(
                        Checkbox::new("select-all")
                            .checked(summary.all_selected)
                            .indeterminate(summary.indeterminate)
                            .disabled(self.rows.is_empty())
                            .on_change(move |checked, _window, cx| {
                                entity.update(cx, |this, cx| this.select_all(checked, cx));
                            }),
                    ),
                )
            })
            .children(self.columns.iter().enumerate().map(|(i, col)| {
                let direction = self.sort.direction_of(col.key());
                let key = col.key().to_string();
                self.cell_container(col.width).child(
                    div()
                        .id(("header", i))
                        .flex()
                        .items_center()
                        .gap_1()
                        .text_size(px(size_metrics(self.size).font_size))
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(KitColors::text_primary())
                        .child(col.title.clone())
                        .children(direction.map(|d| {
                            div().text_xs().text_color(KitColors::primary()).child(d.indicator())
                        }))
                        .when(col.sortable, |el| {
                            el.cursor_pointer().on_click(cx.listener(
                                move |this, _event: &ClickEvent, _window, cx| {
                                    this.toggle_sort(&key, cx);
                                },
                            ))
                        }),
                )
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &RowRecord, index: usize, cx: &mut Context<Self>) -> Stateful<Div> {
        let selected = self.selection.is_selected(row.id());
        let striped = table_variant_style(self.variant).striped;
        let bg = if selected {
            KitColors::table_row_selected()
        } else if striped && index % 2 == 1 {
            KitColors::table_row_alt()
        } else {
            KitColors::surface()
        };
        let row_id = row.id().to_string();
        let entity = cx.entity();

        div()
            .id(SharedString::from(format!("row-{row_id}")))
            .h(px(table_row_height(self.size)))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(KitColors::table_row_hover()))
            .border_b_1()
            .border_color(KitColors::border())
            .when(self.selectable, |el| {
                let row_id = row_id.clone();
                el.child(
                    div().w(px(SELECT_COLUMN_WIDTH)).flex_none().px_3().child(
                        Checkbox::new("select-row")
                            .checked(selected)
                            .on_change(move |checked, _window, cx| {
                                entity.update(cx, |this, cx| this.select_row(&row_id, checked, cx));
                            }),
                    ),
                )
            })
            .children(self.columns.iter().enumerate().map(|(i, col)| {
                let value = row.get(col.key());
                let content = match &col.render {
                    Some(render) => render(value.unwrap_or(&NULL), row, index),
                    None => {
                        let content = resolve_cell(col.kind, value, col.progress_max);
                        let actions = (col.kind == ColumnKind::Actions).then(|| self.cell_actions(&row_id, cx));
                        render_cell(content, ElementId::from(("cell", i)), actions)
                    }
                };
                self.cell_container(col.width).child(content)
            }))
    }

    fn cell_actions(&self, row_id: &str, cx: &mut Context<Self>) -> CellActions {
        let edit_id = row_id.to_string();
        let delete_id = row_id.to_string();
        CellActions {
            edit_label: t(self.locale, "action-edit"),
            delete_label: t(self.locale, "action-delete"),
            on_edit: Box::new(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.dispatch(Some(DataTableEvent::Edit { row_id: edit_id.clone() }), cx);
            })),
            on_delete: Box::new(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.dispatch(Some(DataTableEvent::Delete { row_id: delete_id.clone() }), cx);
            })),
        }
    }

    /// Render a centered placeholder (empty / loading)
    fn render_placeholder(&self, message: SharedString) -> Div {
        div()
            .flex_1()
            .min_h(px(120.0))
            .flex()
            .items_center()
            .justify_center()
            .text_color(KitColors::text_muted())
            .child(message)
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> Pagination {
        let entity = cx.entity();
        let summary = format!("{} {}", self.rows.len(), t(self.locale, "table-items"));
        Pagination::new("data-table-pagination", self.current_page(), self.total_pages())
            .summary(summary)
            .on_page_change(move |page, _window, cx| {
                entity.update(cx, |this, cx| this.go_to_page(page, cx));
            })
    }
}

fn selection_event(change: SelectionChange) -> DataTableEvent {
    match change {
        SelectionChange::Row { id, selected } => DataTableEvent::RowSelect { row_id: id, selected },
        SelectionChange::All { selected } => DataTableEvent::SelectAll { selected },
    }
}

impl Render for DataTable {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(KitColors::surface())
            .border_1()
            .border_color(KitColors::border())
            .rounded_md()
            .overflow_hidden();

        // Header
        table = table.child(self.render_header(cx));

        // Body
        if self.loading {
            table = table.child(self.render_placeholder(t(self.locale, "table-loading")));
        } else if self.rows.is_empty() {
            let message = self
                .empty_message
                .clone()
                .unwrap_or_else(|| t(self.locale, "table-no-data"));
            table = table.child(self.render_placeholder(message));
        } else {
            let rows: Vec<_> = self
                .visible_rows()
                .into_iter()
                .enumerate()
                .map(|(i, row)| self.render_row(row, i, cx).into_any_element())
                .collect();
            table = table.child(
                div()
                    .id("data-table-rows")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(rows),
            );
        }

        // Footer
        table.child(self.render_footer(cx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::row::rows_from_json;

    fn table() -> DataTable {
        let rows = rows_from_json(
            r#"[
                {"id": 1, "v": 30, "name": "c"},
                {"id": 2, "v": null, "name": "a"},
                {"id": 3, "v": 10, "name": "b"}
            ]"#,
        )
        .expect("rows");
        let columns = vec![
            Column::new("name", "Name", ColumnKind::Title).sortable(),
            Column::new("v", "Value", ColumnKind::Progress).sortable(),
            Column::new("actions", "", ColumnKind::Actions),
        ];
        DataTable::new(columns, rows)
    }

    fn visible_ids(table: &DataTable) -> Vec<String> {
        table.visible_rows().iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn sort_event_and_view() {
        let mut table = table();
        let event = table.apply_sort("v");
        assert_eq!(
            event,
            Some(DataTableEvent::Sort { column_key: "v".into(), direction: SortDirection::Asc })
        );
        assert_eq!(visible_ids(&table), vec!["3", "1", "2"]);
        assert_eq!(table.rows()[0].id(), "1");
        assert_eq!(table.apply_sort("actions"), None);
    }

    #[test]
    fn select_all_round_trip() {
        let mut table = table();
        assert_eq!(table.apply_select_all(true), Some(DataTableEvent::SelectAll { selected: true }));
        assert!(table.selection_summary().all_selected);
        table.apply_select_all(false);
        assert_eq!(table.selection_summary().selected, 0);
    }

    #[test]
    fn row_select_event_carries_id() {
        let mut table = table();
        assert_eq!(
            table.apply_select_row("2", true),
            Some(DataTableEvent::RowSelect { row_id: "2".into(), selected: true })
        );
        assert!(table.selection_summary().indeterminate);
        assert_eq!(table.selected_ids(), vec!["2".to_string()]);
    }

    #[test]
    fn controlled_table_reports_without_changing() {
        let mut table = table()
            .controlled_selection(Vec::new())
            .controlled_sort(None)
            .controlled_pagination(1, 4);

        assert!(table.apply_select_row("1", true).is_some());
        assert!(table.selected_ids().is_empty());

        assert!(table.apply_sort("name").is_some());
        assert!(table.sort_state().is_none());
        assert_eq!(visible_ids(&table), vec!["1", "2", "3"]);

        assert_eq!(table.apply_page(2), Some(DataTableEvent::PageChange { page: 2 }));
        assert_eq!(table.current_page(), 1);

        table.set_page(2, 4);
        table.set_selected_row_ids(vec!["1".to_string()]);
        assert_eq!(table.current_page(), 2);
        assert_eq!(table.selected_ids(), vec!["1".to_string()]);
    }

    #[test]
    fn self_paging_applies_after_sort() {
        let mut table = table().page_size(2);
        table.apply_sort("name");
        assert_eq!(table.total_pages(), 2);
        assert_eq!(visible_ids(&table), vec!["2", "3"]);
        assert_eq!(table.apply_page(2), Some(DataTableEvent::PageChange { page: 2 }));
        assert_eq!(visible_ids(&table), vec!["1"]);
        assert_eq!(table.apply_page(2), None);
    }

    #[test]
    fn variant_lookup() {
        assert!(table_variant_style(TableVariant::Striped).striped);
        assert!(table_variant_style(TableVariant::Bordered).column_borders);
        assert!(table_row_height(Size::Small) < table_row_height(Size::Large));
    }
}
