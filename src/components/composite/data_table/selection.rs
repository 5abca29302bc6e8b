//! Selection Controller
//!
//! Tracks the set of selected row ids for a table.

use ahash::AHashSet;

use super::controllable::Controllable;
use super::row::RowRecord;

/// Selection change requested by a user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// A single row was (de)selected
    Row { id: String, selected: bool },
    /// The header checkbox was toggled
    All { selected: bool },
}

/// Header checkbox state derived from the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub selected: usize,
    pub total: usize,
    pub all_selected: bool,
    pub indeterminate: bool,
}

/// Selection state, owned locally or by the parent
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    ids: Controllable<AHashSet<String>>,
    /// Parent-supplied "all rows selected" flag (controlled tables only)
    all_override: Option<bool>,
}

impl SelectionController {
    /// Selection owned by the table
    pub fn uncontrolled() -> Self {
        Self {
            ids: Controllable::Uncontrolled(AHashSet::new()),
            all_override: None,
        }
    }

    /// Selection owned by the parent
    pub fn controlled(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            ids: Controllable::Controlled(ids.into_iter().collect()),
            all_override: None,
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.ids.is_controlled()
    }

    /// Replace the parent-owned selection
    pub fn sync(&mut self, ids: impl IntoIterator<Item = String>) {
        self.ids.sync(ids.into_iter().collect());
    }

    /// Replace the parent-owned "all rows selected" flag
    pub fn sync_all_selected(&mut self, all: Option<bool>) {
        if self.is_controlled() {
            self.all_override = all;
        }
    }

    /// Select or clear every current row
    pub fn select_all(&mut self, rows: &[RowRecord], checked: bool) -> SelectionChange {
        self.ids.update(|ids| {
            ids.clear();
            if checked {
                ids.extend(rows.iter().map(|row| row.id().to_string()));
            }
        });
        SelectionChange::All { selected: checked }
    }

    /// Add or remove a single row id
    pub fn select_row(&mut self, id: &str, checked: bool) -> SelectionChange {
        self.ids.update(|ids| {
            if checked {
                ids.insert(id.to_string());
            } else {
                ids.remove(id);
            }
        });
        SelectionChange::Row {
            id: id.to_string(),
            selected: checked,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.get().contains(id)
    }

    /// Selected ids that still reference a present row, in row order
    pub fn selected_ids(&self, rows: &[RowRecord]) -> Vec<String> {
        rows.iter()
            .filter(|row| self.is_selected(row.id()))
            .map(|row| row.id().to_string())
            .collect()
    }

    /// Header checkbox state; stale ids are ignored
    pub fn summary(&self, rows: &[RowRecord]) -> SelectionSummary {
        let total = rows.len();
        let selected = rows.iter().filter(|row| self.is_selected(row.id())).count();
        let indeterminate = selected > 0 && selected < total;
        // The parent's flag only decides the checked state of a non-partial header
        let all_selected = total > 0
            && !indeterminate
            && self.all_override.unwrap_or(selected == total);
        SelectionSummary {
            selected,
            total,
            all_selected,
            indeterminate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn rows(ids: &[&str]) -> Vec<RowRecord> {
        ids.iter().map(|id| RowRecord::new(*id, Map::<String, Value>::new())).collect()
    }

    #[test]
    fn select_all_then_clear_is_empty() {
        let rows = rows(&["a", "b", "c"]);
        let mut selection = SelectionController::uncontrolled();
        selection.select_all(&rows, true);
        assert_eq!(selection.summary(&rows).selected, 3);
        selection.select_all(&rows, false);
        assert_eq!(selection.summary(&rows).selected, 0);
    }

    #[test]
    fn indeterminate_only_for_partial_selection() {
        let rows = rows(&["a", "b", "c"]);
        let mut selection = SelectionController::uncontrolled();

        let summary = selection.summary(&rows);
        assert!(!summary.indeterminate && !summary.all_selected);

        selection.select_row("a", true);
        let summary = selection.summary(&rows);
        assert!(summary.indeterminate && !summary.all_selected);

        selection.select_row("b", true);
        selection.select_row("c", true);
        let summary = selection.summary(&rows);
        assert!(!summary.indeterminate && summary.all_selected);
    }

    #[test]
    fn empty_table_is_never_all_selected() {
        let selection = SelectionController::uncontrolled();
        let summary = selection.summary(&[]);
        assert!(!summary.all_selected);
        assert!(!summary.indeterminate);
    }

    #[test]
    fn select_row_is_idempotent() {
        let rows = rows(&["a", "b"]);
        let mut selection = SelectionController::uncontrolled();
        selection.select_row("a", true);
        selection.select_row("a", true);
        assert_eq!(selection.summary(&rows).selected, 1);
        selection.select_row("b", false);
        assert_eq!(selection.summary(&rows).selected, 1);
    }

    #[test]
    fn stale_ids_are_inert() {
        let mut selection = SelectionController::controlled(vec!["gone".to_string(), "a".to_string()]);
        let rows = rows(&["a", "b"]);
        let summary = selection.summary(&rows);
        assert_eq!(summary.selected, 1);
        assert!(summary.indeterminate);
        assert_eq!(selection.selected_ids(&rows), vec!["a".to_string()]);

        selection.sync(vec!["gone".to_string()]);
        assert_eq!(selection.summary(&rows).selected, 0);
    }

    #[test]
    fn controlled_selection_only_reports_intent() {
        let rows = rows(&["a", "b"]);
        let mut selection = SelectionController::controlled(Vec::new());

        let change = selection.select_row("a", true);
        assert_eq!(change, SelectionChange::Row { id: "a".to_string(), selected: true });
        assert!(!selection.is_selected("a"));

        let change = selection.select_all(&rows, true);
        assert_eq!(change, SelectionChange::All { selected: true });
        assert_eq!(selection.summary(&rows).selected, 0);
    }

    #[test]
    fn parent_flag_never_hides_partial_selection() {
        let rows = rows(&["a", "b"]);
        let mut selection = SelectionController::controlled(vec!["a".to_string()]);
        selection.sync_all_selected(Some(true));
        let summary = selection.summary(&rows);
        assert!(summary.indeterminate);
        assert!(!summary.all_selected);
    }

    #[test]
    fn parent_flag_decides_checked_state_otherwise() {
        let rows = rows(&["a", "b"]);
        let mut selection = SelectionController::controlled(Vec::new());
        selection.sync_all_selected(Some(true));
        assert!(selection.summary(&rows).all_selected);

        selection.sync(vec!["a".to_string(), "b".to_string()]);
        selection.sync_all_selected(Some(false));
        let summary = selection.summary(&rows);
        assert!(!summary.all_selected);
        assert!(!summary.indeterminate);
    }

    #[test]
    fn parent_flag_ignored_without_rows() {
        let mut selection = SelectionController::controlled(Vec::new());
        selection.sync_all_selected(Some(true));
        let summary = selection.summary(&[]);
        assert!(!summary.all_selected);
        assert!(!summary.indeterminate);
    }
}
