//! Sort Controller
//!
//! At most one column is sorted at a time. The sorted view is re-derived
//! from the caller's rows on every render; the rows themselves are never
//! reordered.

use std::cmp::Ordering;

use serde_json::Value;

use super::column::Column;
use super::controllable::Controllable;
use super::row::RowRecord;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header indicator glyph
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// The active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column_key: String,
    pub direction: SortDirection,
}

/// Sort state, owned locally or by the parent
#[derive(Debug, Clone, Default)]
pub struct SortController {
    state: Controllable<Option<SortState>>,
}

impl SortController {
    pub fn uncontrolled(initial: Option<SortState>) -> Self {
        Self {
            state: Controllable::Uncontrolled(initial),
        }
    }

    pub fn controlled(state: Option<SortState>) -> Self {
        Self {
            state: Controllable::Controlled(state),
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.state.is_controlled()
    }

    pub fn state(&self) -> Option<&SortState> {
        self.state.get().as_ref()
    }

    /// Replace the parent-owned sort state
    pub fn sync(&mut self, state: Option<SortState>) {
        self.state.sync(state);
    }

    /// Direction of a column if it is the active one
    pub fn direction_of(&self, column_key: &str) -> Option<SortDirection> {
        self.state()
            .filter(|s| s.column_key == column_key)
            .map(|s| s.direction)
    }

    /// Handle a header click.
    ///
    /// Returns the requested sort, or `None` when the column is unknown or
    /// not sortable. A new column starts ascending; the active column flips.
    pub fn toggle_sort(&mut self, columns: &[Column], column_key: &str) -> Option<SortState> {
        let sortable = columns
            .iter()
            .any(|col| col.key() == column_key && col.sortable);
        if !sortable {
            return None;
        }

        let direction = match self.direction_of(column_key) {
            Some(current) => current.flipped(),
            None => SortDirection::Asc,
        };
        let next = SortState {
            column_key: column_key.to_string(),
            direction,
        };

        let applied = next.clone();
        self.state.update(move |state| *state = Some(applied));
        tracing::debug!(column = column_key, ?direction, "sort toggled");
        Some(next)
    }

    /// Rows in display order for the current sort
    pub fn sorted<'a>(&self, rows: &'a [RowRecord]) -> Vec<&'a RowRecord> {
        match self.state() {
            Some(state) => sort_rows(rows, state),
            None => rows.iter().collect(),
        }
    }
}

/// Stable sort of `rows` by one field
pub fn sort_rows<'a>(rows: &'a [RowRecord], state: &SortState) -> Vec<&'a RowRecord> {
    let mut view: Vec<&RowRecord> = rows.iter().collect();
    view.sort_by(|a, b| {
        compare_values(
            a.get(&state.column_key),
            b.get(&state.column_key),
            state.direction,
        )
    });
    view
}

/// Compare two field values. Missing and `null` go last in both directions.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = compare_present(a, b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }
}

/// Total order over present values: numbers first (numerically), then
/// everything else by collation.
fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collate(&display_value(a), &display_value(b)),
    }
}

/// Case-insensitive collation with the raw string as tie-breaker
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort key of a non-numeric value. Title objects sort by their title.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("title") {
            Some(Value::String(title)) => title.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::components::composite::data_table::column::ColumnKind;

    fn rows(values: Vec<Value>) -> Vec<RowRecord> {
        values
            .into_iter()
            .map(|v| RowRecord::try_from(v).expect("row"))
            .collect()
    }

    fn ids(view: &[&RowRecord]) -> Vec<String> {
        view.iter().map(|r| r.id().to_string()).collect()
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("v", "Value", ColumnKind::Text).sortable(),
            Column::new("name", "Name", ColumnKind::Text).sortable(),
            Column::new("note", "Note", ColumnKind::Text),
        ]
    }

    #[test]
    fn numeric_ascending_puts_nulls_last() {
        let rows = rows(vec![
            json!({"id": 1, "v": 30}),
            json!({"id": 2, "v": null}),
            json!({"id": 3, "v": 10}),
        ]);
        let state = SortState { column_key: "v".into(), direction: SortDirection::Asc };
        assert_eq!(ids(&sort_rows(&rows, &state)), vec!["3", "1", "2"]);
    }

    #[test]
    fn nulls_stay_last_when_descending() {
        let rows = rows(vec![
            json!({"id": 1, "v": 30}),
            json!({"id": 2}),
            json!({"id": 3, "v": 10}),
        ]);
        let state = SortState { column_key: "v".into(), direction: SortDirection::Desc };
        assert_eq!(ids(&sort_rows(&rows, &state)), vec!["1", "3", "2"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let rows = rows(vec![
            json!({"id": "a", "v": 1}),
            json!({"id": "b", "v": 0}),
            json!({"id": "c", "v": 1}),
            json!({"id": "d", "v": 0}),
        ]);
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let state = SortState { column_key: "v".into(), direction };
            let view = ids(&sort_rows(&rows, &state));
            let pos = |id: &str| view.iter().position(|v| v == id).expect("present");
            assert!(pos("a") < pos("c"));
            assert!(pos("b") < pos("d"));
        }
    }

    #[test]
    fn strings_collate_case_insensitively() {
        let rows = rows(vec![
            json!({"id": 1, "name": "bob"}),
            json!({"id": 2, "name": "Alice"}),
            json!({"id": 3, "name": "carol"}),
        ]);
        let state = SortState { column_key: "name".into(), direction: SortDirection::Asc };
        assert_eq!(ids(&sort_rows(&rows, &state)), vec!["2", "1", "3"]);
    }

    #[test]
    fn title_objects_sort_by_title() {
        let rows = rows(vec![
            json!({"id": 1, "member": {"title": "Zed", "subtitle": "a@x"}}),
            json!({"id": 2, "member": {"title": "amy", "subtitle": "z@x"}}),
        ]);
        let state = SortState { column_key: "member".into(), direction: SortDirection::Asc };
        assert_eq!(ids(&sort_rows(&rows, &state)), vec!["2", "1"]);
    }

    fn assert_ordered(view: &[&RowRecord], direction: SortDirection) {
        for pair in view.windows(2) {
            let ordering = compare_values(pair[0].get("v"), pair[1].get("v"), direction);
            assert_ne!(ordering, Ordering::Greater, "{:?} before {:?}", pair[0].get("v"), pair[1].get("v"));
        }
    }

    #[test]
    fn mixed_numbers_and_strings_sort_consistently() {
        let rows = rows(
            (0..200)
                .map(|i| {
                    let v = match i % 5 {
                        0 => json!(i % 17),
                        1 => json!((i % 13).to_string() + "0"),
                        2 => json!({"title": format!("T{}", i % 7)}),
                        3 => json!(null),
                        _ => json!(f64::from(i) / 3.0),
                    };
                    json!({"id": i, "v": v})
                })
                .collect(),
        );
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let state = SortState { column_key: "v".into(), direction };
            let view = sort_rows(&rows, &state);
            assert_eq!(view.len(), 200);
            assert_ordered(&view, direction);
            assert!(view[160..].iter().all(|r| r.get("v").is_some_and(Value::is_null)));
        }
    }

    #[test]
    fn numbers_rank_before_strings() {
        let rows = rows(vec![
            json!({"id": 1, "v": "100"}),
            json!({"id": 2, "v": 9}),
            json!({"id": 3, "v": 10}),
            json!({"id": 4, "v": {"title": "Ada"}}),
        ]);
        let asc = SortState { column_key: "v".into(), direction: SortDirection::Asc };
        assert_eq!(ids(&sort_rows(&rows, &asc)), vec!["2", "3", "1", "4"]);
        let desc = SortState { column_key: "v".into(), direction: SortDirection::Desc };
        assert_eq!(ids(&sort_rows(&rows, &desc)), vec!["4", "1", "3", "2"]);
    }

    #[test]
    fn source_rows_are_untouched() {
        let rows = rows(vec![json!({"id": 1, "v": 2}), json!({"id": 2, "v": 1})]);
        let before = rows.clone();
        let controller = SortController::uncontrolled(Some(SortState {
            column_key: "v".into(),
            direction: SortDirection::Asc,
        }));
        let _ = controller.sorted(&rows);
        assert_eq!(rows, before);
    }

    #[test]
    fn toggle_cycles_asc_desc_asc() {
        let columns = columns();
        let mut controller = SortController::default();

        let first = controller.toggle_sort(&columns, "v").expect("sortable");
        assert_eq!(first.direction, SortDirection::Asc);
        let second = controller.toggle_sort(&columns, "v").expect("sortable");
        assert_eq!(second.direction, SortDirection::Desc);
        let third = controller.toggle_sort(&columns, "v").expect("sortable");
        assert_eq!(third.direction, SortDirection::Asc);
    }

    #[test]
    fn new_column_starts_ascending_and_replaces_previous() {
        let columns = columns();
        let mut controller = SortController::default();
        controller.toggle_sort(&columns, "v");
        controller.toggle_sort(&columns, "v");

        let next = controller.toggle_sort(&columns, "name").expect("sortable");
        assert_eq!(next.direction, SortDirection::Asc);
        assert_eq!(controller.direction_of("v"), None);
        assert_eq!(controller.direction_of("name"), Some(SortDirection::Asc));
    }

    #[test]
    fn non_sortable_and_unknown_columns_are_ignored() {
        let columns = columns();
        let mut controller = SortController::default();
        assert!(controller.toggle_sort(&columns, "note").is_none());
        assert!(controller.toggle_sort(&columns, "missing").is_none());
        assert!(controller.state().is_none());
    }

    #[test]
    fn controlled_sort_reports_without_applying() {
        let columns = columns();
        let mut controller = SortController::controlled(None);
        let requested = controller.toggle_sort(&columns, "v").expect("sortable");
        assert_eq!(requested.direction, SortDirection::Asc);
        assert!(controller.state().is_none());

        controller.sync(Some(requested));
        let again = controller.toggle_sort(&columns, "v").expect("sortable");
        assert_eq!(again.direction, SortDirection::Desc);
    }
}
