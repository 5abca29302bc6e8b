//! Team Members Table
//!
//! A preset of the data table for a team roster: member, role tags,
//! rating, collaborators, onboarding progress, profile links and actions.

use super::column::{Column, ColumnKind};
use super::data_table::DataTable;
use super::row::RowRecord;
use crate::i18n::{t, Locale};

/// Field keys expected on each member row
pub mod keys {
    pub const MEMBER: &str = "member";
    pub const TEAMS: &str = "teams";
    pub const RATING: &str = "rating";
    pub const COLLABORATORS: &str = "collaborators";
    pub const PROGRESS: &str = "progress";
    pub const LINKS: &str = "links";
    pub const ACTIONS: &str = "actions";
}

/// Columns of the team roster
pub fn team_members_columns(locale: Locale) -> Vec<Column> {
    vec![
        Column::new(keys::MEMBER, t(locale, "col-member"), ColumnKind::Title)
            .sortable()
            .flex_width(Some(180.0)),
        Column::new(keys::TEAMS, t(locale, "col-teams"), ColumnKind::MultiTag).flex_width(Some(160.0)),
        Column::new(keys::RATING, t(locale, "col-rating"), ColumnKind::Rating)
            .sortable()
            .fixed_width(120.0),
        Column::new(keys::COLLABORATORS, t(locale, "col-collaborators"), ColumnKind::Avatars)
            .fixed_width(140.0),
        Column::new(keys::PROGRESS, t(locale, "col-progress"), ColumnKind::Progress)
            .sortable()
            .fixed_width(160.0),
        Column::new(keys::LINKS, t(locale, "col-links"), ColumnKind::Links).fixed_width(140.0),
        Column::new(keys::ACTIONS, "", ColumnKind::Actions).fixed_width(150.0),
    ]
}

/// A team roster table over the given member rows
pub fn team_members_table(rows: Vec<RowRecord>, locale: Locale) -> DataTable {
    DataTable::new(team_members_columns(locale), rows).locale(locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::cell::{resolve_cell, CellContent};
    use crate::components::composite::data_table::row::rows_from_json;

    #[test]
    fn sortable_columns_are_member_rating_progress() {
        let sortable: Vec<_> = team_members_columns(Locale::EnUS)
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.key().to_string())
            .collect();
        assert_eq!(sortable, vec![keys::MEMBER, keys::RATING, keys::PROGRESS]);
    }

    #[test]
    fn member_fields_resolve_through_their_columns() {
        let rows = rows_from_json(
            r#"[{"id": "m1", "member": {"title": "Olivia Rhye", "subtitle": "@olivia"},
                 "rating": 4, "progress": 60, "teams": ["Design"]}]"#,
        )
        .expect("rows");
        let columns = team_members_columns(Locale::EnUS);
        let row = &rows[0];

        let contents: Vec<CellContent> = columns
            .iter()
            .map(|c| resolve_cell(c.kind, row.get(c.key()), c.progress_max))
            .collect();
        assert!(matches!(contents[0], CellContent::Title { .. }));
        assert_eq!(contents[1], CellContent::Tags(vec!["Design".into()]));
        assert_eq!(contents[3], CellContent::Empty);
        assert_eq!(contents[4], CellContent::Progress { percent: 60.0 });
        assert_eq!(contents[6], CellContent::Actions);
    }

    #[test]
    fn sorting_by_rating_descending() {
        let rows = rows_from_json(
            r#"[{"id": "a", "rating": 2}, {"id": "b", "rating": 5}, {"id": "c"}]"#,
        )
        .expect("rows");
        let mut table = team_members_table(rows, Locale::EnUS);
        table.apply_sort(keys::RATING);
        table.apply_sort(keys::RATING);
        let ids: Vec<_> = table.visible_rows().iter().map(|r| r.id().to_string()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
