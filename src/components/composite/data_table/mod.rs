//! DataTable Component
//!
//! A reusable data table with sorting, row selection and pagination.

pub mod cell;
pub mod column;
pub mod controllable;
pub mod data_table;
pub mod pagination;
pub mod row;
pub mod selection;
pub mod sort;
pub mod team_members;

pub use column::{Column, ColumnKind, ColumnWidth};
pub use controllable::Controllable;
pub use data_table::{DataTable, DataTableEvent, TableVariant};
pub use pagination::{page_labels, PageLabel, Pagination};
pub use row::{rows_from_json, RowRecord};
pub use selection::SelectionController;
pub use sort::{SortController, SortDirection, SortState};
pub use team_members::team_members_table;
