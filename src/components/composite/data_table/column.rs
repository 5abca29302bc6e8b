//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use gpui::{AnyElement, SharedString};
use serde_json::Value;

use super::row::RowRecord;

/// Custom cell renderer: `(value, row, row_index)`
pub type CellRenderFn = Box<dyn Fn(&Value, &RowRecord, usize) -> AnyElement + 'static>;

/// Built-in rendering strategy of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnKind {
    /// Plain text
    #[default]
    Text,
    /// Emphasized title with optional subtitle
    Title,
    /// List of tags
    MultiTag,
    /// List of links
    Links,
    /// Star rating out of five
    Rating,
    /// Avatar group
    Avatars,
    /// Progress bar
    Progress,
    /// Edit / delete buttons
    Actions,
}

/// Column definition for the DataTable
pub struct Column {
    /// Field key, unique within the table
    pub key: SharedString,
    /// Column header title
    pub title: SharedString,
    /// Built-in renderer
    pub kind: ColumnKind,
    /// Column width (in pixels, or flexible)
    pub width: ColumnWidth,
    /// Whether the column is sortable
    pub sortable: bool,
    /// Upper bound of progress values
    pub progress_max: f64,
    /// Custom renderer, takes precedence over `kind`
    pub render: Option<CellRenderFn>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional minimum
    Flex { min: Option<f32> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None }
    }
}

impl Column {
    /// Create a new column
    pub fn new(key: impl Into<SharedString>, title: impl Into<SharedString>, kind: ColumnKind) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            kind,
            width: ColumnWidth::default(),
            sortable: false,
            progress_max: 100.0,
            render: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with an optional minimum
    pub fn flex_width(mut self, min: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min };
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Upper bound for a progress column
    pub fn progress_max(mut self, max: f64) -> Self {
        self.progress_max = max;
        self
    }

    /// Override the built-in renderer
    pub fn render(mut self, render: impl Fn(&Value, &RowRecord, usize) -> AnyElement + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }
}
