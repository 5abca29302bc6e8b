//! Composite Components
//!
//! Molecules assembled from primitives.

pub mod data_table;
