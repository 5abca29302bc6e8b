//! Application Layer
//!
//! App initialization, window management and the component gallery.

pub mod application;
pub mod gallery;
