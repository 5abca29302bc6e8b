//! Design Kit
//!
//! Design-system atoms and molecules for GPUI: buttons, tags, inputs,
//! steppers, ratings and a data table with selection, sorting and
//! pagination. The `design-kit` binary renders them all in a gallery.

pub mod app;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod theme;
pub mod utils;
