//! Helper Utilities
//!
//! Small pieces of state shared by several components.

mod press;

pub use press::*;
