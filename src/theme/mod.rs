//! Theme - Colors, Typography and Style Tokens
//!
//! Every enumerated prop combination resolves to a style through the
//! lookup tables in [`tokens`].

pub mod colors;
pub mod tokens;
pub mod typography;

pub use colors::KitColors;
pub use tokens::*;
pub use typography::Typography;
