//! UI Constants
//!
//! Centralized constants for consistent layout across the kit.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 500.0;

/// Rows per table page unless configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Width of the row selection column
pub const SELECT_COLUMN_WIDTH: f32 = 48.0;

/// Stars in a rating
pub const RATING_STARS: u8 = 5;

/// Avatars shown before the overflow count
pub const MAX_VISIBLE_AVATARS: usize = 4;

/// Delay before a pressed button returns to its resting visual
pub const PRESS_RESET_MS: u64 = 150;

/// Upper bound on clickable slider track segments
pub const MAX_SLIDER_SEGMENTS: usize = 50;
