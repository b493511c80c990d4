//! Crate-wide constants.
//!
//! Centralizes magic numbers used by the geometry ledger, the interaction
//! state machine and the hit classifier.

use crate::types::Color;

// ============================================================================
// Geometry
// ============================================================================

/// Dimension changes smaller than this are ignored by `set_dimensions`
/// to avoid oscillation from floating point error
pub const DIMENSION_EPSILON: f64 = 0.001;

/// Smallest accepted scale factor; anything below is treated as degenerate
pub const MIN_SCALE: f64 = 0.001;

/// Rendered image size differing from native size by more than this triggers resampling
pub const RESAMPLE_EPSILON: f64 = 0.000_000_1;

// ============================================================================
// Interaction
// ============================================================================

/// Width of the resize zone along each bounding edge, in target-local units
pub const RESIZE_MARGIN: f64 = 5.0;

/// Keyboard nudge step, in parent units
pub const MOVEMENT_DELTA: f64 = 1.0;

/// Keyboard resize step, in parent units
pub const SCALE_DELTA: f64 = 1.0;

// ============================================================================
// Selection overlay
// ============================================================================

/// Visual width of a resize anchor
pub const ANCHOR_WIDTH: f64 = 10.0;

/// Visual height of a resize anchor
pub const ANCHOR_HEIGHT: f64 = ANCHOR_WIDTH;

/// Outline applied to shape regions while the target is selected
pub const SELECTED_STROKE_COLOR: Color = Color::rgb(0xff, 0x63, 0x47);

/// Default outline for shape regions
pub const UNSELECTED_STROKE_COLOR: Color = Color::rgb(0x00, 0x00, 0x00);

/// Anchor fill
pub const ANCHOR_FILL_COLOR: Color = Color::rgb(0xff, 0xd7, 0x00);

/// Anchor outline
pub const ANCHOR_STROKE_COLOR: Color = Color::rgb(0x00, 0x00, 0x00);

// ============================================================================
// Display defaults
// ============================================================================

/// Default container width when no display resolution is configured
pub const DEFAULT_DISPLAY_WIDTH: f64 = 640.0;

/// Default container height when no display resolution is configured
pub const DEFAULT_DISPLAY_HEIGHT: f64 = 480.0;

// ============================================================================
// Profiling
// ============================================================================

/// Classification slower than this is reported by the scope timer
pub const CLASSIFY_WARN_MS: f64 = 4.0;
