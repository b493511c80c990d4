//! Target geometry ledger.
//!
//! A target is positioned by a layout offset and scaled by two accumulated
//! factors. Scaling pivots on the centre of the target's content layout
//! bounds, so for content bounds `L`, position `p` and scale `s` a local
//! point `q` lands in parent space at
//!
//! ```text
//! p + c + (q - c) * s        where c = centre(L)
//! ```
//!
//! `original` is the content size at construction; `scale` is only ever
//! multiplied by deltas during interaction, which keeps
//! `bounds_in_parent(L).width / original.width == scale_x`.

use crate::constants::MIN_SCALE;
use crate::types::{Bounds, Point, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetGeometry {
    pub position: Point,
    pub scale_x: f64,
    pub scale_y: f64,
    original: Size,
}

impl TargetGeometry {
    pub fn new(original: Size) -> Self {
        Self {
            position: Point::default(),
            scale_x: 1.0,
            scale_y: 1.0,
            original,
        }
    }

    pub fn original_size(&self) -> Size {
        self.original
    }

    pub fn local_to_parent(&self, local: &Bounds, q: Point) -> Point {
        let c = local.center();
        Point::new(
            self.position.x + c.x + (q.x - c.x) * self.scale_x,
            self.position.y + c.y + (q.y - c.y) * self.scale_y,
        )
    }

    pub fn parent_to_local(&self, local: &Bounds, p: Point) -> Point {
        let c = local.center();
        Point::new(
            c.x + (p.x - self.position.x - c.x) / self.scale_x,
            c.y + (p.y - self.position.y - c.y) / self.scale_y,
        )
    }

    /// Map a rectangle in local space to parent space.
    pub fn transform_bounds(&self, local: &Bounds, b: &Bounds) -> Bounds {
        let min = self.local_to_parent(local, Point::new(b.min_x(), b.min_y()));
        let max = self.local_to_parent(local, Point::new(b.max_x(), b.max_y()));
        Bounds::from_corners(min, max)
    }

    pub fn bounds_in_parent(&self, local: &Bounds) -> Bounds {
        self.transform_bounds(local, local)
    }
}

/// A candidate scale factor is usable only if it is finite and above the floor.
#[inline]
pub fn is_valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale >= MIN_SCALE
}

/// Multiplicative delta taking `current` to `target`, as used by
/// `set_dimensions`: `1 + (target - current) / current`.
#[inline]
pub fn dimension_delta(current: f64, target: f64) -> f64 {
    1.0 + (target - current) / current
}
