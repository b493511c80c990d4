//! Drag handling - moving and edge/corner resizing.
//!
//! ## Resize model
//!
//! Each active axis measures a `gap`: how far the pointer sits past the
//! dragged edge, in parent units. Dragging a min edge (top/left) by `gap`
//! shrinks the axis by `gap`; dragging a max edge grows it by `gap`. The
//! position then shifts by `gap / 2`, which with the centre pivot leaves the
//! opposite edge where it was.
//!
//! With aspect lock the vertical gap is derived from the horizontal one so
//! both axes change by the same fraction. The horizontal fraction is taken
//! before the max-edge sign flip, so the bottom-left and top-right corners
//! negate it.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::geometry::is_valid_scale;
use crate::input::{Modifiers, ResizeEdges};
use crate::profile_scope;
use crate::settings::Settings;
use crate::target::Target;
use crate::types::{Point, Size};
use tracing::trace;

/// One axis of a resize step: the scale to apply and the position shift
/// that keeps the fixed edge in place.
#[derive(Debug, Clone, Copy)]
struct AxisStep {
    scale: f64,
    shift: f64,
}

impl AxisStep {
    /// `gap` is the shrink of the min edge (negative grows); max edges flip it.
    fn new(current_scale: f64, current_extent: f64, gap: f64, max_edge: bool) -> Self {
        let mut scale_delta = gap / current_extent;
        if max_edge {
            scale_delta = -scale_delta;
        }
        Self {
            scale: current_scale * (1.0 - scale_delta),
            shift: gap / 2.0,
        }
    }
}

impl Target {
    /// Pointer dragged after a press on this target.
    pub fn on_pointer_dragged(&mut self, position: Point, modifiers: Modifiers, settings: &Settings) {
        match self.input.resize_edges() {
            Some(edges) => self.drag_resize(position, edges, modifiers, settings.extent()),
            None if self.input.is_moving() => self.drag_move(position, modifiers, settings),
            None => {}
        }
    }

    fn drag_move(&mut self, position: Point, modifiers: Modifiers, settings: &Settings) {
        profile_scope!("drag_move");

        if settings.debug_mode && (modifiers.control || modifiers.shift) {
            return;
        }

        let local = self.parent_to_local(position);
        let dx = (local.x - self.last_pointer.x) * self.geometry.scale_x;
        let dy = (local.y - self.last_pointer.y) * self.geometry.scale_y;
        if !(dx.is_finite() && dy.is_finite()) || (dx == 0.0 && dy == 0.0) {
            return;
        }

        let bounds = self.bounds_in_parent();
        let extent = settings.extent();
        let x_fits = bounds.min_x() + dx >= 0.0 && bounds.max_x() + dx <= extent.width;
        let y_fits = bounds.min_y() + dy >= 0.0 && bounds.max_y() + dy <= extent.height;

        let mut moved = false;
        if !self.keep_in_bounds() || x_fits {
            self.geometry.position.x += dx;
            moved = true;
        }
        if !self.keep_in_bounds() || y_fits {
            self.geometry.position.y += dy;
            moved = true;
        }

        if moved {
            self.record_moved();
        } else {
            trace!(target_id = %self.id(), dx, dy, "Move held at display bounds");
        }
    }

    fn drag_resize(&mut self, position: Point, edges: ResizeEdges, modifiers: Modifiers, extent: Size) {
        profile_scope!("drag_resize");

        let local = self.parent_to_local(position);
        let content = self.local_bounds();
        let current = self.dimension();
        let (scale_x, scale_y) = (self.geometry.scale_x, self.geometry.scale_y);

        let mut aspect_delta = None;
        let x_step = if edges.horizontal() {
            let edge = if edges.right { content.max_x() } else { content.min_x() };
            let gap = (local.x - edge) * scale_x;
            if edges.is_corner() && modifiers.control {
                aspect_delta = Some(gap / current.width);
            }
            Some(AxisStep::new(scale_x, current.width, gap, edges.right))
        } else {
            None
        };

        let y_step = if edges.vertical() {
            let gap = match aspect_delta {
                Some(delta) => {
                    let delta = if (edges.left && edges.bottom) || (edges.right && edges.top) {
                        -delta
                    } else {
                        delta
                    };
                    current.height * delta
                }
                None => {
                    let edge = if edges.bottom { content.max_y() } else { content.min_y() };
                    (local.y - edge) * scale_y
                }
            };
            Some(AxisStep::new(scale_y, current.height, gap, edges.bottom))
        } else {
            None
        };

        let degenerate = |step: Option<AxisStep>| {
            step.is_some_and(|s| !is_valid_scale(s.scale) || !s.shift.is_finite())
        };
        if degenerate(x_step) || degenerate(y_step) {
            trace!(target_id = %self.id(), ?x_step, ?y_step, "Rejected degenerate resize");
            return;
        }

        let mut changed = false;
        if let Some(step) = x_step {
            changed |= self.apply_resize_x(step, extent);
        }
        if let Some(step) = y_step {
            changed |= self.apply_resize_y(step, extent);
        }

        if changed {
            self.record_moved();
            self.record_resized();
        }
    }

    fn apply_resize_x(&mut self, step: AxisStep, extent: Size) -> bool {
        let (old_scale, old_x) = (self.geometry.scale_x, self.geometry.position.x);
        self.geometry.scale_x = step.scale;
        self.geometry.position.x += step.shift;

        let bounds = self.bounds_in_parent();
        if self.keep_in_bounds() && (bounds.min_x() < 0.0 || bounds.max_x() > extent.width) {
            trace!(target_id = %self.id(), "Horizontal resize reverted at display bounds");
            self.geometry.scale_x = old_scale;
            self.geometry.position.x = old_x;
            return false;
        }

        self.compensate_unresizable_x();
        true
    }

    fn apply_resize_y(&mut self, step: AxisStep, extent: Size) -> bool {
        let (old_scale, old_y) = (self.geometry.scale_y, self.geometry.position.y);
        self.geometry.scale_y = step.scale;
        self.geometry.position.y += step.shift;

        let bounds = self.bounds_in_parent();
        if self.keep_in_bounds() && (bounds.min_y() < 0.0 || bounds.max_y() > extent.height) {
            trace!(target_id = %self.id(), "Vertical resize reverted at display bounds");
            self.geometry.scale_y = old_scale;
            self.geometry.position.y = old_y;
            return false;
        }

        self.compensate_unresizable_y();
        true
    }
}
