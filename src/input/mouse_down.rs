//! Pointer press, hover and click handling - zone detection, drag start.
//!
//! Edge zones are measured in target-local units against the content
//! bounds, so the grab margin scales with the target.

use crate::constants::RESIZE_MARGIN;
use crate::input::{Modifiers, ResizeCursor, ResizeEdges};
use crate::settings::Settings;
use crate::target::Target;
use crate::types::Point;

impl Target {
    /// Which edges a local point is within `RESIZE_MARGIN` of. On targets
    /// thinner than two margins the top and left edges win.
    pub fn resize_edges_at(&self, local: Point) -> ResizeEdges {
        let b = self.local_bounds();
        let near = |value: f64, edge: f64| (value - edge).abs() <= RESIZE_MARGIN;

        let within_x = local.x >= b.min_x() - RESIZE_MARGIN && local.x <= b.max_x() + RESIZE_MARGIN;
        let within_y = local.y >= b.min_y() - RESIZE_MARGIN && local.y <= b.max_y() + RESIZE_MARGIN;

        let mut edges = ResizeEdges::none();
        if within_x {
            edges.top = near(local.y, b.min_y());
            edges.bottom = !edges.top && near(local.y, b.max_y());
        }
        if within_y {
            edges.left = near(local.x, b.min_x());
            edges.right = !edges.left && near(local.x, b.max_x());
        }
        edges
    }

    /// Pointer moved with no button held. Remembers the pointer and reports
    /// the cursor for the zone under it.
    pub fn on_pointer_moved(&mut self, position: Point) -> ResizeCursor {
        let local = self.parent_to_local(position);
        self.last_pointer = local;
        cursor_for(self.resize_edges_at(local))
    }

    /// Pointer pressed on the target: start a resize when the press lands in
    /// an edge zone, otherwise start a move.
    pub fn on_pointer_pressed(&mut self, position: Point) {
        let local = self.parent_to_local(position);
        self.last_pointer = local;
        let edges = self.resize_edges_at(local);
        self.input.start_resizing(edges);
    }

    /// Whether a click should toggle selection. Debug mode reserves
    /// Shift/Control clicks for test shots.
    pub fn on_click(&self, modifiers: Modifiers, settings: &Settings) -> bool {
        !(settings.debug_mode && (modifiers.shift || modifiers.control))
    }
}

pub fn cursor_for(edges: ResizeEdges) -> ResizeCursor {
    match (edges.top, edges.bottom, edges.left, edges.right) {
        (true, _, true, _) => ResizeCursor::Nw,
        (true, _, _, true) => ResizeCursor::Ne,
        (_, true, true, _) => ResizeCursor::Sw,
        (_, true, _, true) => ResizeCursor::Se,
        (true, ..) => ResizeCursor::N,
        (_, true, ..) => ResizeCursor::S,
        (_, _, true, _) => ResizeCursor::W,
        (_, _, _, true) => ResizeCursor::E,
        _ => ResizeCursor::Default,
    }
}
