//! Selection overlay.
//!
//! Selecting a target outlines its shape regions and adds eight resize
//! anchors (corners and edge midpoints of the content bounds). Anchors are
//! unresizable and ignore hits, so they keep their visual size under any
//! group scale and never register shots. Deselecting restores the outlines
//! and drops the anchors.

use crate::constants::{ANCHOR_FILL_COLOR, ANCHOR_HEIGHT, ANCHOR_STROKE_COLOR, ANCHOR_WIDTH, SELECTED_STROKE_COLOR};
use crate::region::{Region, Shape, TAG_IGNORE_HIT, TAG_RESIZABLE};
use crate::target::Target;
use crate::types::{Bounds, TargetId};
use std::sync::Arc;
use tracing::debug;

pub trait SelectionListener: Send + Sync {
    fn target_selected(&self, target: TargetId, selected: bool);
}

/// A selection change not yet reported to the target's listener.
///
/// Listeners may call back into whatever owns the target, so callers holding
/// locks should drop them before calling [`SelectionChange::notify`].
#[must_use = "the listener only hears about the change through notify()"]
pub struct SelectionChange {
    listener: Option<Arc<dyn SelectionListener>>,
    target: TargetId,
    selected: bool,
}

impl SelectionChange {
    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn notify(self) {
        if let Some(listener) = self.listener {
            listener.target_selected(self.target, self.selected);
        }
    }
}

impl Target {
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Resize anchors, present only while selected.
    pub fn anchors(&self) -> &[Region] {
        &self.anchors
    }

    /// Parent-space bounds of each anchor.
    pub fn anchor_bounds(&self) -> Vec<Bounds> {
        self.anchors
            .iter()
            .map(|a| self.local_bounds_to_parent(&a.bounds_in_target()))
            .collect()
    }

    /// Toggle selection and notify the listener straight away.
    pub fn toggle_selected(&mut self) {
        self.toggle_selected_deferred().notify();
    }

    /// Toggle selection, handing back the listener notification.
    pub fn toggle_selected_deferred(&mut self) -> SelectionChange {
        self.selected = !self.selected;

        if self.selected {
            self.saved_strokes = self.regions.iter().map(Region::stroke).collect();
            for region in &mut self.regions {
                region.set_stroke(SELECTED_STROKE_COLOR);
            }
            self.add_resize_anchors();
        } else {
            for (region, stroke) in self.regions.iter_mut().zip(self.saved_strokes.drain(..)) {
                if let Some(color) = stroke {
                    region.set_stroke(color);
                }
            }
            self.anchors.clear();
        }

        debug!(target_id = %self.id(), selected = self.selected, "Target selection toggled");
        SelectionChange {
            listener: self.selection_listener.clone(),
            target: self.id(),
            selected: self.selected,
        }
    }

    /// Select or deselect; a no-op when already in that state.
    pub fn set_selected(&mut self, selected: bool) {
        if let Some(change) = self.set_selected_deferred(selected) {
            change.notify();
        }
    }

    pub fn set_selected_deferred(&mut self, selected: bool) -> Option<SelectionChange> {
        (self.selected != selected).then(|| self.toggle_selected_deferred())
    }

    fn add_resize_anchors(&mut self) {
        let b = self.local_bounds();
        let middle_x = b.min_x() + b.width / 2.0 - ANCHOR_WIDTH / 2.0;
        let middle_y = b.min_y() + b.height / 2.0 - ANCHOR_HEIGHT / 2.0;
        let right = b.max_x() - ANCHOR_WIDTH;
        let bottom = b.max_y() - ANCHOR_HEIGHT;

        self.anchors = [
            (b.min_x(), b.min_y()),
            (middle_x, b.min_y()),
            (right, b.min_y()),
            (b.min_x(), middle_y),
            (right, middle_y),
            (b.min_x(), bottom),
            (middle_x, bottom),
            (right, bottom),
        ]
        .into_iter()
        .map(|(x, y)| anchor(x, y))
        .collect();

        self.compensate_unresizable_x();
        self.compensate_unresizable_y();
    }
}

fn anchor(x: f64, y: f64) -> Region {
    let mut region = Region::shape(
        Shape::Rectangle {
            x,
            y,
            width: ANCHOR_WIDTH,
            height: ANCHOR_HEIGHT,
        },
        ANCHOR_FILL_COLOR,
    )
    .with_tag(TAG_IGNORE_HIT, "true")
    .with_tag(TAG_RESIZABLE, "false");
    region.set_stroke(ANCHOR_STROKE_COLOR);
    region
}
