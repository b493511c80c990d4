//! Targets: ordered regions plus the geometry ledger that places them.
//!
//! Behaviour lives in sibling modules as further `impl Target` blocks:
//! - `selection` - selection flag, outline restyling and resize anchors
//! - `hit` - shot classification
//! - `input` - pointer and keyboard handlers

use crate::constants::DIMENSION_EPSILON;
use crate::error::{TargetError, TargetResult};
use crate::geometry::{TargetGeometry, dimension_delta, is_valid_scale};
use crate::input::InputState;
use crate::recorder::SessionRecorder;
use crate::region::{Region, Tags};
use crate::selection::SelectionListener;
use crate::settings::ResampleFilter;
use crate::types::{Bounds, Color, Point, Size, TargetId};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// What the target loader hands over: regions in z-order (last is topmost),
/// target-level tags and whether the user may delete the target.
#[derive(Clone, Debug, Default)]
pub struct TargetDefinition {
    pub regions: Vec<Region>,
    pub tags: Tags,
    pub user_deletable: bool,
}

impl TargetDefinition {
    pub fn new(regions: Vec<Region>) -> Self {
        Self {
            regions,
            ..Default::default()
        }
    }
}

pub struct Target {
    id: TargetId,
    pub(crate) regions: Vec<Region>,
    pub(crate) anchors: Vec<Region>,
    /// Outline colours captured when the target was selected
    pub(crate) saved_strokes: Vec<Option<Color>>,
    tags: Tags,
    pub(crate) geometry: TargetGeometry,
    /// Union of the content regions' layout bounds; fixed for the target's life
    local_bounds: Bounds,
    pub(crate) selected: bool,
    visible: bool,
    user_deletable: bool,
    keep_in_bounds: bool,
    removed: bool,
    pub(crate) resample_filter: ResampleFilter,
    pub(crate) input: InputState,
    /// Last pointer position seen by the target, in local units
    pub(crate) last_pointer: Point,
    recorder: Option<Arc<dyn SessionRecorder>>,
    pub(crate) selection_listener: Option<Arc<dyn SelectionListener>>,
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("id", &self.id)
            .field("regions", &self.regions.len())
            .field("geometry", &self.geometry)
            .field("selected", &self.selected)
            .field("removed", &self.removed)
            .finish_non_exhaustive()
    }
}

impl Target {
    pub fn new(definition: TargetDefinition) -> TargetResult<Self> {
        let TargetDefinition {
            regions,
            tags,
            user_deletable,
        } = definition;

        if let Some((index, bounds)) = regions
            .iter()
            .map(Region::layout_bounds)
            .enumerate()
            .find(|(_, b)| !(b.x.is_finite() && b.y.is_finite() && b.width.is_finite() && b.height.is_finite()))
        {
            return Err(TargetError::InvalidRegion(format!("region {index} has bounds {bounds:?}")));
        }

        let local_bounds = regions
            .iter()
            .map(Region::layout_bounds)
            .reduce(|acc, b| acc.union(&b))
            .ok_or(TargetError::NoRegions)?;

        if !(local_bounds.width.is_finite() && local_bounds.height.is_finite())
            || local_bounds.width <= 0.0
            || local_bounds.height <= 0.0
        {
            return Err(TargetError::InvalidSize {
                width: local_bounds.width,
                height: local_bounds.height,
            });
        }

        let mut target = Self {
            id: TargetId::new(),
            regions,
            anchors: Vec::new(),
            saved_strokes: Vec::new(),
            tags,
            geometry: TargetGeometry::new(local_bounds.size()),
            local_bounds,
            selected: false,
            visible: true,
            user_deletable,
            keep_in_bounds: false,
            removed: false,
            resample_filter: ResampleFilter::default(),
            input: InputState::default(),
            last_pointer: Point::default(),
            recorder: None,
            selection_listener: None,
        };
        // Definitions may carry unresizable regions; their own scale starts neutral
        target.compensate_unresizable_x();
        target.compensate_unresizable_y();
        Ok(target)
    }

    // ------------------------------------------------------------------
    // Identity and collaborators
    // ------------------------------------------------------------------

    pub fn id(&self) -> TargetId {
        self.id
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn set_recorder(&mut self, recorder: Option<Arc<dyn SessionRecorder>>) {
        self.recorder = recorder;
    }

    pub fn set_selection_listener(&mut self, listener: Option<Arc<dyn SelectionListener>>) {
        self.selection_listener = listener;
    }

    pub fn set_resample_filter(&mut self, filter: ResampleFilter) {
        self.resample_filter = filter;
    }

    // ------------------------------------------------------------------
    // Regions
    // ------------------------------------------------------------------

    /// Content regions in z-order, last is topmost. Excludes anchors.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    pub fn has_region(&self, index: usize) -> bool {
        index < self.regions.len()
    }

    /// First content region whose `name` tag equals `name`.
    pub fn region_by_name(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name() == Some(name))
    }

    // ------------------------------------------------------------------
    // Flags
    // ------------------------------------------------------------------

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_user_deletable(&self) -> bool {
        self.user_deletable
    }

    /// Whether interaction keeps the target inside the display extent.
    pub fn keep_in_bounds(&self) -> bool {
        self.keep_in_bounds
    }

    pub fn set_keep_in_bounds(&mut self, keep_in_bounds: bool) {
        self.keep_in_bounds = keep_in_bounds;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    pub(crate) fn mark_removed(&mut self) {
        self.removed = true;
        self.input.reset();
    }

    // ------------------------------------------------------------------
    // Geometry queries
    // ------------------------------------------------------------------

    /// Content layout bounds in local space.
    pub fn local_bounds(&self) -> Bounds {
        self.local_bounds
    }

    pub fn position(&self) -> Point {
        self.geometry.position
    }

    pub fn original_size(&self) -> Size {
        self.geometry.original_size()
    }

    pub fn bounds_in_parent(&self) -> Bounds {
        self.geometry.bounds_in_parent(&self.local_bounds)
    }

    pub fn dimension(&self) -> Size {
        self.bounds_in_parent().size()
    }

    pub fn scale_x(&self) -> f64 {
        self.dimension().width / self.original_size().width
    }

    pub fn scale_y(&self) -> f64 {
        self.dimension().height / self.original_size().height
    }

    pub fn parent_to_local(&self, p: Point) -> Point {
        self.geometry.parent_to_local(&self.local_bounds, p)
    }

    pub fn local_to_parent(&self, p: Point) -> Point {
        self.geometry.local_to_parent(&self.local_bounds, p)
    }

    /// Bounds of a target-local rectangle in parent space.
    pub fn local_bounds_to_parent(&self, b: &Bounds) -> Bounds {
        self.geometry.transform_bounds(&self.local_bounds, b)
    }

    // ------------------------------------------------------------------
    // Geometry mutations
    // ------------------------------------------------------------------

    pub fn set_position(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            trace!(target_id = %self.id, x, y, "Rejected non-finite position");
            return;
        }
        self.geometry.position = Point::new(x, y);
        self.record_moved();
    }

    /// Resize to `width` x `height` in parent units by multiplying the
    /// accumulated scale. Changes within `DIMENSION_EPSILON` are ignored.
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        let current = self.dimension();

        if (current.width - width).abs() > DIMENSION_EPSILON {
            let new_scale = self.geometry.scale_x * dimension_delta(current.width, width);
            self.apply_scale_x(new_scale);
        }

        if (current.height - height).abs() > DIMENSION_EPSILON {
            let new_scale = self.geometry.scale_y * dimension_delta(current.height, height);
            self.apply_scale_y(new_scale);
        }
    }

    /// Scale the target's parent-space bounds by the given factors relative
    /// to the parent origin, as used when the container itself is resized.
    pub fn scale(&mut self, width_factor: f64, height_factor: f64) {
        if !is_valid_scale(self.geometry.scale_x * width_factor)
            || !is_valid_scale(self.geometry.scale_y * height_factor)
        {
            trace!(target_id = %self.id, width_factor, height_factor, "Rejected degenerate scale");
            return;
        }

        let bounds = self.bounds_in_parent();

        let new_width = bounds.width * width_factor;
        let width_delta = new_width - bounds.width;
        let new_x = bounds.min_x() * width_factor;
        let delta_x = new_x - bounds.min_x() + width_delta / 2.0;

        let new_height = bounds.height * height_factor;
        let height_delta = new_height - bounds.height;
        let new_y = bounds.min_y() * height_factor;
        let delta_y = new_y - bounds.min_y() + height_delta / 2.0;

        let position = self.position();
        self.set_position(position.x + delta_x, position.y + delta_y);
        self.set_dimensions(new_width, new_height);
    }

    /// Stretch the target over the container and line its local origin up
    /// with the container origin.
    pub fn fill_parent(&mut self, extent: Size) {
        self.set_dimensions(extent.width, extent.height);
        let origin = self.local_to_parent(Point::default());
        let position = self.position();
        self.set_position(position.x - origin.x, position.y - origin.y);
    }

    /// Set the horizontal group scale if valid, keeping unresizable regions
    /// at their rendered size. Returns whether the scale was applied.
    pub(crate) fn apply_scale_x(&mut self, scale: f64) -> bool {
        if !is_valid_scale(scale) {
            trace!(target_id = %self.id, scale, "Rejected degenerate horizontal scale");
            return false;
        }
        self.geometry.scale_x = scale;
        self.compensate_unresizable_x();
        true
    }

    pub(crate) fn apply_scale_y(&mut self, scale: f64) -> bool {
        if !is_valid_scale(scale) {
            trace!(target_id = %self.id, scale, "Rejected degenerate vertical scale");
            return false;
        }
        self.geometry.scale_y = scale;
        self.compensate_unresizable_y();
        true
    }

    pub(crate) fn compensate_unresizable_x(&mut self) {
        let counter = 1.0 / self.geometry.scale_x;
        for region in self.regions.iter_mut().chain(self.anchors.iter_mut()) {
            if !region.is_resizable() {
                region.set_own_scale_x(counter);
            }
        }
    }

    pub(crate) fn compensate_unresizable_y(&mut self) {
        let counter = 1.0 / self.geometry.scale_y;
        for region in self.regions.iter_mut().chain(self.anchors.iter_mut()) {
            if !region.is_resizable() {
                region.set_own_scale_y(counter);
            }
        }
    }

    // ------------------------------------------------------------------
    // Recorder notifications
    // ------------------------------------------------------------------

    pub(crate) fn record_moved(&self) {
        if let Some(recorder) = &self.recorder {
            let p = self.position();
            recorder.record_moved(self.id, p.x.round() as i32, p.y.round() as i32);
        }
    }

    pub(crate) fn record_resized(&self) {
        if let Some(recorder) = &self.recorder {
            let d = self.dimension();
            recorder.record_resized(self.id, d.width, d.height);
        }
    }
}
