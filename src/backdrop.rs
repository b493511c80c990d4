//! The display container: ordered targets over a backdrop.
//!
//! ## Locking
//!
//! The target list and each target have their own `RwLock`. The list lock is
//! only held to add, remove or snapshot handles, never while a target lock
//! is taken, so the UI thread mutating a target and the detection thread
//! classifying shots only ever contend on the target itself.
//!
//! Removal marks the target removed under its write lock before the handle
//! is dropped from the list. A classification that grabbed the handle
//! earlier sees either the live target or a removed one that never hits.
//!
//! Selection listeners are notified after every backdrop and target lock is
//! released, so a listener may call back into the backdrop.

use crate::error::TargetResult;
use crate::hit::Hit;
use crate::input::{Key, KeyOutcome, Modifiers, ResizeCursor};
use crate::recorder::SessionRecorder;
use crate::region::Region;
use crate::selection::SelectionListener;
use crate::settings::Settings;
use crate::target::{Target, TargetDefinition};
use crate::types::{Point, Size, TargetId};
use parking_lot::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;
use tracing::{debug, trace};

/// Shared handle to a target.
#[derive(Clone, Debug)]
pub struct TargetHandle {
    id: TargetId,
    inner: Arc<RwLock<Target>>,
}

impl TargetHandle {
    pub fn new(target: Target) -> Self {
        Self {
            id: target.id(),
            inner: Arc::new(RwLock::new(target)),
        }
    }

    pub fn id(&self) -> TargetId {
        self.id
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Target> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Target> {
        self.inner.write()
    }

    /// Classify against a consistent snapshot of the target.
    pub fn classify(&self, point: Point) -> Option<Hit> {
        self.inner.read().classify(point)
    }
}

pub struct Backdrop {
    settings: RwLock<Settings>,
    targets: RwLock<Vec<TargetHandle>>,
    selected: Mutex<Option<TargetId>>,
    /// Target receiving the current press/drag
    active: Mutex<Option<TargetHandle>>,
    recorder: Option<Arc<dyn SessionRecorder>>,
    selection_listener: Option<Arc<dyn SelectionListener>>,
}

impl Backdrop {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
            targets: RwLock::new(Vec::new()),
            selected: Mutex::new(None),
            active: Mutex::new(None),
            recorder: None,
            selection_listener: None,
        }
    }

    /// Attach a recorder to every target added from now on.
    pub fn with_recorder(mut self, recorder: Arc<dyn SessionRecorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn with_selection_listener(mut self, listener: Arc<dyn SelectionListener>) -> Self {
        self.selection_listener = Some(listener);
        self
    }

    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    /// Change the extent used for bounds clamping without touching targets.
    pub fn set_display_extent(&self, width: f64, height: f64) {
        let mut settings = self.settings.write();
        settings.display_width = width;
        settings.display_height = height;
    }

    /// Change the extent and rescale every target by the same factors.
    pub fn resize_display(&self, width: f64, height: f64) {
        let old = self.settings.read().extent();
        self.set_display_extent(width, height);

        if old.width <= 0.0 || old.height <= 0.0 {
            return;
        }
        let (fx, fy) = (width / old.width, height / old.height);
        for handle in self.targets() {
            handle.write().scale(fx, fy);
        }
    }

    // ------------------------------------------------------------------
    // Target list
    // ------------------------------------------------------------------

    /// Build a target from `definition` and place it on top.
    pub fn add_target(&self, definition: TargetDefinition) -> TargetResult<TargetHandle> {
        let settings = self.settings();
        let mut target = Target::new(definition)?;
        target.set_keep_in_bounds(settings.bounds_clamping);
        target.set_resample_filter(settings.resample_filter);
        target.set_recorder(self.recorder.clone());
        target.set_selection_listener(self.selection_listener.clone());

        let handle = TargetHandle::new(target);
        self.targets.write().push(handle.clone());
        debug!(target_id = %handle.id(), "Target added");
        Ok(handle)
    }

    /// Remove a target. Returns false if it was not on the backdrop.
    pub fn remove_target(&self, id: TargetId) -> bool {
        let handle = {
            let mut targets = self.targets.write();
            let Some(index) = targets.iter().position(|h| h.id() == id) else {
                return false;
            };
            targets.remove(index)
        };

        handle.write().mark_removed();

        {
            let mut selected = self.selected.lock();
            if *selected == Some(id) {
                *selected = None;
            }
        }
        {
            let mut active = self.active.lock();
            if active.as_ref().is_some_and(|h| h.id() == id) {
                *active = None;
            }
        }

        debug!(target_id = %id, "Target removed");
        true
    }

    pub fn get(&self, id: TargetId) -> Option<TargetHandle> {
        self.targets.read().iter().find(|h| h.id() == id).cloned()
    }

    /// Snapshot of the targets in z-order, last is topmost.
    pub fn targets(&self) -> Vec<TargetHandle> {
        self.targets.read().clone()
    }

    pub fn index_of(&self, id: TargetId) -> Option<usize> {
        self.targets.read().iter().position(|h| h.id() == id)
    }

    pub fn len(&self) -> usize {
        self.targets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.read().is_empty()
    }

    pub fn region_by_name(&self, id: TargetId, name: &str) -> Option<Region> {
        self.get(id)?.read().region_by_name(name).cloned()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selected(&self) -> Option<TargetId> {
        *self.selected.lock()
    }

    /// Toggle a target's selection, deselecting any other selected target
    /// first. Returns the target's new selection state.
    pub fn toggle_selection(&self, id: TargetId) -> Option<bool> {
        let handle = self.get(id)?;
        let mut changes = Vec::with_capacity(2);

        let now_selected = {
            let mut selected = self.selected.lock();

            let previous = (*selected).filter(|previous| *previous != id).and_then(|previous| self.get(previous));
            if let Some(previous) = previous {
                changes.extend(previous.write().set_selected_deferred(false));
            }

            let mut target = handle.write();
            changes.push(target.toggle_selected_deferred());
            *selected = target.is_selected().then_some(id);
            target.is_selected()
        };

        // Listeners may query the backdrop, so no lock is held here
        for change in changes {
            change.notify();
        }
        Some(now_selected)
    }

    // ------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------

    /// Classify a shot against the targets, topmost first.
    pub fn classify(&self, point: Point) -> Option<Hit> {
        self.targets().iter().rev().find_map(|h| h.classify(point))
    }

    // ------------------------------------------------------------------
    // Input routing
    // ------------------------------------------------------------------

    /// Topmost visible target whose bounds contain `point`.
    pub fn target_at(&self, point: Point) -> Option<TargetHandle> {
        self.targets().into_iter().rev().find(|h| {
            let target = h.read();
            target.is_visible() && target.bounds_in_parent().contains(point)
        })
    }

    pub fn pointer_moved(&self, point: Point) -> ResizeCursor {
        match self.target_at(point) {
            Some(handle) => handle.write().on_pointer_moved(point),
            None => ResizeCursor::Default,
        }
    }

    /// Press on the backdrop. Returns the target that captured the press.
    pub fn pointer_pressed(&self, point: Point) -> Option<TargetId> {
        let handle = self.target_at(point)?;
        handle.write().on_pointer_pressed(point);
        let id = handle.id();
        *self.active.lock() = Some(handle);
        Some(id)
    }

    pub fn pointer_dragged(&self, point: Point, modifiers: Modifiers) {
        let settings = self.settings();
        let active = self.active.lock().clone();
        if let Some(handle) = active {
            handle.write().on_pointer_dragged(point, modifiers, &settings);
        }
    }

    pub fn pointer_released(&self) {
        let active = self.active.lock().take();
        if let Some(handle) = active {
            handle.write().on_pointer_released();
        }
    }

    /// Click on a target: toggles its selection unless the modifiers are
    /// reserved for test shots.
    pub fn click(&self, id: TargetId, modifiers: Modifiers) -> Option<bool> {
        let settings = self.settings();
        let toggles = self.get(id)?.read().on_click(modifiers, &settings);
        if !toggles {
            trace!(target_id = %id, "Click reserved for test shot");
            return None;
        }
        self.toggle_selection(id)
    }

    /// Send a key to the selected target, removing it when asked to.
    pub fn key_pressed(&self, key: Key, modifiers: Modifiers) -> KeyOutcome {
        let Some(handle) = self.selected().and_then(|id| self.get(id)) else {
            return KeyOutcome::Ignored;
        };
        let settings = self.settings();
        let outcome = handle.write().on_key_pressed(key, modifiers, &settings);
        if outcome == KeyOutcome::RemoveRequested {
            self.remove_target(handle.id());
        }
        outcome
    }

    pub fn extent(&self) -> Size {
        self.settings.read().extent()
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
