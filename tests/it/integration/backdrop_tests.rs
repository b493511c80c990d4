//! Backdrop workflows: target lifecycle, selection, routing and display resizing.

use crate::helpers::{SpyListener, SpyRecorder, TestTargetBuilder, assert_bounds_close, init_tracing, rect};
use parking_lot::Mutex;
use shotboard::input::{Key, KeyOutcome, Modifiers, ResizeCursor};
use shotboard::recorder::{ChannelRecorder, RecorderEvent};
use shotboard::region::TAG_NAME;
use shotboard::selection::SelectionListener;
use shotboard::settings::Settings;
use shotboard::types::{Bounds, Point, TargetId};
use shotboard::{Backdrop, TargetDefinition, TargetError};
use std::sync::{Arc, Weak, mpsc};
use std::thread;
use std::time::Duration;

fn square_at(x: f64, y: f64) -> TargetDefinition {
    TestTargetBuilder::new()
        .with_rect(x, y, 100.0, 100.0)
        .definition()
}

#[test]
fn test_add_and_lookup() -> anyhow::Result<()> {
    init_tracing();
    let backdrop = Backdrop::default();
    let first = backdrop.add_target(square_at(0.0, 0.0))?;
    let second = backdrop.add_target(square_at(50.0, 50.0))?;

    assert_eq!(backdrop.len(), 2);
    assert_eq!(backdrop.index_of(first.id()), Some(0));
    assert_eq!(backdrop.index_of(second.id()), Some(1));
    assert_eq!(backdrop.get(second.id()).map(|h| h.id()), Some(second.id()));
    let ids: Vec<_> = backdrop.targets().iter().map(|h| h.id()).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
    Ok(())
}

#[test]
fn test_add_rejects_empty_definition() {
    let backdrop = Backdrop::default();
    let err = backdrop.add_target(TargetDefinition::default()).unwrap_err();
    assert!(matches!(err, TargetError::NoRegions));
    assert!(backdrop.is_empty());
}

#[test]
fn test_added_targets_inherit_clamping() -> anyhow::Result<()> {
    let backdrop = Backdrop::new(Settings {
        bounds_clamping: true,
        ..Settings::default()
    });
    let handle = backdrop.add_target(square_at(0.0, 0.0))?;
    assert!(handle.read().keep_in_bounds());
    Ok(())
}

#[test]
fn test_classify_prefers_topmost_target() -> anyhow::Result<()> {
    let backdrop = Backdrop::default();
    let bottom = backdrop.add_target(square_at(0.0, 0.0))?;
    let top = backdrop.add_target(square_at(50.0, 50.0))?;

    assert_eq!(backdrop.classify(Point::new(75.0, 75.0)).map(|h| h.target), Some(top.id()));
    assert_eq!(backdrop.classify(Point::new(25.0, 25.0)).map(|h| h.target), Some(bottom.id()));
    assert!(backdrop.classify(Point::new(500.0, 25.0)).is_none());
    Ok(())
}

#[test]
fn test_remove_target() -> anyhow::Result<()> {
    let backdrop = Backdrop::default();
    let handle = backdrop.add_target(square_at(0.0, 0.0))?;
    let id = handle.id();

    assert!(backdrop.remove_target(id));
    assert!(!backdrop.remove_target(id));
    assert_eq!(backdrop.index_of(id), None);
    assert!(backdrop.classify(Point::new(50.0, 50.0)).is_none());

    // Handles held elsewhere see a removed target that never hits
    assert!(handle.read().is_removed());
    assert!(handle.classify(Point::new(50.0, 50.0)).is_none());
    Ok(())
}

#[test]
fn test_selection_is_exclusive() -> anyhow::Result<()> {
    let listener = SpyListener::new();
    let backdrop = Backdrop::default().with_selection_listener(listener.clone());
    let a = backdrop.add_target(square_at(0.0, 0.0))?;
    let b = backdrop.add_target(square_at(200.0, 0.0))?;

    assert_eq!(backdrop.toggle_selection(a.id()), Some(true));
    assert_eq!(backdrop.toggle_selection(b.id()), Some(true));
    assert_eq!(backdrop.selected(), Some(b.id()));
    assert!(!a.read().is_selected());
    assert!(a.read().anchors().is_empty());

    assert_eq!(backdrop.toggle_selection(b.id()), Some(false));
    assert_eq!(backdrop.selected(), None);

    assert_eq!(
        listener.calls(),
        vec![(a.id(), true), (a.id(), false), (b.id(), true), (b.id(), false)]
    );
    Ok(())
}

/// Listener that looks the target up on the backdrop it belongs to.
#[derive(Default)]
struct BackdropQueryingListener {
    backdrop: Mutex<Weak<Backdrop>>,
    /// (target, selected, backdrop selection, target's own flag)
    seen: Mutex<Vec<(TargetId, bool, Option<TargetId>, bool)>>,
}

impl SelectionListener for BackdropQueryingListener {
    fn target_selected(&self, target: TargetId, selected: bool) {
        let Some(backdrop) = self.backdrop.lock().upgrade() else {
            return;
        };
        let current = backdrop.selected();
        let flag = backdrop.get(target).is_some_and(|h| h.read().is_selected());
        self.seen.lock().push((target, selected, current, flag));
    }
}

#[test]
fn test_selection_listener_may_query_backdrop() -> anyhow::Result<()> {
    let listener = Arc::new(BackdropQueryingListener::default());
    let backdrop = Arc::new(Backdrop::default().with_selection_listener(listener.clone()));
    *listener.backdrop.lock() = Arc::downgrade(&backdrop);
    let a = backdrop.add_target(square_at(0.0, 0.0))?.id();
    let b = backdrop.add_target(square_at(200.0, 0.0))?.id();

    // Run on a worker so a lock cycle fails the test instead of hanging it
    let (tx, rx) = mpsc::channel();
    let worker = Arc::clone(&backdrop);
    thread::spawn(move || {
        let first = worker.toggle_selection(a);
        let second = worker.toggle_selection(b);
        let _ = tx.send((first, second));
    });

    let results = rx.recv_timeout(Duration::from_secs(5))?;
    assert_eq!(results, (Some(true), Some(true)));
    assert_eq!(
        *listener.seen.lock(),
        vec![(a, true, Some(a), true), (a, false, Some(b), false), (b, true, Some(b), true)]
    );
    Ok(())
}

#[test]
fn test_debug_click_does_not_select() -> anyhow::Result<()> {
    let backdrop = Backdrop::new(Settings {
        debug_mode: true,
        ..Settings::default()
    });
    let handle = backdrop.add_target(square_at(0.0, 0.0))?;

    assert_eq!(backdrop.click(handle.id(), Modifiers::shift()), None);
    assert_eq!(backdrop.selected(), None);

    assert_eq!(backdrop.click(handle.id(), Modifiers::none()), Some(true));
    assert_eq!(backdrop.selected(), Some(handle.id()));
    Ok(())
}

#[test]
fn test_delete_key_removes_selected_target() -> anyhow::Result<()> {
    let backdrop = Backdrop::default();
    let handle = backdrop.add_target(
        TestTargetBuilder::new()
            .with_rect(0.0, 0.0, 100.0, 100.0)
            .user_deletable()
            .definition(),
    )?;

    assert_eq!(backdrop.key_pressed(Key::Delete, Modifiers::none()), KeyOutcome::Ignored);

    backdrop.toggle_selection(handle.id());
    assert_eq!(backdrop.key_pressed(Key::Delete, Modifiers::none()), KeyOutcome::RemoveRequested);
    assert!(backdrop.is_empty());
    assert_eq!(backdrop.selected(), None);
    Ok(())
}

#[test]
fn test_pointer_routing_moves_target_under_press() -> anyhow::Result<()> {
    let recorder = SpyRecorder::new();
    let backdrop = Backdrop::default().with_recorder(recorder.clone());
    let handle = backdrop.add_target(square_at(0.0, 0.0))?;

    assert_eq!(backdrop.pointer_moved(Point::new(99.0, 50.0)), ResizeCursor::E);
    assert_eq!(backdrop.pointer_pressed(Point::new(50.0, 50.0)), Some(handle.id()));
    backdrop.pointer_dragged(Point::new(60.0, 55.0), Modifiers::none());
    backdrop.pointer_released();

    assert_eq!(handle.read().position(), Point::new(10.0, 5.0));
    assert_eq!(
        recorder.events(),
        vec![RecorderEvent::Moved { target: handle.id(), x: 10, y: 5 }]
    );

    // Drags after release go nowhere
    backdrop.pointer_dragged(Point::new(90.0, 90.0), Modifiers::none());
    assert_eq!(handle.read().position(), Point::new(10.0, 5.0));
    assert_eq!(backdrop.pointer_pressed(Point::new(400.0, 400.0)), None);
    Ok(())
}

#[test]
fn test_display_extent_drives_clamping() -> anyhow::Result<()> {
    let backdrop = Backdrop::new(Settings {
        bounds_clamping: true,
        ..Settings::default()
    });
    let handle = backdrop.add_target(square_at(0.0, 0.0))?;
    backdrop.set_display_extent(150.0, 150.0);

    backdrop.pointer_pressed(Point::new(50.0, 50.0));
    backdrop.pointer_dragged(Point::new(110.0, 90.0), Modifiers::none());
    backdrop.pointer_released();

    // x would end at 160 > 150 and is held; y ends at 140 and applies
    assert_eq!(handle.read().position(), Point::new(0.0, 40.0));
    Ok(())
}

#[test]
fn test_resize_display_scales_targets() -> anyhow::Result<()> {
    let backdrop = Backdrop::default();
    let handle = backdrop.add_target(square_at(0.0, 0.0))?;
    handle.write().set_position(100.0, 100.0);

    backdrop.resize_display(1280.0, 960.0);

    assert_bounds_close(handle.read().bounds_in_parent(), Bounds::new(200.0, 200.0, 200.0, 200.0));
    assert_eq!(backdrop.settings().display_width, 1280.0);
    Ok(())
}

#[test]
fn test_region_lookup_by_name() -> anyhow::Result<()> {
    let backdrop = Backdrop::default();
    let handle = backdrop.add_target(
        TestTargetBuilder::new()
            .with_region(rect(0.0, 0.0, 100.0, 100.0).with_tag(TAG_NAME, "torso"))
            .with_tag("author", "range")
            .definition(),
    )?;

    assert!(backdrop.region_by_name(handle.id(), "torso").is_some());
    assert!(backdrop.region_by_name(handle.id(), "head").is_none());
    assert_eq!(handle.read().tags().get("author"), Some("range"));
    Ok(())
}

#[test]
fn test_channel_recorder_receives_backdrop_events() -> anyhow::Result<()> {
    let (recorder, rx) = ChannelRecorder::new();
    let backdrop = Backdrop::default().with_recorder(Arc::new(recorder));
    let handle = backdrop.add_target(square_at(0.0, 0.0))?;

    backdrop.toggle_selection(handle.id());
    backdrop.key_pressed(Key::Right, Modifiers::none());

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(events, vec![RecorderEvent::Moved { target: handle.id(), x: 1, y: 0 }]);
    Ok(())
}
