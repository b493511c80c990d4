//! Interaction and classification running on different threads.

use crate::helpers::{TestTargetBuilder, image_with_holes};
use shotboard::input::Modifiers;
use shotboard::region::Region;
use shotboard::settings::Settings;
use shotboard::types::Point;
use shotboard::{Backdrop, TargetDefinition};
use std::sync::Barrier;
use std::thread;

fn mixed_target() -> TargetDefinition {
    TestTargetBuilder::new()
        .with_rect(0.0, 0.0, 200.0, 200.0)
        .with_region(Region::image(
            Point::new(50.0, 50.0),
            image_with_holes(100, 100, &[(10, 10), (50, 50), (99, 99)]),
        ))
        .definition()
}

#[test]
fn test_classify_sees_consistent_geometry_while_resizing() -> anyhow::Result<()> {
    let backdrop = Backdrop::default();
    let handle = backdrop.add_target(mixed_target())?;
    let settings = Settings::default();
    let barrier = Barrier::new(2);

    thread::scope(|s| {
        s.spawn(|| {
            barrier.wait();
            for i in 0..200 {
                let mut target = handle.write();
                let wobble = f64::from(i % 20);
                target.set_dimensions(150.0 + wobble * 5.0, 250.0 - wobble * 3.0);
                target.set_position(wobble, -wobble);
                drop(target);

                let mut target = handle.write();
                target.on_pointer_pressed(Point::new(100.0, 100.0));
                target.on_pointer_dragged(Point::new(101.0, 99.0), Modifiers::none(), &settings);
                target.on_pointer_released();
            }
        });

        s.spawn(|| {
            barrier.wait();
            for i in 0..2000 {
                let point = Point::new(f64::from(i % 200), f64::from((i * 7) % 200));
                if let Some(hit) = backdrop.classify(point) {
                    assert!(hit.region_index < 2);
                    assert!(hit.x >= 0 && hit.y >= 0);
                    assert_eq!(hit.target, handle.id());
                }
            }
        });
    });

    Ok(())
}

#[test]
fn test_removal_races_classification_safely() -> anyhow::Result<()> {
    for _ in 0..20 {
        let backdrop = Backdrop::default();
        let handle = backdrop.add_target(mixed_target())?;
        let id = handle.id();
        let barrier = Barrier::new(2);

        thread::scope(|s| {
            s.spawn(|| {
                barrier.wait();
                backdrop.remove_target(id);
            });
            s.spawn(|| {
                barrier.wait();
                for _ in 0..200 {
                    // Either a live hit or nothing, never a panic
                    let _ = handle.classify(Point::new(20.0, 20.0));
                    let _ = backdrop.classify(Point::new(20.0, 20.0));
                }
            });
        });

        assert!(handle.classify(Point::new(20.0, 20.0)).is_none());
        assert!(backdrop.classify(Point::new(20.0, 20.0)).is_none());
    }
    Ok(())
}
