//! Tests for shot classification against shapes and images.

use crate::helpers::{TestTargetBuilder, image_with_holes, init_tracing, rect, square};
use image::{Rgba, RgbaImage};
use shotboard::region::{PixelSource, Region, RegionType, Shape, TAG_IGNORE_HIT, TAG_NAME};
use shotboard::settings::ResampleFilter;
use shotboard::types::{Color, Point};

#[test]
fn test_transparent_pixel_is_a_miss() {
    init_tracing();
    let image = Region::image(Point::new(10.0, 10.0), image_with_holes(50, 50, &[(5, 5)]));
    let target = TestTargetBuilder::new().with_region(image).build();

    assert!(target.classify(Point::new(15.0, 15.0)).is_none());

    let hit = target.classify(Point::new(20.0, 20.0)).expect("opaque pixel hit");
    assert_eq!((hit.x, hit.y), (10, 10));
    assert_eq!(hit.region_index, 0);
    assert_eq!(hit.region.region_type(), RegionType::Image);
    assert_eq!(hit.target, target.id());
}

#[test]
fn test_scaled_image_is_resampled_before_sampling() {
    init_tracing();
    let image = Region::image(Point::new(0.0, 0.0), image_with_holes(50, 50, &[(5, 5)]));
    let mut target = TestTargetBuilder::new().with_region(image).build();
    target.set_dimensions(100.0, 100.0);
    assert_eq!(target.bounds_in_parent().min_x(), -25.0);

    // Native (5, 5) covers rendered (10..12, 10..12)
    assert!(target.classify(Point::new(-25.0 + 10.5, -25.0 + 10.5)).is_none());

    let hit = target.classify(Point::new(-25.0 + 30.5, -25.0 + 30.5)).expect("opaque pixel hit");
    assert_eq!((hit.x, hit.y), (30, 30));
}

#[test]
fn test_smooth_filter_still_hits_opaque_areas() {
    let image = Region::image(Point::new(0.0, 0.0), image_with_holes(40, 40, &[]));
    let mut target = TestTargetBuilder::new().with_region(image).build();
    target.set_resample_filter(ResampleFilter::Smooth);
    target.set_dimensions(60.0, 60.0);

    assert!(target.classify(target.bounds_in_parent().center()).is_some());
}

#[test]
fn test_ignore_hit_region_on_top_is_transparent_to_shots() {
    let target = TestTargetBuilder::new()
        .with_rect(0.0, 0.0, 100.0, 100.0)
        .with_region(rect(0.0, 0.0, 100.0, 100.0).with_tag(TAG_IGNORE_HIT, "true"))
        .build();

    let hit = target.classify(Point::new(50.0, 50.0)).expect("hit below ignored region");
    assert_eq!(hit.region_index, 0);
}

#[test]
fn test_malformed_ignore_hit_defaults_to_hittable() {
    let target = TestTargetBuilder::new()
        .with_region(rect(0.0, 0.0, 100.0, 100.0).with_tag(TAG_IGNORE_HIT, "sometimes"))
        .build();

    assert!(target.classify(Point::new(50.0, 50.0)).is_some());
}

#[test]
fn test_hit_carries_region_tags() {
    let target = TestTargetBuilder::new()
        .with_region(rect(0.0, 0.0, 100.0, 100.0).with_tag(TAG_NAME, "body"))
        .with_region(rect(40.0, 10.0, 20.0, 20.0).with_tag(TAG_NAME, "head"))
        .build();

    let hit = target.classify(Point::new(50.0, 20.0)).expect("head hit");
    assert_eq!(hit.region.name(), Some("head"));
    assert_eq!((hit.x, hit.y), (10, 10));
    assert_eq!(target.region_by_name("body").map(|r| r.region_type()), Some(RegionType::Shape));
}

#[test]
fn test_shape_hit_follows_position_and_scale() {
    let mut target = square();
    target.set_position(200.0, 100.0);
    target.set_dimensions(50.0, 50.0);

    // Bounds are now (225, 125) .. (275, 175)
    assert!(target.classify(Point::new(224.0, 150.0)).is_none());
    let hit = target.classify(Point::new(226.5, 150.0)).expect("hit inside scaled bounds");
    assert_eq!((hit.x, hit.y), (1, 25));
}

#[test]
fn test_polygon_region_uses_fill_geometry() {
    let triangle = Region::shape(
        Shape::Polygon {
            points: vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(0.0, 100.0)],
        },
        Color::rgb(10, 10, 10),
    );
    let target = TestTargetBuilder::new().with_region(triangle).build();

    assert!(target.classify(Point::new(10.0, 10.0)).is_some());
    assert!(target.classify(Point::new(90.0, 90.0)).is_none());
}

#[test]
fn test_removed_or_hidden_target_never_hits() {
    let mut target = square();
    target.set_visible(false);
    assert!(target.classify(Point::new(50.0, 50.0)).is_none());
    target.set_visible(true);
    assert!(target.classify(Point::new(50.0, 50.0)).is_some());
}

#[test]
fn test_decoded_png_region() -> anyhow::Result<()> {
    let mut pixels = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
    pixels.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    let mut encoded = std::io::Cursor::new(Vec::new());
    pixels.write_to(&mut encoded, image::ImageFormat::Png)?;

    let source = PixelSource::decode(encoded.get_ref())?;
    let target = TestTargetBuilder::new()
        .with_region(Region::image(Point::new(0.0, 0.0), source))
        .build();

    assert!(target.classify(Point::new(0.5, 0.5)).is_none());
    assert!(target.classify(Point::new(2.5, 2.5)).is_some());
    Ok(())
}
