//! Target regions: the shape and image primitives a target is made of.
//!
//! ## Modules
//!
//! - `tags` - String tag map with typed accessors (`resizable`, `ignore-hit`, commands)
//! - `shape` - Rectangle/ellipse/polygon geometry and fill containment
//! - `pixels` - Pixel buffers and alpha sampling for image regions
//!
//! A region's `layout_bounds` are its un-scaled bounds in target-local space.
//! Each region also carries its own scale, applied about the centre of its
//! layout bounds; it stays at 1.0 unless the region is unresizable, in which
//! case the target keeps it at the inverse of the group scale.

mod pixels;
mod shape;
mod tags;

pub use pixels::{PixelSource, Sample};
pub use shape::Shape;
pub use tags::{Command, TAG_COMMAND, TAG_IGNORE_HIT, TAG_NAME, TAG_RESIZABLE, TAG_SUBTARGET, Tags};

use crate::constants::UNSELECTED_STROKE_COLOR;
use crate::types::{Bounds, Color, Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionType {
    Shape,
    Image,
}

/// Image primitive placed at `origin` and displayed at `display_size`.
#[derive(Clone, Debug)]
pub struct ImageRegion {
    pub origin: Point,
    pub display_size: Size,
    pub source: PixelSource,
}

#[derive(Clone, Debug)]
pub enum RegionKind {
    Shape { shape: Shape, fill: Color, stroke: Color },
    Image(ImageRegion),
}

#[derive(Clone, Debug)]
pub struct Region {
    pub kind: RegionKind,
    pub tags: Tags,
    scale_x: f64,
    scale_y: f64,
}

impl Region {
    pub fn shape(shape: Shape, fill: Color) -> Self {
        Self {
            kind: RegionKind::Shape {
                shape,
                fill,
                stroke: UNSELECTED_STROKE_COLOR,
            },
            tags: Tags::new(),
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Image region displayed at the buffer's native size.
    pub fn image(origin: Point, source: PixelSource) -> Self {
        let display_size = source.size();
        Self::image_with_size(origin, display_size, source)
    }

    pub fn image_with_size(origin: Point, display_size: Size, source: PixelSource) -> Self {
        Self {
            kind: RegionKind::Image(ImageRegion {
                origin,
                display_size,
                source,
            }),
            tags: Tags::new(),
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    pub fn region_type(&self) -> RegionType {
        match self.kind {
            RegionKind::Shape { .. } => RegionType::Shape,
            RegionKind::Image(_) => RegionType::Image,
        }
    }

    pub fn is_resizable(&self) -> bool {
        self.tags.is_resizable()
    }

    pub fn is_ignore_hit(&self) -> bool {
        self.tags.is_ignore_hit()
    }

    pub fn name(&self) -> Option<&str> {
        self.tags.name()
    }

    /// Un-scaled bounds in target-local space.
    pub fn layout_bounds(&self) -> Bounds {
        match &self.kind {
            RegionKind::Shape { shape, .. } => shape.bounds(),
            RegionKind::Image(img) => Bounds::new(
                img.origin.x,
                img.origin.y,
                img.display_size.width,
                img.display_size.height,
            ),
        }
    }

    /// Bounds in target-local space after the region's own scale.
    pub fn bounds_in_target(&self) -> Bounds {
        self.layout_bounds().scaled_about_center(self.scale_x, self.scale_y)
    }

    /// Map a target-local point into the region's un-scaled space.
    pub fn target_to_region(&self, p: Point) -> Point {
        let c = self.layout_bounds().center();
        Point::new(c.x + (p.x - c.x) / self.scale_x, c.y + (p.y - c.y) / self.scale_y)
    }

    /// Fill containment for a target-local point. Images use their bounds.
    pub fn contains(&self, p: Point) -> bool {
        match &self.kind {
            RegionKind::Shape { shape, .. } => shape.contains(self.target_to_region(p)),
            RegionKind::Image(_) => self.bounds_in_target().contains(p),
        }
    }

    pub fn own_scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    pub(crate) fn set_own_scale_x(&mut self, scale: f64) {
        self.scale_x = scale;
    }

    pub(crate) fn set_own_scale_y(&mut self, scale: f64) {
        self.scale_y = scale;
    }

    /// Outline colour; `None` for image regions.
    pub fn stroke(&self) -> Option<Color> {
        match &self.kind {
            RegionKind::Shape { stroke, .. } => Some(*stroke),
            RegionKind::Image(_) => None,
        }
    }

    pub fn set_stroke(&mut self, color: Color) {
        if let RegionKind::Shape { stroke, .. } = &mut self.kind {
            *stroke = color;
        }
    }

    pub fn fill(&self) -> Option<Color> {
        match &self.kind {
            RegionKind::Shape { fill, .. } => Some(*fill),
            RegionKind::Image(_) => None,
        }
    }
}
