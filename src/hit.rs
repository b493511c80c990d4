//! Shot classification.
//!
//! A point in container space is tested against a target's regions from the
//! topmost down. The first region that passes its bounds test, is not tagged
//! `ignore-hit`, and actually covers the point wins:
//!
//! - shapes test their fill geometry in local space
//! - images test the alpha of the pixel under the point, sampled at the
//!   region's rendered size (resampling when it differs from the native one)
//!
//! `classify` runs under the target's read lock on the detection thread, so
//! it only reads state.

use crate::constants::CLASSIFY_WARN_MS;
use crate::profile_scope;
use crate::region::{Region, RegionKind, Sample};
use crate::target::Target;
use crate::types::{Point, TargetId};
use tracing::{debug, error};

/// A classified shot.
#[derive(Clone, Debug)]
pub struct Hit {
    pub target: TargetId,
    /// Index of the region within the target's content regions
    pub region_index: usize,
    pub region: Region,
    /// Shot position relative to the region's top-left corner, in parent units
    pub x: i32,
    pub y: i32,
}

impl Target {
    /// Classify a container-space point against this target.
    pub fn classify(&self, point: Point) -> Option<Hit> {
        profile_scope!("classify", CLASSIFY_WARN_MS);

        if self.is_removed() || !self.is_visible() || !point.is_finite() {
            return None;
        }
        if !self.bounds_in_parent().contains(point) {
            return None;
        }

        for (index, region) in self.regions().iter().enumerate().rev() {
            if region.is_ignore_hit() {
                continue;
            }

            let bounds = self.local_bounds_to_parent(&region.bounds_in_target());
            if !bounds.contains(point) {
                continue;
            }

            let adjusted_x = (point.x - bounds.min_x()).floor();
            let adjusted_y = (point.y - bounds.min_y()).floor();

            match &region.kind {
                RegionKind::Shape { .. } => {
                    if !region.contains(self.parent_to_local(point)) {
                        continue;
                    }
                }
                RegionKind::Image(image) => {
                    if adjusted_x < 0.0 || adjusted_y < 0.0 {
                        debug!(
                            target_id = %self.id(),
                            region = index,
                            adjusted_x,
                            adjusted_y,
                            "Negative adjusted coordinate, abandoning classification"
                        );
                        return None;
                    }

                    let sample = image.source.sample_alpha(
                        adjusted_x as u32,
                        adjusted_y as u32,
                        bounds.size(),
                        self.resample_filter,
                    );
                    match sample {
                        Sample::Alpha(0) => continue,
                        Sample::Alpha(_) => {}
                        Sample::OutOfBounds { width, height } => {
                            error!(
                                target_id = %self.id(),
                                region = index,
                                adjusted_x,
                                adjusted_y,
                                width,
                                height,
                                "Adjusted coordinate outside sampled image"
                            );
                            continue;
                        }
                    }
                }
            }

            return Some(Hit {
                target: self.id(),
                region_index: index,
                region: region.clone(),
                x: adjusted_x as i32,
                y: adjusted_y as i32,
            });
        }

        None
    }
}
