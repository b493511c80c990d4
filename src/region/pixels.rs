//! Pixel buffers backing image regions and their alpha sampling.

use crate::constants::RESAMPLE_EPSILON;
use crate::error::TargetResult;
use crate::settings::ResampleFilter;
use crate::types::Size;
use image::{RgbaImage, imageops};
use parking_lot::Mutex;
use std::sync::Arc;

/// Outcome of sampling a pixel buffer at an adjusted coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sample {
    Alpha(u8),
    /// The coordinate falls outside the (possibly resampled) buffer.
    OutOfBounds { width: u32, height: u32 },
}

/// Shared, immutable RGBA buffer. Cloning is cheap.
///
/// The last resampled copy is kept, so repeated shots against a target at
/// the same rendered size resize the buffer once.
#[derive(Clone, Debug)]
pub struct PixelSource {
    pixels: Arc<RgbaImage>,
    resampled: Arc<Mutex<Option<Resampled>>>,
}

#[derive(Debug)]
struct Resampled {
    width: u32,
    height: u32,
    filter: ResampleFilter,
    pixels: Arc<RgbaImage>,
}

impl PixelSource {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
            resampled: Arc::new(Mutex::new(None)),
        }
    }

    /// Decode an encoded image (PNG) into RGBA.
    pub fn decode(bytes: &[u8]) -> TargetResult<Self> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::new(decoded.to_rgba8()))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Native size as floating point.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Whether the buffer must be resampled to be sampled at `rendered` size.
    pub fn needs_resample(&self, rendered: Size) -> bool {
        let native = self.size();
        (native.width - rendered.width).abs() > RESAMPLE_EPSILON
            || (native.height - rendered.height).abs() > RESAMPLE_EPSILON
    }

    /// Sample the alpha channel at `(x, y)` with the buffer displayed at
    /// `rendered` size. Coordinates must be non-negative.
    pub fn sample_alpha(&self, x: u32, y: u32, rendered: Size, filter: ResampleFilter) -> Sample {
        if !self.needs_resample(rendered) {
            return sample(&self.pixels, x, y);
        }

        // Truncation matches how the rendered extent maps onto whole pixels
        let width = rendered.width.max(0.0) as u32;
        let height = rendered.height.max(0.0) as u32;
        if width == 0 || height == 0 {
            return Sample::OutOfBounds { width, height };
        }

        sample(&self.resampled(width, height, filter), x, y)
    }

    fn resampled(&self, width: u32, height: u32, filter: ResampleFilter) -> Arc<RgbaImage> {
        let mut cache = self.resampled.lock();
        let fresh = cache
            .as_ref()
            .filter(|c| c.width == width && c.height == height && c.filter == filter);
        if let Some(cached) = fresh {
            return Arc::clone(&cached.pixels);
        }

        let pixels = Arc::new(imageops::resize(self.pixels.as_ref(), width, height, filter.filter_type()));
        *cache = Some(Resampled {
            width,
            height,
            filter,
            pixels: Arc::clone(&pixels),
        });
        pixels
    }
}

fn sample(pixels: &RgbaImage, x: u32, y: u32) -> Sample {
    match pixels.get_pixel_checked(x, y) {
        Some(px) => Sample::Alpha(px.0[3]),
        None => Sample::OutOfBounds {
            width: pixels.width(),
            height: pixels.height(),
        },
    }
}
