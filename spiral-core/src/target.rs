/// Backing-store sizing for the render target
use crate::error::SceneError;

/// Pixel dimensions of the drawing buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderTarget {
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Match the backing store to the on-screen size scaled by the device
    /// pixel ratio. Returns whether the dimensions changed.
    pub fn resize_to_display(
        &mut self,
        logical_width: f64,
        logical_height: f64,
        pixel_ratio: f64,
    ) -> Result<bool, SceneError> {
        if !(pixel_ratio.is_finite() && pixel_ratio > 0.0) {
            return Err(SceneError::InvalidPixelRatio(pixel_ratio));
        }

        let width = device_pixels(logical_width, pixel_ratio);
        let height = device_pixels(logical_height, pixel_ratio);

        if self.width == width && self.height == height {
            return Ok(false);
        }

        tracing::debug!(
            from_width = self.width,
            from_height = self.height,
            width,
            height,
            "resizing render target"
        );
        self.width = width;
        self.height = height;
        Ok(true)
    }
}

fn device_pixels(logical: f64, pixel_ratio: f64) -> u32 {
    // Negative or NaN layout sizes collapse to an empty buffer.
    (logical * pixel_ratio).round().max(0.0) as u32
}
