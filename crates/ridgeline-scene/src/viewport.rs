//! Viewport manager: keeps camera aspect and surface size in sync with the
//! host container.

/// Device pixel ratios above this are clamped when sizing the output
/// surface, bounding fragment cost on high-density displays. The cap applies
/// to surface sizing only.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Result of a successful resize: the new camera aspect ratio and the new
/// physical surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportUpdate {
    pub aspect_ratio: f32,
    pub surface_width: u32,
    pub surface_height: u32,
}

/// Tracks the host container's logical dimensions and scale factor.
#[derive(Debug, Clone)]
pub struct Viewport {
    width: u32,
    height: u32,
    scale_factor: f64,
    max_pixel_ratio: f64,
}

impl Viewport {
    /// Create a viewport from the container's initial dimensions, with the
    /// default [`MAX_PIXEL_RATIO`] cap.
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }

    /// Override the pixel-ratio cap used for surface sizing.
    pub fn with_pixel_ratio_cap(mut self, cap: f64) -> Self {
        self.max_pixel_ratio = cap;
        self
    }

    /// Handle a host resize signal.
    ///
    /// A zero dimension would produce a degenerate aspect ratio, so the
    /// update is skipped entirely and the previous state kept.
    pub fn handle_resize(&mut self, width: u32, height: u32) -> Option<ViewportUpdate> {
        if width == 0 || height == 0 {
            log::warn!("ignoring resize to degenerate {width}x{height}");
            return None;
        }

        self.width = width;
        self.height = height;

        let (surface_width, surface_height) = self.surface_size();
        Some(ViewportUpdate {
            aspect_ratio: width as f32 / height as f32,
            surface_width,
            surface_height,
        })
    }

    /// Handle a scale factor change (window moved between displays).
    pub fn handle_scale_factor_changed(
        &mut self,
        scale_factor: f64,
        width: u32,
        height: u32,
    ) -> Option<ViewportUpdate> {
        self.scale_factor = scale_factor;
        self.handle_resize(width, height)
    }

    /// Physical output-surface dimensions: logical size scaled by the device
    /// pixel ratio, capped at the configured ratio, never zero.
    pub fn surface_size(&self) -> (u32, u32) {
        let ratio = self.scale_factor.min(self.max_pixel_ratio);
        let w = ((self.width as f64 * ratio).round() as u32).max(1);
        let h = ((self.height as f64 * ratio).round() as u32).max(1);
        (w, h)
    }

    /// Current logical width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current logical height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current (uncapped) scale factor.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Whether the container has non-zero area.
    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
