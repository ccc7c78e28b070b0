/// Capability supplied by the rendering layer: measure the width of the
/// duplicated strip content in whatever unit the renderer positions with
/// (pixels, terminal cells, ...).
///
/// Returns `None` while the container is not mounted (or already torn
/// down). The animator treats that as a precondition and does no work; it
/// is not an error to surface.
pub trait ContentExtent {
    fn measure_content_extent(&self) -> Option<f64>;
}

/// A fixed, pre-computed extent. Useful for renderers that know their
/// content width up front, and for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedExtent(f64);

impl FixedExtent {
    pub fn new(extent: f64) -> Self {
        Self(extent)
    }
}

impl ContentExtent for FixedExtent {
    fn measure_content_extent(&self) -> Option<f64> {
        Some(self.0)
    }
}

/// An unmounted container: always reports no extent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unmounted;

impl ContentExtent for Unmounted {
    fn measure_content_extent(&self) -> Option<f64> {
        None
    }
}
