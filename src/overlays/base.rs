use crate::core::geo::{LatLng, PixelPoint};
use crate::core::view::MapView;

/// Pixel footprint of an overlay's rendered box, when known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayDimensions {
    pub width: f64,
    pub height: f64,
}

/// Common behavior for elements drawn on top of the base image.
pub trait Overlay {
    fn id(&self) -> &str;

    /// Geographic anchor of the overlay.
    fn position(&self) -> LatLng;

    /// Pixel delta from the projected anchor to the drawing origin (top-left).
    fn anchor_offset(&self) -> PixelPoint {
        PixelPoint::new(0.0, 0.0)
    }

    /// Rendered footprint, if the overlay knows it.
    fn dimensions(&self) -> Option<OverlayDimensions> {
        None
    }

    /// JSON snapshot of the overlay's drawing options.
    fn options(&self) -> serde_json::Value {
        serde_json::Value::Null
    }

    /// Projects the overlay onto `view`, yielding the pixel position of its
    /// drawing origin. Returns `None` until the base image reports loaded.
    fn place(&self, view: &MapView) -> Option<PixelPoint> {
        if !view.is_loaded() {
            return None;
        }
        let anchor = view.lat_lng_to_pixel(self.position());
        Some(anchor.add(&self.anchor_offset()))
    }
}
