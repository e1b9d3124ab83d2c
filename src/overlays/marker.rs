use crate::core::constants::{DEFAULT_MARKER_COLOR, MARKER_BASE_SIZE, MARKER_TIP_EXTENSION};
use crate::core::geo::{LatLng, PixelPoint};
use crate::overlays::base::{Overlay, OverlayDimensions};

/// A pin-shaped marker whose tip sits on its geographic coordinate.
pub struct Marker {
    id: String,
    position: LatLng,
    scale: f64,
    symbol: Option<String>,
    color: String,
}

impl Marker {
    pub fn new(id: impl Into<String>, position: impl Into<LatLng>) -> Self {
        Self {
            id: id.into(),
            position: position.into(),
            scale: 1.0,
            symbol: None,
            color: DEFAULT_MARKER_COLOR.to_string(),
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn set_position(&mut self, position: impl Into<LatLng>) {
        self.position = position.into();
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rendered pin footprint. The body scales; the tip extension does not.
    pub fn size(&self) -> OverlayDimensions {
        OverlayDimensions {
            width: MARKER_BASE_SIZE * self.scale,
            height: MARKER_BASE_SIZE * self.scale + MARKER_TIP_EXTENSION,
        }
    }
}

impl Overlay for Marker {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> LatLng {
        self.position
    }

    // Bottom-center anchored: the box is shifted half a width left and a
    // full height up so the tip lands on the coordinate.
    fn anchor_offset(&self) -> PixelPoint {
        let size = self.size();
        PixelPoint::new(-size.width / 2.0, -size.height)
    }

    fn dimensions(&self) -> Option<OverlayDimensions> {
        Some(self.size())
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "scale": self.scale,
            "symbol": self.symbol,
            "color": self.color
        })
    }
}

/// A marker drawn from a caller-supplied image instead of the default pin.
///
/// The image's rendered size is unknown to the library, so no footprint is
/// reported and attached popups fall back to a fixed lift.
pub struct ImageMarker {
    id: String,
    position: LatLng,
    image_url: String,
}

impl ImageMarker {
    pub fn new(
        id: impl Into<String>,
        position: impl Into<LatLng>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            position: position.into(),
            image_url: image_url.into(),
        }
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

impl Overlay for ImageMarker {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> LatLng {
        self.position
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "image_url": self.image_url
        })
    }
}
