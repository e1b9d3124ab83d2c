use crate::core::constants::DEFAULT_CIRCLE_RADIUS;
use crate::core::geo::{LatLng, PixelPoint};
use crate::overlays::base::{Overlay, OverlayDimensions};

/// A flat circular marker centered on its geographic coordinate.
pub struct CircleMarker {
    id: String,
    position: LatLng,
    radius: f64,
    color: String,
    stroke_color: String,
    stroke_width: f64,
    opacity: f64,
    stroke_opacity: f64,
}

impl CircleMarker {
    pub fn new(id: impl Into<String>, position: impl Into<LatLng>) -> Self {
        Self {
            id: id.into(),
            position: position.into(),
            radius: DEFAULT_CIRCLE_RADIUS,
            color: "#3498db".to_string(),
            stroke_color: "#ffffff".to_string(),
            stroke_width: 2.0,
            opacity: 1.0,
            stroke_opacity: 1.0,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke_color = color.into();
        self.stroke_width = width;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Overlay for CircleMarker {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> LatLng {
        self.position
    }

    // Centered on the coordinate: drawing origin is one radius up and left.
    fn anchor_offset(&self) -> PixelPoint {
        PixelPoint::new(-self.radius, -self.radius)
    }

    fn dimensions(&self) -> Option<OverlayDimensions> {
        Some(OverlayDimensions {
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        })
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "radius": self.radius,
            "color": self.color,
            "stroke_color": self.stroke_color,
            "stroke_width": self.stroke_width,
            "opacity": self.opacity,
            "stroke_opacity": self.stroke_opacity
        })
    }
}
