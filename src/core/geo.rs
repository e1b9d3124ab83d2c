use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Coordinate record using the `lon` field-name convention.
///
/// Some callers spell longitude `lon` rather than `lng`; this shape converts
/// losslessly into [`LatLng`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lat: f64,
    pub lon: f64,
}

impl From<LonLat> for LatLng {
    fn from(coord: LonLat) -> Self {
        Self::new(coord.lat, coord.lon)
    }
}

/// `[lng, lat]` pair in GeoJSON axis order.
impl From<[f64; 2]> for LatLng {
    fn from(coord: [f64; 2]) -> Self {
        Self::new(coord[1], coord[0])
    }
}

/// Pixel coordinates within a rendered image, origin at the top-left,
/// x increasing rightward and y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl Default for PixelPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Rendered image dimensions in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Dimensions as floats, for projection arithmetic.
    pub fn as_f64(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
