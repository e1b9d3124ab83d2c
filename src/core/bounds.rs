use crate::core::geo::LatLng;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned geographic rectangle given by its four edges in degrees.
///
/// `north` is expected to exceed `south`. `east` and `west` may describe a
/// rectangle crossing the antimeridian; each edge is treated independently and
/// no special wrap-around handling is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    /// Creates new bounds from the four edges
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Creates bounds from south-west and north-east corners
    pub fn from_corners(south_west: LatLng, north_east: LatLng) -> Self {
        Self::new(
            north_east.lat,
            south_west.lat,
            north_east.lng,
            south_west.lng,
        )
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Latitude extent in degrees
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude extent in degrees
    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: impl Into<LatLng>) -> bool {
        let point = point.into();
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }

    /// True when the rectangle has no usable area for projection.
    pub fn is_degenerate(&self) -> bool {
        !(self.north > self.south) || self.east == self.west
    }

    /// Rejects degenerate rectangles with a descriptive error.
    ///
    /// Projection over a zero-extent rectangle divides by zero, so callers
    /// that accept externally supplied bounds should validate first.
    pub fn validate(&self) -> Result<()> {
        if !(self.north > self.south) {
            return Err(MapError::InvalidBounds(format!(
                "north ({}) must exceed south ({})",
                self.north, self.south
            )));
        }
        if self.east == self.west {
            return Err(MapError::InvalidBounds(format!(
                "east and west coincide at {}",
                self.east
            )));
        }
        Ok(())
    }
}
