//! Options describing how a static map image is framed and requested.

use crate::core::bounds::GeoBounds;
use crate::core::geo::{LatLng, PixelSize};
use serde::{Deserialize, Serialize};

/// How the image is positioned on the globe.
///
/// A map is framed either by an explicit geographic rectangle or by a center
/// point plus slippy-map zoom level. Exactly one of the two is always
/// present; a caller that supplies neither cannot construct a framing at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Framing {
    /// Explicit geographic rectangle.
    Bounds(GeoBounds),
    /// Center point plus zoom level.
    CenterZoom { center: LatLng, zoom: f64 },
}

/// Full request description for one static map image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub framing: Framing,
    pub size: PixelSize,
    /// Camera rotation in degrees, clockwise from north.
    pub bearing: f64,
    /// Camera tilt in degrees, 0 looks straight down.
    pub pitch: f64,
    /// Request a doubled-density image.
    pub retina: bool,
    pub attribution: bool,
    pub logo: bool,
}

impl MapOptions {
    /// Creates options with the endpoint defaults for the secondary knobs.
    pub fn new(framing: Framing, size: PixelSize) -> Self {
        Self {
            framing,
            size,
            bearing: 0.0,
            pitch: 0.0,
            retina: true,
            attribution: true,
            logo: true,
        }
    }
}
