//! Engine-wide constants from the slippy-map convention and the static-image
//! endpoint defaults. Keeping them in a single place makes it easier to audit
//! the magic numbers.

/// Square tile edge in pixels for the Web Mercator pyramid.
pub const TILE_SIZE: u32 = 256;

/// Latitude limit of the flat Mercator approximation, in degrees.
pub const MAX_LATITUDE: f64 = 85.0;

/// Maximum zoom level accepted by the static-image endpoint.
pub const MAX_ZOOM: f64 = 22.0;

/// Pin marker edge in pixels at scale 1.
pub const MARKER_BASE_SIZE: f64 = 30.0;

/// Extra pixels below the pin body for the tip.
pub const MARKER_TIP_EXTENSION: f64 = 10.0;

/// Default marker fill color.
pub const DEFAULT_MARKER_COLOR: &str = "#3b82f6";

/// Default circle marker radius in pixels.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 10.0;

/// Default maximum popup width in pixels.
pub const DEFAULT_POPUP_MAX_WIDTH: f64 = 240.0;

/// Vertical lift for a popup attached to a marker of unknown size.
pub const FALLBACK_MARKER_LIFT: f64 = 30.0;
