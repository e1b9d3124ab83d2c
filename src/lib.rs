//! # mapsnap
//!
//! A static-map composition library.
//!
//! `mapsnap` frames a fixed-size raster map image the way Web-Mercator
//! static-image endpoints do, builds the request URL for it, and places
//! overlay elements (markers, circle markers, popups) at pixel positions
//! that line up with the returned image. It performs no network I/O and no
//! drawing; those belong to the host application.

pub mod core;
pub mod overlays;
pub mod prelude;
pub mod sources;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::GeoBounds,
    config::{Framing, MapOptions},
    geo::{LatLng, LonLat, PixelPoint, PixelSize},
    view::{LoadState, MapBuilder, MapView},
};

pub use crate::overlays::{
    base::Overlay, circle::CircleMarker, marker::ImageMarker, marker::Marker, popup::Popup,
    popup::PopupManager,
};

pub use crate::sources::{MapboxStatic, StaticImageSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    #[error("invalid size {0}x{1}: dimensions must be positive")]
    InvalidSize(u32, u32),

    #[error("invalid zoom: {0}")]
    InvalidZoom(f64),

    #[error("either bounds or center and zoom must be provided")]
    MissingFraming,

    #[error("popup must have a position or be attached to a marker")]
    MissingPosition,
}

/// Error type alias for convenience
pub type Error = MapError;
