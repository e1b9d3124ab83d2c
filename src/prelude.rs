//! Prelude module for common mapsnap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapsnap::prelude::*;`

pub use crate::core::{
    bounds::GeoBounds,
    config::{Framing, MapOptions},
    geo::{LatLng, LonLat, PixelPoint, PixelSize},
    projection::{
        bounds_from_center_zoom, center_zoom_from_bounds, lat_lng_to_pixel, normalize_latitude,
        normalize_longitude, pixel_to_lat_lng,
    },
    view::{LoadState, MapBuilder, MapView},
};

pub use crate::overlays::{
    base::{Overlay, OverlayDimensions},
    circle::CircleMarker,
    marker::{ImageMarker, Marker},
    popup::{Popup, PopupAnchor, PopupEvent, PopupManager, PopupOffset, PopupPlacement, PopupState},
};

pub use crate::sources::{MapboxStatic, StaticImageSource};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
