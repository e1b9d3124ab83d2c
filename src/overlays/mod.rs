//! Overlay elements placed on top of the base map image.
//!
//! Overlays carry geographic positions and drawing options; the library
//! computes where their boxes land in pixel space and leaves the actual
//! drawing to the host application.

pub mod base;
pub mod circle;
pub mod marker;
pub mod popup;

pub use base::{Overlay, OverlayDimensions};
pub use circle::CircleMarker;
pub use marker::{ImageMarker, Marker};
pub use popup::{
    Popup, PopupAnchor, PopupEvent, PopupManager, PopupOffset, PopupPlacement, PopupState,
};
