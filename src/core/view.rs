//! Resolved view of one static map image: framed bounds, pixel size, and the
//! readiness of the backing raster.

use crate::core::bounds::GeoBounds;
use crate::core::config::{Framing, MapOptions};
use crate::core::geo::{LatLng, PixelPoint, PixelSize};
use crate::core::projection;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Readiness of the base image fetched from the static-image endpoint.
/// Overlay placement is gated on `Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded,
    Failed,
}

/// A fully resolved static map view.
///
/// Construction validates the geometry up front, so the projection methods
/// never see degenerate input and never produce non-finite coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    bounds: GeoBounds,
    size: PixelSize,
    load_state: LoadState,
}

impl MapView {
    /// Resolves `options` into a view, computing bounds from center and zoom
    /// when no explicit rectangle was given.
    pub fn new(options: &MapOptions) -> Result<Self> {
        if options.size.is_empty() {
            return Err(MapError::InvalidSize(
                options.size.width,
                options.size.height,
            ));
        }

        let bounds = match options.framing {
            Framing::Bounds(bounds) => bounds,
            Framing::CenterZoom { center, zoom } => {
                projection::bounds_from_center_zoom(center, zoom, options.size)
            }
        };
        bounds.validate()?;

        log::debug!(
            "resolved view: n={:.4} s={:.4} e={:.4} w={:.4} at {}x{}",
            bounds.north,
            bounds.south,
            bounds.east,
            bounds.west,
            options.size.width,
            options.size.height
        );

        Ok(Self {
            bounds,
            size: options.size,
            load_state: LoadState::NotLoaded,
        })
    }

    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loaded(&self) -> bool {
        self.load_state == LoadState::Loaded
    }

    /// Records that the base image finished loading.
    pub fn mark_loaded(&mut self) {
        self.load_state = LoadState::Loaded;
    }

    /// Records that the base image failed to load.
    pub fn mark_failed(&mut self) {
        self.load_state = LoadState::Failed;
    }

    /// Converts a geographical coordinate to pixel coordinates in this view.
    pub fn lat_lng_to_pixel(&self, point: impl Into<LatLng>) -> PixelPoint {
        projection::lat_lng_to_pixel(point, &self.bounds, self.size)
    }

    /// Converts pixel coordinates in this view back to a geographical coordinate.
    pub fn pixel_to_lat_lng(&self, pixel: PixelPoint) -> LatLng {
        projection::pixel_to_lat_lng(pixel, &self.bounds, self.size)
    }

    /// Derives the center and zoom that this view's bounds fit.
    pub fn center_zoom(&self) -> (LatLng, f64) {
        projection::center_zoom_from_bounds(&self.bounds, self.size)
    }
}

/// Builder for assembling [`MapOptions`] and a [`MapView`] fluently.
pub struct MapBuilder {
    center: Option<LatLng>,
    zoom: Option<f64>,
    bounds: Option<GeoBounds>,
    size: PixelSize,
    bearing: f64,
    pitch: f64,
    retina: bool,
    attribution: bool,
    logo: bool,
}

impl MapBuilder {
    /// Create a new builder for an image of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            center: None,
            zoom: None,
            bounds: None,
            size: PixelSize::new(width, height),
            bearing: 0.0,
            pitch: 0.0,
            retina: true,
            attribution: true,
            logo: true,
        }
    }

    pub fn center(mut self, center: impl Into<LatLng>) -> Self {
        self.center = Some(center.into());
        self
    }

    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn bounds(mut self, bounds: GeoBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn bearing(mut self, bearing: f64) -> Self {
        self.bearing = bearing;
        self
    }

    pub fn pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn retina(mut self, retina: bool) -> Self {
        self.retina = retina;
        self
    }

    pub fn attribution(mut self, attribution: bool) -> Self {
        self.attribution = attribution;
        self
    }

    pub fn logo(mut self, logo: bool) -> Self {
        self.logo = logo;
        self
    }

    /// Assembles the request options. Explicit bounds win over center and
    /// zoom; supplying neither is an error.
    pub fn options(&self) -> Result<MapOptions> {
        let framing = if let Some(bounds) = self.bounds {
            Framing::Bounds(bounds)
        } else if let (Some(center), Some(zoom)) = (self.center, self.zoom) {
            if !zoom.is_finite() {
                return Err(MapError::InvalidZoom(zoom));
            }
            Framing::CenterZoom { center, zoom }
        } else {
            return Err(MapError::MissingFraming);
        };

        Ok(MapOptions {
            framing,
            size: self.size,
            bearing: self.bearing,
            pitch: self.pitch,
            retina: self.retina,
            attribution: self.attribution,
            logo: self.logo,
        })
    }

    /// Resolves the options into a validated view.
    pub fn build(&self) -> Result<MapView> {
        MapView::new(&self.options()?)
    }
}
