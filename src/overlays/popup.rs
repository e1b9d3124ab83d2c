use crate::core::constants::{DEFAULT_POPUP_MAX_WIDTH, FALLBACK_MARKER_LIFT};
use crate::core::geo::{LatLng, PixelPoint};
use crate::core::view::MapView;
use crate::overlays::base::{Overlay, OverlayDimensions};
use crate::{MapError, Result};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Corner or edge of the popup box that is aligned to its reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PopupAnchor {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl PopupAnchor {
    /// Fractional translation of the popup box, as multiples of its rendered
    /// size, that puts the anchor on the reference point.
    pub fn translate(&self) -> (f64, f64) {
        match self {
            PopupAnchor::Top => (-0.5, 0.0),
            PopupAnchor::TopLeft => (0.0, 0.0),
            PopupAnchor::TopRight => (-1.0, 0.0),
            PopupAnchor::Bottom => (-0.5, -1.0),
            PopupAnchor::BottomLeft => (0.0, -1.0),
            PopupAnchor::BottomRight => (-1.0, -1.0),
            PopupAnchor::Left => (0.0, -0.5),
            PopupAnchor::Right => (-1.0, -0.5),
            PopupAnchor::Center => (-0.5, -0.5),
        }
    }
}

impl std::fmt::Display for PopupAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PopupAnchor::Center => write!(f, "center"),
            PopupAnchor::Top => write!(f, "top"),
            PopupAnchor::Bottom => write!(f, "bottom"),
            PopupAnchor::Left => write!(f, "left"),
            PopupAnchor::Right => write!(f, "right"),
            PopupAnchor::TopLeft => write!(f, "top-left"),
            PopupAnchor::TopRight => write!(f, "top-right"),
            PopupAnchor::BottomLeft => write!(f, "bottom-left"),
            PopupAnchor::BottomRight => write!(f, "bottom-right"),
        }
    }
}

/// Extra pixel offset applied after anchoring.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupOffset {
    /// Same offset on both axes.
    Scalar(f64),
    /// Explicit per-axis offset.
    Point { x: f64, y: f64 },
    /// Offset looked up by the active anchor; unlisted anchors get zero.
    PerAnchor(FxHashMap<PopupAnchor, (f64, f64)>),
}

impl PopupOffset {
    pub fn resolve(&self, anchor: PopupAnchor) -> (f64, f64) {
        match self {
            PopupOffset::Scalar(value) => (*value, *value),
            PopupOffset::Point { x, y } => (*x, *y),
            PopupOffset::PerAnchor(table) => table.get(&anchor).copied().unwrap_or((0.0, 0.0)),
        }
    }
}

impl Default for PopupOffset {
    fn default() -> Self {
        PopupOffset::Scalar(0.0)
    }
}

/// Visibility of a popup, driven by explicit events rather than a raw flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Open,
    Closed,
}

/// User interactions a popup reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    /// The popup body was clicked.
    Click,
    /// The close button (or an external close control) was activated.
    CloseRequested,
}

/// Where and how to draw an open popup box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPlacement {
    /// Pixel position of the anchor reference point.
    pub point: PixelPoint,
    /// Fractional box translation for the active anchor.
    pub translate: (f64, f64),
}

/// A popup balloon tied to a coordinate or to a host marker.
pub struct Popup {
    id: String,
    position: Option<LatLng>,
    anchor: PopupAnchor,
    offset: PopupOffset,
    close_button: bool,
    close_on_click: bool,
    max_width: f64,
    state: PopupState,
}

impl Popup {
    /// Creates a standalone popup at a fixed coordinate.
    pub fn new(id: impl Into<String>, position: impl Into<LatLng>) -> Self {
        Self {
            id: id.into(),
            position: Some(position.into()),
            anchor: PopupAnchor::Bottom,
            offset: PopupOffset::default(),
            close_button: false,
            close_on_click: false,
            max_width: DEFAULT_POPUP_MAX_WIDTH,
            state: PopupState::Open,
        }
    }

    /// Creates a popup that inherits its position from a host overlay.
    pub fn attached(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: None,
            anchor: PopupAnchor::Bottom,
            offset: PopupOffset::default(),
            close_button: false,
            close_on_click: false,
            max_width: DEFAULT_POPUP_MAX_WIDTH,
            state: PopupState::Open,
        }
    }

    pub fn with_anchor(mut self, anchor: PopupAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_offset(mut self, offset: PopupOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_close_button(mut self, close_button: bool) -> Self {
        self.close_button = close_button;
        self
    }

    pub fn with_close_on_click(mut self, close_on_click: bool) -> Self {
        self.close_on_click = close_on_click;
        self
    }

    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn anchor(&self) -> PopupAnchor {
        self.anchor
    }

    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    pub fn has_close_button(&self) -> bool {
        self.close_button
    }

    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PopupState::Open
    }

    pub fn open(&mut self) {
        self.state = PopupState::Open;
    }

    pub fn close(&mut self) {
        self.state = PopupState::Closed;
    }

    /// Advances the visibility state machine for one interaction.
    ///
    /// A body click closes the popup only when close-on-click is set; an
    /// explicit close request always closes it.
    pub fn handle_event(&mut self, event: PopupEvent) {
        match event {
            PopupEvent::Click => {
                if self.close_on_click {
                    self.state = PopupState::Closed;
                }
            }
            PopupEvent::CloseRequested => {
                self.state = PopupState::Closed;
            }
        }
    }

    /// Computes where to draw this popup, or `None` when it is closed or the
    /// base image is not loaded yet.
    ///
    /// A popup without its own position must be given its host overlay;
    /// when the host reports a footprint the popup is shifted to the host
    /// edge matching the anchor, otherwise it gets a fixed upward lift.
    pub fn placement(
        &self,
        view: &MapView,
        host: Option<&dyn Overlay>,
    ) -> Result<Option<PopupPlacement>> {
        let position = match self.position {
            Some(position) => position,
            None => host.ok_or(MapError::MissingPosition)?.position(),
        };

        if !view.is_loaded() || !self.is_open() {
            return Ok(None);
        }

        let base = view.lat_lng_to_pixel(position);

        let host_shift = if self.position.is_none() {
            match host.and_then(|h| h.dimensions()) {
                Some(dims) => self.host_edge_shift(&dims),
                None => PixelPoint::new(0.0, -FALLBACK_MARKER_LIFT),
            }
        } else {
            PixelPoint::default()
        };

        let (dx, dy) = self.offset.resolve(self.anchor);
        let point = base.add(&host_shift).add(&PixelPoint::new(dx, dy));

        Ok(Some(PopupPlacement {
            point,
            translate: self.anchor.translate(),
        }))
    }

    /// Aligns the anchor with the matching edge of a bottom-center anchored
    /// host box.
    fn host_edge_shift(&self, dims: &OverlayDimensions) -> PixelPoint {
        let left = -dims.width / 2.0;
        let right = dims.width / 2.0;
        let top = -dims.height;
        let bottom = 0.0;

        let (dx, dy) = match self.anchor {
            PopupAnchor::Bottom => (0.0, top),
            PopupAnchor::BottomLeft => (right, top),
            PopupAnchor::BottomRight => (left, top),
            PopupAnchor::Top => (0.0, bottom),
            PopupAnchor::TopLeft => (right, bottom),
            PopupAnchor::TopRight => (left, bottom),
            PopupAnchor::Left => (right, (top + bottom) / 2.0),
            PopupAnchor::Right => (left, (top + bottom) / 2.0),
            PopupAnchor::Center => (0.0, (top + bottom) / 2.0),
        };

        PixelPoint::new(dx, dy)
    }
}

/// Keeps a set of standalone popups keyed by id.
pub struct PopupManager {
    popups: FxHashMap<String, Popup>,
}

impl PopupManager {
    pub fn new() -> Self {
        Self {
            popups: FxHashMap::default(),
        }
    }

    /// Adds a popup. Managed popups have no host to inherit a position
    /// from, so the popup must carry its own.
    pub fn add_popup(&mut self, popup: Popup) -> Result<()> {
        if !popup.has_position() {
            return Err(MapError::MissingPosition);
        }
        self.popups.insert(popup.id.clone(), popup);
        Ok(())
    }

    pub fn remove_popup(&mut self, id: &str) {
        self.popups.remove(id);
    }

    pub fn get(&self, id: &str) -> Option<&Popup> {
        self.popups.get(id)
    }

    pub fn open_popup(&mut self, id: &str) {
        if let Some(popup) = self.popups.get_mut(id) {
            popup.open();
        }
    }

    pub fn close_popup(&mut self, id: &str) {
        if let Some(popup) = self.popups.get_mut(id) {
            popup.close();
        }
    }

    /// Routes an interaction event to one popup.
    pub fn handle_event(&mut self, id: &str, event: PopupEvent) {
        if let Some(popup) = self.popups.get_mut(id) {
            popup.handle_event(event);
        }
    }

    pub fn open_count(&self) -> usize {
        self.popups.values().filter(|p| p.is_open()).count()
    }

    /// Pixel placements of all open popups, once the base image is loaded.
    pub fn placements(&self, view: &MapView) -> Vec<(String, PopupPlacement)> {
        self.popups
            .values()
            .filter_map(|popup| {
                // Managed popups always carry a position, so placement
                // cannot fail here.
                popup
                    .placement(view, None)
                    .ok()
                    .flatten()
                    .map(|placement| (popup.id.clone(), placement))
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.popups.clear();
    }
}

impl Default for PopupManager {
    fn default() -> Self {
        Self::new()
    }
}
