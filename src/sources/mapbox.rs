use crate::core::config::{Framing, MapOptions};
use crate::sources::StaticImageSource;

const API_BASE: &str = "https://api.mapbox.com/styles/v1";

/// Mapbox Static Images API source.
///
/// Builds URLs of the form
/// `https://api.mapbox.com/styles/v1/{user}/{style}/static/{position}/{w}x{h}[@2x]?...`
/// where the position segment is either `lng,lat,zoom,bearing,pitch` or a
/// `[west,south,east,north]` rectangle, matching the framing of the options.
#[derive(Debug, Clone)]
pub struct MapboxStatic {
    access_token: String,
    style: String,
}

impl MapboxStatic {
    pub fn new(access_token: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            style: style.into(),
        }
    }

    /// Splits the configured style into `(username, style_id)`. Bare style
    /// ids belong to the `mapbox` account.
    fn style_path(&self) -> (&str, &str) {
        match self.style.split_once('/') {
            Some((username, style_id)) => (username, style_id),
            None => ("mapbox", &self.style),
        }
    }
}

impl StaticImageSource for MapboxStatic {
    fn url(&self, options: &MapOptions) -> String {
        let (username, style_id) = self.style_path();

        // Center/zoom framing is preferred by the endpoint; bounds framing
        // asks the server to fit the rectangle itself.
        let position = match options.framing {
            Framing::CenterZoom { center, zoom } => format!(
                "{},{},{},{},{}",
                center.lng, center.lat, zoom, options.bearing, options.pitch
            ),
            Framing::Bounds(bounds) => format!(
                "[{},{},{},{}]",
                bounds.west, bounds.south, bounds.east, bounds.north
            ),
        };

        let retina = if options.retina { "@2x" } else { "" };

        format!(
            "{}/{}/{}/static/{}/{}x{}{}?access_token={}&attribution={}&logo={}",
            API_BASE,
            username,
            style_id,
            position,
            options.size.width,
            options.size.height,
            retina,
            self.access_token,
            options.attribution,
            options.logo
        )
    }
}
