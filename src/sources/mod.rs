//! Static-image providers: turn framed map options into request URLs.
//!
//! The crate never performs the HTTP call itself; it only guarantees that the
//! URL it builds frames the same bounds the projection engine computes, so
//! overlay placement matches the returned raster.

pub mod mapbox;

pub use mapbox::MapboxStatic;

use crate::core::config::MapOptions;

/// Trait representing anything that can produce a static-image URL for a
/// framed map.
pub trait StaticImageSource: Send + Sync {
    /// Build a request URL for the given `options`.
    fn url(&self, options: &MapOptions) -> String;
}
