//! Flat Web-Mercator-tile projection between geographic coordinates and pixel
//! positions inside a fixed-size rendered image.
//!
//! Every function here is pure and stateless: same input, same output, no
//! shared state. The arithmetic mirrors the framing used by static-image
//! endpoints (2^zoom tiles of 256 px across the full longitude range), so
//! overlay placement lines up with the pixels those endpoints actually render.
//!
//! Degenerate geometry (zero-extent bounds or size) divides by zero and yields
//! non-finite results; the validating surfaces in [`crate::core::view`] screen
//! such input out before it reaches these functions.

use crate::core::bounds::GeoBounds;
use crate::core::constants::{MAX_LATITUDE, MAX_ZOOM, TILE_SIZE};
use crate::core::geo::{LatLng, PixelPoint, PixelSize};

/// Converts a geographic coordinate to pixel coordinates within `bounds`.
///
/// The result is not clamped to the image: points outside the visible bounds
/// legitimately produce negative or oversized pixel coordinates, and callers
/// decide whether to draw or clip them.
pub fn lat_lng_to_pixel(point: impl Into<LatLng>, bounds: &GeoBounds, size: PixelSize) -> PixelPoint {
    let point = point.into();
    let (width, height) = size.as_f64();

    let fx = (point.lng - bounds.west) / bounds.lng_span();
    let fy = (bounds.north - point.lat) / bounds.lat_span();

    PixelPoint::new(fx * width, fy * height)
}

/// Converts pixel coordinates within `bounds` back to a geographic coordinate.
///
/// Exact inverse of [`lat_lng_to_pixel`] for non-degenerate bounds and size.
pub fn pixel_to_lat_lng(pixel: PixelPoint, bounds: &GeoBounds, size: PixelSize) -> LatLng {
    let (width, height) = size.as_f64();

    let lng = bounds.west + (pixel.x / width) * bounds.lng_span();
    let lat = bounds.north - (pixel.y / height) * bounds.lat_span();

    LatLng::new(lat, lng)
}

/// Computes the geographic rectangle covered by a `size` image centered on
/// `center` at `zoom`.
///
/// At `zoom`, `2^zoom` tiles of [`TILE_SIZE`] pixels span the full longitude
/// range. East-west distance per degree of longitude shrinks by `cos(lat)`
/// away from the equator, so the longitude span is widened by that factor;
/// the latitude span stays linear in this flat approximation.
pub fn bounds_from_center_zoom(center: impl Into<LatLng>, zoom: f64, size: PixelSize) -> GeoBounds {
    let center = center.into();
    let (width, height) = size.as_f64();

    let tiles_at_zoom = 2_f64.powf(zoom);
    let degrees_per_pixel = 360.0 / (f64::from(TILE_SIZE) * tiles_at_zoom);

    let lng_span = degrees_per_pixel * width;
    let lat_span = degrees_per_pixel * height;

    let lat_correction = center.lat.to_radians().cos();
    let corrected_lng_span = lng_span / lat_correction;

    let mut west = normalize_longitude(center.lng - corrected_lng_span / 2.0);
    let mut east = normalize_longitude(center.lng + corrected_lng_span / 2.0);
    let south = normalize_latitude(center.lat - lat_span / 2.0);
    let north = normalize_latitude(center.lat + lat_span / 2.0);

    // A span past a full revolution would wrap into an inverted rectangle;
    // frame the whole world instead.
    if corrected_lng_span > 360.0 {
        log::warn!(
            "longitude span {:.1} deg exceeds a full revolution, framing the whole world",
            corrected_lng_span
        );
        west = -180.0;
        east = 180.0;
    }

    GeoBounds::new(north, south, east, west)
}

/// Derives the center point and zoom level that fit `bounds` into a `size`
/// image.
///
/// Zoom is computed per axis and the smaller value wins, capped at
/// [`MAX_ZOOM`] and floored to two decimal places. This is only an
/// approximate inverse of [`bounds_from_center_zoom`]: the forward function
/// wraps and clamps its edges and this one rounds, so a round trip recovers
/// the center but not always the exact zoom.
pub fn center_zoom_from_bounds(bounds: &GeoBounds, size: PixelSize) -> (LatLng, f64) {
    let center = bounds.center();
    let (width, height) = size.as_f64();

    let lat_span = bounds.lat_span();
    let lng_span = bounds.lng_span();

    let lat_correction = center.lat.to_radians().cos();
    let corrected_lng_span = lng_span * lat_correction;

    let tile = f64::from(TILE_SIZE);
    let lat_zoom = (360.0 * height / (lat_span * tile)).log2();
    let lng_zoom = (360.0 * width / (corrected_lng_span * tile)).log2();

    let zoom = lat_zoom.min(lng_zoom).min(MAX_ZOOM);

    (center, (zoom * 100.0).floor() / 100.0)
}

/// Wraps a longitude into `[-180, 180]` by repeated full revolutions.
///
/// Terminates for any finite input; the iteration count is proportional to
/// `|lng| / 360`.
pub fn normalize_longitude(mut lng: f64) -> f64 {
    while lng > 180.0 {
        lng -= 360.0;
    }
    while lng < -180.0 {
        lng += 360.0;
    }
    lng
}

/// Clamps a latitude to `[-85, 85]`, the usable range of the flat Mercator
/// approximation. Latitude has no periodicity here, so this clamps rather
/// than wraps.
pub fn normalize_latitude(lat: f64) -> f64 {
    lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: f64, b: f64, tolerance: f64) {
        assert!(
            (a - b).abs() < tolerance,
            "expected {} to be within {} of {}",
            a,
            tolerance,
            b
        );
    }

    #[test]
    fn test_center_point_projects_to_center_pixel() {
        let bounds = GeoBounds::new(1.0, -1.0, 1.0, -1.0);
        let size = PixelSize::new(200, 200);

        let pixel = lat_lng_to_pixel(LatLng::new(0.0, 0.0), &bounds, size);
        assert_eq!(pixel, PixelPoint::new(100.0, 100.0));
    }

    #[test]
    fn test_corner_projection() {
        let bounds = GeoBounds::new(41.0, 40.0, -73.0, -75.0);
        let size = PixelSize::new(400, 300);

        let nw = lat_lng_to_pixel(LatLng::new(bounds.north, bounds.west), &bounds, size);
        assert_eq!(nw, PixelPoint::new(0.0, 0.0));

        let se = lat_lng_to_pixel(LatLng::new(bounds.south, bounds.east), &bounds, size);
        assert_eq!(se, PixelPoint::new(400.0, 300.0));
    }

    #[test]
    fn test_projection_is_affine_per_axis() {
        let bounds = GeoBounds::new(10.0, 0.0, 10.0, 0.0);
        let size = PixelSize::new(100, 100);

        let near = lat_lng_to_pixel(LatLng::new(0.0, 2.0), &bounds, size);
        let far = lat_lng_to_pixel(LatLng::new(0.0, 4.0), &bounds, size);
        assert_close(far.x, near.x * 2.0, EPSILON);

        let high = lat_lng_to_pixel(LatLng::new(8.0, 0.0), &bounds, size);
        let low = lat_lng_to_pixel(LatLng::new(6.0, 0.0), &bounds, size);
        assert_close(low.y, high.y * 2.0, EPSILON);
    }

    #[test]
    fn test_out_of_bounds_points_are_not_clamped() {
        let bounds = GeoBounds::new(1.0, -1.0, 1.0, -1.0);
        let size = PixelSize::new(200, 200);

        let west_of_frame = lat_lng_to_pixel(LatLng::new(0.0, -2.0), &bounds, size);
        assert!(west_of_frame.x < 0.0);

        let north_of_frame = lat_lng_to_pixel(LatLng::new(2.0, 0.0), &bounds, size);
        assert!(north_of_frame.y < 0.0);
    }

    #[test]
    fn test_pixel_geo_round_trip() {
        let bounds = GeoBounds::new(41.0, 40.0, -73.0, -75.0);
        let size = PixelSize::new(400, 300);
        let point = LatLng::new(40.7128, -74.0060);

        let pixel = lat_lng_to_pixel(point, &bounds, size);
        let restored = pixel_to_lat_lng(pixel, &bounds, size);

        assert_close(restored.lat, point.lat, EPSILON);
        assert_close(restored.lng, point.lng, EPSILON);
    }

    #[test]
    fn test_bounds_from_center_zoom_is_centered() {
        let center = LatLng::new(40.7128, -74.0060);
        let bounds = bounds_from_center_zoom(center, 12.0, PixelSize::new(400, 300));

        let recovered = bounds.center();
        assert_close(recovered.lat, center.lat, 1e-6);
        assert_close(recovered.lng, center.lng, 1e-6);
    }

    #[test]
    fn test_zoom_step_halves_both_spans() {
        let center = LatLng::new(0.0, 0.0);
        let size = PixelSize::new(400, 300);

        let coarse = bounds_from_center_zoom(center, 5.0, size);
        let fine = bounds_from_center_zoom(center, 6.0, size);

        assert_close(fine.lat_span(), coarse.lat_span() / 2.0, EPSILON);
        assert_close(fine.lng_span(), coarse.lng_span() / 2.0, EPSILON);
    }

    #[test]
    fn test_latitude_correction_widens_longitude_span_only() {
        let size = PixelSize::new(400, 300);

        let equator = bounds_from_center_zoom(LatLng::new(0.0, 0.0), 8.0, size);
        let north = bounds_from_center_zoom(LatLng::new(60.0, 0.0), 8.0, size);

        // cos(60 deg) = 0.5, so the longitude span doubles while the latitude
        // span is untouched.
        assert_close(north.lng_span(), equator.lng_span() * 2.0, EPSILON);
        assert_close(north.lat_span(), equator.lat_span(), EPSILON);
    }

    #[test]
    fn test_oversized_longitude_span_frames_the_world() {
        let bounds = bounds_from_center_zoom(LatLng::new(0.0, 0.0), 0.0, PixelSize::new(512, 256));

        assert_eq!(bounds.west, -180.0);
        assert_eq!(bounds.east, 180.0);
    }

    #[test]
    fn test_latitude_edges_clamp_to_mercator_limit() {
        let bounds = bounds_from_center_zoom(LatLng::new(84.9, 0.0), 3.0, PixelSize::new(400, 400));

        assert!(bounds.north <= 85.0);
        assert!(bounds.south >= -85.0);
    }

    #[test]
    fn test_center_zoom_round_trip() {
        let center = LatLng::new(40.7128, -74.0060);
        let size = PixelSize::new(400, 300);

        let bounds = bounds_from_center_zoom(center, 12.0, size);
        let (recovered, zoom) = center_zoom_from_bounds(&bounds, size);

        assert_close(recovered.lat, center.lat, 1e-6);
        assert_close(recovered.lng, center.lng, 1e-6);
        assert_close(zoom, 12.0, 0.1);
    }

    #[test]
    fn test_zoom_is_capped_and_floored_to_two_decimals() {
        // A tiny rectangle would fit at a zoom far past the endpoint maximum.
        let bounds = GeoBounds::new(1e-9, -1e-9, 1e-9, -1e-9);
        let (_, zoom) = center_zoom_from_bounds(&bounds, PixelSize::new(400, 300));
        assert_eq!(zoom, MAX_ZOOM);

        let loose = GeoBounds::new(40.9, 40.5, -73.6, -74.4);
        let (_, loose_zoom) = center_zoom_from_bounds(&loose, PixelSize::new(400, 300));
        assert_close(loose_zoom * 100.0, (loose_zoom * 100.0).round(), EPSILON);
    }

    #[test]
    fn test_no_minimum_zoom_floor() {
        // A whole-world rectangle in a small image derives a negative zoom.
        let bounds = GeoBounds::new(85.0, -85.0, 180.0, -180.0);
        let (_, zoom) = center_zoom_from_bounds(&bounds, PixelSize::new(64, 64));
        assert!(zoom < 0.0);
    }

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(200.0), -160.0);
        assert_eq!(normalize_longitude(-200.0), 160.0);
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(540.0), 180.0);
    }

    #[test]
    fn test_normalize_longitude_is_idempotent_and_periodic() {
        for lng in [-179.5, -90.0, 0.0, 45.25, 179.5] {
            assert_eq!(normalize_longitude(lng), lng);
            assert_close(normalize_longitude(lng + 360.0), lng, EPSILON);
            assert_close(normalize_longitude(lng - 720.0), lng, EPSILON);
        }
    }

    #[test]
    fn test_normalize_latitude() {
        assert_eq!(normalize_latitude(90.0), 85.0);
        assert_eq!(normalize_latitude(-90.0), -85.0);
        assert_eq!(normalize_latitude(40.7128), 40.7128);
        assert_eq!(
            normalize_latitude(normalize_latitude(123.0)),
            normalize_latitude(123.0)
        );
    }
}
