use crate::config::ImageSize;
use crate::models::geometry::GeometryExtent;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const EARTH_RADIUS: f64 = 6_378_137.0;
/// Latitude where the square Web Mercator world ends.
const LAT_LIMIT: f64 = 85.051_128_779_806_59;
const TILE_SIZE: f64 = 256.0;

/// Degrees to Web Mercator metres. Latitude is held to `±LAT_LIMIT`.
pub fn lon_lat_to_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let phi = lat.clamp(-LAT_LIMIT, LAT_LIMIT).to_radians();
    (
        EARTH_RADIUS * lon.to_radians(),
        EARTH_RADIUS * (FRAC_PI_4 + phi / 2.0).tan().ln(),
    )
}

/// Web Mercator metres back to degrees.
pub fn mercator_to_lon_lat(x: f64, y: f64) -> (f64, f64) {
    let phi = 2.0 * (y / EARTH_RADIUS).exp().atan() - FRAC_PI_2;
    ((x / EARTH_RADIUS).to_degrees(), phi.to_degrees())
}

/// Mercator meters covered by one logical pixel at `zoom`.
fn mercator_resolution(zoom: u8) -> f64 {
    2.0 * PI * EARTH_RADIUS / (TILE_SIZE * 2f64.powi(zoom as i32))
}

/// Ground meters per returned pixel at `lat`.
///
/// `scale` is the provider's pixel density multiplier: a scale-2 image has
/// twice the pixels over the same footprint.
pub fn ground_resolution(lat: f64, zoom: u8, scale: u8) -> f64 {
    let lat_rad = lat.clamp(-LAT_LIMIT, LAT_LIMIT).to_radians();
    lat_rad.cos() * mercator_resolution(zoom) / scale.max(1) as f64
}

/// Lon/lat box covered by a static map of `size` logical pixels centred on
/// (`lat`, `lon`).
pub fn image_bounds(lat: f64, lon: f64, zoom: u8, size: ImageSize) -> GeometryExtent {
    let (cx, cy) = lon_lat_to_mercator(lon, lat);
    let res = mercator_resolution(zoom);
    let half_w = size.width as f64 / 2.0 * res;
    let half_h = size.height as f64 / 2.0 * res;

    let (minx, miny) = mercator_to_lon_lat(cx - half_w, cy - half_h);
    let (maxx, maxy) = mercator_to_lon_lat(cx + half_w, cy + half_h);
    GeometryExtent::from((minx, miny, maxx, maxy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPS: f64 = 1e-6;
    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_lon_lat_to_mercator_known_points() {
        let (x, y) = lon_lat_to_mercator(0.0, 0.0);
        assert!(approx_eq(x, 0.0));
        assert!(approx_eq(y, 0.0));

        let (x, _) = lon_lat_to_mercator(180.0, 0.0);
        assert!(approx_eq(x, 20037508.342789244));

        let (_, y) = lon_lat_to_mercator(0.0, LAT_LIMIT);
        assert!((y - 20037508.342789244).abs() < 1e-3);
    }

    #[test]
    fn test_poles_land_on_world_edge() {
        let half_world = 20037508.342789244;
        let (_, north) = lon_lat_to_mercator(10.0, 90.0);
        let (_, south) = lon_lat_to_mercator(-20.0, -90.0);
        assert!(north.is_finite() && south.is_finite());
        assert!((north - half_world).abs() < 1e-3);
        assert!((south + half_world).abs() < 1e-3);
    }

    #[test]
    fn test_mercator_inverts_forward_projection() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let lon = rng.random_range(-180.0..180.0);
            let lat = rng.random_range(-85.0..85.0);
            let (x, y) = lon_lat_to_mercator(lon, lat);
            let (lon2, lat2) = mercator_to_lon_lat(x, y);
            assert!(approx_eq(lon, lon2), "lon {} vs {}", lon, lon2);
            assert!(approx_eq(lat, lat2), "lat {} vs {}", lat, lat2);
        }
    }

    #[test]
    fn test_ground_resolution_at_equator() {
        assert!((ground_resolution(0.0, 0, 1) - 156543.03392804097).abs() < 1e-6);
        assert!((ground_resolution(0.0, 1, 1) - 78271.51696402048).abs() < 1e-6);
        assert!((ground_resolution(0.0, 0, 2) - 78271.51696402048).abs() < 1e-6);
    }

    #[test]
    fn test_ground_resolution_shrinks_with_latitude() {
        let equator = ground_resolution(0.0, 16, 1);
        let at_sixty = ground_resolution(60.0, 16, 1);
        assert!((at_sixty - equator / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_world_tile_bounds() {
        let extent = image_bounds(0.0, 0.0, 0, ImageSize::new(256, 256));
        assert!(approx_eq(extent.minx, -180.0));
        assert!(approx_eq(extent.maxx, 180.0));
        assert!((extent.miny + LAT_LIMIT).abs() < 1e-6);
        assert!((extent.maxy - LAT_LIMIT).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_contain_centre_and_halve_per_zoom() {
        let (lat, lon) = (38.441332, -105.234751);
        let z16 = image_bounds(lat, lon, 16, ImageSize::new(400, 400));
        let z17 = image_bounds(lat, lon, 17, ImageSize::new(400, 400));

        assert!(z16.minx < lon && lon < z16.maxx);
        assert!(z16.miny < lat && lat < z16.maxy);
        assert!((z16.width() / z17.width() - 2.0).abs() < 1e-9);
    }
}
