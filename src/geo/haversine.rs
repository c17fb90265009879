//! Haversine great-circle distance.

use super::GeoPoint;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Central angle between two points, in radians (0..=π).
pub fn central_angle(from: GeoPoint, to: GeoPoint) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair past 1 near antipodes.
    2.0 * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Great-circle distance in kilometres.
pub fn great_circle_km(from: GeoPoint, to: GeoPoint) -> f64 {
    EARTH_RADIUS_KM * central_angle(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const NYC: GeoPoint = GeoPoint::new(40.7128, -74.0060);
    const LONDON: GeoPoint = GeoPoint::new(51.5074, -0.1278);

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(great_circle_km(NYC, NYC), 0.0);
        assert_eq!(great_circle_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_nyc_london() {
        let km = great_circle_km(NYC, LONDON);
        assert!((km - 5570.222_179_737_958).abs() < 1e-6, "got {}", km);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(great_circle_km(NYC, LONDON), great_circle_km(LONDON, NYC));
    }

    #[test]
    fn test_antipodes_are_half_circumference() {
        let max = EARTH_RADIUS_KM * PI;
        let equator = great_circle_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        let poles = great_circle_km(GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0));

        assert!((equator - max).abs() < 1e-6);
        assert!((poles - max).abs() < 1e-6);
        assert!(!equator.is_nan());
    }

    #[test]
    fn test_never_exceeds_half_circumference() {
        let max = EARTH_RADIUS_KM * PI + 1e-9;
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(30) {
                let point = GeoPoint::new(lat as f64, lon as f64);
                assert!(great_circle_km(NYC, point) <= max);
            }
        }
    }
}
