//! Geographic primitives.
//!
//! Points are plain latitude/longitude pairs in decimal degrees. Distances are
//! great-circle distances on a spherical Earth.

mod haversine;

pub use haversine::{central_angle, great_circle_km, EARTH_RADIUS_KM};

use crate::error::{AirfreightError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Reject NaN and infinite components.
    ///
    /// Out-of-range but finite values are accepted; the haversine formula
    /// handles them by periodicity.
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(AirfreightError::invalid(format!(
                "coordinates must be finite numbers, got ({}, {})",
                self.latitude, self.longitude
            )));
        }
        Ok(())
    }

    /// Whether latitude is in [-90, 90] and longitude in [-180, 180].
    pub fn is_within_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    pub(crate) fn to_radians(self) -> (f64, f64) {
        (to_radians(self.latitude), to_radians(self.longitude))
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.latitude, point.longitude]
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            format_decimal(self.latitude),
            format_decimal(self.longitude)
        )
    }
}

/// Parses `"lat,lon"`, with optional whitespace and parentheses.
impl FromStr for GeoPoint {
    type Err = AirfreightError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (lat, lon) = trimmed
            .split_once(',')
            .ok_or_else(|| AirfreightError::invalid(format!("expected 'lat,lon', got '{}'", s)))?;

        let parse = |part: &str, what: &str| {
            part.trim().parse::<f64>().map_err(|e| {
                AirfreightError::invalid(format!("invalid {} '{}': {}", what, part.trim(), e))
            })
        };

        let point = GeoPoint::new(parse(lat, "latitude")?, parse(lon, "longitude")?);
        point.validate()?;
        Ok(point)
    }
}

/// Convert degrees to radians as `degrees * (π / 180)`.
///
/// `f64::to_radians` folds the constant differently, which can move the
/// last bit.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Shortest round-trip decimal rendering, with negative zero shown as `0`.
pub fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let point: GeoPoint = "40.7128, -74.0060".parse().unwrap();
        assert_eq!(point, GeoPoint::new(40.7128, -74.006));

        let point: GeoPoint = "(51.5074,-0.1278)".parse().unwrap();
        assert_eq!(point, GeoPoint::new(51.5074, -0.1278));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("gotham".parse::<GeoPoint>().is_err());
        assert!("1.0,abc".parse::<GeoPoint>().is_err());
        assert!("NaN,0".parse::<GeoPoint>().unwrap_err().is_invalid_argument());
        assert!("inf,0".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn test_validate_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, f64::NEG_INFINITY).validate().is_err());
        assert!(GeoPoint::new(123.0, 400.0).validate().is_ok());
    }

    #[test]
    fn test_bounds() {
        assert!(GeoPoint::new(90.0, -180.0).is_within_bounds());
        assert!(!GeoPoint::new(90.5, 0.0).is_within_bounds());
        assert!(!GeoPoint::new(0.0, 180.1).is_within_bounds());
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1.0), "1");
        assert_eq!(format_decimal(9.17), "9.17");
        assert_eq!(format_decimal(-74.006), "-74.006");
        assert_eq!(format_decimal(-0.0), "0");
        assert_eq!(format_decimal(2.5), "2.5");
    }

    #[test]
    fn test_display() {
        let point = GeoPoint::new(40.7128, -74.0060);
        assert_eq!(point.to_string(), "(40.7128, -74.006)");
    }
}
