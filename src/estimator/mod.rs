//! Cargo flight travel-time estimation.
//!
//! The estimate is the great-circle distance with a fixed route markup, flown
//! at a constant cruising speed, plus a fixed allowance for takeoff and
//! landing. Everything here is pure; callers log and format.

mod survey;

pub use survey::{survey, SurveyEntry};

use crate::error::{AirfreightError, Result};
use crate::geo::{format_decimal, great_circle_km, GeoPoint};
use serde::{Deserialize, Serialize};

/// Markup applied to the great-circle distance for indirect routing and ATC.
pub const ROUTE_INEFFICIENCY_FACTOR: f64 = 1.1;

/// Hours added to every flight for takeoff and landing procedures.
pub const GROUND_OPERATIONS_HOURS: f64 = 1.0;

/// Typical cargo plane cruising speed.
pub const DEFAULT_CRUISING_SPEED_KMH: f64 = 750.0;

/// A single origin/destination estimate request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    #[serde(default = "default_speed")]
    pub cruising_speed_kmh: f64,
}

fn default_speed() -> f64 {
    DEFAULT_CRUISING_SPEED_KMH
}

impl TravelRequest {
    /// Create a request at the default cruising speed.
    pub fn new(origin: GeoPoint, destination: GeoPoint) -> Self {
        Self {
            origin,
            destination,
            cruising_speed_kmh: DEFAULT_CRUISING_SPEED_KMH,
        }
    }

    pub fn with_speed(mut self, cruising_speed_kmh: f64) -> Self {
        self.cruising_speed_kmh = cruising_speed_kmh;
        self
    }

    /// Check inputs before any arithmetic.
    pub fn validate(&self) -> Result<()> {
        self.origin.validate()?;
        self.destination.validate()?;
        validate_speed(self.cruising_speed_kmh)
    }

    pub fn estimate(&self) -> Result<TravelEstimate> {
        self.validate()?;

        let distance_km = great_circle_km(self.origin, self.destination);
        let route_distance_km = distance_km * ROUTE_INEFFICIENCY_FACTOR;
        let flight_hours = route_distance_km / self.cruising_speed_kmh + GROUND_OPERATIONS_HOURS;

        Ok(TravelEstimate {
            hours: round_hundredths(flight_hours),
            distance_km,
            route_distance_km,
        })
    }

    /// The sentence returned to tool callers.
    pub fn describe(&self, estimate: &TravelEstimate) -> String {
        format!(
            "Travel time from {} to {}: {} hours",
            self.origin,
            self.destination,
            format_decimal(estimate.hours)
        )
    }
}

/// Result of an estimate.
///
/// Only `hours` is the contractual output; the distances are carried along for
/// display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TravelEstimate {
    /// Flight duration in hours, rounded to two decimals.
    pub hours: f64,
    /// Great-circle distance in kilometres.
    pub distance_km: f64,
    /// Distance after the route inefficiency markup.
    pub route_distance_km: f64,
}

impl PartialEq for TravelEstimate {
    fn eq(&self, other: &Self) -> bool {
        self.hours == other.hours
    }
}

/// Estimate flight time between two points.
///
/// `None` for the speed means [`DEFAULT_CRUISING_SPEED_KMH`].
pub fn estimate(
    origin: GeoPoint,
    destination: GeoPoint,
    cruising_speed_kmh: Option<f64>,
) -> Result<TravelEstimate> {
    TravelRequest::new(origin, destination)
        .with_speed(cruising_speed_kmh.unwrap_or(DEFAULT_CRUISING_SPEED_KMH))
        .estimate()
}

pub(crate) fn validate_speed(cruising_speed_kmh: f64) -> Result<()> {
    if !cruising_speed_kmh.is_finite() || cruising_speed_kmh <= 0.0 {
        return Err(AirfreightError::invalid(format!(
            "cruising speed must be a positive finite number of km/h, got {}",
            cruising_speed_kmh
        )));
    }
    Ok(())
}

/// Round to two decimals via multiply/round/divide, half away from zero.
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
