//! Named reference points.

use crate::error::{AirfreightError, Result};
use crate::geo::GeoPoint;
use serde::Serialize;

/// A named point in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Lookup slug, e.g. `gotham`.
    pub key: String,
    pub label: String,
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub fn new(key: &str, label: &str, kind: &str, point: GeoPoint) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: kind.to_string(),
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// The built-in catalog: Gotham plus Batman filming locations and supercar
/// factories.
pub fn default_places() -> Vec<Place> {
    [
        ("gotham", "Gotham City", "origin", 40.7128, -74.0060),
        ("chicago_board_of_trade", "Chicago Board of Trade (Batman Begins)", "filming location", 41.877453, -87.631989),
        ("royal_liver_building", "Royal Liver Building Liverpool (The Batman)", "filming location", 53.405823, -2.995956),
        ("pinewood_studios", "Pinewood Studios (Batman 1989)", "filming location", 51.548592, -0.535414),
        ("heinz_field", "Heinz Field Pittsburgh (The Dark Knight Rises)", "filming location", 40.446765, -80.01576),
        ("ferrari_maranello", "Ferrari Factory, Maranello, Italy", "supercar factory", 44.5311, 10.8661),
        ("mclaren_woking", "McLaren Technology Centre, Woking, UK", "supercar factory", 51.3408, -0.5423),
        ("bugatti_molsheim", "Bugatti Factory, Molsheim, France", "supercar factory", 48.522, 7.5002),
        ("london", "London", "city", 51.5074, -0.1278),
    ]
    .into_iter()
    .map(|(key, label, kind, lat, lon)| Place::new(key, label, kind, GeoPoint::new(lat, lon)))
    .collect()
}

/// Resolve a place key (case-insensitive) or a literal `lat,lon` pair.
pub(crate) fn resolve(input: &str, places: &[Place]) -> Result<GeoPoint> {
    let needle = input.trim();

    if let Some(place) = places.iter().find(|p| p.key.eq_ignore_ascii_case(needle)) {
        return Ok(place.point());
    }

    if needle.contains(',') {
        return needle.parse();
    }

    let known = places.iter().map(|p| p.key.as_str()).collect::<Vec<_>>();
    Err(AirfreightError::invalid(format!(
        "unknown place '{}'. Use 'lat,lon' or one of: {}",
        needle,
        known.join(", ")
    )))
}
