//! Travel times from one origin to every catalog place.

use super::{validate_speed, TravelEstimate, TravelRequest};
use crate::config::Place;
use crate::error::Result;
use crate::geo::GeoPoint;
use serde::Serialize;

/// One destination in a survey.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyEntry {
    pub place: Place,
    pub estimate: TravelEstimate,
}

/// Estimate from `origin` to each place, fastest first.
///
/// Places sitting exactly on the origin are skipped. Ties are ordered by key so
/// the output is stable.
pub fn survey(origin: GeoPoint, places: &[Place], cruising_speed_kmh: f64) -> Result<Vec<SurveyEntry>> {
    origin.validate()?;
    validate_speed(cruising_speed_kmh)?;

    let mut entries = places
        .iter()
        .filter(|place| place.point() != origin)
        .map(|place| {
            let estimate = TravelRequest::new(origin, place.point())
                .with_speed(cruising_speed_kmh)
                .estimate()?;
            Ok(SurveyEntry {
                place: place.clone(),
                estimate,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    entries.sort_by(|a, b| {
        a.estimate
            .hours
            .total_cmp(&b.estimate.hours)
            .then_with(|| a.place.key.cmp(&b.place.key))
    });

    Ok(entries)
}
