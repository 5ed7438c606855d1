use chrono::{NaiveDateTime, Timelike};
use rand::Rng;
use tracing::info;

use crate::repository::{RouteCandidate, TrafficLevel};

pub fn is_rush_hour(hour: u32) -> bool {
    matches!(hour, 7..=9 | 17..=19)
}

/// Scores the alternative routes against simulated traffic and marks the
/// fastest one as recommended.
///
/// The canonical list is left untouched; every pass starts from the base
/// travel times, so repeated calls never compound the noise. The returned
/// list is the only valid view of a pass.
pub fn rank_routes<R: Rng>(
    routes: &[RouteCandidate],
    now: NaiveDateTime,
    rng: &mut R,
) -> Vec<RouteCandidate> {
    let mut ranked: Vec<RouteCandidate> = routes
        .iter()
        .map(|route| {
            let mut route = route.clone();

            // Simulated real-time traffic variation, keyed by the route's
            // base traffic level.
            let multiplier: f64 = match route.traffic_level {
                TrafficLevel::Low => rng.gen_range(0.8..1.1),
                TrafficLevel::Medium => rng.gen_range(1.0..1.3),
                TrafficLevel::High => rng.gen_range(1.2..1.8),
            };
            route.additional_time_minutes =
                (route.additional_time_minutes as f64 * multiplier) as u32;

            if is_rush_hour(now.hour()) {
                route.traffic_level = route.traffic_level.escalate();
            }
            route
        })
        .collect();

    // Stable sort keeps the input order deterministic on ties.
    ranked.sort_by_key(|route| route.additional_time_minutes);

    for route in ranked.iter_mut() {
        route.recommended = false;
    }
    if let Some(fastest) = ranked.first_mut() {
        fastest.recommended = true;
    }

    info!("Optimized {} alternative routes", ranked.len());
    ranked
}
