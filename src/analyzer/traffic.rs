use chrono::{NaiveDateTime, Timelike};
use rand::{Rng, seq::SliceRandom};
use serde::Serialize;
use tracing::info;

use crate::{repository::TrafficLevel, shared::time::ClockTime};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherImpact {
    #[default]
    None,
    Light,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub time: ClockTime,
    pub day: String,
    pub traffic_intensity: TrafficLevel,
    pub weather_impact: WeatherImpact,
    pub special_events: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Predictions {
    pub next_hour_traffic: TrafficLevel,
    pub peak_hours_today: [&'static str; 2],
    pub recommended_travel_window: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub average_daily_closures: u32,
    pub longest_closure_today: String,
    pub busiest_platform: &'static str,
    pub on_time_percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrafficAnalysis {
    pub current_conditions: CurrentConditions,
    pub predictions: Predictions,
    pub statistics: Statistics,
}

/// Road traffic intensity around the crossing for a given hour, from fixed
/// time bands. Hour 19 sits in both the high and medium bands; high wins
/// because it is checked first.
pub fn traffic_intensity(hour: u32) -> TrafficLevel {
    match hour % 24 {
        7..=9 | 17..=19 => TrafficLevel::High,
        10..=16 | 20..=21 => TrafficLevel::Medium,
        _ => TrafficLevel::Low,
    }
}

/// Best time-of-day band to cross, relative to the rush hours.
pub fn recommended_window(hour: u32) -> &'static str {
    match hour {
        0..=6 => "07:00-07:30 (Before morning rush)",
        7..=9 => "10:00-11:00 (After morning rush)",
        10..=16 => "Now - Good time to travel",
        17..=19 => "20:00-21:00 (After evening rush)",
        _ => "Now - Light traffic period",
    }
}

/// Summarizes current and next-hour traffic conditions. Weather, special
/// events and the statistics block are simulation noise drawn from the
/// injected RNG; only the intensity bands and the travel window carry
/// meaning.
pub fn traffic_patterns<R: Rng>(now: NaiveDateTime, rng: &mut R) -> TrafficAnalysis {
    const WEATHER: [WeatherImpact; 4] = [
        WeatherImpact::None,
        WeatherImpact::Light,
        WeatherImpact::Moderate,
        WeatherImpact::Heavy,
    ];
    const EVENTS: [Option<&str>; 4] = [None, Some("School hours"), Some("Market day"), Some("Festival")];
    const PLATFORMS: [&str; 4] = ["1", "2", "3", "4"];

    let hour = now.hour();
    let analysis = TrafficAnalysis {
        current_conditions: CurrentConditions {
            time: now.time().into(),
            day: now.format("%A").to_string(),
            traffic_intensity: traffic_intensity(hour),
            weather_impact: WEATHER.choose(rng).copied().unwrap_or_default(),
            special_events: EVENTS.choose(rng).copied().unwrap_or(None),
        },
        predictions: Predictions {
            next_hour_traffic: traffic_intensity(hour + 1),
            peak_hours_today: ["08:00-09:30", "17:30-19:00"],
            recommended_travel_window: recommended_window(hour),
        },
        statistics: Statistics {
            average_daily_closures: rng.gen_range(20..=35),
            longest_closure_today: format!("{} minutes", rng.gen_range(8..=15)),
            busiest_platform: PLATFORMS.choose(rng).copied().unwrap_or("1"),
            on_time_percentage: rng.gen_range(75..=95),
        },
    };

    info!("Generated traffic pattern analysis");
    analysis
}
