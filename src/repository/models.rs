use std::sync::Arc;

use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainStatus {
    #[default]
    OnTime,
    Delayed,
    Approaching,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl TrafficLevel {
    /// One step worse, saturating at high. Applied during rush hours.
    pub fn escalate(self) -> Self {
        match self {
            TrafficLevel::Low => TrafficLevel::Medium,
            TrafficLevel::Medium => TrafficLevel::High,
            TrafficLevel::High => TrafficLevel::High,
        }
    }
}

/// A single timetable entry for a train passing the crossing.
///
/// Arrival and departure times are kept as the raw "HH:MM" strings they
/// arrive as; parsing happens when a schedule is derived, so a malformed
/// time only affects that one record.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TrainRecord {
    pub train_number: Arc<str>,
    pub arrival_time: Arc<str>,
    pub departure_time: Arc<str>,
    pub platform: Arc<str>,
    pub route: Arc<str>,
    pub status: TrainStatus,
    pub delay_minutes: u32,
    pub gate_closure_duration: u32,
    pub priority: Priority,
}

/// A candidate road route around the crossing. The canonical list is never
/// mutated; ranking scores a fresh copy on every pass.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RouteCandidate {
    pub route_id: Arc<str>,
    pub name: Arc<str>,
    pub distance_km: f64,
    pub additional_time_minutes: u32,
    pub traffic_level: TrafficLevel,
    pub road_conditions: Arc<str>,
    pub recommended: bool,
    pub toll_cost: f64,
}
