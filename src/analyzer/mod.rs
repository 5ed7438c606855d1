use std::{collections::HashMap, sync::Arc};

use chrono::{NaiveDateTime, Timelike};
use rand::Rng;

pub mod alerts;
pub mod closure;
pub mod routes;
pub mod traffic;
pub mod wait;

pub use alerts::*;
pub use closure::*;
pub use routes::*;
pub use traffic::*;
pub use wait::*;

use crate::repository::{Repository, RouteCandidate};

/// Runs the derivation pipeline over a fixed repository. Every output is a
/// pure function of the repository, the evaluation instant and the injected
/// RNG; nothing persists between calls.
#[derive(Debug, Clone, Default)]
pub struct ScheduleAnalyzer {
    repo: Repository,
}

impl ScheduleAnalyzer {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Gate closure windows for `now`'s date, sorted by start time.
    pub fn closure_schedule(&self, now: NaiveDateTime) -> Vec<ClosureWindow> {
        closure::closure_schedule(&self.repo.trains, now)
    }

    /// A fresh traffic-adjusted ranking of the alternative routes. Exactly
    /// one route in the result carries `recommended = true` when the list
    /// is non-empty.
    pub fn rank_routes<R: Rng>(&self, now: NaiveDateTime, rng: &mut R) -> Vec<RouteCandidate> {
        routes::rank_routes(&self.repo.routes, now, rng)
    }

    /// Wait predictions for closures still ahead of `now`, keyed by train
    /// number.
    pub fn predict_wait_times(&self, now: NaiveDateTime) -> HashMap<Arc<str>, WaitPrediction> {
        wait::predict_wait_times(&self.closure_schedule(now), now)
    }

    pub fn traffic_patterns<R: Rng>(&self, now: NaiveDateTime, rng: &mut R) -> TrafficAnalysis {
        traffic::traffic_patterns(now, rng)
    }

    /// Active alerts for the current conditions.
    pub fn generate_alerts(&self, now: NaiveDateTime) -> Vec<Alert> {
        let schedule = self.closure_schedule(now);
        let intensity = traffic::traffic_intensity(now.hour());
        alerts::generate_alerts(&self.repo.trains, &schedule, intensity, now)
    }
}
