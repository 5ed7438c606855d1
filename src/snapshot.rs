use std::{
    collections::HashMap,
    fs::File,
    io,
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    analyzer::{ClosureWindow, ScheduleAnalyzer, TrafficAnalysis, WaitPrediction},
    repository::{RouteCandidate, TrafficLevel},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wire form of a ranked route, with the display strings the backend shows
/// as-is.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDto {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub distance: String,
    pub additional_time: String,
    pub traffic_level: TrafficLevel,
    pub recommended: bool,
    pub toll_cost: f64,
}

impl RouteDto {
    pub fn from(route: &RouteCandidate) -> Self {
        Self {
            id: route.route_id.clone(),
            name: route.name.clone(),
            distance: format!("+{} km", route.distance_km),
            additional_time: format!("{} min longer", route.additional_time_minutes),
            traffic_level: route.traffic_level,
            recommended: route.recommended,
            toll_cost: route.toll_cost,
        }
    }
}

/// One full pipeline result, shaped for the backend. The schema is not
/// versioned; consumers must tolerate additive changes.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub timestamp: NaiveDateTime,
    pub gate_closure_schedule: Vec<ClosureWindow>,
    pub optimized_routes: Vec<RouteDto>,
    pub wait_predictions: HashMap<Arc<str>, WaitPrediction>,
    pub traffic_analysis: TrafficAnalysis,
}

impl Snapshot {
    /// Runs every derivation once against the same evaluation instant.
    pub fn assemble<R: Rng>(
        analyzer: &ScheduleAnalyzer,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Self {
        Self {
            timestamp: now,
            gate_closure_schedule: analyzer.closure_schedule(now),
            optimized_routes: analyzer
                .rank_routes(now, rng)
                .iter()
                .map(RouteDto::from)
                .collect(),
            wait_predictions: analyzer.predict_wait_times(now),
            traffic_analysis: analyzer.traffic_patterns(now, rng),
        }
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Assembles a snapshot and writes it for the backend to pick up. A failed
/// write is logged and reported as `false` so a processing loop can retry
/// on its next tick instead of dying.
pub fn sync_to_file<R: Rng, P: AsRef<Path>>(
    analyzer: &ScheduleAnalyzer,
    path: P,
    now: NaiveDateTime,
    rng: &mut R,
) -> bool {
    let snapshot = Snapshot::assemble(analyzer, now, rng);
    match snapshot.write(path) {
        Ok(()) => {
            info!("Successfully synchronized data with backend");
            true
        }
        Err(e) => {
            error!("Failed to sync with backend: {e}");
            false
        }
    }
}

/// Delay before retrying after a failed snapshot write.
const RETRY_BACKOFF: Duration = Duration::from_secs(5);

/// Re-runs the full pipeline on a fixed interval, writing a snapshot and
/// logging the active alerts each tick, until `running` is cleared.
///
/// The flag is only checked between iterations, never mid-pipeline. A
/// failed write shortens the sleep to `RETRY_BACKOFF` so the next attempt
/// comes sooner.
pub fn run_continuous<R: Rng, P: AsRef<Path>>(
    analyzer: &ScheduleAnalyzer,
    path: P,
    interval: Duration,
    rng: &mut R,
    running: &AtomicBool,
) {
    info!(
        "Starting data processing with {:?} interval",
        interval
    );

    while running.load(Ordering::Relaxed) {
        let now = Local::now().naive_local();
        let synced = sync_to_file(analyzer, &path, now, rng);

        for alert in analyzer.generate_alerts(now) {
            warn!("ALERT: {}", alert.message);
        }

        thread::sleep(if synced { interval } else { RETRY_BACKOFF.min(interval) });
    }

    info!("Data processing stopped");
}
