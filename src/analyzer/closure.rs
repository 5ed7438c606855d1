use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    repository::{Priority, TrainRecord},
    shared::time::ClockTime,
};

/// Minutes the gate goes down ahead of a train's arrival.
pub const CLOSURE_LEAD_MINUTES: i64 = 5;

/// The interval the gate stays down for one train.
#[derive(Debug, Clone, Serialize)]
pub struct ClosureWindow {
    pub train_number: Arc<str>,
    pub closure_start: ClockTime,
    pub closure_end: ClockTime,
    pub duration_minutes: u32,
    pub priority: Priority,
    pub platform: Arc<str>,
}

/// Derives the gate closure schedule for `now`'s date, sorted by closure
/// start. Records with a malformed arrival time are skipped with a warning
/// rather than failing the whole batch.
///
/// Closures that would cross midnight are not split across days; the
/// schedule only makes sense within a single service day.
pub fn closure_schedule(trains: &[TrainRecord], now: NaiveDateTime) -> Vec<ClosureWindow> {
    let mut schedule: Vec<ClosureWindow> = trains
        .iter()
        .filter_map(|train| {
            let arrival = match ClockTime::parse(&train.arrival_time) {
                Ok(time) => time,
                Err(e) => {
                    warn!("skipping train {}: {e}", train.train_number);
                    return None;
                }
            };
            let arrival = arrival.on(now.date());
            let start = arrival - TimeDelta::minutes(CLOSURE_LEAD_MINUTES);
            let end = arrival + TimeDelta::minutes(train.gate_closure_duration as i64);
            Some(ClosureWindow {
                train_number: train.train_number.clone(),
                closure_start: start.time().into(),
                closure_end: end.time().into(),
                duration_minutes: train.gate_closure_duration + CLOSURE_LEAD_MINUTES as u32,
                priority: train.priority,
                platform: train.platform.clone(),
            })
        })
        .collect();

    schedule.sort_by_key(|window| window.closure_start);

    info!("Generated gate closure schedule for {} trains", schedule.len());
    schedule
}
