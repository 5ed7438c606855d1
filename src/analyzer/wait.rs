use std::{collections::HashMap, fmt, sync::Arc};

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

use crate::analyzer::closure::ClosureWindow;

/// What a road user at the crossing should do about an upcoming closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendedAction {
    #[serde(rename = "STOP - Gate closing very soon")]
    Stop,
    #[serde(rename = "CAUTION - Consider alternative route")]
    Caution,
    #[serde(rename = "PLAN - Long closure expected, use alternative route")]
    Plan,
    #[serde(rename = "PROCEED - Sufficient time to cross")]
    Proceed,
}

impl RecommendedAction {
    /// Threshold rules, first match wins.
    pub fn for_closure(minutes_until: i64, duration_minutes: u32) -> Self {
        if minutes_until <= 2 {
            RecommendedAction::Stop
        } else if minutes_until <= 5 {
            RecommendedAction::Caution
        } else if duration_minutes > 10 {
            RecommendedAction::Plan
        } else {
            RecommendedAction::Proceed
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RecommendedAction::Stop => "STOP - Gate closing very soon",
            RecommendedAction::Caution => "CAUTION - Consider alternative route",
            RecommendedAction::Plan => "PLAN - Long closure expected, use alternative route",
            RecommendedAction::Proceed => "PROCEED - Sufficient time to cross",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WaitPrediction {
    pub minutes_until_closure: i64,
    pub closure_duration: u32,
    pub total_wait_if_caught: u32,
    pub recommended_action: RecommendedAction,
}

/// Predicts the wait at the crossing for every closure still ahead of `now`.
/// Closures already started (or in the past) are dropped. Keys are train
/// numbers; a duplicate train number silently overwrites its predecessor.
pub fn predict_wait_times(
    schedule: &[ClosureWindow],
    now: NaiveDateTime,
) -> HashMap<Arc<str>, WaitPrediction> {
    let mut predictions = HashMap::new();

    for window in schedule {
        let start = window.closure_start.on(now.date());
        if start <= now {
            continue;
        }
        // Truncated, not rounded: 90 seconds out is "1 minute until".
        let minutes_until = (start - now).num_seconds() / 60;
        predictions.insert(
            window.train_number.clone(),
            WaitPrediction {
                minutes_until_closure: minutes_until,
                closure_duration: window.duration_minutes,
                total_wait_if_caught: window.duration_minutes,
                recommended_action: RecommendedAction::for_closure(
                    minutes_until,
                    window.duration_minutes,
                ),
            },
        );
    }

    info!(
        "Generated wait time predictions for {} upcoming closures",
        predictions.len()
    );
    predictions
}
