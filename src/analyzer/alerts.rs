use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

use crate::{
    analyzer::closure::ClosureWindow,
    repository::{TrafficLevel, TrainRecord, TrainStatus},
    shared::time::ClockTime,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    DelayAlert,
    LongClosureAlert,
    TrafficAlert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub message: String,
    pub timestamp: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_number: Option<Arc<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closure_start: Option<ClockTime>,
}

/// Delay threshold above which a delayed train raises an alert.
const DELAY_ALERT_MINUTES: u32 = 10;
/// Closure length above which a closure counts as extended.
const LONG_CLOSURE_MINUTES: u32 = 10;

/// Collects the active alerts: one per badly delayed train (input order),
/// one per extended closure (schedule order), then at most one traffic
/// alert when the current intensity is high.
pub fn generate_alerts(
    trains: &[TrainRecord],
    schedule: &[ClosureWindow],
    traffic_intensity: TrafficLevel,
    now: NaiveDateTime,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for train in trains {
        if train.status == TrainStatus::Delayed && train.delay_minutes > DELAY_ALERT_MINUTES {
            alerts.push(Alert {
                kind: AlertKind::DelayAlert,
                priority: AlertPriority::High,
                message: format!(
                    "Train {} delayed by {} minutes",
                    train.train_number, train.delay_minutes
                ),
                timestamp: now,
                train_number: Some(train.train_number.clone()),
                closure_start: None,
            });
        }
    }

    for window in schedule {
        if window.duration_minutes > LONG_CLOSURE_MINUTES {
            alerts.push(Alert {
                kind: AlertKind::LongClosureAlert,
                priority: AlertPriority::Medium,
                message: format!(
                    "Extended gate closure expected: {} minutes for {}",
                    window.duration_minutes, window.train_number
                ),
                timestamp: now,
                train_number: None,
                closure_start: Some(window.closure_start),
            });
        }
    }

    if traffic_intensity == TrafficLevel::High {
        alerts.push(Alert {
            kind: AlertKind::TrafficAlert,
            priority: AlertPriority::Medium,
            message: "High traffic intensity detected. Consider alternative routes.".to_string(),
            timestamp: now,
            train_number: None,
            closure_start: None,
        });
    }

    info!("Generated {} alerts", alerts.len());
    alerts
}
