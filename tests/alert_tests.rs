use chrono::{NaiveDate, NaiveDateTime};
use railgate::{
    analyzer::{AlertKind, AlertPriority, ScheduleAnalyzer},
    repository::{Priority, Repository, TrainRecord, TrainStatus},
};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 23)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn train(number: &str, arrival: &str, closure_duration: u32) -> TrainRecord {
    TrainRecord {
        train_number: number.into(),
        arrival_time: arrival.into(),
        departure_time: arrival.into(),
        platform: "1".into(),
        route: "Test Service".into(),
        status: TrainStatus::OnTime,
        delay_minutes: 0,
        gate_closure_duration: closure_duration,
        priority: Priority::Normal,
    }
}

fn delayed(number: &str, arrival: &str, delay_minutes: u32) -> TrainRecord {
    TrainRecord {
        status: TrainStatus::Delayed,
        delay_minutes,
        ..train(number, arrival, 3)
    }
}

#[test]
fn big_delay_raises_one_alert() {
    let analyzer =
        ScheduleAnalyzer::new(Repository::new().with_trains(vec![delayed("LOC-67890", "14:45", 15)]));
    let alerts = analyzer.generate_alerts(at(14, 0));

    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.kind, AlertKind::DelayAlert);
    assert_eq!(alert.priority, AlertPriority::High);
    assert_eq!(alert.train_number.as_deref(), Some("LOC-67890"));
    assert_eq!(alert.message, "Train LOC-67890 delayed by 15 minutes");
}

#[test]
fn small_delay_raises_nothing() {
    let analyzer =
        ScheduleAnalyzer::new(Repository::new().with_trains(vec![delayed("LOC-67890", "14:45", 8)]));
    assert!(analyzer.generate_alerts(at(14, 0)).is_empty());
}

#[test]
fn delay_threshold_is_strict() {
    let analyzer =
        ScheduleAnalyzer::new(Repository::new().with_trains(vec![delayed("LOC-67890", "14:45", 10)]));
    assert!(analyzer.generate_alerts(at(14, 0)).is_empty());
}

#[test]
fn long_closure_raises_medium_alert() {
    // 12 + 5 lead minutes = 17 total, over the 10 minute threshold.
    let analyzer =
        ScheduleAnalyzer::new(Repository::new().with_trains(vec![train("FRT-11111", "15:15", 12)]));
    let alerts = analyzer.generate_alerts(at(14, 0));

    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.kind, AlertKind::LongClosureAlert);
    assert_eq!(alert.priority, AlertPriority::Medium);
    assert_eq!(
        alert.message,
        "Extended gate closure expected: 17 minutes for FRT-11111"
    );
    assert_eq!(
        alert.closure_start.map(|t| t.to_string()),
        Some("15:10".to_string())
    );
}

#[test]
fn short_closure_raises_nothing() {
    // 3 + 5 = 8 minutes total, under the threshold.
    let analyzer =
        ScheduleAnalyzer::new(Repository::new().with_trains(vec![train("PSG-33333", "15:15", 3)]));
    assert!(analyzer.generate_alerts(at(14, 0)).is_empty());
}

#[test]
fn high_intensity_raises_exactly_one_traffic_alert() {
    let analyzer = ScheduleAnalyzer::new(Repository::new());
    let alerts = analyzer.generate_alerts(at(8, 0));

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::TrafficAlert);
    assert_eq!(alerts[0].priority, AlertPriority::Medium);
    assert_eq!(
        alerts[0].message,
        "High traffic intensity detected. Consider alternative routes."
    );
}

#[test]
fn no_traffic_alert_off_peak() {
    let analyzer = ScheduleAnalyzer::new(Repository::new());
    assert!(analyzer.generate_alerts(at(3, 0)).is_empty());
}

#[test]
fn alerts_ordered_delay_then_closure_then_traffic() {
    let analyzer = ScheduleAnalyzer::new(Repository::new().with_trains(vec![
        train("FRT-11111", "19:30", 12),
        delayed("LOC-67890", "19:45", 15),
    ]));
    // Hour 18 is evening rush, so a traffic alert joins the other two.
    let alerts = analyzer.generate_alerts(at(18, 0));

    let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AlertKind::DelayAlert,
            AlertKind::LongClosureAlert,
            AlertKind::TrafficAlert
        ]
    );
}

#[test]
fn long_closure_alerts_follow_schedule_order() {
    let analyzer = ScheduleAnalyzer::new(Repository::new().with_trains(vec![
        train("LATE", "16:30", 12),
        train("EARLY", "15:15", 12),
    ]));
    let alerts = analyzer.generate_alerts(at(14, 0));

    assert_eq!(alerts.len(), 2);
    assert!(alerts[0].message.ends_with("EARLY"));
    assert!(alerts[1].message.ends_with("LATE"));
}

#[test]
fn alert_type_serializes_snake_case() {
    let analyzer =
        ScheduleAnalyzer::new(Repository::new().with_trains(vec![delayed("LOC-67890", "14:45", 15)]));
    let alerts = analyzer.generate_alerts(at(14, 0));
    let json = serde_json::to_value(&alerts[0]).unwrap();

    assert_eq!(json["type"], "delay_alert");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["train_number"], "LOC-67890");
}
