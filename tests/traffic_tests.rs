use chrono::{NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use railgate::{
    analyzer::{ScheduleAnalyzer, traffic},
    repository::{Repository, TrafficLevel},
};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 23)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn intensity_morning_rush_is_high() {
    assert_eq!(traffic::traffic_intensity(8), TrafficLevel::High);
}

#[test]
fn intensity_midday_is_medium() {
    assert_eq!(traffic::traffic_intensity(12), TrafficLevel::Medium);
}

#[test]
fn intensity_night_is_low() {
    assert_eq!(traffic::traffic_intensity(2), TrafficLevel::Low);
}

#[test]
fn intensity_hour_19_resolves_high() {
    // 19 sits in both the rush and the evening band; rush wins.
    assert_eq!(traffic::traffic_intensity(19), TrafficLevel::High);
}

#[test]
fn intensity_evening_is_medium() {
    assert_eq!(traffic::traffic_intensity(20), TrafficLevel::Medium);
    assert_eq!(traffic::traffic_intensity(21), TrafficLevel::Medium);
}

#[test]
fn intensity_late_night_is_low() {
    assert_eq!(traffic::traffic_intensity(22), TrafficLevel::Low);
    assert_eq!(traffic::traffic_intensity(23), TrafficLevel::Low);
}

#[test]
fn window_before_morning_rush() {
    assert_eq!(
        traffic::recommended_window(3),
        "07:00-07:30 (Before morning rush)"
    );
}

#[test]
fn window_during_morning_rush() {
    assert_eq!(
        traffic::recommended_window(8),
        "10:00-11:00 (After morning rush)"
    );
}

#[test]
fn window_midday() {
    assert_eq!(traffic::recommended_window(12), "Now - Good time to travel");
}

#[test]
fn window_during_evening_rush() {
    assert_eq!(
        traffic::recommended_window(18),
        "20:00-21:00 (After evening rush)"
    );
}

#[test]
fn window_late_evening() {
    assert_eq!(
        traffic::recommended_window(22),
        "Now - Light traffic period"
    );
}

#[test]
fn next_hour_prediction_follows_bands() {
    let analyzer = ScheduleAnalyzer::new(Repository::sample());
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    // 06:xx -> next hour 7 is rush.
    let analysis = analyzer.traffic_patterns(at(6, 30), &mut rng);
    assert_eq!(analysis.predictions.next_hour_traffic, TrafficLevel::High);

    // 23:xx wraps to hour 0, which is quiet.
    let analysis = analyzer.traffic_patterns(at(23, 30), &mut rng);
    assert_eq!(analysis.predictions.next_hour_traffic, TrafficLevel::Low);
}

#[test]
fn current_conditions_reflect_evaluation_instant() {
    let analyzer = ScheduleAnalyzer::new(Repository::sample());
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let analysis = analyzer.traffic_patterns(at(8, 15), &mut rng);

    assert_eq!(analysis.current_conditions.time.to_string(), "08:15");
    assert_eq!(analysis.current_conditions.day, "Sunday");
    assert_eq!(
        analysis.current_conditions.traffic_intensity,
        TrafficLevel::High
    );
}

#[test]
fn statistics_stay_in_sample_ranges() {
    let analyzer = ScheduleAnalyzer::new(Repository::sample());
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let stats = analyzer.traffic_patterns(at(12, 0), &mut rng).statistics;
        assert!((20..=35).contains(&stats.average_daily_closures));
        assert!((75..=95).contains(&stats.on_time_percentage));
        assert!(["1", "2", "3", "4"].contains(&stats.busiest_platform));
    }
}

#[test]
fn fixed_seed_fixes_the_noise() {
    let analyzer = ScheduleAnalyzer::new(Repository::sample());
    let mut a = ChaCha8Rng::seed_from_u64(11);
    let mut b = ChaCha8Rng::seed_from_u64(11);

    let first = analyzer.traffic_patterns(at(12, 0), &mut a);
    let second = analyzer.traffic_patterns(at(12, 0), &mut b);
    assert_eq!(
        first.current_conditions.weather_impact,
        second.current_conditions.weather_impact
    );
    assert_eq!(first.statistics.on_time_percentage, second.statistics.on_time_percentage);
}
