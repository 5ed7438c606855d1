mod models;
pub use models::*;

/// Canonical data set the analyzer works from: the train timetable for the
/// crossing and the fixed list of alternative road routes.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub trains: Box<[TrainRecord]>,
    pub routes: Box<[RouteCandidate]>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_trains(mut self, trains: Vec<TrainRecord>) -> Self {
        self.trains = trains.into();
        self
    }

    pub fn with_routes(mut self, routes: Vec<RouteCandidate>) -> Self {
        self.routes = routes.into();
        self
    }

    /// Built-in simulation data set, used when no live feed is wired up.
    pub fn sample() -> Self {
        Self::new()
            .with_trains(sample_trains())
            .with_routes(sample_routes())
    }
}

fn sample_trains() -> Vec<TrainRecord> {
    vec![
        TrainRecord {
            train_number: "EXP-12345".into(),
            arrival_time: "14:30".into(),
            departure_time: "14:38".into(),
            platform: "3".into(),
            route: "Mumbai-Delhi Express".into(),
            status: TrainStatus::OnTime,
            delay_minutes: 0,
            gate_closure_duration: 8,
            priority: Priority::High,
        },
        TrainRecord {
            train_number: "LOC-67890".into(),
            arrival_time: "14:45".into(),
            departure_time: "14:51".into(),
            platform: "1".into(),
            route: "Local Passenger Service".into(),
            status: TrainStatus::Delayed,
            delay_minutes: 15,
            gate_closure_duration: 8,
            priority: Priority::Normal,
        },
        TrainRecord {
            train_number: "FRT-11111".into(),
            arrival_time: "15:15".into(),
            departure_time: "15:27".into(),
            platform: "2".into(),
            route: "Freight Service".into(),
            status: TrainStatus::Approaching,
            delay_minutes: 0,
            gate_closure_duration: 12,
            priority: Priority::Low,
        },
        TrainRecord {
            train_number: "EXP-22222".into(),
            arrival_time: "15:45".into(),
            departure_time: "15:52".into(),
            platform: "4".into(),
            route: "Chennai-Kolkata Express".into(),
            status: TrainStatus::OnTime,
            delay_minutes: 0,
            gate_closure_duration: 8,
            priority: Priority::High,
        },
        TrainRecord {
            train_number: "PSG-33333".into(),
            arrival_time: "16:20".into(),
            departure_time: "16:29".into(),
            platform: "1".into(),
            route: "Inter-city Passenger".into(),
            status: TrainStatus::OnTime,
            delay_minutes: 0,
            gate_closure_duration: 8,
            priority: Priority::Normal,
        },
    ]
}

fn sample_routes() -> Vec<RouteCandidate> {
    vec![
        RouteCandidate {
            route_id: "R001".into(),
            name: "Highway Bypass".into(),
            distance_km: 8.2,
            additional_time_minutes: 15,
            traffic_level: TrafficLevel::Medium,
            road_conditions: "good".into(),
            recommended: false,
            toll_cost: 25.0,
        },
        RouteCandidate {
            route_id: "R002".into(),
            name: "City Center Route".into(),
            distance_km: 7.8,
            additional_time_minutes: 12,
            traffic_level: TrafficLevel::High,
            road_conditions: "fair".into(),
            recommended: false,
            toll_cost: 0.0,
        },
        RouteCandidate {
            route_id: "R003".into(),
            name: "Industrial Zone".into(),
            distance_km: 9.1,
            additional_time_minutes: 18,
            traffic_level: TrafficLevel::Low,
            road_conditions: "excellent".into(),
            recommended: false,
            toll_cost: 15.0,
        },
        RouteCandidate {
            route_id: "R004".into(),
            name: "Bridge Road".into(),
            distance_km: 6.5,
            additional_time_minutes: 8,
            traffic_level: TrafficLevel::Low,
            road_conditions: "good".into(),
            recommended: true,
            toll_cost: 10.0,
        },
    ]
}
