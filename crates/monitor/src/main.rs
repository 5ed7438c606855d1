use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use chrono::Local;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use railgate::{analyzer::ScheduleAnalyzer, repository::Repository, snapshot};
use tracing::info;

#[derive(Parser)]
#[command(name = "railgate-monitor")]
#[command(about = "Level-crossing gate closure monitor")]
struct Args {
    /// Snapshot file the backend reads.
    #[arg(long, default_value = "processed_data.json")]
    out: PathBuf,

    /// Seconds between pipeline runs in continuous mode.
    #[arg(long, default_value_t = 30)]
    interval: u64,

    /// Fix the traffic-simulation RNG for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Enter continuous mode without prompting.
    #[arg(long)]
    continuous: bool,
}

fn main() {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let analyzer = ScheduleAnalyzer::new(Repository::sample());

    info!("Running initial data analysis...");
    let now = Local::now().naive_local();
    print_report(&analyzer, now, &mut rng);

    if snapshot::sync_to_file(&analyzer, &args.out, now, &mut rng) {
        println!(
            "\nData synchronized with backend (saved to {})",
            args.out.display()
        );
    }

    if args.continuous || prompt_continuous() {
        println!("Starting continuous processing... Press Enter to stop.");

        // Stop signal: cleared from a watcher thread once the user hits
        // Enter; the loop notices between iterations.
        let running = Arc::new(AtomicBool::new(true));
        let watcher = {
            let running = Arc::clone(&running);
            thread::spawn(move || {
                let mut line = String::new();
                let _ = io::stdin().lock().read_line(&mut line);
                info!("Received stop signal, stopping...");
                running.store(false, Ordering::Relaxed);
            })
        };

        snapshot::run_continuous(
            &analyzer,
            &args.out,
            Duration::from_secs(args.interval),
            &mut rng,
            &running,
        );
        let _ = watcher.join();
    }
}

fn print_report<R: Rng>(analyzer: &ScheduleAnalyzer, now: chrono::NaiveDateTime, rng: &mut R) {
    let schedule = analyzer.closure_schedule(now);
    println!("\n=== Gate Closure Schedule ===");
    for window in &schedule {
        println!(
            "{}: {} - {} ({} min)",
            window.train_number, window.closure_start, window.closure_end, window.duration_minutes
        );
    }

    let routes = analyzer.rank_routes(now, rng);
    println!("\n=== Optimized Alternative Routes ===");
    for route in &routes {
        let status = if route.recommended { "[RECOMMENDED]" } else { "" };
        println!(
            "{}: +{} min, Traffic: {:?} {}",
            route.name, route.additional_time_minutes, route.traffic_level, status
        );
    }

    let predictions = analyzer.predict_wait_times(now);
    println!("\n=== Wait Time Predictions ===");
    for (train, prediction) in &predictions {
        println!(
            "{}: {} min until closure, {}",
            train, prediction.minutes_until_closure, prediction.recommended_action
        );
    }

    let analysis = analyzer.traffic_patterns(now, rng);
    println!("\n=== Traffic Analysis ===");
    println!(
        "Current traffic: {:?}",
        analysis.current_conditions.traffic_intensity
    );
    println!(
        "Recommended window: {}",
        analysis.predictions.recommended_travel_window
    );

    let alerts = analyzer.generate_alerts(now);
    println!("\n=== Active Alerts ===");
    for alert in &alerts {
        println!("[{:?}] {}", alert.priority, alert.message);
    }
}

fn prompt_continuous() -> bool {
    print!("\nStart continuous processing? (y/n): ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}
