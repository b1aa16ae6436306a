//! orders: replay a courier order file through the fleet driver.
//!
//! ```text
//! orders [orders.csv] [output_dir] [config.toml]
//! ```
//!
//! Reads one route per courier from the CSV, runs every courier to
//! completion, and writes `trajectories.csv` / `waypoints.csv` into the
//! output directory for a renderer to animate.  Lateness notices are logged
//! at `warn`; set `RUST_LOG=debug` to also see skipped CSV rows.

mod config;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cs_fleet::FleetBuilder;
use cs_ingest::load_routes_csv;
use cs_output::{Bounds, CsvWriter, FleetOutputObserver, Playback, PlaybackMode};

use config::AppConfig;

// ── Defaults ──────────────────────────────────────────────────────────────────

const DEFAULT_ORDERS: &str = "./orders.csv";
const DEFAULT_OUTPUT: &str = "./output";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let orders_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_ORDERS.into()));
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.into()));
    let app = match args.next() {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    println!("=== orders | courier_sim ===");
    println!(
        "Step size: {}  |  Speed: {}  |  Travel per tick: {}",
        app.courier.step_size,
        app.courier.speed,
        app.courier.travel_per_tick()
    );
    println!();

    // 1. Routes.
    let routes = load_routes_csv(&orders_path)
        .with_context(|| format!("loading {}", orders_path.display()))?;
    info!(couriers = routes.len(), path = %orders_path.display(), "routes loaded");

    // 2. Fleet.
    let mut fleet = FleetBuilder::new(app.courier.clone()).routes(routes).build()?;

    // 3. Output.
    std::fs::create_dir_all(&output_dir)?;
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = FleetOutputObserver::new(writer, app.palette.clone());

    // 4. Run.
    let t0 = Instant::now();
    let run = fleet.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  trajectories.csv : {} rows", obs.trajectory_rows());
    println!("  output dir       : {}", output_dir.display());
    println!();

    println!("{:<12} {:>8} {:>24} {:>6}", "Courier", "Ticks", "Final position", "Late");
    println!("{}", "-".repeat(53));
    for track in &run.tracks {
        let last = track
            .final_position()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<12} {:>8} {:>24} {:>6}",
            track.name,
            track.ticks(),
            last,
            track.lateness.len()
        );
    }
    println!();

    // 6. Playback.
    let playback = Playback::new(&run);
    let render = &app.render;
    let mode = match render.mode {
        PlaybackMode::Slider => "slider",
        PlaybackMode::Animate => "animate",
    };
    println!(
        "Playback: {mode}, {} frames, {} ms/frame, {} ms repeat delay",
        playback.frame_count(),
        render.frame_interval_ms,
        render.repeat_delay_ms
    );

    if let Some(extent) = Bounds::around(&run) {
        let fits = [
            (extent.min_x, extent.min_y),
            (extent.max_x, extent.max_y),
        ]
        .into_iter()
        .all(|p| render.bounds.contains(p.into()));
        if !fits {
            println!(
                "  note: waypoints span x {:.0}..{:.0}, y {:.0}..{:.0}, outside the plot bounds",
                extent.min_x, extent.max_x, extent.min_y, extent.max_y
            );
        }
    }

    Ok(())
}
