//! playground — smallest end-to-end boidflock scenario.
//!
//! A dozen boids chase a target orbiting a stationary anchor through a field
//! of sphere obstacles.  Movement traces land in `./trace_out` as CSV; run
//! with `RUST_LOG=warn` (or `debug`) to watch the search and planner logs.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use boid_agent::BoidConfig;
use boid_core::{CellPoint, SimConfig, Tick, Vec3};
use boid_sim::FlockBuilder;
use boid_trace::{CsvTraceWriter, TraceObserver};
use boid_world::{FixedPoint, GridOccupancy, Sphere, SphereField};

// ── Constants ─────────────────────────────────────────────────────────────────

const BOID_COUNT:   usize = 12;
const SEED:         u64   = 42;
const TOTAL_TICKS:  u64   = 2_000;
const OUTPUT_DIR:   &str  = "trace_out";

/// Radius and angular speed of the target's orbit around the anchor.
const ORBIT_RADIUS: f32 = 25.0;
const ORBIT_STEP:   f32 = 0.01; // radians per tick

/// All lattice cells whose centers fall inside the given sphere.
fn ball_cells(center: Vec3, radius: f32) -> impl Iterator<Item = CellPoint> {
    let lo = (center - Vec3::new(radius, radius, radius)).round_to_cell();
    let hi = (center + Vec3::new(radius, radius, radius)).round_to_cell();
    (lo.x..=hi.x).flat_map(move |x| {
        (lo.y..=hi.y).flat_map(move |y| {
            (lo.z..=hi.z).filter_map(move |z| {
                let cell = CellPoint::new(x, y, z);
                (cell.cell_center().distance(center) <= radius).then_some(cell)
            })
        })
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir).context("create output directory")?;

    // ── World ─────────────────────────────────────────────────────────────
    let obstacles = SphereField::new(vec![
        Sphere { center: Vec3::new(10.0, 5.0, 0.0), radius: 3.0 },
        Sphere { center: Vec3::new(-12.0, 8.0, 6.0), radius: 4.0 },
        Sphere { center: Vec3::new(0.0, 15.0, -10.0), radius: 2.5 },
    ]);

    // Occupancy: the obstacle volumes, rasterized to blocked cells.
    let occupancy = GridOccupancy::from_cells(
        ball_cells(Vec3::new(10.0, 5.0, 0.0), 3.0)
            .chain(ball_cells(Vec3::new(-12.0, 8.0, 6.0), 4.0))
            .chain(ball_cells(Vec3::new(0.0, 15.0, -10.0), 2.5)),
    );

    // ── Target and anchor ─────────────────────────────────────────────────
    let anchor_pos = Vec3::new(0.0, 2.0, 0.0);
    let target = move |t: Tick| {
        let angle = t.0 as f32 * ORBIT_STEP;
        anchor_pos + Vec3::new(angle.cos(), 0.0, angle.sin()) * ORBIT_RADIUS
    };

    // ── Flock ─────────────────────────────────────────────────────────────
    let spawn_points: Vec<Vec3> = (0..BOID_COUNT)
        .map(|i| {
            let angle = i as f32 / BOID_COUNT as f32 * std::f32::consts::TAU;
            Vec3::new(angle.cos() * 3.0, 1.0, angle.sin() * 3.0)
        })
        .collect();

    let mut sim = FlockBuilder::new(
        SimConfig { total_ticks: TOTAL_TICKS, seed: SEED },
        obstacles,
        occupancy,
    )
    .spawn_at(spawn_points)
    .boid_config(BoidConfig::default())
    .target(target)
    .anchor(FixedPoint(anchor_pos))
    .build()
    .context("build flock sim")?;

    // ── Run ───────────────────────────────────────────────────────────────
    let writer = CsvTraceWriter::new(out_dir).context("open trace writers")?;
    let mut observer = TraceObserver::new(writer);

    log::info!("running {BOID_COUNT} boids for {TOTAL_TICKS} ticks");
    let started = Instant::now();
    sim.run(&mut observer);
    let elapsed = started.elapsed();

    if let Some(err) = observer.take_error() {
        return Err(err).context("trace writing failed mid-run");
    }

    println!(
        "simulated {BOID_COUNT} boids for {TOTAL_TICKS} ticks in {:.2?} ({:.0} ticks/s)",
        elapsed,
        TOTAL_TICKS as f64 / elapsed.as_secs_f64(),
    );
    println!("traces written to {}/", OUTPUT_DIR);
    for (i, boid) in sim.boids.iter().enumerate().take(4) {
        println!("  boid {i} ended at {}", boid.position);
    }

    Ok(())
}
