//! Headless demo host
//!
//! Stands in for the real environment: pumps frames at ~60 Hz, clamps
//! wall-clock dt, fires the spawn timer once per second, supplies a static
//! hitbox layout, and plays the renderer's part by flipping readiness flags
//! as soon as bodies spawn. Emits JSON snapshots for inspection.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use bubblefield::ViewportInfo;
use bubblefield::consts::{MAX_DT, SPAWN_INTERVAL};
use bubblefield::sim::{ObstacleProvider, Simulation, StaticObstacle, TickInput, tick};

/// Demo stand-in for live UI layout: a header bar and a centered card
struct FixedLayout {
    viewport: ViewportInfo,
}

impl ObstacleProvider for FixedLayout {
    fn current(&self) -> Vec<StaticObstacle> {
        let w = self.viewport.width;
        let h = self.viewport.height;
        vec![
            StaticObstacle::from_rect(0.0, 0.0, w, 60.0),
            StaticObstacle::from_rect(w / 2.0 - 200.0, h / 2.0 - 120.0, 400.0, 240.0),
        ]
    }
}

const SPAWN_BUDGET: u32 = 20;
const RUN_SECONDS: f64 = 20.0;
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let viewport = ViewportInfo::new(1280.0, 800.0);
    let layout = FixedLayout { viewport };
    let mut sim = Simulation::new(seed, SPAWN_BUDGET);

    log::info!("bubblefield demo starting (seed {seed}, budget {SPAWN_BUDGET})");

    let start = Instant::now();
    let mut last = start;
    let mut spawn_elapsed = SPAWN_INTERVAL; // spawn immediately on the first frame
    let mut log_elapsed = 0.0;

    while start.elapsed().as_secs_f64() < RUN_SECONDS {
        let now = Instant::now();
        // The host clamps dt; the core trusts its input
        let dt = (now - last).as_secs_f64().min(MAX_DT);
        last = now;

        spawn_elapsed += dt;
        if spawn_elapsed >= SPAWN_INTERVAL && !sim.spawning_done() {
            spawn_elapsed = 0.0;
            // The demo is also the "renderer": sprites load instantly, so
            // new bodies become physical right away.
            for handle in sim.spawn_pair(viewport) {
                handle.set();
            }
        }

        let obstacles = layout.current();
        let report = tick(
            &mut sim,
            &TickInput { dt, world: viewport.world(), obstacles: &obstacles },
        );
        if !report.is_healthy() {
            log::error!("non-finite bodies {:?}, stopping", report.non_finite);
            break;
        }

        log_elapsed += dt;
        if log_elapsed >= 1.0 {
            log_elapsed = 0.0;
            match serde_json::to_string(&sim.snapshot()) {
                Ok(json) => log::info!("tick {}: {json}", sim.time_ticks),
                Err(e) => log::warn!("snapshot serialization failed: {e}"),
            }
        }

        thread::sleep(FRAME);
    }

    log::info!(
        "demo done: {} ticks, {} bodies, {:.1}s",
        sim.time_ticks,
        sim.bodies().len(),
        start.elapsed().as_secs_f64()
    );
}
