//! Fixed-cadence simulation step
//!
//! One tick: integrate every body, bounce off the world borders, collect
//! every contact into a batch, resolve the batch, then scan for numerical
//! blow-up. Pure synchronous computation; the host owns all timing.

use glam::DVec2;

use super::collision::Collision;
use super::obstacle::StaticObstacle;
use super::state::Simulation;
use crate::consts::MAX_DT;

/// Per-tick input from the environment
#[derive(Debug, Clone, Copy)]
pub struct TickInput<'a> {
    /// Elapsed seconds since the previous tick, clamped by the caller to
    /// [`MAX_DT`]
    pub dt: f64,
    /// Current viewport size (the reflection borders)
    pub world: DVec2,
    /// Current UI hitboxes, rebuilt by the environment every tick
    pub obstacles: &'a [StaticObstacle],
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Number of contacts detected and resolved
    pub resolved: usize,
    /// IDs of bodies whose x position went non-finite this tick
    pub non_finite: Vec<u32>,
}

impl TickReport {
    /// False when a body blew up numerically; the state is reported, not
    /// repaired, and the host decides what to do with the run.
    pub fn is_healthy(&self) -> bool {
        self.non_finite.is_empty()
    }
}

/// Advance the simulation by one step.
///
/// Contacts are collected in a stable detection order (for each body index
/// i: pairs (i, j > i) first, then i against each obstacle in input order)
/// and resolved in that same order. Under three or more simultaneous
/// contacts a later resolution can compound an earlier one; no global
/// sequencing beyond detection order is promised.
pub fn tick(sim: &mut Simulation, input: &TickInput<'_>) -> TickReport {
    debug_assert!(
        input.dt.is_finite() && input.dt <= MAX_DT,
        "dt must be clamped by the host, got {}",
        input.dt
    );

    for body in &mut sim.bodies {
        body.integrate(input.dt);
        body.reflect_borders(input.world);
    }

    let collisions = detect_all(sim, input.obstacles);
    let resolved = collisions.len();
    for collision in &collisions {
        collision.resolve(&mut sim.bodies);
    }

    let mut non_finite = Vec::new();
    for body in &sim.bodies {
        if !body.pos.x.is_finite() {
            log::error!(
                "body {} went non-finite at tick {} (seed {}): {body:?}",
                body.id,
                sim.time_ticks,
                sim.seed
            );
            non_finite.push(body.id);
        }
    }

    sim.time_ticks += 1;
    TickReport { resolved, non_finite }
}

/// Brute-force pairwise detection; body counts are small enough that no
/// broad phase is warranted.
fn detect_all(sim: &Simulation, obstacles: &[StaticObstacle]) -> Vec<Collision> {
    let mut collisions = Vec::new();
    for i in 0..sim.bodies.len() {
        for j in (i + 1)..sim.bodies.len() {
            if let Some(collision) = Collision::between_bodies(&sim.bodies, i, j) {
                collisions.push(collision);
            }
        }
        for k in 0..obstacles.len() {
            if let Some(collision) = Collision::body_obstacle(&sim.bodies, i, obstacles, k) {
                collisions.push(collision);
            }
        }
    }
    collisions
}
