//! Simulation state
//!
//! [`Simulation`] exclusively owns the live body collection. Obstacles are
//! not owned: the host lends a fresh slice to every tick. The renderer-facing
//! view of the world is the serializable [`BodySnapshot`] list.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, ReadyHandle};
use super::spawn::SpawnPolicy;
use crate::viewport::{SpawnProfile, ViewportInfo};

/// Renderer-facing view of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub ready: bool,
}

/// The owned world: bodies, spawn policy, tick counter
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Run seed, for log correlation and reproduction
    pub seed: u64,
    /// Live bodies, in spawn order
    pub bodies: Vec<Body>,
    /// Edge spawner (budgeted)
    pub spawner: SpawnPolicy,
    /// Ticks advanced so far
    pub time_ticks: u64,
    next_id: u32,
}

impl Simulation {
    /// `spawn_budget` is the total number of bubbles the run will produce
    pub fn new(seed: u64, spawn_budget: u32) -> Self {
        Self {
            seed,
            bodies: Vec::new(),
            spawner: SpawnPolicy::new(spawn_budget, seed),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Ordered body list for the rendering collaborator
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Spawn up to one body per side, budget permitting.
    ///
    /// Returns the readiness handles of the new bodies; the renderer flips
    /// each once the matching sprite has loaded. Until then the body sits
    /// inert at its off-screen spawn position.
    pub fn spawn_pair(&mut self, viewport: ViewportInfo) -> Vec<ReadyHandle> {
        let profile = SpawnProfile::for_viewport(viewport.is_compact());
        let spawned = self.spawner.spawn_pair(viewport.world(), profile);

        let mut handles = Vec::with_capacity(spawned.len());
        for params in spawned {
            let id = self.next_entity_id();
            let body = Body::new(id, params.pos, params.vel, params.radius);
            log::debug!(
                "spawned body {id}: pos=({:.1}, {:.1}) vel=({:.1}, {:.1}) r={}",
                body.pos.x,
                body.pos.y,
                body.vel.x,
                body.vel.y,
                body.radius
            );
            handles.push(body.ready_handle());
            self.bodies.push(body);
        }
        handles
    }

    /// Whether the spawn budget is spent (the host can stop its spawn timer)
    pub fn spawning_done(&self) -> bool {
        self.spawner.exhausted()
    }

    /// Serializable view of every body, in order
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies
            .iter()
            .map(|b| BodySnapshot {
                id: b.id,
                pos: b.pos,
                vel: b.vel,
                radius: b.radius,
                ready: b.is_ready(),
            })
            .collect()
    }
}
