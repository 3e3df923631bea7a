//! Spawn policy
//!
//! Bubbles enter from the left and right viewport edges, one per side per
//! invocation, until a fixed budget runs out. The invocation cadence is the
//! host's business (the original fires once per second); this module only
//! draws the parameters. All randomness comes from a seeded PCG stream so a
//! run is reproducible from its seed.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{SPAWN_EDGE_OFFSET, SPAWN_SPEED_MAX, SPAWN_SPEED_MIN};
use crate::from_polar;
use crate::viewport::SpawnProfile;

/// Which viewport edge a body enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Parameters for one new body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

/// Budgeted edge spawner
#[derive(Debug, Clone)]
pub struct SpawnPolicy {
    spawns_left: u32,
    rng: Pcg32,
}

impl SpawnPolicy {
    /// `budget` is the total number of bodies this policy will ever produce
    pub fn new(budget: u32, seed: u64) -> Self {
        Self {
            spawns_left: budget,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// True once the budget is spent; the host should stop its spawn timer
    pub fn exhausted(&self) -> bool {
        self.spawns_left == 0
    }

    /// Draw parameters for one body entering from `side`, or `None` when
    /// the budget is spent.
    pub fn spawn_one(&mut self, side: Side, world: DVec2, profile: SpawnProfile) -> Option<SpawnParams> {
        if self.spawns_left == 0 {
            return None;
        }
        self.spawns_left -= 1;

        let (r_min, r_max) = profile.radius_range();
        let radius = self.rng.random_range(r_min..r_max);

        let (a_min, a_max) = profile.launch_angle_range();
        let angle = self.rng.random_range(a_min..a_max);
        let speed = self.rng.random_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MAX);

        let x = match side {
            Side::Left => -radius - SPAWN_EDGE_OFFSET,
            Side::Right => world.x + radius + SPAWN_EDGE_OFFSET,
        };
        let pos = DVec2::new(x, profile.spawn_y(world, radius));

        let mut vel = from_polar(angle, speed);
        if profile.launches_upward() {
            // Entering from below the bottom edge; aim up (y grows downward)
            vel.y = -vel.y;
        }
        if side == Side::Right {
            // Mirror horizontally so the body moves into the viewport
            vel.x = -vel.x;
        }

        Some(SpawnParams { pos, vel, radius })
    }

    /// One invocation: a body from each side, budget permitting.
    /// Decrements the budget by at most two.
    pub fn spawn_pair(&mut self, world: DVec2, profile: SpawnProfile) -> Vec<SpawnParams> {
        let mut spawned = Vec::with_capacity(2);
        for side in [Side::Left, Side::Right] {
            if let Some(params) = self.spawn_one(side, world, profile) {
                spawned.push(params);
            }
        }
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: DVec2 = DVec2::new(1280.0, 800.0);

    #[test]
    fn test_budget_is_exact() {
        let mut policy = SpawnPolicy::new(7, 42);
        let mut total = 0;
        for _ in 0..10 {
            total += policy.spawn_pair(WORLD, SpawnProfile::Normal).len();
        }
        assert_eq!(total, 7);
        assert!(policy.exhausted());
        assert!(policy.spawn_pair(WORLD, SpawnProfile::Normal).is_empty());
    }

    #[test]
    fn test_pair_decrements_by_two() {
        let mut policy = SpawnPolicy::new(6, 42);
        assert_eq!(policy.spawn_pair(WORLD, SpawnProfile::Normal).len(), 2);
        assert_eq!(policy.spawn_pair(WORLD, SpawnProfile::Normal).len(), 2);
        assert!(!policy.exhausted());
        assert_eq!(policy.spawn_pair(WORLD, SpawnProfile::Normal).len(), 2);
        assert!(policy.exhausted());
    }

    #[test]
    fn test_normal_profile_ranges() {
        let mut policy = SpawnPolicy::new(200, 1);
        for _ in 0..100 {
            for params in policy.spawn_pair(WORLD, SpawnProfile::Normal) {
                assert!((15.0..35.0).contains(&params.radius));
                let speed = params.vel.length();
                assert!((90.0..140.0).contains(&speed), "speed {speed}");
                // Below the bottom edge, moving up
                assert!(params.pos.y > WORLD.y);
                assert!(params.vel.y < 0.0);
            }
        }
    }

    #[test]
    fn test_both_sides_move_inward() {
        let mut policy = SpawnPolicy::new(40, 7);
        for _ in 0..10 {
            let pair = policy.spawn_pair(WORLD, SpawnProfile::Compact);
            let [left, right] = pair.as_slice() else {
                panic!("expected a full pair");
            };
            assert!(left.pos.x < 0.0);
            assert!(left.vel.x > 0.0);
            assert!(right.pos.x > WORLD.x);
            assert!(right.vel.x < 0.0);
            // Compact profile enters at mid-height
            assert_eq!(left.pos.y, WORLD.y / 2.0);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut a = SpawnPolicy::new(10, 99);
        let mut b = SpawnPolicy::new(10, 99);
        assert_eq!(
            a.spawn_pair(WORLD, SpawnProfile::Normal),
            b.spawn_pair(WORLD, SpawnProfile::Normal)
        );
    }
}
