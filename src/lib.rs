//! Bubblefield - elastic 2D bubble physics over dynamic UI hitboxes
//!
//! Core modules:
//! - `sim`: the physics engine (bodies, obstacles, collision detection and
//!   impulse resolution, the fixed-cadence tick, spawn policy)
//! - `viewport`: environment-facing viewport info and spawn profiles
//!
//! The crate is a pure in-process simulation: the host feeds `dt` and the
//! current hitbox rectangles into `sim::tick` and draws the body list it
//! gets back. Rendering, hitbox acquisition, and frame scheduling all live
//! outside.

pub mod sim;
pub mod viewport;

pub use viewport::{SpawnProfile, ViewportInfo};

use glam::DVec2;

/// Simulation constants
pub mod consts {
    /// Upper bound on per-tick `dt` in seconds; the host clamps to this
    /// before calling `tick` so a stalled tab cannot teleport bodies.
    pub const MAX_DT: f64 = 0.1;
    /// Demo host timestep (60 Hz, matching a typical animation frame)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Viewports narrower than this use the compact spawn profile
    pub const COMPACT_VIEWPORT_WIDTH: f64 = 640.0;

    /// Gap between a spawned body's edge and the viewport border
    pub const SPAWN_EDGE_OFFSET: f64 = 10.0;
    /// Launch speed range shared by both spawn profiles (px/s)
    pub const SPAWN_SPEED_MIN: f64 = 90.0;
    pub const SPAWN_SPEED_MAX: f64 = 140.0;

    /// Seconds between spawn invocations in the demo host
    pub const SPAWN_INTERVAL: f64 = 1.0;
}

/// Build a vector from an angle (radians) and a length
#[inline]
pub fn from_polar(angle: f64, length: f64) -> DVec2 {
    DVec2::new(angle.cos() * length, angle.sin() * length)
}
