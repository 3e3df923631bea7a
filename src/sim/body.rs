//! Circular dynamic bodies
//!
//! A body owns its kinematics: position integration and border bouncing.
//! Participation in physics is gated by a readiness flag that the external
//! renderer flips once its sprite has loaded; until then the body is inert.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use glam::DVec2;

/// Write side of a body's readiness flag, handed to the renderer.
///
/// Flipped exactly once, false to true; the core only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct ReadyHandle {
    flag: Arc<AtomicBool>,
}

impl ReadyHandle {
    /// Mark the body ready for physics
    pub fn set(&self) {
        self.flag.store(true, Ordering::Release);
    }
}

/// A circular dynamic entity
#[derive(Debug, Clone)]
pub struct Body {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    /// Radius in pixels, floored to a whole number at construction
    pub radius: f64,
    /// `1 / radius²`; mass scales with area
    pub inv_mass: f64,
    ready: Arc<AtomicBool>,
}

impl Body {
    /// Create a body. The radius is floored; it must still be positive
    /// afterwards (the inverse mass divides by its square).
    pub fn new(id: u32, pos: DVec2, vel: DVec2, radius: f64) -> Self {
        let radius = radius.floor();
        assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self {
            id,
            pos,
            vel,
            radius,
            inv_mass: 1.0 / (radius * radius),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the renderer has finished loading this body's sprite.
    /// Not-ready bodies skip integration and all collision checks.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Handle for the renderer to flip the readiness flag
    pub fn ready_handle(&self) -> ReadyHandle {
        ReadyHandle {
            flag: Arc::clone(&self.ready),
        }
    }

    /// Advance position by one timestep
    pub fn integrate(&mut self, dt: f64) {
        if !self.is_ready() {
            return;
        }
        self.pos += self.vel * dt;
    }

    /// Bounce off the world borders.
    ///
    /// Per axis: if the leading edge has crossed the border and the velocity
    /// still points outward, negate that component. Position is never
    /// clamped, so a fast body can momentarily tunnel; acceptable at small
    /// `dt`.
    pub fn reflect_borders(&mut self, world: DVec2) {
        if !self.is_ready() {
            return;
        }

        if self.pos.x - self.radius <= 0.0 && self.vel.x < 0.0 {
            self.vel.x = -self.vel.x;
        } else if self.pos.x + self.radius >= world.x && self.vel.x > 0.0 {
            self.vel.x = -self.vel.x;
        }

        if self.pos.y - self.radius <= 0.0 && self.vel.y < 0.0 {
            self.vel.y = -self.vel.y;
        } else if self.pos.y + self.radius >= world.y && self.vel.y > 0.0 {
            self.vel.y = -self.vel.y;
        }
    }
}
