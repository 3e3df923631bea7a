//! Static axis-aligned obstacles
//!
//! Hitboxes mirror the on-screen UI elements the bubbles must bounce off.
//! The environment rebuilds the full list every tick from its current
//! layout; the simulation borrows it for the tick and never caches it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An immovable axis-aligned rectangle.
///
/// Infinite mass: its inverse mass is zero and its velocity is zero, so
/// impulse resolution never moves it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticObstacle {
    pub min: DVec2,
    pub max: DVec2,
}

impl StaticObstacle {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y, "inverted AABB: {min:?}..{max:?}");
        Self { min, max }
    }

    /// Build from a top-left corner and a size (how UI layouts report rects)
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(
            DVec2::new(left, top),
            DVec2::new(left + width, top + height),
        )
    }

    /// Inverse mass of an immovable obstacle
    #[inline]
    pub fn inv_mass(&self) -> f64 {
        0.0
    }

    /// Obstacles never move
    #[inline]
    pub fn velocity(&self) -> DVec2 {
        DVec2::ZERO
    }

    /// Closest point to `p` within the rectangle (component-wise clamp)
    #[inline]
    pub fn closest_point(&self, p: DVec2) -> DVec2 {
        p.clamp(self.min, self.max)
    }
}

/// Per-tick source of obstacle geometry.
///
/// The core never queries the environment's layout directly; the host hands
/// it a fresh list each tick through this seam.
pub trait ObstacleProvider {
    fn current(&self) -> Vec<StaticObstacle>;
}

impl ObstacleProvider for Vec<StaticObstacle> {
    fn current(&self) -> Vec<StaticObstacle> {
        self.clone()
    }
}
