//! Viewport info and spawn profiles
//!
//! The environment owns the real viewport; the core only sees its size
//! through [`ViewportInfo`] and a derived [`SpawnProfile`]. Coordinates are
//! screen-style: origin top-left, y grows downward.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{COMPACT_VIEWPORT_WIDTH, SPAWN_EDGE_OFFSET};

/// Current viewport dimensions, supplied by the host each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportInfo {
    pub width: f64,
    pub height: f64,
}

impl ViewportInfo {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// World size as a vector (border positions for reflection)
    #[inline]
    pub fn world(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Narrow viewports (phones) get the compact spawn profile
    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_VIEWPORT_WIDTH
    }
}

/// Spawn parameter set, selected by viewport size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpawnProfile {
    /// Narrow viewport: smaller bubbles entering at mid-height, shallow angles
    Compact,
    /// Full-size viewport: larger bubbles rising from below the bottom edge
    #[default]
    Normal,
}

impl SpawnProfile {
    pub fn for_viewport(compact: bool) -> Self {
        if compact {
            SpawnProfile::Compact
        } else {
            SpawnProfile::Normal
        }
    }

    /// Body radius range in pixels
    pub fn radius_range(&self) -> (f64, f64) {
        match self {
            SpawnProfile::Compact => (12.0, 24.0),
            SpawnProfile::Normal => (15.0, 35.0),
        }
    }

    /// Launch angle range in radians, measured from horizontal
    pub fn launch_angle_range(&self) -> (f64, f64) {
        use std::f64::consts::PI;
        match self {
            SpawnProfile::Compact => (-PI / 3.0, PI / 3.0),
            SpawnProfile::Normal => (PI / 6.0, PI / 3.0),
        }
    }

    /// Vertical start coordinate for a body of the given radius
    pub fn spawn_y(&self, world: DVec2, radius: f64) -> f64 {
        match self {
            SpawnProfile::Compact => world.y / 2.0,
            SpawnProfile::Normal => world.y + radius + SPAWN_EDGE_OFFSET,
        }
    }

    /// The normal profile starts below the bottom edge and launches upward
    pub fn launches_upward(&self) -> bool {
        matches!(self, SpawnProfile::Normal)
    }
}
