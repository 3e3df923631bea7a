//! Bubble physics simulation
//!
//! All physics logic lives here. The module is pure and deterministic:
//! - step-driven: the host supplies `dt`, no internal timing
//! - seeded RNG only (spawning)
//! - stable iteration order (bodies in spawn order, obstacles in input order)
//! - no rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod obstacle;
pub mod spawn;
pub mod state;
pub mod tick;

pub use body::{Body, ReadyHandle};
pub use collision::{Collision, Participant, circle_aabb, circle_circle};
pub use obstacle::{ObstacleProvider, StaticObstacle};
pub use spawn::{Side, SpawnParams, SpawnPolicy};
pub use state::{BodySnapshot, Simulation};
pub use tick::{TickInput, TickReport, tick};
