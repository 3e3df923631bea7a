//! Collision detection and impulse resolution
//!
//! The tricky part of the engine: circle-circle and circle-AABB contact
//! detection with the degenerate cases handled in-band (concentric centers,
//! circle center inside a rectangle), and restitution-1 impulse resolution
//! that only ever touches velocities.

use glam::DVec2;

use super::body::Body;
use super::obstacle::StaticObstacle;

/// One side of a contact, referencing into the tick's entity slices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    /// Index into the simulation's body collection
    Body(usize),
    /// Index into the tick's obstacle slice
    Obstacle(usize),
}

impl Participant {
    #[inline]
    fn velocity(&self, bodies: &[Body]) -> DVec2 {
        match self {
            Participant::Body(i) => bodies[*i].vel,
            Participant::Obstacle(_) => DVec2::ZERO,
        }
    }

    #[inline]
    fn inv_mass(&self, bodies: &[Body]) -> f64 {
        match self {
            Participant::Body(i) => bodies[*i].inv_mass,
            Participant::Obstacle(_) => 0.0,
        }
    }
}

/// A detected contact, consumed once by [`Collision::resolve`] within the
/// same tick it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub a: Participant,
    pub b: Participant,
    /// Unit normal pointing from A toward B's exterior
    pub normal: DVec2,
    /// Overlap depth; part of the contact contract but deliberately unused
    /// by resolution (velocity-only response, no positional correction)
    pub penetration: f64,
}

/// Circle-circle contact test. Skipped unless both bodies are ready.
///
/// Returns `(normal from a toward b, penetration)`. Touching exactly at the
/// radii sum is not a collision. Perfectly concentric centers fall back to a
/// fixed `(0, 1)` normal rather than dividing by a zero distance.
pub fn circle_circle(a: &Body, b: &Body) -> Option<(DVec2, f64)> {
    if !a.is_ready() || !b.is_ready() {
        return None;
    }

    let d = b.pos - a.pos;
    let dist2 = d.length_squared();
    let radii = a.radius + b.radius;
    if dist2 >= radii * radii {
        return None;
    }

    if dist2 != 0.0 {
        let dist = dist2.sqrt();
        Some((d / dist, radii - dist))
    } else {
        Some((DVec2::Y, a.radius))
    }
}

/// Circle-AABB contact test. Skipped unless the body is ready.
///
/// Returns `(normal from the body toward the rectangle, penetration)`.
pub fn circle_aabb(body: &Body, rect: &StaticObstacle) -> Option<(DVec2, f64)> {
    if !body.is_ready() {
        return None;
    }

    let closest = rect.closest_point(body.pos);
    let to_body = body.pos - closest;
    let norm2 = to_body.length_squared();
    if norm2 >= body.radius * body.radius {
        return None;
    }

    if closest != body.pos {
        // Center outside the rectangle but within one radius of it
        let n = norm2.sqrt();
        Some((-to_body / n, body.radius - n))
    } else {
        // Center inside: push out along the nearest edge. Ties resolve in
        // the fixed order left, right, top, bottom (first minimum wins).
        let left = body.pos.x - rect.min.x;
        let top = body.pos.y - rect.min.y;
        let right = rect.max.x - body.pos.x;
        let bottom = rect.max.y - body.pos.y;
        let nearest = left.min(top).min(right).min(bottom);

        let mut snapped = body.pos;
        if nearest == left {
            snapped.x = rect.min.x;
        } else if nearest == right {
            snapped.x = rect.max.x;
        } else if nearest == top {
            snapped.y = rect.min.y;
        } else {
            snapped.y = rect.max.y;
        }

        // Normal keeps pointing from the body toward the rectangle's
        // interior, same sense as the center-outside case, so resolution
        // pushes the body back out through the snapped edge.
        let raw = body.pos - snapped;
        let n = raw.length();
        Some((raw / n, body.radius - n))
    }
}

impl Collision {
    /// Detect a contact between two bodies of the collection
    pub fn between_bodies(bodies: &[Body], i: usize, j: usize) -> Option<Self> {
        let (normal, penetration) = circle_circle(&bodies[i], &bodies[j])?;
        Some(Self {
            a: Participant::Body(i),
            b: Participant::Body(j),
            normal,
            penetration,
        })
    }

    /// Detect a contact between a body and an obstacle
    pub fn body_obstacle(
        bodies: &[Body],
        i: usize,
        obstacles: &[StaticObstacle],
        k: usize,
    ) -> Option<Self> {
        let (normal, penetration) = circle_aabb(&bodies[i], &obstacles[k])?;
        Some(Self {
            a: Participant::Body(i),
            b: Participant::Obstacle(k),
            normal,
            penetration,
        })
    }

    /// Apply the elastic impulse to the participants' velocities.
    ///
    /// Already-separating contacts (relative velocity along the normal
    /// positive) are left alone, which also makes a second resolve of the
    /// same contact a no-op. An obstacle's zero inverse mass keeps it
    /// unaffected; obstacle-obstacle contacts are never constructed, so the
    /// impulse denominator is always positive.
    pub fn resolve(&self, bodies: &mut [Body]) {
        let rel = self.b.velocity(bodies) - self.a.velocity(bodies);
        let v_along_normal = rel.dot(self.normal);
        if v_along_normal > 0.0 {
            return;
        }

        let inv_a = self.a.inv_mass(bodies);
        let inv_b = self.b.inv_mass(bodies);
        debug_assert!(inv_a + inv_b > 0.0, "contact between two obstacles");

        let j = -2.0 * v_along_normal / (inv_a + inv_b);
        let impulse = self.normal * j;

        if let Participant::Body(i) = self.a {
            bodies[i].vel -= impulse * inv_a;
        }
        if let Participant::Body(i) = self.b {
            bodies[i].vel += impulse * inv_b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_body(id: u32, pos: DVec2, vel: DVec2, radius: f64) -> Body {
        let body = Body::new(id, pos, vel, radius);
        body.ready_handle().set();
        body
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        // Radii 10 + 15, centers exactly 25 apart: boundary is exclusive
        let a = ready_body(1, DVec2::new(0.0, 0.0), DVec2::ZERO, 10.0);
        let b = ready_body(2, DVec2::new(25.0, 0.0), DVec2::ZERO, 15.0);
        assert!(circle_circle(&a, &b).is_none());
    }

    #[test]
    fn test_barely_overlapping_circles() {
        let a = ready_body(1, DVec2::new(0.0, 0.0), DVec2::ZERO, 10.0);
        let b = ready_body(2, DVec2::new(24.999, 0.0), DVec2::ZERO, 15.0);
        let (normal, penetration) = circle_circle(&a, &b).unwrap();
        assert!((normal - DVec2::X).length() < 1e-12);
        assert!((penetration - 0.001).abs() < 1e-9);
    }

    #[test]
    fn test_concentric_circles_fixed_normal() {
        let a = ready_body(1, DVec2::new(50.0, 50.0), DVec2::ZERO, 10.0);
        let b = ready_body(2, DVec2::new(50.0, 50.0), DVec2::ZERO, 15.0);
        let (normal, penetration) = circle_circle(&a, &b).unwrap();
        assert_eq!(normal, DVec2::new(0.0, 1.0));
        assert_eq!(penetration, 10.0);
    }

    #[test]
    fn test_not_ready_skips_detection() {
        let a = Body::new(1, DVec2::ZERO, DVec2::ZERO, 10.0);
        let b = ready_body(2, DVec2::new(5.0, 0.0), DVec2::ZERO, 10.0);
        assert!(circle_circle(&a, &b).is_none());
        assert!(circle_circle(&b, &a).is_none());

        let rect = StaticObstacle::from_rect(0.0, 0.0, 10.0, 10.0);
        assert!(circle_aabb(&a, &rect).is_none());
    }

    #[test]
    fn test_circle_outside_aabb_within_radius() {
        let rect = StaticObstacle::from_rect(0.0, 0.0, 100.0, 100.0);
        // Center 5 to the right of the rectangle, radius 8
        let body = ready_body(1, DVec2::new(105.0, 50.0), DVec2::ZERO, 8.0);
        let (normal, penetration) = circle_aabb(&body, &rect).unwrap();
        // Normal points from the body toward the rectangle
        assert_eq!(normal, DVec2::new(-1.0, 0.0));
        assert!((penetration - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_circle_clear_of_aabb() {
        let rect = StaticObstacle::from_rect(0.0, 0.0, 100.0, 100.0);
        let body = ready_body(1, DVec2::new(120.0, 50.0), DVec2::ZERO, 8.0);
        assert!(circle_aabb(&body, &rect).is_none());
    }

    #[test]
    fn test_circle_inside_aabb_pushes_toward_nearest_edge() {
        let rect = StaticObstacle::from_rect(0.0, 0.0, 40.0, 40.0);
        // 2 from the left edge, at least 10 from every other edge
        let body = ready_body(1, DVec2::new(2.0, 20.0), DVec2::ZERO, 5.0);
        let (normal, penetration) = circle_aabb(&body, &rect).unwrap();
        // Pushed out to the left: normal points from the body into the rect
        assert_eq!(normal, DVec2::new(1.0, 0.0));
        assert_eq!(penetration, 3.0);
    }

    #[test]
    fn test_inside_aabb_tie_breaks_left_first() {
        let rect = StaticObstacle::from_rect(0.0, 0.0, 40.0, 40.0);
        // Equidistant (2) from the left and top edges: left wins by the
        // documented evaluation order
        let body = ready_body(1, DVec2::new(2.0, 2.0), DVec2::ZERO, 5.0);
        let (normal, _) = circle_aabb(&body, &rect).unwrap();
        assert_eq!(normal, DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_equal_mass_head_on_swap() {
        let mut bodies = vec![
            ready_body(1, DVec2::new(0.0, 0.0), DVec2::new(30.0, 0.0), 10.0),
            ready_body(2, DVec2::new(18.0, 0.0), DVec2::new(-30.0, 0.0), 10.0),
        ];
        let collision = Collision::between_bodies(&bodies, 0, 1).unwrap();
        collision.resolve(&mut bodies);

        assert!((bodies[0].vel.x - (-30.0)).abs() < 1e-9);
        assert!((bodies[1].vel.x - 30.0).abs() < 1e-9);
        assert_eq!(bodies[0].vel.y, 0.0);
        assert_eq!(bodies[1].vel.y, 0.0);
    }

    #[test]
    fn test_unequal_masses_conserve_momentum() {
        let mut bodies = vec![
            ready_body(1, DVec2::new(0.0, 0.0), DVec2::new(50.0, 0.0), 10.0),
            ready_body(2, DVec2::new(25.0, 0.0), DVec2::new(-10.0, 0.0), 20.0),
        ];
        let m_a = 100.0;
        let m_b = 400.0;
        let momentum_before = m_a * bodies[0].vel.x + m_b * bodies[1].vel.x;

        let collision = Collision::between_bodies(&bodies, 0, 1).unwrap();
        collision.resolve(&mut bodies);

        let momentum_after = m_a * bodies[0].vel.x + m_b * bodies[1].vel.x;
        assert!((momentum_before - momentum_after).abs() < 1e-9);
        // Smaller body rebounds
        assert!(bodies[0].vel.x < 0.0);
    }

    #[test]
    fn test_obstacle_never_mutated() {
        let rect = StaticObstacle::from_rect(100.0, 0.0, 50.0, 200.0);
        let before = rect;
        let mut bodies = vec![ready_body(1, DVec2::new(95.0, 100.0), DVec2::new(40.0, 0.0), 8.0)];

        let obstacles = [rect];
        let collision = Collision::body_obstacle(&bodies, 0, &obstacles, 0).unwrap();
        collision.resolve(&mut bodies);

        // Pure reflection for the body, identity for the obstacle
        assert!((bodies[0].vel.x - (-40.0)).abs() < 1e-12);
        assert_eq!(bodies[0].vel.y, 0.0);
        assert_eq!(obstacles[0], before);
        assert_eq!(obstacles[0].velocity(), DVec2::ZERO);
    }

    #[test]
    fn test_resolve_twice_is_idempotent() {
        let mut bodies = vec![
            ready_body(1, DVec2::new(0.0, 0.0), DVec2::new(30.0, 0.0), 10.0),
            ready_body(2, DVec2::new(18.0, 0.0), DVec2::new(-30.0, 0.0), 10.0),
        ];
        let collision = Collision::between_bodies(&bodies, 0, 1).unwrap();
        collision.resolve(&mut bodies);
        let after_first = (bodies[0].vel, bodies[1].vel);

        // Participants now separate along the normal; nothing to do
        collision.resolve(&mut bodies);
        assert_eq!((bodies[0].vel, bodies[1].vel), after_first);
    }

    #[test]
    fn test_separating_contact_untouched() {
        let mut bodies = vec![
            ready_body(1, DVec2::new(0.0, 0.0), DVec2::new(-10.0, 0.0), 10.0),
            ready_body(2, DVec2::new(15.0, 0.0), DVec2::new(10.0, 0.0), 10.0),
        ];
        // Overlapping but already moving apart
        let collision = Collision::between_bodies(&bodies, 0, 1).unwrap();
        collision.resolve(&mut bodies);
        assert_eq!(bodies[0].vel, DVec2::new(-10.0, 0.0));
        assert_eq!(bodies[1].vel, DVec2::new(10.0, 0.0));
    }
}
