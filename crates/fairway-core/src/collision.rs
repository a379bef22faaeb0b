//! Collision detection and response, run once per physics sub-step.
//!
//! Stateless: every function is pure over an explicit `Ball` and
//! `Course`. Checks run in a fixed order (walls, circles, sand traps,
//! treadmills) so simultaneous contacts resolve deterministically.

use crate::ball::Ball;
use crate::config::GolfConfig;
use crate::course::{CircleObstacle, Course, Wall};
use crate::vec2::Vec2;

/// Reflect `v` about a unit `normal`: `v' = v - 2(v·n)n`.
/// An involution: reflecting twice returns the original vector.
pub fn reflect(v: Vec2, normal: Vec2) -> Vec2 {
    v - normal * (2.0 * v.dot(normal))
}

/// Resolve all contacts between the ball and the course for one
/// sub-step of duration `dt`.
pub fn resolve(ball: &mut Ball, course: &Course, config: &GolfConfig, dt: f32) {
    for wall in &course.walls {
        resolve_wall_contact(ball, wall, config);
    }

    for circle in &course.circles {
        // Zero-radius sentinel slots get the same guard as walls.
        if circle.is_degenerate() {
            continue;
        }
        if circle_contact(ball.position, circle, config.ball_radius) {
            resolve_circle(ball, circle, config.ball_radius);
        }
    }

    for sand in &course.sand_traps {
        if ball.hitbox(config).overlaps(&sand.bounds) {
            // Extra drag: repeat the standard friction step, leaving the
            // integration step size untouched.
            for _ in 0..config.sand_friction_multiplier {
                ball.apply_friction(dt, config);
            }
        }
    }

    for treadmill in &course.treadmills {
        if ball.hitbox(config).overlaps(&treadmill.bounds) {
            // Constant belt force, not a velocity cap.
            ball.velocity += treadmill.direction.as_vec() * (config.treadmill_speed * dt);
        }
    }
}

/// Whether the ball's center is within the hole capture radius. Checked
/// independently of the contact passes; velocity does not matter.
pub fn in_hole(ball: &Ball, course: &Course, config: &GolfConfig) -> bool {
    ball.position.distance(course.hole) <= config.hole_radius
}

fn resolve_wall_contact(ball: &mut Ball, wall: &Wall, config: &GolfConfig) {
    // Zero-length segments cannot be projected onto; sanitize() drops
    // them at load time but the engine guards regardless.
    if wall.is_degenerate() {
        return;
    }
    if !wall_contact(ball.position, wall, config.ball_radius) {
        return;
    }

    // End-cap disambiguation: a ball sweeping past an endpoint should
    // bounce as if off a tiny circle at the tip, not mirror across the
    // full segment. The endpoint behind the direction of travel is the
    // candidate cap.
    let along = wall.p2 - wall.p1;
    if ball.velocity.dot(along) > 0.0 {
        let cap = CircleObstacle {
            center: wall.p1,
            radius: config.wall_cap_radius,
        };
        if circle_contact(ball.position, &cap, config.ball_radius) {
            resolve_circle(ball, &cap, config.ball_radius);
        } else {
            resolve_wall(ball, wall, config.ball_radius);
        }
    } else if ball.velocity.dot(-along) > 0.0 {
        let cap = CircleObstacle {
            center: wall.p2,
            radius: config.wall_cap_radius,
        };
        if circle_contact(ball.position, &cap, config.ball_radius) {
            resolve_circle(ball, &cap, config.ball_radius);
        } else {
            resolve_wall(ball, wall, config.ball_radius);
        }
    } else {
        resolve_wall(ball, wall, config.ball_radius);
    }
}

/// Distance test from the ball center to the clamped projection onto
/// the segment.
fn wall_contact(center: Vec2, wall: &Wall, ball_radius: f32) -> bool {
    center.distance(closest_point_on_segment(center, wall)) <= ball_radius
}

fn closest_point_on_segment(point: Vec2, wall: &Wall) -> Vec2 {
    let along = wall.p2 - wall.p1;
    // Clamp to [0, 1]: restrict to the segment, not the infinite line.
    let t = ((point - wall.p1).dot(along) / along.length_squared()).clamp(0.0, 1.0);
    wall.p1 + along * t
}

/// Reflect velocity about the wall normal and push the ball out by the
/// exact penetration depth. Both always happen together: resolving only
/// velocity lets shallow repeated contacts tunnel or stick.
fn resolve_wall(ball: &mut Ball, wall: &Wall, ball_radius: f32) {
    let along = wall.p2 - wall.p1;
    let mut normal = Vec2::new(-along.y, along.x).normalized();

    // Flip the normal so it points toward the ball's side.
    if (ball.position - wall.p1).dot(normal) < 0.0 {
        normal = -normal;
    }

    ball.velocity = reflect(ball.velocity, normal);

    let closest = closest_point_on_segment(ball.position, wall);
    let dist = ball.position.distance(closest);
    if dist < ball_radius {
        ball.position += normal * (ball_radius - dist);
    }
}

fn circle_contact(center: Vec2, circle: &CircleObstacle, ball_radius: f32) -> bool {
    center.distance(circle.center) <= circle.radius + ball_radius
}

/// Push the ball out along the separating vector by the exact
/// penetration depth, then reflect velocity about that normal.
fn resolve_circle(ball: &mut Ball, circle: &CircleObstacle, ball_radius: f32) {
    let separation = ball.position - circle.center;
    let dist = separation.length();
    let normal = separation.normalized();
    if normal == Vec2::ZERO {
        // Ball center exactly on the obstacle center; no usable normal.
        return;
    }

    let depth = circle.radius + ball_radius - dist;
    ball.position += normal * depth;
    ball.velocity = reflect(ball.velocity, normal);
}
