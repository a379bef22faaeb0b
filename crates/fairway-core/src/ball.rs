use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::config::GolfConfig;
use crate::vec2::Vec2;

/// The simulated ball: position, velocity, and the aim/power values the
/// player adjusts between shots. Replaced wholesale when a hole loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    /// Space units per second; zero exactly when the ball is at rest.
    pub velocity: Vec2,
    /// Aim angle in radians, always in `[0, 2π)`. 0 points +X; increasing
    /// angles rotate counter-clockwise on screen (Y is inverted at hit time).
    pub direction: f32,
    /// Shot power, always in `[min_power, max_power]`.
    pub power: f32,
    power_increasing: bool,
    /// How long speed has stayed below the stop threshold.
    slow_secs: f32,
}

impl Ball {
    pub fn new(position: Vec2, config: &GolfConfig) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            direction: 0.0,
            power: config.default_power(),
            power_increasing: true,
            slow_secs: 0.0,
        }
    }

    pub fn rotate_clockwise(&mut self, dt: f32, config: &GolfConfig) {
        self.direction = (self.direction - config.aim_rate * dt).rem_euclid(TAU);
    }

    pub fn rotate_counter_clockwise(&mut self, dt: f32, config: &GolfConfig) {
        self.direction = (self.direction + config.aim_rate * dt).rem_euclid(TAU);
    }

    /// Return the charge meter to the range midpoint, climbing.
    pub fn reset_power(&mut self, config: &GolfConfig) {
        self.power = config.default_power();
        self.power_increasing = true;
    }

    /// Advance the power oscillation: a triangle wave that climbs to
    /// `max_power`, reverses, falls to `min_power`, and reverses again.
    /// The player freezes the value by committing the shot.
    pub fn tick_power(&mut self, dt: f32, config: &GolfConfig) {
        if self.power_increasing {
            self.power += config.power_rate * dt;
            if self.power > config.max_power {
                self.power = config.max_power;
                self.power_increasing = false;
            }
        } else {
            self.power -= config.power_rate * dt;
            if self.power < config.min_power {
                self.power = config.min_power;
                self.power_increasing = true;
            }
        }
    }

    /// Commit the shot: convert aim + power into velocity. Screen Y is
    /// inverted relative to trigonometric Y, hence the negated sine.
    pub fn start_hit(&mut self) {
        self.velocity = Vec2::new(self.direction.cos(), -self.direction.sin()) * self.power;
        self.slow_secs = 0.0;
    }

    /// Integrate one sub-step of motion, then apply friction.
    pub fn advance(&mut self, dt: f32, config: &GolfConfig) {
        self.position += self.velocity * dt;
        self.apply_friction(dt, config);
    }

    /// Velocity-proportional decay: a constant fraction of speed is lost
    /// per unit time, so stronger shots coast proportionally longer.
    pub fn apply_friction(&mut self, dt: f32, config: &GolfConfig) {
        self.velocity -= self.velocity * (config.friction_rate * dt);

        if self.velocity.length() < config.stop_speed {
            self.slow_secs += dt;
        } else {
            self.slow_secs = 0.0;
        }
    }

    /// The ball stops only after dwelling below the speed threshold for
    /// the configured duration; a single slow sub-step (e.g. right after
    /// a head-on bounce) must not count as stopped.
    pub fn is_stopped(&self, config: &GolfConfig) -> bool {
        self.slow_secs >= config.stop_dwell_secs
    }

    /// Square hitbox used for AABB tests against sand traps and treadmills.
    pub fn hitbox(&self, config: &GolfConfig) -> crate::course::Rect {
        let r = config.ball_radius;
        crate::course::Rect::new(self.position.x - r, self.position.y - r, r * 2.0, r * 2.0)
    }
}
