//! Map-explorer view window.
//!
//! A pannable rectangle over the course, used by the renderer to decide
//! what to draw. Pure data; the simulation never draws.

use fairway_core::config::GolfConfig;
use fairway_core::course::Course;
use fairway_core::vec2::Vec2;

/// How far past the course edge the window may show.
const BOUNDARY_PAD: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewWindow {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Center the window on a point, keeping it within course bounds.
    pub fn focus_on(&mut self, point: Vec2, course: &Course) {
        self.x = point.x - self.width / 2.0;
        self.y = point.y - self.height / 2.0;
        self.keep_in_bounds(course);
    }

    pub fn pan_up(&mut self, dt: f32, config: &GolfConfig, course: &Course) {
        self.pan(0.0, -config.pan_speed * dt, course);
    }

    pub fn pan_down(&mut self, dt: f32, config: &GolfConfig, course: &Course) {
        self.pan(0.0, config.pan_speed * dt, course);
    }

    pub fn pan_left(&mut self, dt: f32, config: &GolfConfig, course: &Course) {
        self.pan(-config.pan_speed * dt, 0.0, course);
    }

    pub fn pan_right(&mut self, dt: f32, config: &GolfConfig, course: &Course) {
        self.pan(config.pan_speed * dt, 0.0, course);
    }

    fn pan(&mut self, dx: f32, dy: f32, course: &Course) {
        self.x += dx;
        self.y += dy;
        self.keep_in_bounds(course);
    }

    fn keep_in_bounds(&mut self, course: &Course) {
        let max_x = (course.width - self.width + BOUNDARY_PAD).max(-BOUNDARY_PAD);
        let max_y = (course.height - self.height + BOUNDARY_PAD).max(-BOUNDARY_PAD);
        self.x = self.x.clamp(-BOUNDARY_PAD, max_x);
        self.y = self.y.clamp(-BOUNDARY_PAD, max_y);
    }
}
