use serde::{Deserialize, Serialize};

use crate::vec2::Vec2;

const GEOMETRY_EPSILON: f32 = 1e-6;

/// A wall segment between two endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Wall {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Wall {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            p1: Vec2::new(x1, y1),
            p2: Vec2::new(x2, y2),
        }
    }

    /// A zero-length wall cannot be projected onto and is dropped at
    /// load time. This also covers fixed-capacity map sources that mark
    /// unused slots with both endpoints at the origin.
    pub fn is_degenerate(&self) -> bool {
        (self.p2 - self.p1).length_squared() < GEOMETRY_EPSILON
    }
}

/// A circular obstacle the ball bounces off.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CircleObstacle {
    pub center: Vec2,
    pub radius: f32,
}

impl CircleObstacle {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }
}

/// Axis-aligned rectangle used for hazard footprints and the ball hitbox.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A patch of sand that multiplies friction while the ball is inside.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SandTrap {
    pub bounds: Rect,
}

/// Cardinal belt direction for a treadmill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TreadmillDirection {
    Up,
    Down,
    Left,
    Right,
}

impl TreadmillDirection {
    /// Unit vector of the belt force in screen coordinates (Up = -Y).
    pub fn as_vec(self) -> Vec2 {
        match self {
            TreadmillDirection::Up => Vec2::new(0.0, -1.0),
            TreadmillDirection::Down => Vec2::new(0.0, 1.0),
            TreadmillDirection::Left => Vec2::new(-1.0, 0.0),
            TreadmillDirection::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// A conveyor belt that pushes the ball in its direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Treadmill {
    pub bounds: Rect,
    pub direction: TreadmillDirection,
}

/// Static, read-only description of one hole. Owned by the course
/// provider and borrowed by the simulation for the duration of the hole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub par: u32,
    pub width: f32,
    pub height: f32,
    /// Tee position where the ball spawns.
    pub start: Vec2,
    /// Hole (cup) position.
    pub hole: Vec2,
    pub walls: Vec<Wall>,
    pub circles: Vec<CircleObstacle>,
    pub sand_traps: Vec<SandTrap>,
    pub treadmills: Vec<Treadmill>,
}

impl Course {
    /// Drop degenerate geometry so the collision engine only ever sees
    /// valid elements. Map sources that pad fixed-capacity arrays with
    /// zeroed slots are cleaned up here once, at load time.
    pub fn sanitize(&mut self) {
        self.walls.retain(|w| !w.is_degenerate());
        self.circles.retain(|c| !c.is_degenerate());
        self.sand_traps.retain(|s| !s.bounds.is_degenerate());
        self.treadmills.retain(|t| !t.bounds.is_degenerate());
    }
}

/// Supplies read-only course snapshots to the round state machine.
/// The simulation never mutates a course and only ever advances one
/// hole at a time, bounds-checking against `hole_count` first.
pub trait CourseProvider {
    fn hole_count(&self) -> usize;

    /// Returns a snapshot of the hole at `index`, or `None` past the end.
    fn load_hole(&self, index: usize) -> Option<Course>;

    /// Sum of par over every hole.
    fn total_par(&self) -> u32 {
        (0..self.hole_count())
            .filter_map(|i| self.load_hole(i))
            .map(|c| c.par)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_wall_is_degenerate() {
        assert!(Wall::new(0.0, 0.0, 0.0, 0.0).is_degenerate());
        assert!(Wall::new(5.0, 7.0, 5.0, 7.0).is_degenerate());
        assert!(!Wall::new(0.0, 0.0, 10.0, 0.0).is_degenerate());
    }

    #[test]
    fn zero_radius_circle_is_degenerate() {
        assert!(CircleObstacle::new(3.0, 3.0, 0.0).is_degenerate());
        assert!(!CircleObstacle::new(3.0, 3.0, 4.0).is_degenerate());
    }

    #[test]
    fn rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 2.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn sanitize_drops_degenerate_elements() {
        let mut course = Course {
            name: "test".to_string(),
            par: 2,
            width: 100.0,
            height: 100.0,
            start: Vec2::new(10.0, 10.0),
            hole: Vec2::new(90.0, 90.0),
            walls: vec![Wall::new(0.0, 0.0, 0.0, 0.0), Wall::new(0.0, 0.0, 100.0, 0.0)],
            circles: vec![CircleObstacle::new(50.0, 50.0, 0.0)],
            sand_traps: vec![SandTrap {
                bounds: Rect::new(20.0, 20.0, 0.0, 0.0),
            }],
            treadmills: vec![Treadmill {
                bounds: Rect::new(30.0, 30.0, 10.0, 10.0),
                direction: TreadmillDirection::Up,
            }],
        };
        course.sanitize();
        assert_eq!(course.walls.len(), 1);
        assert!(course.circles.is_empty());
        assert!(course.sand_traps.is_empty());
        assert_eq!(course.treadmills.len(), 1);
    }

    #[test]
    fn treadmill_direction_vectors() {
        assert_eq!(TreadmillDirection::Up.as_vec(), Vec2::new(0.0, -1.0));
        assert_eq!(TreadmillDirection::Down.as_vec(), Vec2::new(0.0, 1.0));
        assert_eq!(TreadmillDirection::Left.as_vec(), Vec2::new(-1.0, 0.0));
        assert_eq!(TreadmillDirection::Right.as_vec(), Vec2::new(1.0, 0.0));
    }
}
