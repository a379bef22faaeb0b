//! Built-in course library.
//!
//! Courses are authored in code and sanitized on load so the collision
//! engine never sees degenerate geometry.

use crate::course::{
    CircleObstacle, Course, CourseProvider, Rect, SandTrap, Treadmill, TreadmillDirection, Wall,
};
use crate::vec2::Vec2;

/// A fixed set of courses played in order, implementing `CourseProvider`.
pub struct CourseLibrary {
    courses: Vec<Course>,
}

impl CourseLibrary {
    /// Wrap an arbitrary course list; every course is sanitized.
    pub fn new(mut courses: Vec<Course>) -> Self {
        for course in &mut courses {
            course.sanitize();
        }
        Self { courses }
    }

    /// The standard 5-hole round.
    pub fn standard() -> Self {
        Self::new(vec![
            squiggly_lane(),
            round_rodeo(),
            bunker_run(),
            conveyor_canyon(),
            the_gauntlet(),
        ])
    }
}

impl CourseProvider for CourseLibrary {
    fn hole_count(&self) -> usize {
        self.courses.len()
    }

    fn load_hole(&self, index: usize) -> Option<Course> {
        self.courses.get(index).cloned()
    }
}

/// Boundary walls for a rectangular course.
fn boundary_walls(w: f32, h: f32) -> Vec<Wall> {
    vec![
        Wall::new(0.0, 0.0, w, 0.0),
        Wall::new(w, 0.0, w, h),
        Wall::new(w, h, 0.0, h),
        Wall::new(0.0, h, 0.0, 0.0),
    ]
}

/// Hole 1: Squiggly Lane — two long baffles force an S-shaped path
/// around clipped corners.
fn squiggly_lane() -> Course {
    let w = 127.0;
    let h = 127.0;
    let wall1_x = 42.0;
    let wall2_x = 84.0;
    let corner = 20.0;

    let walls = vec![
        // Top border, split around the first corner notch
        Wall::new(0.0, 0.0, wall1_x - corner, 0.0),
        Wall::new(wall1_x + corner, 0.0, w - corner, 0.0),
        // Right border
        Wall::new(w, corner, w, h),
        // Bottom borders
        Wall::new(corner, h, wall2_x - corner, h),
        Wall::new(wall2_x + corner, h, w, h),
        // Left border
        Wall::new(0.0, 0.0, 0.0, h - corner),
        // Long baffles
        Wall::new(wall1_x, corner, wall1_x, 94.0),
        Wall::new(wall2_x, 32.0, wall2_x, h - corner),
        // Clipped corners
        Wall::new(wall1_x - corner, 0.0, wall1_x, corner),
        Wall::new(0.0, h - corner, corner, h),
        Wall::new(wall1_x, corner, wall1_x + corner, 0.0),
        Wall::new(wall2_x - corner, h, wall2_x, h - corner),
        Wall::new(w - corner, 0.0, w, corner),
        Wall::new(wall2_x, h - corner, wall2_x + corner, h),
        // Mid-course obstacle
        Wall::new(w / 2.0, h / 2.0, w / 6.0 * 5.0, h / 2.0),
    ];

    Course {
        name: "Squiggly Lane".to_string(),
        par: 5,
        width: w,
        height: h,
        start: Vec2::new(5.0, 5.0),
        hole: Vec2::new(w - 10.0, h - 10.0),
        walls,
        circles: vec![],
        sand_traps: vec![],
        treadmills: vec![],
    }
}

/// Hole 2: Round Rodeo — a ring of posts guarding the cup.
fn round_rodeo() -> Course {
    let w = 110.0;
    let h = 90.0;
    Course {
        name: "Round Rodeo".to_string(),
        par: 3,
        width: w,
        height: h,
        start: Vec2::new(10.0, 45.0),
        hole: Vec2::new(90.0, 45.0),
        walls: boundary_walls(w, h),
        circles: vec![
            CircleObstacle::new(55.0, 25.0, 6.0),
            CircleObstacle::new(55.0, 65.0, 6.0),
            CircleObstacle::new(75.0, 45.0, 4.0),
            CircleObstacle::new(35.0, 45.0, 4.0),
        ],
        sand_traps: vec![],
        treadmills: vec![],
    }
}

/// Hole 3: Bunker Run — sand flanking the direct line.
fn bunker_run() -> Course {
    let w = 140.0;
    let h = 70.0;
    let mut walls = boundary_walls(w, h);
    walls.push(Wall::new(60.0, 0.0, 60.0, 25.0));
    walls.push(Wall::new(60.0, 45.0, 60.0, h));
    Course {
        name: "Bunker Run".to_string(),
        par: 3,
        width: w,
        height: h,
        start: Vec2::new(10.0, 35.0),
        hole: Vec2::new(128.0, 35.0),
        walls,
        circles: vec![],
        sand_traps: vec![
            SandTrap {
                bounds: Rect::new(70.0, 0.0, 30.0, 25.0),
            },
            SandTrap {
                bounds: Rect::new(70.0, 45.0, 30.0, 25.0),
            },
        ],
        treadmills: vec![],
    }
}

/// Hole 4: Conveyor Canyon — belts that carry the ball off line.
fn conveyor_canyon() -> Course {
    let w = 120.0;
    let h = 110.0;
    let mut walls = boundary_walls(w, h);
    walls.push(Wall::new(40.0, 30.0, 40.0, 110.0));
    walls.push(Wall::new(80.0, 0.0, 80.0, 80.0));
    Course {
        name: "Conveyor Canyon".to_string(),
        par: 4,
        width: w,
        height: h,
        start: Vec2::new(12.0, 95.0),
        hole: Vec2::new(105.0, 95.0),
        walls,
        circles: vec![],
        sand_traps: vec![],
        treadmills: vec![
            Treadmill {
                bounds: Rect::new(45.0, 10.0, 30.0, 15.0),
                direction: TreadmillDirection::Left,
            },
            Treadmill {
                bounds: Rect::new(85.0, 85.0, 25.0, 15.0),
                direction: TreadmillDirection::Down,
            },
        ],
    }
}

/// Hole 5: The Gauntlet — every hazard at once.
fn the_gauntlet() -> Course {
    let w = 150.0;
    let h = 120.0;
    let mut walls = boundary_walls(w, h);
    walls.push(Wall::new(50.0, 0.0, 50.0, 70.0));
    walls.push(Wall::new(100.0, 50.0, 100.0, 120.0));
    Course {
        name: "The Gauntlet".to_string(),
        par: 5,
        width: w,
        height: h,
        start: Vec2::new(12.0, 100.0),
        hole: Vec2::new(135.0, 15.0),
        walls,
        circles: vec![
            CircleObstacle::new(75.0, 90.0, 7.0),
            CircleObstacle::new(125.0, 60.0, 5.0),
        ],
        sand_traps: vec![SandTrap {
            bounds: Rect::new(55.0, 20.0, 25.0, 20.0),
        }],
        treadmills: vec![Treadmill {
            bounds: Rect::new(105.0, 25.0, 20.0, 12.0),
            direction: TreadmillDirection::Right,
        }],
    }
}
