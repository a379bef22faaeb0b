pub mod ball;
pub mod collision;
pub mod config;
pub mod course;
pub mod courses;
pub mod vec2;

pub use ball::Ball;
pub use config::GolfConfig;
pub use course::{Course, CourseProvider};
pub use vec2::Vec2;
