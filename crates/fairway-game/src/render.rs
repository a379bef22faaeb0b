//! Renderer contract.
//!
//! The host owns the screen; the simulation only hands it read-only
//! references each tick. Whether (and how) anything gets drawn is
//! entirely the renderer's business.

use fairway_core::ball::Ball;
use fairway_core::course::Course;

use crate::score::HoleInfo;
use crate::view::ViewWindow;
use crate::GameState;

/// Everything a renderer needs for one frame, borrowed from the round.
pub struct RenderFrame<'a> {
    pub state: GameState,
    pub ball: &'a Ball,
    pub course: &'a Course,
    pub view: &'a ViewWindow,
    pub hole_info: HoleInfo,
    pub double_speed: bool,
    /// Hint: hide the flag sprite when the ball is close to the cup.
    pub ball_near_hole: bool,
    /// Charge meter fill, 0.0 at `min_power` and 1.0 at `max_power`.
    pub power_fraction: f32,
    /// Selected entry in the pause menu (meaningful in `PauseMenu` only).
    pub pause_cursor: usize,
}

pub trait Renderer {
    fn draw_frame(&mut self, frame: &RenderFrame<'_>);
}
