pub mod input;
pub mod render;
pub mod score;
pub mod view;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use fairway_core::ball::Ball;
use fairway_core::collision;
use fairway_core::config::GolfConfig;
use fairway_core::course::{Course, CourseProvider};
use fairway_core::courses::CourseLibrary;
use fairway_core::vec2::Vec2;

use input::{Button, InputSource};
use render::{RenderFrame, Renderer};
use score::{HoleInfo, ScoreCard};
use view::ViewWindow;

/// Screen-sized view window dimensions (map pixels).
pub const VIEW_WIDTH: f32 = 128.0;
pub const VIEW_HEIGHT: f32 = 64.0;

/// Distance at which the renderer is told to lower the flag.
const NEAR_HOLE_DISTANCE: f32 = 25.0;

/// Pause menu entries: Resume, Quit (restart the round).
const PAUSE_MENU_ENTRIES: usize = 2;

/// The phases of a hole attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Hole just loaded; shows name/par until any button is pressed.
    HoleSummary,
    /// Rotating the aim line.
    Aiming,
    /// Charge meter oscillating; commit fires the shot.
    ChoosingPower,
    /// Panning the view around the course.
    MapExplorer,
    /// Physics running.
    BallInMotion,
    /// Ball sunk; waiting to advance.
    MapComplete,
    /// All holes done; waiting to restart.
    GameSummary,
    /// Pause overlay, entered via the button chord.
    PauseMenu,
}

impl GameState {
    /// States from which the pause chord may open the menu.
    fn pausable(self) -> bool {
        matches!(
            self,
            GameState::HoleSummary
                | GameState::Aiming
                | GameState::ChoosingPower
                | GameState::MapExplorer
                | GameState::BallInMotion
        )
    }
}

/// Events emitted by the round during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    HoleLoaded { index: usize },
    Stroke { hole: usize, strokes: u32 },
    BallSunk { hole: usize, strokes: u32, par: u32 },
    RoundComplete,
}

/// Per-state handlers, selected once per tick.
struct StateHooks {
    input: fn(&mut GolfRound, &dyn InputSource, f32),
    tick: fn(&mut GolfRound, f32),
}

/// One round of golf: sequences a hole attempt through
/// aim → power → motion → completion, counts strokes, and advances
/// holes. Exclusively owns the ball and the currently loaded course.
pub struct GolfRound {
    provider: Box<dyn CourseProvider>,
    config: GolfConfig,
    course: Course,
    ball: Ball,
    view: ViewWindow,
    score: ScoreCard,
    state: GameState,
    hole_index: usize,
    double_speed: bool,
    pause_hold: f32,
    paused_from: GameState,
    pause_cursor: usize,
    events: Vec<RoundEvent>,
}

impl GolfRound {
    /// Start a round on hole 0. Returns `None` if the provider has no holes.
    pub fn new(provider: Box<dyn CourseProvider>, config: GolfConfig) -> Option<Self> {
        let mut course = provider.load_hole(0)?;
        course.sanitize();

        let pars: Vec<u32> = (0..provider.hole_count())
            .filter_map(|i| provider.load_hole(i))
            .map(|c| c.par)
            .collect();

        let ball = Ball::new(course.start, &config);
        let mut view = ViewWindow::new(VIEW_WIDTH, VIEW_HEIGHT);
        view.focus_on(course.start, &course);

        info!(hole = 0, name = %course.name, "round started");

        Some(Self {
            provider,
            config,
            course,
            ball,
            view,
            score: ScoreCard::new(pars),
            state: GameState::HoleSummary,
            hole_index: 0,
            double_speed: false,
            pause_hold: 0.0,
            paused_from: GameState::Aiming,
            pause_cursor: 0,
            events: Vec::new(),
        })
    }

    /// A round over the built-in course library with loaded config.
    pub fn standard() -> Self {
        Self::new(Box::new(CourseLibrary::standard()), GolfConfig::load())
            .expect("standard course library is never empty")
    }

    /// Advance the simulation by one host frame. `dt` is the wall-clock
    /// delta in seconds, already clamped by the host loop.
    pub fn tick(&mut self, dt: f32, input: &dyn InputSource) -> Vec<RoundEvent> {
        self.update_pause_chord(dt, input);

        let hooks = Self::hooks(self.state);
        (hooks.input)(self, input, dt);
        (hooks.tick)(self, dt);

        // The explorer owns the view; every other state follows the ball.
        if self.state != GameState::MapExplorer {
            self.view.focus_on(self.ball.position, &self.course);
        }

        std::mem::take(&mut self.events)
    }

    /// Hand the renderer a read-only snapshot of this frame.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let power_range = self.config.max_power - self.config.min_power;
        renderer.draw_frame(&RenderFrame {
            state: self.state,
            ball: &self.ball,
            course: &self.course,
            view: &self.view,
            hole_info: self.hole_info(),
            double_speed: self.double_speed,
            ball_near_hole: self.ball_near_hole(),
            power_fraction: (self.ball.power - self.config.min_power) / power_range,
            pause_cursor: self.pause_cursor,
        });
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn view(&self) -> &ViewWindow {
        &self.view
    }

    pub fn config(&self) -> &GolfConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreCard {
        &self.score
    }

    pub fn hole_index(&self) -> usize {
        self.hole_index
    }

    pub fn double_speed(&self) -> bool {
        self.double_speed
    }

    /// Display metadata for the current hole.
    pub fn hole_info(&self) -> HoleInfo {
        HoleInfo {
            index: self.hole_index,
            par: self.course.par,
            strokes: self.score.strokes(self.hole_index),
            relative_to_par: self.score.relative_to_par(),
        }
    }

    /// Whether the ball is close enough to the cup that the renderer
    /// should lower the flag.
    pub fn ball_near_hole(&self) -> bool {
        self.ball.position.distance(self.course.hole) <= NEAR_HOLE_DISTANCE
    }

    // ---- state dispatch ------------------------------------------------

    fn hooks(state: GameState) -> StateHooks {
        match state {
            GameState::HoleSummary => StateHooks {
                input: Self::input_hole_summary,
                tick: Self::tick_idle,
            },
            GameState::Aiming => StateHooks {
                input: Self::input_aiming,
                tick: Self::tick_idle,
            },
            GameState::ChoosingPower => StateHooks {
                input: Self::input_choosing_power,
                tick: Self::tick_choosing_power,
            },
            GameState::MapExplorer => StateHooks {
                input: Self::input_map_explorer,
                tick: Self::tick_idle,
            },
            GameState::BallInMotion => StateHooks {
                input: Self::input_ball_in_motion,
                tick: Self::tick_ball_in_motion,
            },
            GameState::MapComplete => StateHooks {
                input: Self::input_map_complete,
                tick: Self::tick_idle,
            },
            GameState::GameSummary => StateHooks {
                input: Self::input_game_summary,
                tick: Self::tick_idle,
            },
            GameState::PauseMenu => StateHooks {
                input: Self::input_pause_menu,
                tick: Self::tick_idle,
            },
        }
    }

    fn set_state(&mut self, next: GameState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "state transition");
            self.state = next;
        }
    }

    /// Holding Primary and Secondary together opens the pause menu.
    /// (Secondary alone is the explorer chord, so the pause gesture
    /// needs both.)
    fn update_pause_chord(&mut self, dt: f32, input: &dyn InputSource) {
        if !self.state.pausable() {
            self.pause_hold = 0.0;
            return;
        }
        if input.pressed(Button::Primary) && input.pressed(Button::Secondary) {
            self.pause_hold += dt;
            if self.pause_hold >= self.config.pause_hold_secs {
                self.pause_hold = 0.0;
                self.paused_from = self.state;
                self.pause_cursor = 0;
                self.set_state(GameState::PauseMenu);
            }
        } else {
            self.pause_hold = 0.0;
        }
    }

    // ---- per-state input -----------------------------------------------

    fn input_hole_summary(&mut self, input: &dyn InputSource, _dt: f32) {
        if input.any_just_pressed() {
            self.set_state(GameState::Aiming);
        }
    }

    fn input_aiming(&mut self, input: &dyn InputSource, dt: f32) {
        if input.just_pressed(Button::Secondary) {
            self.set_state(GameState::MapExplorer);
            return;
        }
        if input.just_pressed(Button::Primary) {
            self.set_state(GameState::ChoosingPower);
            return;
        }
        if input.pressed(Button::Left) {
            self.ball.rotate_counter_clockwise(dt, &self.config);
        }
        if input.pressed(Button::Right) {
            self.ball.rotate_clockwise(dt, &self.config);
        }
    }

    fn input_choosing_power(&mut self, input: &dyn InputSource, _dt: f32) {
        if input.just_pressed(Button::Secondary) {
            self.set_state(GameState::Aiming);
            return;
        }
        if input.just_pressed(Button::Primary) {
            self.ball.start_hit();
            self.score.record_stroke(self.hole_index);
            self.events.push(RoundEvent::Stroke {
                hole: self.hole_index,
                strokes: self.score.strokes(self.hole_index),
            });
            self.set_state(GameState::BallInMotion);
        }
    }

    fn input_map_explorer(&mut self, input: &dyn InputSource, dt: f32) {
        if input.pressed(Button::Up) {
            self.view.pan_up(dt, &self.config, &self.course);
        }
        if input.pressed(Button::Down) {
            self.view.pan_down(dt, &self.config, &self.course);
        }
        if input.pressed(Button::Left) {
            self.view.pan_left(dt, &self.config, &self.course);
        }
        if input.pressed(Button::Right) {
            self.view.pan_right(dt, &self.config, &self.course);
        }
        if input.just_released(Button::Secondary) {
            self.view.focus_on(self.ball.position, &self.course);
            self.set_state(GameState::Aiming);
        }
    }

    fn input_ball_in_motion(&mut self, input: &dyn InputSource, _dt: f32) {
        // Double speed arms on a fresh press and stays while held.
        if self.double_speed {
            self.double_speed = input.pressed(Button::Primary);
        } else {
            self.double_speed = input.just_pressed(Button::Primary);
        }
    }

    fn input_map_complete(&mut self, input: &dyn InputSource, _dt: f32) {
        if input.just_pressed(Button::Primary) {
            if self.hole_index + 1 >= self.provider.hole_count() {
                self.events.push(RoundEvent::RoundComplete);
                self.set_state(GameState::GameSummary);
            } else {
                self.load_hole(self.hole_index + 1);
            }
        }
    }

    fn input_game_summary(&mut self, input: &dyn InputSource, _dt: f32) {
        if input.just_pressed(Button::Primary) {
            self.restart();
        }
    }

    fn input_pause_menu(&mut self, input: &dyn InputSource, _dt: f32) {
        if input.just_pressed(Button::Up) {
            self.pause_cursor = self.pause_cursor.saturating_sub(1);
        }
        if input.just_pressed(Button::Down) {
            self.pause_cursor = (self.pause_cursor + 1).min(PAUSE_MENU_ENTRIES - 1);
        }
        if input.just_pressed(Button::Primary) {
            if self.pause_cursor == 0 {
                self.set_state(self.paused_from);
            } else {
                self.restart();
            }
        }
    }

    // ---- per-state tick ------------------------------------------------

    fn tick_idle(&mut self, _dt: f32) {}

    fn tick_choosing_power(&mut self, dt: f32) {
        self.ball.tick_power(dt, &self.config);
    }

    fn tick_ball_in_motion(&mut self, dt: f32) {
        self.step_physics(dt);

        // Double speed processes the same update twice per tick.
        if self.double_speed && self.state == GameState::BallInMotion {
            self.step_physics(dt);
        }
    }

    /// Sub-stepped physics: the tick's elapsed time is split into equal
    /// slices so the ball can never travel further than one slice's
    /// worth of motion between collision checks (no tunneling through
    /// thin walls at high velocity).
    fn step_physics(&mut self, dt: f32) {
        let substeps = self.config.substeps.max(1);
        let sub_dt = dt / substeps as f32;

        for _ in 0..substeps {
            self.ball.advance(sub_dt, &self.config);

            if self.ball.is_stopped(&self.config) {
                self.ball.velocity = Vec2::ZERO;
                self.ball.reset_power(&self.config);
                self.double_speed = false;
                self.set_state(GameState::Aiming);
                break;
            }

            collision::resolve(&mut self.ball, &self.course, &self.config, sub_dt);

            if collision::in_hole(&self.ball, &self.course, &self.config) {
                self.ball.position = self.course.hole;
                self.ball.velocity = Vec2::ZERO;
                self.score.complete_hole(self.hole_index);
                self.double_speed = false;
                info!(
                    hole = self.hole_index,
                    strokes = self.score.strokes(self.hole_index),
                    par = self.course.par,
                    "ball sunk"
                );
                self.events.push(RoundEvent::BallSunk {
                    hole: self.hole_index,
                    strokes: self.score.strokes(self.hole_index),
                    par: self.course.par,
                });
                self.set_state(GameState::MapComplete);
                break;
            }
        }
    }

    // ---- hole lifecycle ------------------------------------------------

    fn load_hole(&mut self, index: usize) {
        let Some(mut course) = self.provider.load_hole(index) else {
            return;
        };
        course.sanitize();

        self.hole_index = index;
        self.ball = Ball::new(course.start, &self.config);
        self.view.focus_on(course.start, &course);
        self.course = course;
        self.double_speed = false;
        self.set_state(GameState::HoleSummary);
        self.events.push(RoundEvent::HoleLoaded { index });
        info!(hole = index, name = %self.course.name, "hole loaded");
    }

    fn restart(&mut self) {
        info!("round restarted");
        self.score.reset();
        self.load_hole(0);
    }
}

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::input::{Button, InputState};
    use crate::{GolfRound, RoundEvent};

    /// Start a frame with `button` freshly pressed.
    pub fn press(input: &mut InputState, button: Button) {
        input.begin_tick();
        input.set_down(button, true);
    }

    /// Start a frame with `button` freshly released.
    pub fn release(input: &mut InputState, button: Button) {
        input.begin_tick();
        input.set_down(button, false);
    }

    /// Start a frame with no edges (held buttons stay held).
    pub fn neutral(input: &mut InputState) {
        input.begin_tick();
    }

    /// Press-and-release `button` across two ticks, collecting events.
    pub fn tap(
        round: &mut GolfRound,
        input: &mut InputState,
        button: Button,
        dt: f32,
    ) -> Vec<RoundEvent> {
        press(input, button);
        let mut events = round.tick(dt, input);
        release(input, button);
        events.extend(round.tick(dt, input));
        events
    }

    /// Run `n` edge-free ticks, collecting events.
    pub fn run_ticks(
        round: &mut GolfRound,
        input: &mut InputState,
        n: usize,
        dt: f32,
    ) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            neutral(input);
            events.extend(round.tick(dt, input));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{neutral, press, release, run_ticks, tap};
    use fairway_core::course::Wall;

    use crate::input::InputState;

    /// An open course with the cup straight down the +X aim line from
    /// the tee, so a default-direction shot sinks.
    fn straight_course(name: &str) -> Course {
        Course {
            name: name.to_string(),
            par: 2,
            width: 200.0,
            height: 100.0,
            start: Vec2::new(20.0, 50.0),
            hole: Vec2::new(120.0, 50.0),
            walls: vec![],
            circles: vec![],
            sand_traps: vec![],
            treadmills: vec![],
        }
    }

    fn round_over(courses: Vec<Course>) -> GolfRound {
        GolfRound::new(
            Box::new(CourseLibrary::new(courses)),
            GolfConfig::default(),
        )
        .unwrap()
    }

    fn single_hole_round() -> GolfRound {
        round_over(vec![straight_course("one")])
    }

    /// A round whose cup is far off the default aim line, so a shot
    /// rolls freely without sinking.
    fn rolling_round() -> GolfRound {
        let mut course = straight_course("open");
        course.hole = Vec2::new(20.0, 10.0);
        round_over(vec![course])
    }

    /// Walk a fresh round from HoleSummary into BallInMotion.
    fn fire_shot(round: &mut GolfRound, input: &mut InputState) {
        tap(round, input, Button::Down, 0.01);
        assert_eq!(round.state(), GameState::Aiming);
        tap(round, input, Button::Primary, 0.01);
        assert_eq!(round.state(), GameState::ChoosingPower);
        tap(round, input, Button::Primary, 0.01);
        assert_eq!(round.state(), GameState::BallInMotion);
    }

    #[test]
    fn new_round_starts_at_hole_summary() {
        let round = single_hole_round();
        assert_eq!(round.state(), GameState::HoleSummary);
        assert_eq!(round.hole_index(), 0);
        assert_eq!(round.ball().position, Vec2::new(20.0, 50.0));
    }

    #[test]
    fn empty_provider_yields_no_round() {
        assert!(GolfRound::new(Box::new(CourseLibrary::new(vec![])), GolfConfig::default()).is_none());
    }

    #[test]
    fn any_button_leaves_hole_summary() {
        for &button in &Button::ALL {
            let mut round = single_hole_round();
            let mut input = InputState::new();
            press(&mut input, button);
            round.tick(0.01, &input);
            assert_eq!(round.state(), GameState::Aiming, "button {button:?}");
        }
    }

    #[test]
    fn held_buttons_rotate_aim() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        tap(&mut round, &mut input, Button::Down, 0.01);

        press(&mut input, Button::Left);
        round.tick(0.1, &input);
        let ccw = round.ball().direction;
        assert!(ccw > 0.0, "counter-clockwise rotation should increase angle");

        release(&mut input, Button::Left);
        round.tick(0.01, &input);
        press(&mut input, Button::Right);
        round.tick(0.1, &input);
        round.tick(0.1, &input);
        assert!(round.ball().direction != ccw);
    }

    #[test]
    fn power_oscillates_while_choosing() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        tap(&mut round, &mut input, Button::Down, 0.01);
        tap(&mut round, &mut input, Button::Primary, 0.01);
        assert_eq!(round.state(), GameState::ChoosingPower);

        let before = round.ball().power;
        run_ticks(&mut round, &mut input, 3, 0.05);
        assert!(round.ball().power != before, "charge meter should move");
    }

    #[test]
    fn secondary_cancels_power_choice() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        tap(&mut round, &mut input, Button::Down, 0.01);
        tap(&mut round, &mut input, Button::Primary, 0.01);
        tap(&mut round, &mut input, Button::Secondary, 0.01);
        assert_eq!(round.state(), GameState::Aiming);
        assert_eq!(round.score().strokes(0), 0);
    }

    #[test]
    fn committing_fires_shot_and_counts_stroke() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        tap(&mut round, &mut input, Button::Down, 0.01);
        tap(&mut round, &mut input, Button::Primary, 0.01);
        let events = tap(&mut round, &mut input, Button::Primary, 0.01);

        assert_eq!(round.state(), GameState::BallInMotion);
        assert_eq!(round.score().strokes(0), 1);
        assert!(round.ball().velocity.length() > 0.0);
        assert!(events.contains(&RoundEvent::Stroke {
            hole: 0,
            strokes: 1
        }));
    }

    #[test]
    fn shot_down_the_line_sinks_and_completes_hole() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);

        let events = run_ticks(&mut round, &mut input, 200, 0.05);
        assert_eq!(round.state(), GameState::MapComplete);
        assert_eq!(round.ball().position, round.course().hole);
        assert_eq!(round.ball().velocity, Vec2::ZERO);
        assert!(round.score().is_complete(0));
        assert!(events.iter().any(|e| matches!(
            e,
            RoundEvent::BallSunk {
                hole: 0,
                strokes: 1,
                ..
            }
        )));
    }

    #[test]
    fn stopped_ball_returns_to_aiming_with_power_reset() {
        let mut round = rolling_round();
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);

        run_ticks(&mut round, &mut input, 500, 0.05);
        assert_eq!(round.state(), GameState::Aiming);
        assert_eq!(round.ball().velocity, Vec2::ZERO);
        assert_eq!(round.ball().power, round.config().default_power());
        assert_eq!(round.score().strokes(0), 1, "stroke still counts");
    }

    #[test]
    fn brief_slow_moment_does_not_stop_ball() {
        // A wall right in front of the tee: the near head-on bounce
        // moment must not count as stopped.
        let mut course = straight_course("walled");
        course.walls.push(Wall::new(40.0, 30.0, 40.0, 70.0));
        course.hole = Vec2::new(20.0, 10.0);
        let mut round = round_over(vec![course]);
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);

        run_ticks(&mut round, &mut input, 8, 0.05);
        assert_eq!(
            round.state(),
            GameState::BallInMotion,
            "ball should still be rolling after the bounce"
        );
        assert!(
            round.ball().velocity.x < 0.0,
            "ball should have bounced back off the wall"
        );
    }

    #[test]
    fn double_speed_arms_on_press_and_drops_on_release() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);

        // fire_shot leaves Primary released; press it again to arm.
        press(&mut input, Button::Primary);
        round.tick(0.01, &input);
        assert!(round.double_speed());

        neutral(&mut input);
        round.tick(0.01, &input);
        assert!(round.double_speed(), "stays armed while held");

        release(&mut input, Button::Primary);
        round.tick(0.01, &input);
        assert!(!round.double_speed());
    }

    #[test]
    fn double_speed_covers_twice_the_distance() {
        let mut slow = single_hole_round();
        let mut fast = single_hole_round();
        let mut input_slow = InputState::new();
        let mut input_fast = InputState::new();
        fire_shot(&mut slow, &mut input_slow);
        fire_shot(&mut fast, &mut input_fast);

        press(&mut input_fast, Button::Primary);
        fast.tick(0.02, &input_fast);
        neutral(&mut input_slow);
        slow.tick(0.02, &input_slow);
        // One extra physics update for the same wall-clock tick.
        assert!(fast.ball().position.x > slow.ball().position.x);
    }

    #[test]
    fn explorer_pans_and_returns_on_release() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        tap(&mut round, &mut input, Button::Down, 0.01);

        press(&mut input, Button::Secondary);
        round.tick(0.01, &input);
        assert_eq!(round.state(), GameState::MapExplorer);

        // Pan while still holding Secondary.
        neutral(&mut input);
        input.set_down(Button::Right, true);
        let x_before = round.view().x;
        round.tick(0.2, &input);
        assert!(round.view().x > x_before, "view should pan right");

        neutral(&mut input);
        input.set_down(Button::Right, false);
        input.set_down(Button::Secondary, false);
        round.tick(0.01, &input);
        assert_eq!(round.state(), GameState::Aiming);
    }

    #[test]
    fn completing_last_hole_reaches_game_summary() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);
        run_ticks(&mut round, &mut input, 200, 0.05);
        assert_eq!(round.state(), GameState::MapComplete);

        let events = tap(&mut round, &mut input, Button::Primary, 0.01);
        assert_eq!(round.state(), GameState::GameSummary);
        assert!(events.contains(&RoundEvent::RoundComplete));
    }

    #[test]
    fn completing_a_hole_advances_to_the_next() {
        let mut round = round_over(vec![straight_course("first"), straight_course("second")]);
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);
        run_ticks(&mut round, &mut input, 200, 0.05);
        assert_eq!(round.state(), GameState::MapComplete);

        let events = tap(&mut round, &mut input, Button::Primary, 0.01);
        assert_eq!(round.state(), GameState::HoleSummary);
        assert_eq!(round.hole_index(), 1);
        assert_eq!(round.course().name, "second");
        assert_eq!(round.ball().position, round.course().start);
        assert!(events.contains(&RoundEvent::HoleLoaded { index: 1 }));
    }

    #[test]
    fn game_summary_restart_clears_the_scorecard() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);
        run_ticks(&mut round, &mut input, 200, 0.05);
        tap(&mut round, &mut input, Button::Primary, 0.01);
        assert_eq!(round.state(), GameState::GameSummary);

        let events = tap(&mut round, &mut input, Button::Primary, 0.01);
        assert_eq!(round.state(), GameState::HoleSummary);
        assert_eq!(round.hole_index(), 0);
        assert_eq!(round.score().total_strokes(), 0);
        assert!(!round.score().is_complete(0));
        assert!(events.contains(&RoundEvent::HoleLoaded { index: 0 }));
    }

    #[test]
    fn pause_chord_opens_menu_after_hold() {
        let mut round = rolling_round();
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);

        // Hold both buttons through the threshold.
        press(&mut input, Button::Primary);
        input.set_down(Button::Secondary, true);
        round.tick(0.3, &input);
        assert_eq!(round.state(), GameState::BallInMotion);
        for _ in 0..3 {
            neutral(&mut input);
            round.tick(0.3, &input);
        }
        assert_eq!(round.state(), GameState::PauseMenu);
    }

    #[test]
    fn pause_resume_returns_to_prior_state() {
        let mut round = rolling_round();
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);

        press(&mut input, Button::Primary);
        input.set_down(Button::Secondary, true);
        for _ in 0..5 {
            round.tick(0.3, &input);
            neutral(&mut input);
        }
        assert_eq!(round.state(), GameState::PauseMenu);

        // Let go of the chord, then select Resume.
        release(&mut input, Button::Primary);
        input.set_down(Button::Secondary, false);
        round.tick(0.01, &input);
        tap(&mut round, &mut input, Button::Primary, 0.01);
        assert_eq!(round.state(), GameState::BallInMotion);
    }

    #[test]
    fn pause_quit_restarts_the_round() {
        let mut round = rolling_round();
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);

        press(&mut input, Button::Primary);
        input.set_down(Button::Secondary, true);
        for _ in 0..5 {
            round.tick(0.3, &input);
            neutral(&mut input);
        }
        assert_eq!(round.state(), GameState::PauseMenu);

        release(&mut input, Button::Primary);
        input.set_down(Button::Secondary, false);
        round.tick(0.01, &input);
        tap(&mut round, &mut input, Button::Down, 0.01);
        tap(&mut round, &mut input, Button::Primary, 0.01);
        assert_eq!(round.state(), GameState::HoleSummary);
        assert_eq!(round.hole_index(), 0);
        assert_eq!(round.score().total_strokes(), 0);
    }

    #[test]
    fn pause_cursor_saturates_at_both_ends() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        tap(&mut round, &mut input, Button::Down, 0.01);
        press(&mut input, Button::Primary);
        input.set_down(Button::Secondary, true);
        for _ in 0..6 {
            round.tick(0.3, &input);
            neutral(&mut input);
        }
        assert_eq!(round.state(), GameState::PauseMenu);

        release(&mut input, Button::Primary);
        input.set_down(Button::Secondary, false);
        round.tick(0.01, &input);

        tap(&mut round, &mut input, Button::Up, 0.01);
        tap(&mut round, &mut input, Button::Down, 0.01);
        tap(&mut round, &mut input, Button::Down, 0.01);
        tap(&mut round, &mut input, Button::Down, 0.01);
        // Quit is the last entry; selecting restarts.
        tap(&mut round, &mut input, Button::Primary, 0.01);
        assert_eq!(round.state(), GameState::HoleSummary);
    }

    #[test]
    fn hole_info_tracks_strokes_and_par() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);
        run_ticks(&mut round, &mut input, 200, 0.05);

        let info = round.hole_info();
        assert_eq!(info.index, 0);
        assert_eq!(info.par, 2);
        assert_eq!(info.strokes, 1);
        // Hole-in-one on a par 2.
        assert_eq!(info.relative_to_par, -1);
    }

    #[test]
    fn ball_near_hole_hint() {
        let round = single_hole_round();
        // Tee is 100 units from the cup.
        assert!(!round.ball_near_hole());

        let mut close = straight_course("close");
        close.start = Vec2::new(110.0, 50.0);
        let round = round_over(vec![close]);
        assert!(round.ball_near_hole());
    }

    #[test]
    fn view_follows_ball_outside_explorer() {
        let mut round = single_hole_round();
        let mut input = InputState::new();
        fire_shot(&mut round, &mut input);
        run_ticks(&mut round, &mut input, 5, 0.05);

        let view = round.view();
        let center_x = view.x + view.width / 2.0;
        assert!((center_x - round.ball().position.x).abs() < view.width / 2.0);
    }

    #[test]
    fn render_frame_exposes_round_state() {
        struct Capture;
        impl Renderer for Capture {
            fn draw_frame(&mut self, frame: &RenderFrame<'_>) {
                assert_eq!(frame.state, GameState::HoleSummary);
                assert_eq!(frame.hole_info.index, 0);
                assert!((frame.power_fraction - 0.5).abs() < 1e-5);
                assert!(!frame.double_speed);
            }
        }
        let round = single_hole_round();
        round.render(&mut Capture);
    }
}
