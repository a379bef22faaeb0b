//! Logical-button input contract.
//!
//! The simulation never touches device registers; the host polls its
//! input hardware, mirrors it into an `InputState` (or any other
//! `InputSource`), and the round state machine consumes the predicates.

/// The closed set of logical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Primary,
    Secondary,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Primary,
        Button::Secondary,
    ];

    fn index(self) -> usize {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Left => 2,
            Button::Right => 3,
            Button::Primary => 4,
            Button::Secondary => 5,
        }
    }
}

/// Level- and edge-triggered button queries for one tick.
pub trait InputSource {
    /// Level-triggered: the button is currently held.
    fn pressed(&self, button: Button) -> bool;
    /// Edge-triggered: the button went down this tick.
    fn just_pressed(&self, button: Button) -> bool;
    /// Edge-triggered: the button went up this tick.
    fn just_released(&self, button: Button) -> bool;

    /// Any button went down this tick.
    fn any_just_pressed(&self) -> bool {
        Button::ALL.iter().any(|&b| self.just_pressed(b))
    }
}

/// Double-buffered button state. The host calls `begin_tick` at the
/// start of each frame, then `set_down` for each button; edges are
/// derived against the previous frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    down: [bool; 6],
    prev: [bool; 6],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the current frame into the previous one. Held buttons stay
    /// held; edge predicates reset.
    pub fn begin_tick(&mut self) {
        self.prev = self.down;
    }

    pub fn set_down(&mut self, button: Button, down: bool) {
        self.down[button.index()] = down;
    }
}

impl InputSource for InputState {
    fn pressed(&self, button: Button) -> bool {
        self.down[button.index()]
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.down[button.index()] && !self.prev[button.index()]
    }

    fn just_released(&self, button: Button) -> bool {
        !self.down[button.index()] && self.prev[button.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_an_edge_for_one_tick() {
        let mut input = InputState::new();
        input.begin_tick();
        input.set_down(Button::Primary, true);
        assert!(input.pressed(Button::Primary));
        assert!(input.just_pressed(Button::Primary));

        // Still held on the next tick: level yes, edge no.
        input.begin_tick();
        assert!(input.pressed(Button::Primary));
        assert!(!input.just_pressed(Button::Primary));
    }

    #[test]
    fn release_is_an_edge_for_one_tick() {
        let mut input = InputState::new();
        input.begin_tick();
        input.set_down(Button::Secondary, true);
        input.begin_tick();
        input.set_down(Button::Secondary, false);
        assert!(!input.pressed(Button::Secondary));
        assert!(input.just_released(Button::Secondary));

        input.begin_tick();
        assert!(!input.just_released(Button::Secondary));
    }

    #[test]
    fn any_just_pressed_covers_all_buttons() {
        for &button in &Button::ALL {
            let mut input = InputState::new();
            input.begin_tick();
            input.set_down(button, true);
            assert!(input.any_just_pressed());
        }
        let input = InputState::new();
        assert!(!input.any_just_pressed());
    }
}
