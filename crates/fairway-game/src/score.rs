use serde::{Deserialize, Serialize};

/// Per-hole stroke tally for a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCard {
    pars: Vec<u32>,
    strokes: Vec<u32>,
    completed: Vec<bool>,
}

impl ScoreCard {
    pub fn new(pars: Vec<u32>) -> Self {
        let holes = pars.len();
        Self {
            pars,
            strokes: vec![0; holes],
            completed: vec![false; holes],
        }
    }

    pub fn reset(&mut self) {
        self.strokes.fill(0);
        self.completed.fill(false);
    }

    pub fn record_stroke(&mut self, hole: usize) {
        if let Some(s) = self.strokes.get_mut(hole) {
            *s += 1;
        }
    }

    pub fn complete_hole(&mut self, hole: usize) {
        if let Some(c) = self.completed.get_mut(hole) {
            *c = true;
        }
    }

    pub fn strokes(&self, hole: usize) -> u32 {
        self.strokes.get(hole).copied().unwrap_or(0)
    }

    pub fn is_complete(&self, hole: usize) -> bool {
        self.completed.get(hole).copied().unwrap_or(false)
    }

    pub fn total_strokes(&self) -> u32 {
        self.strokes.iter().sum()
    }

    pub fn total_par(&self) -> u32 {
        self.pars.iter().sum()
    }

    pub fn par(&self, hole: usize) -> u32 {
        self.pars.get(hole).copied().unwrap_or(0)
    }

    /// Over/under-par tally across completed holes (negative = under).
    pub fn relative_to_par(&self) -> i32 {
        self.pars
            .iter()
            .zip(&self.strokes)
            .zip(&self.completed)
            .filter(|&(_, &done)| done)
            .map(|((&par, &strokes), _)| strokes as i32 - par as i32)
            .sum()
    }
}

/// Hole metadata emitted for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleInfo {
    /// 0-based hole index.
    pub index: usize,
    pub par: u32,
    /// Strokes taken on this hole so far.
    pub strokes: u32,
    /// Running over/under-par tally for the round.
    pub relative_to_par: i32,
}
