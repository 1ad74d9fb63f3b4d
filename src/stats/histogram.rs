//! Roll and turn-total histogram.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::engine::GameEvent;

/// Faces tracked by the histogram.
const FACES: usize = 6;

/// Counts of die faces and banked turn totals.
///
/// Faces outside `1..=6` (non-standard dice) are not counted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollHistogram {
    /// Count per face, index 0 holding face 1.
    faces: [u64; FACES],

    /// Resolved turns per banked amount (busts bank 0).
    turn_totals: FxHashMap<u32, u64>,
}

impl RollHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a histogram from a run of events, e.g. a game's history.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a GameEvent>) -> Self {
        let mut histogram = Self::new();
        for event in events {
            histogram.observe(event);
        }
        histogram
    }

    /// Feed one engine event. Rolls and resolved turns are counted.
    pub fn observe(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Roll(roll) => self.record_roll(roll.value),
            GameEvent::TurnResolved(report) => self.record_turn(report.banked),
            GameEvent::TurnStarted { .. } | GameEvent::GameOver(_) => {}
        }
    }

    pub fn record_roll(&mut self, face: u8) {
        if let Some(slot) = Self::slot(face) {
            self.faces[slot] += 1;
        }
    }

    pub fn record_turn(&mut self, banked: u32) {
        *self.turn_totals.entry(banked).or_insert(0) += 1;
    }

    /// Times `face` was rolled.
    #[must_use]
    pub fn count(&self, face: u8) -> u64 {
        Self::slot(face).map_or(0, |slot| self.faces[slot])
    }

    /// Share of all rolls that showed `face`. 0.0 when nothing was rolled.
    #[must_use]
    pub fn frequency(&self, face: u8) -> f64 {
        let total = self.total_rolls();
        if total == 0 {
            0.0
        } else {
            self.count(face) as f64 / total as f64
        }
    }

    #[must_use]
    pub fn total_rolls(&self) -> u64 {
        self.faces.iter().sum()
    }

    /// Resolved turns that banked exactly `banked` points.
    #[must_use]
    pub fn turn_count(&self, banked: u32) -> u64 {
        self.turn_totals.get(&banked).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_turns(&self) -> u64 {
        self.turn_totals.values().sum()
    }

    /// Banked amounts seen with their counts, smallest amount first.
    #[must_use]
    pub fn turn_totals(&self) -> Vec<(u32, u64)> {
        let mut totals: Vec<_> = self.turn_totals.iter().map(|(&k, &v)| (k, v)).collect();
        totals.sort_unstable();
        totals
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_rolls() == 0 && self.turn_totals.is_empty()
    }

    /// Add another histogram's counts into this one.
    pub fn merge(&mut self, other: &RollHistogram) {
        for (mine, theirs) in self.faces.iter_mut().zip(other.faces) {
            *mine += theirs;
        }
        for (&banked, &count) in &other.turn_totals {
            *self.turn_totals.entry(banked).or_insert(0) += count;
        }
    }

    fn slot(face: u8) -> Option<usize> {
        let face = usize::from(face);
        (1..=FACES).contains(&face).then(|| face - 1)
    }
}
