//! Dice sources.
//!
//! A `DiceSource` turns one draw from the game RNG into a face. The engine
//! never reaches for an ambient RNG: every face comes from the `GameRng`
//! passed in, which keeps whole games replayable from a seed.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PigError, Result};

/// Number of faces on the standard Pig die.
pub const D6_SIDES: u8 = 6;

/// Anything that can produce die faces for the engine.
pub trait DiceSource: Send {
    /// Roll once, returning a face in `1..=sides`.
    fn roll(&mut self, rng: &mut GameRng) -> u8;
}

/// A fair die with faces `1..=sides`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    sides: u8,
}

impl Die {
    /// Create a die with the given number of sides (at least 2).
    pub fn new(sides: u8) -> Result<Self> {
        if sides < 2 {
            return Err(PigError::InvalidConfig(format!(
                "a die needs at least 2 sides, got {sides}"
            )));
        }
        Ok(Self { sides })
    }

    /// The standard six-sided die.
    #[must_use]
    pub const fn d6() -> Self {
        Self { sides: D6_SIDES }
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u8 {
        self.sides
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::d6()
    }
}

impl DiceSource for Die {
    fn roll(&mut self, rng: &mut GameRng) -> u8 {
        rng.gen_range(1..=self.sides)
    }
}

/// Replays a fixed face sequence, cycling once exhausted.
///
/// Draws nothing from the RNG, so fumble draws see the same stream they
/// would see with no dice at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDie {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDie {
    /// Create a scripted die. Faces must be non-empty and within `1..=6`.
    pub fn new(faces: &[u8]) -> Result<Self> {
        if faces.is_empty() {
            return Err(PigError::InvalidConfig("scripted die needs at least one face".into()));
        }
        if let Some(bad) = faces.iter().find(|f| !(1..=D6_SIDES).contains(*f)) {
            return Err(PigError::InvalidConfig(format!("scripted face {bad} is not in 1..=6")));
        }
        Ok(Self {
            faces: faces.to_vec(),
            cursor: 0,
        })
    }

    /// Number of faces rolled so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDie {
    fn roll(&mut self, _rng: &mut GameRng) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d6_range() {
        let mut die = Die::d6();
        let mut rng = GameRng::new(1);

        for _ in 0..500 {
            let face = die.roll(&mut rng);
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_d6_roughly_uniform() {
        let mut die = Die::d6();
        let mut rng = GameRng::new(2024);
        let mut counts = [0u32; 6];

        for _ in 0..6000 {
            counts[(die.roll(&mut rng) - 1) as usize] += 1;
        }

        // Expected 1000 each; a fair die stays well inside this band.
        for count in counts {
            assert!((850..=1150).contains(&count), "counts = {counts:?}");
        }
    }

    #[test]
    fn test_same_seed_same_faces() {
        let mut a = Die::d6();
        let mut b = Die::d6();
        let mut rng_a = GameRng::new(9);
        let mut rng_b = GameRng::new(9);

        let seq_a: Vec<_> = (0..50).map(|_| a.roll(&mut rng_a)).collect();
        let seq_b: Vec<_> = (0..50).map(|_| b.roll(&mut rng_b)).collect();

        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_die_rejects_one_side() {
        assert!(Die::new(1).is_err());
        assert_eq!(Die::new(20).unwrap().sides(), 20);
    }

    #[test]
    fn test_scripted_die_cycles() {
        let mut die = ScriptedDie::new(&[3, 4, 1]).unwrap();
        let mut rng = GameRng::new(0);

        let faces: Vec<_> = (0..5).map(|_| die.roll(&mut rng)).collect();
        assert_eq!(faces, vec![3, 4, 1, 3, 4]);
        assert_eq!(die.rolled(), 5);
    }

    #[test]
    fn test_scripted_die_validation() {
        assert!(ScriptedDie::new(&[]).is_err());
        assert!(ScriptedDie::new(&[2, 7]).is_err());
        assert!(ScriptedDie::new(&[0]).is_err());
    }
}
