//! Dice rolling over a swappable randomness source

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Lowest face of the floor-shifted roller
pub const SHIFTED_FLOOR: i32 = 3;

/// Dice parameter error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("invalid die: {faces} faces (lowest face {floor})")]
    InvalidFaces { faces: i32, floor: i32 },
}

/// Anything that can produce a uniform die face
///
/// Every `rand` generator is a die source, so a seeded `StdRng` gives
/// reproducible rolls. `ScriptedDice` replays fixed faces for tests.
pub trait DieSource {
    /// Uniform integer in `low..=high` (callers guarantee `low <= high`)
    fn roll_die(&mut self, low: i32, high: i32) -> i32;
}

impl<R: RngCore> DieSource for R {
    fn roll_die(&mut self, low: i32, high: i32) -> i32 {
        self.gen_range(low..=high)
    }
}

/// Die source replaying a fixed sequence of faces
///
/// The sequence cycles once exhausted and each face is clamped into the
/// requested range. An empty script always yields the lowest face.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: Vec<i32>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(faces: impl Into<Vec<i32>>) -> Self {
        ScriptedDice {
            faces: faces.into(),
            cursor: 0,
        }
    }

    /// Number of faces handed out so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self, low: i32, high: i32) -> i32 {
        if self.faces.is_empty() {
            return low;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face.clamp(low, high)
    }
}

/// Roll `count` independent dice with faces in `1..=faces`
///
/// `count == 0` yields an empty vec.
pub fn roll_dice(rng: &mut impl DieSource, faces: i32, count: usize) -> Result<Vec<i32>, DiceError> {
    roll_between(rng, 1, faces, count)
}

/// Roll `count` dice with faces in `3..=faces` (improved-healing style roll)
pub fn roll_dice_floor_shifted(
    rng: &mut impl DieSource,
    faces: i32,
    count: usize,
) -> Result<Vec<i32>, DiceError> {
    roll_between(rng, SHIFTED_FLOOR, faces, count)
}

fn roll_between(
    rng: &mut impl DieSource,
    floor: i32,
    faces: i32,
    count: usize,
) -> Result<Vec<i32>, DiceError> {
    if faces < floor {
        return Err(DiceError::InvalidFaces { faces, floor });
    }
    let rolls: Vec<i32> = (0..count).map(|_| rng.roll_die(floor, faces)).collect();
    debug!(faces, floor, count, ?rolls, "rolled dice");
    Ok(rolls)
}

/// A dice expression such as `3d8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub count: usize,
    pub faces: i32,
}

impl DiceRoll {
    pub const fn new(count: usize, faces: i32) -> Self {
        DiceRoll { count, faces }
    }

    /// Roll this expression
    pub fn roll(&self, rng: &mut impl DieSource) -> Result<Vec<i32>, DiceError> {
        roll_dice(rng, self.faces, self.count)
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn make_test_rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(12345)
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = make_test_rng();
        assert_eq!(roll_dice(&mut rng, 8, 0).unwrap(), Vec::<i32>::new());
        assert_eq!(roll_dice_floor_shifted(&mut rng, 8, 0).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_invalid_faces() {
        let mut rng = make_test_rng();
        assert_eq!(
            roll_dice(&mut rng, 0, 3),
            Err(DiceError::InvalidFaces { faces: 0, floor: 1 })
        );
        assert!(roll_dice_floor_shifted(&mut rng, 2, 1).is_err());
    }

    #[test]
    fn test_one_faced_die() {
        let mut rng = make_test_rng();
        assert_eq!(roll_dice(&mut rng, 1, 4).unwrap(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_seeded_rolls_repeat() {
        let a = roll_dice(&mut make_test_rng(), 20, 10).unwrap();
        let b = roll_dice(&mut make_test_rng(), 20, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scripted_dice_cycles_and_clamps() {
        let mut dice = ScriptedDice::new(vec![8, 30, -2]);
        assert_eq!(roll_dice(&mut dice, 8, 4).unwrap(), vec![8, 8, 1, 8]);
        assert_eq!(dice.consumed(), 4);
    }

    #[test]
    fn test_empty_script_rolls_lowest_face() {
        let mut dice = ScriptedDice::default();
        assert_eq!(roll_dice_floor_shifted(&mut dice, 6, 2).unwrap(), vec![3, 3]);
    }

    #[test]
    fn test_dice_roll_display() {
        assert_eq!(DiceRoll::new(3, 8).to_string(), "3d8");
        assert_eq!(DiceRoll::new(16, 8).to_string(), "16d8");
    }

    proptest! {
        #[test]
        fn prop_roll_dice_count_and_range(seed in any::<u64>(), faces in 1i32..100, count in 0usize..40) {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let rolls = roll_dice(&mut rng, faces, count).unwrap();
            prop_assert_eq!(rolls.len(), count);
            prop_assert!(rolls.iter().all(|r| (1..=faces).contains(r)));
        }

        #[test]
        fn prop_floor_shifted_range(seed in any::<u64>(), faces in 3i32..100, count in 0usize..40) {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let rolls = roll_dice_floor_shifted(&mut rng, faces, count).unwrap();
            prop_assert_eq!(rolls.len(), count);
            prop_assert!(rolls.iter().all(|r| (3..=faces).contains(r)));
        }
    }
}
