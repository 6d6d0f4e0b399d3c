//! Core type definitions used throughout the codebase

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Board coordinate
///
/// `x` is the board row and `y` the column, matching the order the command
/// script writes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Source of the random rolls used by attacks, combat and terrain generation
pub trait Dice {
    /// Roll uniformly in `[0, bound)`. Returns 0 when `bound <= 0`.
    fn roll(&mut self, bound: i32) -> i32;
}

/// Deterministic dice seeded once per run
#[derive(Debug, Clone)]
pub struct SeededDice {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from entropy. The drawn seed stays available through [`SeededDice::seed`].
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Dice for SeededDice {
    fn roll(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Dice that replay a scripted sequence, cycling when exhausted
///
/// Values are reduced into `[0, bound)` so a scripted roll never breaks the
/// range a caller relies on.
#[derive(Debug, Clone, Default)]
pub struct FixedDice {
    rolls: Vec<i32>,
    next: usize,
}

impl FixedDice {
    pub fn new(rolls: impl Into<Vec<i32>>) -> Self {
        Self {
            rolls: rolls.into(),
            next: 0,
        }
    }

    /// Dice that always roll zero
    pub fn zeros() -> Self {
        Self::default()
    }
}

impl Dice for FixedDice {
    fn roll(&mut self, bound: i32) -> i32 {
        if bound <= 0 || self.rolls.is_empty() {
            return 0;
        }
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value.rem_euclid(bound)
    }
}
