//! Craps execution module.
//!
//! This module contains the session engine and the dice sources that feed it:
//! - [craps::CrapsSession], the rules engine for one player's session
//! - [GameRng], a deterministic hash-chain dice source
//! - [EntropyDice], an OS-seeded dice source
//!
//! The engine never draws randomness itself. Callers obtain a pair of dice from a
//! [DiceSource], check it with [Dice::new], and hand the values to the engine.

pub mod craps;

use commonware_cryptography::sha256::Sha256;
use commonware_cryptography::Hasher;
use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

/// Supplies two independent dice per roll.
pub trait DiceSource {
    /// Draws the next pair of dice, each expected to be in 1..=6.
    fn next(&mut self) -> (u8, u8);
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn next(&mut self) -> (u8, u8) {
        (**self).next()
    }
}

/// Deterministic random number generator built from a SHA256 hash chain.
///
/// Two generators created with the same seed and stream produce the same rolls,
/// which makes whole sessions reproducible.
#[derive(Clone)]
pub struct GameRng {
    state: [u8; 32],
    index: usize,
}

impl GameRng {
    /// Create a new RNG from a seed and a stream identifier (e.g. a session number).
    pub fn new(seed: u64, stream: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(&seed.to_be_bytes());
        hasher.update(&stream.to_be_bytes());
        Self {
            state: hasher.finalize().0,
            index: 0,
        }
    }

    /// Get the next random byte.
    fn next_byte(&mut self) -> u8 {
        if self.index >= 32 {
            // Rehash to get more bytes
            let mut hasher = Sha256::new();
            hasher.update(&self.state);
            self.state = hasher.finalize().0;
            self.index = 0;
        }
        let result = self.state[self.index];
        self.index += 1;
        result
    }

    /// Get a random u8 value.
    pub fn next_u8(&mut self) -> u8 {
        self.next_byte()
    }

    /// Get a random value in range [0, max).
    pub fn next_bounded(&mut self, max: u8) -> u8 {
        if max == 0 {
            return 0;
        }
        // Rejection sampling keeps the distribution unbiased
        let limit = u8::MAX - (u8::MAX % max);
        loop {
            let value = self.next_u8();
            if value < limit {
                return value % max;
            }
        }
    }

    /// Roll a single die (1-6).
    pub fn roll_die(&mut self) -> u8 {
        self.next_bounded(6) + 1
    }
}

impl DiceSource for GameRng {
    fn next(&mut self) -> (u8, u8) {
        let d1 = self.roll_die();
        let d2 = self.roll_die();
        (d1, d2)
    }
}

/// Dice seeded from operating system entropy.
pub struct EntropyDice {
    rng: StdRng,
}

impl EntropyDice {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSource for EntropyDice {
    fn next(&mut self) -> (u8, u8) {
        (self.rng.gen_range(1..=6), self.rng.gen_range(1..=6))
    }
}

/// Error raised at the dice boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A die value outside 1..=6.
    #[error("die value out of range: {0}")]
    InvalidDie(u8),
}

/// A pair of dice that passed the 1..=6 precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dice {
    d1: u8,
    d2: u8,
}

impl Dice {
    pub fn new(d1: u8, d2: u8) -> Result<Self, GameError> {
        for value in [d1, d2] {
            if !(1..=6).contains(&value) {
                return Err(GameError::InvalidDie(value));
            }
        }
        Ok(Self { d1, d2 })
    }

    pub fn d1(&self) -> u8 {
        self.d1
    }

    pub fn d2(&self) -> u8 {
        self.d2
    }

    pub fn total(&self) -> u8 {
        self.d1 + self.d2
    }
}
