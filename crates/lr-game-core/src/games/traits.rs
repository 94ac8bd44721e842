//! Game traits and types.

use crate::crypto::{generate_exact, RandomSource};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hidden bit selecting the world a session runs in.
///
/// In the LR game `Zero` encrypts the left message and `One` the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldBit {
    Zero,
    One,
}

impl WorldBit {
    /// Draw a uniform bit from `rng`
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let byte = generate_exact(rng, 1)?;
        Ok(if byte[0] & 1 == 1 {
            WorldBit::One
        } else {
            WorldBit::Zero
        })
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            WorldBit::Zero => 0,
            WorldBit::One => 1,
        }
    }

    /// The other world
    pub fn flip(&self) -> WorldBit {
        match self {
            WorldBit::Zero => WorldBit::One,
            WorldBit::One => WorldBit::Zero,
        }
    }
}

impl TryFrom<u8> for WorldBit {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WorldBit::Zero),
            1 => Ok(WorldBit::One),
            other => Err(GameError::InvalidBit(other)),
        }
    }
}

impl From<bool> for WorldBit {
    fn from(value: bool) -> Self {
        if value {
            WorldBit::One
        } else {
            WorldBit::Zero
        }
    }
}

impl fmt::Display for WorldBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Session lifecycle shared by every indistinguishability game.
///
/// A game starts Uninitialized. `initialize` moves it to Active (or restarts
/// an Active game with fresh secrets); `finalize` judges a guess and leaves
/// the session untouched, so a simulator can finalize and then initialize
/// again for the next trial.
pub trait Game {
    /// Start a new session, discarding the previous key, bit and history.
    /// `None` draws the world bit at random; `Some(bit)` forces it.
    fn initialize(&mut self, forced_bit: Option<WorldBit>) -> Result<(), GameError>;

    /// Whether the adversary's guess matches the hidden world bit
    fn finalize(&self, guess: WorldBit) -> Result<bool, GameError>;

    /// Whether `initialize` has been called
    fn is_active(&self) -> bool;
}
