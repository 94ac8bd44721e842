//! Secret state of one game session.

use super::WorldBit;
use crate::crypto::{RandomSource, SecretKey};
use crate::error::GameError;
use crate::protocol::{SessionId, SessionStats};

/// Key, world bit and counters for one session. Built whole on
/// `initialize` and swapped in, so no half-reset state is ever visible.
pub(crate) struct Session {
    pub(crate) id: SessionId,
    pub(crate) key: SecretKey,
    pub(crate) world: WorldBit,
    pub(crate) stats: SessionStats,
}

impl Session {
    pub(crate) fn start<R: RandomSource + ?Sized>(
        rng: &mut R,
        key_len: usize,
        forced_bit: Option<WorldBit>,
    ) -> Result<Self, GameError> {
        let key = SecretKey::generate(rng, key_len)?;
        let world = match forced_bit {
            Some(bit) => bit,
            None => WorldBit::random(rng)?,
        };
        Ok(Self {
            id: SessionId::new(),
            key,
            world,
            stats: SessionStats::default(),
        })
    }

    pub(crate) fn judge(&self, guess: WorldBit) -> bool {
        guess == self.world
    }
}

/// Shared constructor check for every game
pub(crate) fn check_key_len(key_len: usize) -> Result<(), GameError> {
    if key_len == 0 {
        return Err(GameError::InvalidKeyLength(key_len));
    }
    Ok(())
}
