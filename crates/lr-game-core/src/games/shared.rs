//! LR game shared across threads.

use super::lr::LrGame;
use super::traits::WorldBit;
use crate::crypto::{Encryptor, RandomSource};
use crate::error::GameError;
use crate::protocol::{QueryOutcome, SessionId, SessionStats};
use rand::rngs::OsRng;
use std::sync::{Arc, Mutex, MutexGuard};

/// Thread-safe handle to an [`LrGame`].
///
/// Every operation holds the lock for its whole duration, so the pair
/// check-and-insert of concurrent queries is atomic: two identical pairs
/// racing each other yield exactly one answer.
pub struct SharedLrGame<E, R = OsRng> {
    inner: Arc<Mutex<LrGame<E, R>>>,
}

impl<E, R> Clone for SharedLrGame<E, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Encryptor, R: RandomSource> SharedLrGame<E, R> {
    pub fn new(game: LrGame<E, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    pub fn initialize(&self, forced_bit: Option<WorldBit>) -> Result<(), GameError> {
        self.lock()?.initialize(forced_bit)
    }

    pub fn query(&self, left: &[u8], right: &[u8]) -> Result<QueryOutcome, GameError> {
        self.lock()?.query(left, right)
    }

    pub fn finalize(&self, guess: WorldBit) -> Result<bool, GameError> {
        self.lock()?.finalize(guess)
    }

    pub fn stats(&self) -> Result<SessionStats, GameError> {
        self.lock()?.stats()
    }

    pub fn session_id(&self) -> Result<Option<SessionId>, GameError> {
        Ok(self.lock()?.session_id())
    }

    fn lock(&self) -> Result<MutexGuard<'_, LrGame<E, R>>, GameError> {
        self.inner.lock().map_err(|_| GameError::Poisoned)
    }
}

impl<E: Encryptor, R: RandomSource> From<LrGame<E, R>> for SharedLrGame<E, R> {
    fn from(game: LrGame<E, R>) -> Self {
        Self::new(game)
    }
}
