//! Real-or-random game.

use super::session::{check_key_len, Session};
use super::traits::{Game, WorldBit};
use crate::crypto::{generate_exact, Ciphertext, Encryptor, RandomSource};
use crate::error::GameError;
use crate::protocol::{GameConfig, SessionId, SessionStats};
use rand::rngs::OsRng;
use std::fmt;
use tracing::{debug, info, trace};

/// Real-or-random game built on the same session lifecycle as the LR game.
///
/// World 1 is real: the oracle encrypts the submitted message. World 0 is
/// random: it encrypts fresh random bytes of the same length instead.
pub struct RealOrRandomGame<E, R = OsRng> {
    encryptor: E,
    key_len: usize,
    rng: R,
    session: Option<Session>,
}

impl<E: Encryptor> RealOrRandomGame<E, OsRng> {
    pub fn new(encryptor: E, key_len: usize) -> Result<Self, GameError> {
        Self::with_rng(encryptor, key_len, OsRng)
    }

    pub fn from_config(encryptor: E, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Self::new(encryptor, config.key_len)
    }
}

impl<E: Encryptor, R: RandomSource> RealOrRandomGame<E, R> {
    pub fn with_rng(encryptor: E, key_len: usize, rng: R) -> Result<Self, GameError> {
        check_key_len(key_len)?;
        Ok(Self {
            encryptor,
            key_len,
            rng,
            session: None,
        })
    }

    pub fn key_len(&self) -> usize {
        self.key_len
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn stats(&self) -> Result<SessionStats, GameError> {
        Ok(self.active()?.stats)
    }

    pub fn initialize(&mut self, forced_bit: Option<WorldBit>) -> Result<(), GameError> {
        let session = Session::start(&mut self.rng, self.key_len, forced_bit)?;
        info!(
            session = %session.id,
            key_len = self.key_len,
            forced = forced_bit.is_some(),
            "ror session started"
        );
        self.session = Some(session);
        Ok(())
    }

    /// Encrypt `message` in the real world, or a random message of equal
    /// length in the random world
    pub fn query(&mut self, message: &[u8]) -> Result<Ciphertext, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NotInitialized)?;

        let ciphertext = match session.world {
            WorldBit::One => self.encryptor.encrypt(session.key.expose(), message),
            WorldBit::Zero => {
                let substitute = generate_exact(&mut self.rng, message.len())?;
                self.encryptor.encrypt(session.key.expose(), &substitute)
            }
        };

        session.stats.answered += 1;
        trace!(session = %session.id, len = message.len(), "ror query answered");
        Ok(Ciphertext::from_bytes(ciphertext))
    }

    pub fn finalize(&self, guess: WorldBit) -> Result<bool, GameError> {
        let session = self.active()?;
        let correct = session.judge(guess);
        debug!(
            session = %session.id,
            queries = session.stats.total(),
            correct,
            "ror session finalized"
        );
        Ok(correct)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    fn active(&self) -> Result<&Session, GameError> {
        self.session.as_ref().ok_or(GameError::NotInitialized)
    }
}

impl<E: Encryptor, R: RandomSource> Game for RealOrRandomGame<E, R> {
    fn initialize(&mut self, forced_bit: Option<WorldBit>) -> Result<(), GameError> {
        RealOrRandomGame::initialize(self, forced_bit)
    }

    fn finalize(&self, guess: WorldBit) -> Result<bool, GameError> {
        RealOrRandomGame::finalize(self, guess)
    }

    fn is_active(&self) -> bool {
        RealOrRandomGame::is_active(self)
    }
}

impl<E, R> fmt::Debug for RealOrRandomGame<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealOrRandomGame")
            .field("key_len", &self.key_len)
            .field("session", &self.session.as_ref().map(|s| s.id))
            .finish_non_exhaustive()
    }
}
