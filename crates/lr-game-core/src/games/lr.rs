//! Left-right indistinguishability game.

use super::session::{check_key_len, Session};
use super::traits::{Game, WorldBit};
use crate::crypto::{Ciphertext, Encryptor, RandomSource};
use crate::error::GameError;
use crate::protocol::{GameConfig, QueryOutcome, Rejection, SessionId, SessionStats};
use rand::rngs::OsRng;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, trace};

struct LrSession {
    inner: Session,
    /// Ordered (left, right) pairs already answered
    seen_pairs: HashSet<(Vec<u8>, Vec<u8>)>,
}

impl LrSession {
    fn reject(&mut self, reason: Rejection) -> QueryOutcome {
        self.inner.stats.record_rejection(reason);
        debug!(session = %self.inner.id, %reason, "lr query rejected");
        QueryOutcome::Rejected
    }
}

/// The LR game.
///
/// The challenger holds a fresh key and hidden world bit per session. The
/// oracle [`LrGame::query`] answers with the encryption of the left message
/// in world 0 and of the right message in world 1. Each ordered pair is
/// answered at most once per session and both messages must have equal
/// length; anything else is [`QueryOutcome::Rejected`].
pub struct LrGame<E, R = OsRng> {
    encryptor: E,
    key_len: usize,
    rng: R,
    session: Option<LrSession>,
}

impl<E: Encryptor> LrGame<E, OsRng> {
    /// Create a game drawing keys and bits from the OS random source
    pub fn new(encryptor: E, key_len: usize) -> Result<Self, GameError> {
        Self::with_rng(encryptor, key_len, OsRng)
    }

    pub fn from_config(encryptor: E, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Self::new(encryptor, config.key_len)
    }
}

impl<E: Encryptor, R: RandomSource> LrGame<E, R> {
    /// Create a game with an explicit random source
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

    /// Identifier of the current session, if any
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.inner.id)
    }

    /// Query counters of the current session
    pub fn stats(&self) -> Result<SessionStats, GameError> {
        Ok(self.active()?.inner.stats)
    }

    /// Number of distinct pairs answered this session
    pub fn queried_pairs(&self) -> Result<usize, GameError> {
        Ok(self.active()?.seen_pairs.len())
    }

    /// Start a new session. See [`Game::initialize`].
    pub fn initialize(&mut self, forced_bit: Option<WorldBit>) -> Result<(), GameError> {
        let inner = Session::start(&mut self.rng, self.key_len, forced_bit)?;
        info!(
            session = %inner.id,
            key_len = self.key_len,
            forced = forced_bit.is_some(),
            "lr session started"
        );
        self.session = Some(LrSession {
            inner,
            seen_pairs: HashSet::new(),
        });
        Ok(())
    }

    /// The LR oracle.
    ///
    /// Rejections leave the pair history untouched. Errors only with
    /// [`GameError::NotInitialized`].
    pub fn query(&mut self, left: &[u8], right: &[u8]) -> Result<QueryOutcome, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NotInitialized)?;

        if left.len() != right.len() {
            return Ok(session.reject(Rejection::LengthMismatch));
        }
        if !session.seen_pairs.insert((left.to_vec(), right.to_vec())) {
            return Ok(session.reject(Rejection::RepeatedPair));
        }

        let message = match session.inner.world {
            WorldBit::Zero => left,
            WorldBit::One => right,
        };
        let ciphertext = self.encryptor.encrypt(session.inner.key.expose(), message);

        session.inner.stats.answered += 1;
        trace!(session = %session.inner.id, len = message.len(), "lr query answered");
        Ok(QueryOutcome::Answered(Ciphertext::from_bytes(ciphertext)))
    }

    /// Judge the adversary's guess. See [`Game::finalize`].
    pub fn finalize(&self, guess: WorldBit) -> Result<bool, GameError> {
        let session = self.active()?;
        let correct = session.inner.judge(guess);
        debug!(
            session = %session.inner.id,
            queries = session.inner.stats.total(),
            correct,
            "lr session finalized"
        );
        Ok(correct)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    fn active(&self) -> Result<&LrSession, GameError> {
        self.session.as_ref().ok_or(GameError::NotInitialized)
    }
}

impl<E: Encryptor, R: RandomSource> Game for LrGame<E, R> {
    fn initialize(&mut self, forced_bit: Option<WorldBit>) -> Result<(), GameError> {
        LrGame::initialize(self, forced_bit)
    }

    fn finalize(&self, guess: WorldBit) -> Result<bool, GameError> {
        LrGame::finalize(self, guess)
    }

    fn is_active(&self) -> bool {
        LrGame::is_active(self)
    }
}

impl<E, R> fmt::Debug for LrGame<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LrGame")
            .field("key_len", &self.key_len)
            .field("session", &self.session.as_ref().map(|s| s.inner.id))
            .finish_non_exhaustive()
    }
}
