//! Session key held by a game.

use super::{generate_exact, RandomSource};
use crate::error::GameError;
use std::fmt;
use zeroize::Zeroizing;

/// Secret key for one session. Wiped on drop, never printed.
pub(crate) struct SecretKey(Zeroizing<Vec<u8>>);

impl SecretKey {
    /// Sample a fresh key of `len` bytes
    pub(crate) fn generate<R: RandomSource + ?Sized>(
        rng: &mut R,
        len: usize,
    ) -> Result<Self, GameError> {
        Ok(Self(Zeroizing::new(generate_exact(rng, len)?)))
    }

    /// Key material, for handing to the encryptor only
    pub(crate) fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<redacted>, {} bytes)", self.0.len())
    }
}
