//! Errors from game operations.

use thiserror::Error;

/// Hard failures of a game.
///
/// Adversary mistakes (mismatched lengths, repeated pairs) are not errors;
/// they surface as [`crate::QueryOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Game not initialized: call initialize() before querying or finalizing")]
    NotInitialized,

    #[error("Invalid key length: {0} (must be positive)")]
    InvalidKeyLength(usize),

    #[error("Invalid world bit: {0} (must be 0 or 1)")]
    InvalidBit(u8),

    #[error("Random source failed: {0}")]
    RandomSource(String),

    #[error("Game state poisoned by a panicking holder")]
    Poisoned,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
