//! Cryptographic capabilities consumed by the games.
//!
//! This module provides:
//! - Encryptor, the injected encryption capability
//! - RandomSource, the random-byte source for keys and world bits
//! - SecretKey, the session key that never leaves the game
//! - Ciphertext, the oracle's answer

mod ciphertext;
mod encryptor;
mod key;
mod random;

pub use ciphertext::Ciphertext;
pub use encryptor::Encryptor;
pub(crate) use key::SecretKey;
pub(crate) use random::generate_exact;
pub use random::RandomSource;
