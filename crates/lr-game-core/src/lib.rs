//! LR Game Core Library
//!
//! This crate provides the left-right indistinguishability experiment and the
//! games derived from it: a challenger holding a secret key and a hidden world
//! bit, an oracle answering encryption queries, and the final verdict on the
//! adversary's guess.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{Ciphertext, Encryptor, RandomSource};
pub use error::GameError;
pub use games::{Game, LrGame, RealOrRandomGame, SharedLrGame, WorldBit};
pub use protocol::{GameConfig, QueryOutcome, Rejection, SessionId, SessionStats};
