//! Game definitions and logic.

mod lr;
mod ror;
mod session;
mod shared;
mod traits;

pub use lr::LrGame;
pub use ror::RealOrRandomGame;
pub use shared::SharedLrGame;
pub use traits::{Game, WorldBit};
