//! Protocol types and configuration.

mod config;
mod types;

pub use config::GameConfig;
pub use types::{QueryOutcome, Rejection, SessionId, SessionStats};
