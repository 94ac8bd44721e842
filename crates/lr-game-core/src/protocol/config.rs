//! Game configuration.

use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// Key length used when none is configured
pub const DEFAULT_KEY_LEN: usize = 16;

/// Construction parameters for a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Length of the session key in bytes
    #[serde(default = "default_key_len")]
    pub key_len: usize,
}

fn default_key_len() -> usize {
    DEFAULT_KEY_LEN
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            key_len: DEFAULT_KEY_LEN,
        }
    }
}

impl GameConfig {
    pub fn with_key_len(key_len: usize) -> Self {
        Self { key_len }
    }

    /// Parse and validate a JSON document such as `{"key_len": 32}`
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.key_len == 0 {
            return Err(GameError::InvalidKeyLength(self.key_len));
        }
        Ok(())
    }
}
