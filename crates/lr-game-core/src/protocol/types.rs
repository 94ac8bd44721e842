//! Protocol types.

use crate::crypto::Ciphertext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique session identifier, fresh on every `initialize`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why an oracle declined to answer.
///
/// Only recorded in [`SessionStats`] and logs; the caller sees a single
/// [`QueryOutcome::Rejected`] for every reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Left and right messages differ in length
    LengthMismatch,
    /// The ordered pair was already queried this session
    RepeatedPair,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::LengthMismatch => "length mismatch",
            Rejection::RepeatedPair => "repeated pair",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Answer from an oracle query
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryOutcome {
    /// The oracle encrypted one of the messages
    Answered(Ciphertext),
    /// The query was not allowed. The key, world bit and pair history are
    /// unchanged; only the [`SessionStats`] rejection counters move.
    Rejected,
}

impl QueryOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, QueryOutcome::Rejected)
    }

    /// The ciphertext, if the query was answered
    pub fn ciphertext(&self) -> Option<&Ciphertext> {
        match self {
            QueryOutcome::Answered(ct) => Some(ct),
            QueryOutcome::Rejected => None,
        }
    }

    pub fn into_ciphertext(self) -> Option<Ciphertext> {
        match self {
            QueryOutcome::Answered(ct) => Some(ct),
            QueryOutcome::Rejected => None,
        }
    }
}

/// Query counters for the current session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Queries that returned a ciphertext
    pub answered: u64,
    /// Queries rejected for mismatched lengths
    pub length_mismatches: u64,
    /// Queries rejected for repeating a pair
    pub repeated_pairs: u64,
}

impl SessionStats {
    pub fn rejected(&self) -> u64 {
        self.length_mismatches + self.repeated_pairs
    }

    pub fn total(&self) -> u64 {
        self.answered + self.rejected()
    }

    pub(crate) fn record_rejection(&mut self, reason: Rejection) {
        match reason {
            Rejection::LengthMismatch => self.length_mismatches += 1,
            Rejection::RepeatedPair => self.repeated_pairs += 1,
        }
    }
}
