//! Random-byte source used for keys and world bits.

use crate::error::GameError;
use rand::RngCore;

/// Source of random bytes for a game.
///
/// Every `rand::RngCore` is a source: `OsRng` in production, a seeded
/// `StdRng` for reproducible runs.
pub trait RandomSource {
    /// Fill `dest` with random bytes
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), GameError>;

    /// Generate `n` random bytes
    fn generate(&mut self, n: usize) -> Result<Vec<u8>, GameError> {
        let mut bytes = vec![0u8; n];
        self.fill(&mut bytes)?;
        Ok(bytes)
    }
}

/// `generate` with the returned length checked, since sources may override it
pub(crate) fn generate_exact<R: RandomSource + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Result<Vec<u8>, GameError> {
    let bytes = rng.generate(n)?;
    if bytes.len() != n {
        return Err(GameError::RandomSource(format!(
            "short read: wanted {} bytes, got {}",
            n,
            bytes.len()
        )));
    }
    Ok(bytes)
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), GameError> {
        self.try_fill_bytes(dest)
            .map_err(|e| GameError::RandomSource(e.to_string()))
    }
}
