//! Encryption capability injected into a game.

/// An opaque encryption scheme under test.
///
/// The game hands it the session key and one message and treats the result
/// as the ciphertext. Randomized schemes are allowed; any randomness is the
/// implementor's concern.
///
/// Any `Fn(&[u8], &[u8]) -> Vec<u8>` is an encryptor, so a closure plugs in
/// directly:
///
/// ```
/// use lr_game_core::LrGame;
///
/// let xor = |key: &[u8], msg: &[u8]| -> Vec<u8> {
///     msg.iter().zip(key.iter().cycle()).map(|(m, k)| m ^ k).collect()
/// };
/// let game = LrGame::new(xor, 16).unwrap();
/// assert_eq!(game.key_len(), 16);
/// ```
pub trait Encryptor {
    /// Encrypt `message` under `key`
    fn encrypt(&self, key: &[u8], message: &[u8]) -> Vec<u8>;
}

impl<F> Encryptor for F
where
    F: Fn(&[u8], &[u8]) -> Vec<u8>,
{
    fn encrypt(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        self(key, message)
    }
}
