//! Integration tests for complete game sessions.
//!
//! These tests drive the games the way a world simulator would: initialize,
//! query, finalize, and start over.

use lr_game_core::{
    Game, GameConfig, GameError, LrGame, QueryOutcome, RandomSource, RealOrRandomGame,
    SharedLrGame, WorldBit,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn identity(_key: &[u8], msg: &[u8]) -> Vec<u8> {
    msg.to_vec()
}

fn xor(key: &[u8], msg: &[u8]) -> Vec<u8> {
    msg.iter().zip(key.iter().cycle()).map(|(m, k)| m ^ k).collect()
}

/// Random source that runs dry after `budget` bytes
struct FlakyRng {
    budget: usize,
}

impl RngCore for FlakyRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0x5a);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        if dest.len() > self.budget {
            return Err(rand::Error::new("entropy unavailable"));
        }
        self.budget -= dest.len();
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Source whose `generate` hands back nothing, whatever was asked for
struct EmptySource;

impl RandomSource for EmptySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), GameError> {
        dest.fill(0x5a);
        Ok(())
    }

    fn generate(&mut self, _n: usize) -> Result<Vec<u8>, GameError> {
        Ok(Vec::new())
    }
}

/// The documented walkthrough: world 0, identity cipher
#[test]
fn test_lr_walkthrough() {
    let mut game = LrGame::new(identity, 16).unwrap();
    game.initialize(Some(WorldBit::Zero)).unwrap();

    assert_eq!(
        game.query(b"ab", b"cd").unwrap(),
        QueryOutcome::Answered(b"ab".to_vec().into())
    );
    assert_eq!(game.query(b"ab", b"cd").unwrap(), QueryOutcome::Rejected);
    assert!(game.finalize(WorldBit::Zero).unwrap());
    assert!(!game.finalize(WorldBit::One).unwrap());
}

/// Comparing the ciphertext to the right message wins every time against the
/// identity cipher
#[test]
fn test_trivial_distinguisher_always_wins_against_identity() {
    let mut game = LrGame::new(identity, 16).unwrap();

    for _ in 0..32 {
        game.initialize(None).unwrap();
        let ct = game
            .query(b"\x00\x00", b"\xff\xff")
            .unwrap()
            .into_ciphertext()
            .unwrap();
        let guess = WorldBit::from(ct.as_bytes() == b"\xff\xff");
        assert!(game.finalize(guess).unwrap());
    }
}

/// Same key within a session, fresh key across sessions
#[test]
fn test_session_isolation_with_xor() {
    let mut game = LrGame::with_rng(xor, 16, StdRng::seed_from_u64(2024)).unwrap();
    let zeros = [0u8; 16];
    let ones = [1u8; 16];

    game.initialize(Some(WorldBit::Zero)).unwrap();
    let first_session = game.session_id().unwrap();
    // XOR with an all-zero message reveals the key stream to the test
    let key_a = game.query(&zeros, &ones).unwrap().into_ciphertext().unwrap();
    assert!(game.query(&zeros, &ones).unwrap().is_rejected());
    let key_a_again = game.query(&ones, &zeros).unwrap().into_ciphertext().unwrap();
    let expected: Vec<u8> = key_a.as_bytes().iter().map(|b| b ^ 1).collect();
    assert_eq!(key_a_again.as_bytes(), &expected[..]);

    game.initialize(Some(WorldBit::Zero)).unwrap();
    assert_ne!(game.session_id().unwrap(), first_session);
    let key_b = game.query(&zeros, &ones).unwrap().into_ciphertext().unwrap();
    assert_ne!(key_a, key_b);
}

#[test]
fn test_finalize_matches_forced_bit_in_both_worlds() {
    let mut game = LrGame::new(xor, 8).unwrap();
    for bit in [WorldBit::Zero, WorldBit::One] {
        game.initialize(Some(bit)).unwrap();
        assert!(game.finalize(bit).unwrap());
        assert!(!game.finalize(bit.flip()).unwrap());
    }
}

#[test]
fn test_random_bits_cover_both_worlds() {
    let mut game = LrGame::with_rng(identity, 4, StdRng::seed_from_u64(11)).unwrap();
    let mut wins_guessing_zero = 0;
    for _ in 0..200 {
        game.initialize(None).unwrap();
        if game.finalize(WorldBit::Zero).unwrap() {
            wins_guessing_zero += 1;
        }
    }
    assert!(wins_guessing_zero > 50 && wins_guessing_zero < 150);
}

#[test]
fn test_broken_random_source_surfaces_error() {
    let mut game = LrGame::with_rng(identity, 16, FlakyRng { budget: 0 }).unwrap();
    assert!(matches!(
        game.initialize(Some(WorldBit::Zero)),
        Err(GameError::RandomSource(_))
    ));
    assert!(!game.is_active());
}

#[test]
fn test_short_random_source_is_an_error_not_a_panic() {
    let mut game = LrGame::with_rng(identity, 16, EmptySource).unwrap();

    assert!(matches!(
        game.initialize(None),
        Err(GameError::RandomSource(msg)) if msg.starts_with("short read")
    ));
    assert!(matches!(
        game.initialize(Some(WorldBit::Zero)),
        Err(GameError::RandomSource(_))
    ));
    assert!(!game.is_active());
    assert!(matches!(
        game.query(b"ab", b"cd"),
        Err(GameError::NotInitialized)
    ));
}

#[test]
fn test_failed_restart_keeps_previous_session() {
    // Enough entropy for exactly one forced-bit session
    let mut game = LrGame::with_rng(identity, 16, FlakyRng { budget: 16 }).unwrap();
    game.initialize(Some(WorldBit::One)).unwrap();
    game.query(b"ab", b"cd").unwrap();
    let id = game.session_id();

    assert!(game.initialize(None).is_err());

    assert_eq!(game.session_id(), id);
    assert_eq!(game.queried_pairs().unwrap(), 1);
    assert!(game.finalize(WorldBit::One).unwrap());
}

#[test]
fn test_config_driven_construction() {
    let config = GameConfig::from_json(r#"{"key_len": 24}"#).unwrap();
    let game = LrGame::from_config(identity, &config).unwrap();
    assert_eq!(game.key_len(), 24);

    let bad = GameConfig::with_key_len(0);
    assert!(matches!(
        RealOrRandomGame::from_config(identity, &bad),
        Err(GameError::InvalidKeyLength(0))
    ));
}

#[test]
fn test_games_behind_trait_objects() {
    let mut games: Vec<Box<dyn Game>> = vec![
        Box::new(LrGame::new(identity, 8).unwrap()),
        Box::new(RealOrRandomGame::new(identity, 8).unwrap()),
    ];
    for game in games.iter_mut() {
        assert!(!game.is_active());
        game.initialize(Some(WorldBit::One)).unwrap();
        assert!(game.finalize(WorldBit::One).unwrap());
    }
}

#[test]
fn test_real_or_random_against_identity() {
    let mut game = RealOrRandomGame::new(identity, 16).unwrap();
    let msg = [7u8; 64];

    game.initialize(Some(WorldBit::One)).unwrap();
    assert_eq!(game.query(&msg).unwrap().as_bytes(), &msg[..]);

    game.initialize(Some(WorldBit::Zero)).unwrap();
    let ct = game.query(&msg).unwrap();
    assert_eq!(ct.len(), 64);
    assert_ne!(ct.as_bytes(), &msg[..]);
}

#[test]
fn test_shared_game_restart() {
    let shared = SharedLrGame::new(LrGame::new(identity, 16).unwrap());
    shared.initialize(Some(WorldBit::One)).unwrap();
    assert_eq!(
        shared.query(b"ab", b"cd").unwrap().into_ciphertext().unwrap().as_bytes(),
        b"cd"
    );

    shared.initialize(Some(WorldBit::One)).unwrap();
    assert!(!shared.query(b"ab", b"cd").unwrap().is_rejected());
    assert_eq!(shared.stats().unwrap().answered, 1);
}
