//! LR Game Demo
//!
//! Plays scripted LR sessions against a stub cipher and logs every step.
//!
//! Environment:
//! - `LR_KEY_LEN`: session key length in bytes (default 16)
//! - `LR_CONFIG`: JSON game config, e.g. `{"key_len": 32}`; overrides `LR_KEY_LEN`
//! - `RUST_LOG`: log filter (default `info`)

use lr_game_core::{GameConfig, GameError, LrGame, QueryOutcome, WorldBit};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Identity "cipher": the ciphertext is the message
fn identity(_key: &[u8], msg: &[u8]) -> Vec<u8> {
    msg.to_vec()
}

fn load_config() -> Result<GameConfig, GameError> {
    if let Ok(json) = std::env::var("LR_CONFIG") {
        return GameConfig::from_json(&json);
    }

    let key_len: usize = std::env::var("LR_KEY_LEN")
        .unwrap_or_else(|_| "16".to_string())
        .parse()
        .unwrap_or(16);
    let config = GameConfig::with_key_len(key_len);
    config.validate()?;
    Ok(config)
}

fn describe(outcome: &QueryOutcome) -> String {
    match outcome {
        QueryOutcome::Answered(ct) => format!("ciphertext {}", ct),
        QueryOutcome::Rejected => "rejected".to_string(),
    }
}

fn main() -> Result<(), GameError> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = load_config()?;
    let mut game = LrGame::from_config(identity, &config)?;

    // Session 1: world 0, same pair twice, then a mismatched pair
    game.initialize(Some(WorldBit::Zero))?;
    let script: [(&[u8], &[u8]); 3] = [(b"ab", b"cd"), (b"ab", b"cd"), (b"abc", b"d")];
    for (left, right) in script {
        let outcome = game.query(left, right)?;
        info!(
            left = %hex::encode(left),
            right = %hex::encode(right),
            "query -> {}",
            describe(&outcome)
        );
    }
    info!(
        guess_0 = game.finalize(WorldBit::Zero)?,
        guess_1 = game.finalize(WorldBit::One)?,
        "session 1 verdicts"
    );
    info!(stats = ?game.stats()?, "session 1 stats");

    // Session 2: fresh history, the repeated pair is accepted again
    game.initialize(None)?;
    let outcome = game.query(b"ab", b"cd")?;
    // Against the identity cipher, seeing the right message means world 1
    let saw_right = outcome
        .ciphertext()
        .map(|ct| ct.as_bytes() == b"cd")
        .unwrap_or(false);
    let guess = WorldBit::from(saw_right);
    info!(
        query = %describe(&outcome),
        guess = %guess,
        correct = game.finalize(guess)?,
        "session 2"
    );

    Ok(())
}
