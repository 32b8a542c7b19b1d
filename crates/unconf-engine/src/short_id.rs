//! Six-character opaque event identifiers.
//!
//! The alphabet leaves out characters that are easy to misread when an id is
//! typed from a projector or a printed QR card (`0`/`O`, `1`/`l`/`I`, `i`, `o`).

use std::fmt::Display;
use std::future::Future;

use rand::{thread_rng, Rng};

use crate::error::{EngineError, Result};

pub const SHORT_ID_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789";
pub const SHORT_ID_LEN: usize = 6;

pub fn generate_short_id() -> String {
    generate_short_id_with(&mut thread_rng())
}

pub fn generate_short_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SHORT_ID_LEN)
        .map(|_| char::from(SHORT_ID_ALPHABET[rng.gen_range(0..SHORT_ID_ALPHABET.len())]))
        .collect()
}

/// Generate a short id that `check_exists` reports as unused.
///
/// Unlike slugs there is no fallback: a collision and a failed lookup each use
/// up one attempt, and running out of attempts is an error.
pub async fn generate_unique_short_id<F, Fut, E>(
    mut check_exists: F,
    max_attempts: usize,
) -> Result<String>
where
    F: FnMut(&str) -> Fut,
    Fut: Future<Output = std::result::Result<bool, E>>,
    E: Display,
{
    for attempt in 1..=max_attempts {
        let short_id = generate_short_id();
        match check_exists(&short_id).await {
            Ok(false) => return Ok(short_id),
            Ok(true) => {
                tracing::warn!(%short_id, attempt, "short id collision detected, retrying");
            }
            Err(err) => {
                tracing::error!(
                    %short_id,
                    attempt,
                    error = %err,
                    "error checking short id uniqueness"
                );
            }
        }
    }

    Err(EngineError::ShortIdExhausted {
        attempts: max_attempts,
    })
}
