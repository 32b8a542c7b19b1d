//! Memorable `adjective-noun` event slugs.
//!
//! Slugs are drawn uniformly from two fixed word lists (2,500 combinations).
//! Generation is not cryptographically random and collisions are expected:
//! [`generate_unique_slug`] probes a caller-supplied existence check and, once
//! its attempt budget is spent, falls back to a numeric suffix that only makes
//! a collision less likely.

use std::future::Future;

use rand::{thread_rng, Rng};

/// Attempts made by [`generate_unique_slug`] callers that have no budget of their own.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

pub const MIN_SLUG_LEN: usize = 3;
pub const MAX_SLUG_LEN: usize = 50;

pub const ADJECTIVES: [&str; 50] = [
    "amazing", "awesome", "brilliant", "creative", "dynamic", "epic", "fantastic", "great",
    "incredible", "innovative", "inspiring", "legendary", "magnificent", "outstanding", "perfect",
    "remarkable", "spectacular", "stellar", "superb", "ultimate", "wonderful", "bright", "bold",
    "clever", "fast", "fresh", "global", "modern", "next", "open", "quick", "smart", "strong",
    "swift", "tech", "future", "digital", "virtual", "live", "local", "mega", "micro", "blue",
    "green", "red", "golden", "silver", "crystal", "neon", "cosmic",
];

pub const NOUNS: [&str; 50] = [
    "summit", "conference", "meetup", "workshop", "forum", "expo", "fest", "gathering",
    "symposium", "congress", "convention", "session", "bootcamp", "hackathon", "sprint", "jam",
    "lab", "hub", "space", "zone", "arena", "valley", "mountain", "river", "ocean", "forest",
    "garden", "bridge", "tower", "castle", "palace", "lighthouse", "compass", "rocket", "star",
    "wave", "storm", "thunder", "lightning", "rainbow", "sunrise", "sunset", "code", "data",
    "cloud", "edge", "core", "mesh", "grid", "flow",
];

/// Generate a slug such as `"amazing-summit"` using the thread-local generator.
pub fn generate_slug() -> String {
    generate_slug_with(&mut thread_rng())
}

/// Generate a slug from the given random source.
pub fn generate_slug_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("{adjective}-{noun}")
}

/// Generate a slug that `check_exists` reports as unused.
///
/// Candidates are checked one at a time, up to `max_attempts` times. If every
/// candidate is taken, a fresh slug with a `-N` suffix (`N` in `0..1000`) is
/// returned without being checked.
///
/// # Errors
///
/// The first error returned by `check_exists` is returned unchanged; a failed
/// lookup is never treated as "unused".
pub async fn generate_unique_slug<F, Fut, E>(
    mut check_exists: F,
    max_attempts: usize,
) -> Result<String, E>
where
    F: FnMut(&str) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    for attempt in 1..=max_attempts {
        let slug = generate_slug();
        if !check_exists(&slug).await? {
            return Ok(slug);
        }
        tracing::debug!(%slug, attempt, "slug collision, retrying");
    }

    let mut rng = thread_rng();
    let base = generate_slug_with(&mut rng);
    let slug = format!("{base}-{}", rng.gen_range(0..1000));
    tracing::warn!(%slug, max_attempts, "no unused slug found, falling back to numeric suffix");
    Ok(slug)
}

/// True if `slug` is 3–50 characters of lowercase ASCII letters, digits and hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    (MIN_SLUG_LEN..=MAX_SLUG_LEN).contains(&slug.len())
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Turn free text into slug shape.
///
/// Lowercases, drops everything but ASCII letters, digits, whitespace and
/// hyphens, turns whitespace and hyphen runs into a single hyphen, trims
/// hyphens at both ends and truncates to 50 characters. The result may be
/// shorter than 3 characters (or empty); check it with [`is_valid_slug`].
pub fn sanitize_slug(input: &str) -> String {
    let mut collapsed = String::with_capacity(input.len());
    for c in input.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            collapsed.push(c);
        } else if (c == '-' || is_separator_space(c)) && !collapsed.ends_with('-') {
            collapsed.push('-');
        }
    }

    let trimmed = collapsed.strip_prefix('-').unwrap_or(&collapsed);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);

    // Only ASCII remains, so byte truncation is char-safe.
    trimmed[..trimmed.len().min(MAX_SLUG_LEN)].to_string()
}

/// Whitespace as web form input treats it: the byte-order mark counts, NEL does not.
fn is_separator_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_lists_are_slug_safe() {
        for word in ADJECTIVES.iter().chain(NOUNS.iter()) {
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "{word}");
        }
    }

    #[test]
    fn longest_combination_is_a_valid_slug() {
        let adjective = ADJECTIVES.iter().max_by_key(|w| w.len()).unwrap();
        let noun = NOUNS.iter().max_by_key(|w| w.len()).unwrap();
        assert!(is_valid_slug(&format!("{adjective}-{noun}")));
    }
}
