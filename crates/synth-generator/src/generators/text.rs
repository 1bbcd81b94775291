//! Text value generators.

use rand::distributions::Alphanumeric;
use rand::Rng;
use synth_core::FieldValue;

/// Length of the stand-in string emitted for pattern-hinted fields.
pub const PATTERN_HINT_LEN: usize = 20;

/// Maximum length of free-form generated text.
pub const TEXT_MAX_CHARS: usize = 50;

/// Generate a stand-in value for a pattern-hinted string field.
///
/// The pattern is a non-binding hint: the output is an arbitrary
/// alphanumeric string and is NOT guaranteed to match the declared pattern.
pub fn generate_pattern_hint<R: Rng + ?Sized>(rng: &mut R) -> FieldValue {
    let s: String = (0..PATTERN_HINT_LEN)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect();
    FieldValue::String(s)
}

/// Truncate a string to at most `max_chars` characters.
pub fn truncate_chars(s: String, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s
    } else {
        s.chars().take(max_chars).collect()
    }
}
