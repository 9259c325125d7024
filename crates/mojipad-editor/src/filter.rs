//! Codepoint blacklist applied to text that reaches the compose buffer
//! without going through the picker (terminal keystrokes, paste).
//!
//! This is a blacklist, not an emoji whitelist: ASCII letters and digits
//! and Hangul are stripped, everything else passes, punctuation and other
//! scripts included.

/// True for the scalars the compose field rejects: ASCII digits `0-9`,
/// ASCII letters `A-Za-z`, Hangul syllables (U+AC00..=U+D7A3), and Hangul
/// jamo (U+1100..=U+11FF).
pub fn is_disallowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || ('\u{ac00}'..='\u{d7a3}').contains(&c)
        || ('\u{1100}'..='\u{11ff}').contains(&c)
}

/// Drop every disallowed codepoint, keeping survivors in order.
///
/// Total and pure; applying it twice gives the same result as once.
pub fn filter_to_allowed(text: &str) -> String {
    text.chars().filter(|c| !is_disallowed(*c)).collect()
}
