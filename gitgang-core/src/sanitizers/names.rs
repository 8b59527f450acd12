//! names.rs - Display name capitalization.
//!
//! Title-cases each space-separated word while keeping the usual shapes of
//! compound names intact: `Mary-Jane`, `O'Brien`, `McDonald`, `MacLeod`.
//! Works on `char`s, never byte offsets, so non-ASCII names cannot panic.
//!
//! License: MIT OR APACHE 2.0

/// Uppercases the first character and lowercases the rest. Empty input is returned unchanged.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn capitalize_segments(word: &str, separator: char) -> String {
    word.split(separator)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

/// Capitalizes `rest` after a fixed clan prefix such as `Mc` or `Mac`.
fn with_prefix(prefix: &str, word: &str) -> String {
    let rest: String = word.chars().skip(prefix.chars().count()).collect();
    format!("{}{}", prefix, capitalize(&rest))
}

fn capitalize_word(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if word.contains('-') {
        return capitalize_segments(word, '-');
    }
    if word.contains('\'') {
        return capitalize_segments(word, '\'');
    }

    let lower = word.to_lowercase();
    let len = word.chars().count();
    if lower.starts_with("mc") && len > 2 {
        return with_prefix("Mc", word);
    }
    if lower.starts_with("mac") && len > 3 {
        return with_prefix("Mac", word);
    }
    capitalize(word)
}

/// Title-cases a display name.
///
/// Words are split on single spaces, so runs of spaces survive untouched.
///
/// ```
/// use gitgang_core::capitalize_words;
///
/// assert_eq!(capitalize_words("o'brien"), "O'Brien");
/// assert_eq!(capitalize_words("mary-jane mcdonald"), "Mary-Jane McDonald");
/// ```
pub fn capitalize_words(name: &str) -> String {
    name.split(' ').map(capitalize_word).collect::<Vec<_>>().join(" ")
}
