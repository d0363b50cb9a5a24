// src/utils/text.rs
//! Small text helpers shared by the extractors and the synthesizer.
//!
//! All lengths are counted in `char`s, never bytes, so multi-byte names
//! are never split mid-character.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED_CHARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[^\w\s.,;:!?\-'"()]"#).expect("Failed to compile DISALLOWED_CHARS_RE")
});

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-collapses and strips everything but word characters and basic punctuation.
pub fn clean_text(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let stripped = DISALLOWED_CHARS_RE.replace_all(&collapsed, "");
    collapse_whitespace(&stripped)
}

/// Keeps at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Cuts to `max` characters, backs off to the last space and appends `...`.
/// Text within the limit is returned unchanged.
pub fn truncate_at_word(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    let head = truncate_chars(text, max);
    let cut = match head.rfind(' ') {
        Some(idx) => &head[..idx],
        None => head.as_str(),
    };
    format!("{}...", cut.trim_end())
}

/// Hard cut to `max` characters total, the last three being `...`.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    format!("{}...", truncate_chars(text, max.saturating_sub(3)))
}

/// Upper-cases the first letter of each word and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases the first character and lower-cases the remainder.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
