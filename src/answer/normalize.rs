use lazy_static::lazy_static;
use regex::Regex;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").into()
}

fn fold_width(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - FULL_WIDTH_OFFSET).unwrap_or(c),
        _ => c,
    }
}

fn fold_punctuation(c: char) -> char {
    match c {
        '。' => '.',
        '，' => ',',
        '：' => ':',
        '？' => '?',
        '！' => '!',
        '（' => '(',
        '）' => ')',
        _ => c,
    }
}

/// Canonical comparable form of an answer: case, character width and
/// whitespace runs are folded away. Nothing else is.
pub fn normalize(answer: &str) -> String {
    let folded: String = answer
        .trim()
        .to_lowercase()
        .chars()
        .map(fold_width)
        .map(fold_punctuation)
        .collect();
    collapse_whitespace(&folded)
}
