use lazy_static::lazy_static;
use regex::Regex;
use scraper::Html;

use crate::answer::normalize::collapse_whitespace;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref STANDARD_LABEL_REGEX: Regex =
        Regex::new(r"(?i)(?:^|\s)(?:正确答案|标准答案|参考答案|Correct\s*Answer)\s*[:：]").unwrap();
    static ref MY_ANSWER_LABEL_REGEX: Regex =
        Regex::new(r"(?i)(?:^|\s)(?:我的答案|My\s*Answer)\s*[:：]").unwrap();
    static ref BLANK_ORDINAL_REGEX: Regex = Regex::new(r"^第?\s*\d+\s*空[:：]?\s*").unwrap();
    static ref LEADING_NUMBER_REGEX: Regex = Regex::new(r"^[（(]?\d+[)）]\s*").unwrap();
    static ref STANDARD_CHUNK_REGEX: Regex =
        Regex::new(r"(?i)(?:正确答案|标准答案|参考答案|Correct\s*Answer)\s*[:：]\s*").unwrap();
    static ref MY_ANSWER_CHUNK_REGEX: Regex =
        Regex::new(r"(?i)(?:我的答案|My\s*Answer)\s*[:：]\s*").unwrap();
    static ref STANDARD_TERMINATOR_REGEX: Regex =
        Regex::new(r"(?i)\s+(?:正确答案|标准答案|参考答案|Correct\s*Answer)\s*[:：]").unwrap();
    static ref MY_ANSWER_TERMINATOR_REGEX: Regex =
        Regex::new(r"(?i)\s+(?:我的答案|My\s*Answer)\s*[:：]").unwrap();
}

pub fn normalize_ws(text: &str) -> String {
    collapse_whitespace(text).trim().to_owned()
}

fn sanitize_once(text: &str) -> String {
    let text = normalize_ws(text);
    let text = STANDARD_LABEL_REGEX.replace_all(&text, " ");
    let text = MY_ANSWER_LABEL_REGEX.replace_all(&text, " ");
    let text = BLANK_ORDINAL_REGEX.replace(&text, "");
    let text = LEADING_NUMBER_REGEX.replace(&text, "");
    normalize_ws(&text)
}

/// Strips answer labels ("正确答案：", "My Answer:") and leading blank markers
/// ("第2空：", "(3)") from a scraped answer. Runs until the text stops
/// changing, so markers uncovered by an earlier strip are removed as well.
pub fn sanitize(raw: &str) -> String {
    let mut current = sanitize_once(raw);
    loop {
        let next = sanitize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn extract_chunk(text: &str, label: &Regex, terminator: &Regex) -> Option<String> {
    let text = normalize_ws(text);
    for label_match in label.find_iter(&text) {
        let rest = &text[label_match.end()..];
        if rest.is_empty() {
            continue;
        }
        let chunk = match terminator.find(rest) {
            Some(t) => &rest[..t.start()],
            None => rest,
        };
        let chunk = normalize_ws(chunk);
        if !chunk.is_empty() {
            return Some(chunk);
        }
    }
    None
}

/// The user's own answer out of a block such as "我的答案：B 正确答案：A".
pub fn extract_my_answer(text: &str) -> Option<String> {
    extract_chunk(text, &MY_ANSWER_CHUNK_REGEX, &STANDARD_TERMINATOR_REGEX)
}

/// The reference answer out of a block such as "我的答案：B 正确答案：A".
pub fn extract_standard_answer(text: &str) -> Option<String> {
    extract_chunk(text, &STANDARD_CHUNK_REGEX, &MY_ANSWER_TERMINATOR_REGEX)
}

pub fn html_to_text(fragment: &str) -> String {
    let parsed = Html::parse_fragment(fragment);
    let text = normalize_ws(&parsed.root_element().text().collect::<String>());
    if text.is_empty() {
        normalize_ws(fragment)
    } else {
        text
    }
}
