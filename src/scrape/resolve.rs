use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

use crate::bank::Choice;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref LABEL_RUN_REGEX: Regex = Regex::new(r"^[A-Z]+$").unwrap();
    static ref LEADING_LABEL_REGEX: Regex = Regex::new(r"^([A-Z])(?:[.、项\s])?").unwrap();
}

/// Maps label-shaped answer fragments ("B", "ABD", "B.", "true") to the text
/// of the matching options. Anything that doesn't look like a label is kept
/// as is. The result has no empty strings and no duplicates.
pub fn resolve(options: &[Choice], answers: &[String]) -> Vec<String> {
    let texts_by_label: HashMap<&str, &str> = options
        .iter()
        .map(|o| (o.label.trim(), o.text.trim()))
        .collect();

    let mut resolved: Vec<String> = Vec::new();
    for answer in answers {
        let answer = answer.trim();

        if answer.chars().count() > 1 && LABEL_RUN_REGEX.is_match(answer) {
            for letter in answer.chars() {
                let mut buffer = [0; 4];
                let letter: &str = letter.encode_utf8(&mut buffer);
                match texts_by_label.get(letter) {
                    Some(text) => resolved.push(text.to_string()),
                    None => debug!("Dropping label {:?} of {:?}: no such option", letter, answer),
                }
            }
            continue;
        }

        let leading_label = LEADING_LABEL_REGEX
            .captures(answer)
            .and_then(|c| texts_by_label.get(&c[1]));
        if let Some(text) = leading_label {
            resolved.push(text.to_string());
            continue;
        }

        match texts_by_label.get(answer) {
            Some(text) => resolved.push(text.to_string()),
            None => resolved.push(answer.to_owned()),
        }
    }

    resolved
        .into_iter()
        .filter(|a| !a.is_empty())
        .unique()
        .collect()
}
