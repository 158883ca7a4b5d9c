use itertools::Itertools;

use super::kind::{classify, QuestionKind};
use super::normalize::normalize;
use crate::bank::QuestionItem;

#[cfg(test)]
mod tests;

/// `None` means the question has no known correct answer and cannot be graded.
pub fn grade(kind: QuestionKind, correct: &[String], answer: &[String]) -> Option<bool> {
    if correct.is_empty() {
        return None;
    }
    let is_correct = match kind {
        QuestionKind::Text => match answer.first().map(|a| normalize(a)) {
            Some(guess) if !guess.is_empty() => correct.iter().any(|c| normalize(c) == guess),
            _ => false,
        },
        // Both sides are sorted on their raw text, then compared pairwise after normalizing.
        _ => {
            answer.len() == correct.len()
                && answer
                    .iter()
                    .sorted()
                    .zip(correct.iter().sorted())
                    .all(|(a, c)| normalize(a) == normalize(c))
        }
    };
    Some(is_correct)
}

pub fn check_answer(question: &QuestionItem, answer: &[String]) -> Option<bool> {
    grade(classify(question).kind(), &question.correct_answer, answer)
}
