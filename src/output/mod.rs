use crate::answer::Classification;
use crate::bank::QuestionItem;
use crate::quiz::Results;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    QuestionBegins {
        index: usize,
        total: usize,
        question: QuestionItem,
        classification: Classification,
    },
    AnswerUpdated {
        index: usize,
        answer: Vec<String>,
    },
    Feedback {
        index: usize,
        grade: Option<bool>,
        correct_answer: Vec<String>,
    },
    Results(Results),
    RetryBegins(usize),
    Exited,
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
