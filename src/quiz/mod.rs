use anyhow::*;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use tracing::debug;

use crate::answer::{classify, grade, Classification, QuestionKind};
use crate::bank::QuestionItem;
use crate::output::{Message, QuizOutput};

pub use self::settings::Settings;

mod settings;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Answering(usize),
    Revealed(usize),
    Finished,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Results {
    pub correct: usize,
    pub wrong: usize,
    pub ungraded: usize,
}

impl Results {
    pub fn total(&self) -> usize {
        self.correct + self.wrong + self.ungraded
    }

    pub fn is_perfect(&self) -> bool {
        self.wrong == 0
    }
}

#[derive(Clone, Debug)]
struct ActiveQuestion {
    question: QuestionItem,
    classification: Classification,
}

impl ActiveQuestion {
    fn new(question: QuestionItem) -> Self {
        let classification = classify(&question);
        ActiveQuestion {
            question,
            classification,
        }
    }

    fn kind(&self) -> QuestionKind {
        self.classification.kind()
    }
}

/// One playthrough over a fixed snapshot of questions. Answers and reveal
/// flags are keyed by position in that snapshot.
pub struct QuizSession<O: QuizOutput> {
    questions: Vec<ActiveQuestion>,
    answers: HashMap<usize, Vec<String>>,
    revealed: HashMap<usize, bool>,
    index: usize,
    finished: bool,
    output: O,
}

impl<O: QuizOutput> QuizSession<O> {
    pub fn new(questions: Vec<QuestionItem>, settings: &Settings, output: O) -> Result<Self> {
        if questions.is_empty() {
            return Err(anyhow!("There are no questions to practice"));
        }
        let mut questions: Vec<ActiveQuestion> =
            questions.into_iter().map(ActiveQuestion::new).collect();
        if settings.shuffle {
            questions.shuffle(&mut rand::thread_rng());
        }
        let session = QuizSession {
            questions,
            answers: HashMap::new(),
            revealed: HashMap::new(),
            index: 0,
            finished: false,
            output,
        };
        session.announce_question();
        Ok(session)
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.is_revealed(self.index) {
            Phase::Revealed(self.index)
        } else {
            Phase::Answering(self.index)
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&QuestionItem> {
        self.active().map(|a| &a.question)
    }

    pub fn current_classification(&self) -> Option<Classification> {
        self.active().map(|a| a.classification)
    }

    pub fn current_kind(&self) -> Option<QuestionKind> {
        self.active().map(ActiveQuestion::kind)
    }

    pub fn answer(&self, index: usize) -> &[String] {
        self.answers.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(&index).copied().unwrap_or(false)
    }

    fn active(&self) -> Option<&ActiveQuestion> {
        if self.finished {
            None
        } else {
            self.questions.get(self.index)
        }
    }

    fn active_or_err(&self) -> Result<&ActiveQuestion> {
        self.active().ok_or_else(|| anyhow!("The quiz is over"))
    }

    fn grade_at(&self, index: usize) -> Option<bool> {
        let active = &self.questions[index];
        grade(
            active.kind(),
            &active.question.correct_answer,
            self.answer(index),
        )
    }

    fn announce_question(&self) {
        let active = &self.questions[self.index];
        self.output.say(&Message::QuestionBegins {
            index: self.index,
            total: self.questions.len(),
            question: active.question.clone(),
            classification: active.classification,
        });
        if !self.answer(self.index).is_empty() {
            self.announce_answer();
        }
        if self.is_revealed(self.index) {
            self.announce_feedback();
        }
    }

    fn announce_answer(&self) {
        self.output.say(&Message::AnswerUpdated {
            index: self.index,
            answer: self.answer(self.index).to_vec(),
        });
    }

    fn announce_feedback(&self) {
        self.output.say(&Message::Feedback {
            index: self.index,
            grade: self.grade_at(self.index),
            correct_answer: self.questions[self.index].question.correct_answer.clone(),
        });
    }

    fn reveal(&mut self) {
        self.revealed.insert(self.index, true);
        self.announce_feedback();
    }

    /// Picks an option. Multi-choice questions toggle membership; other choice
    /// questions replace the answer and reveal immediately.
    pub fn select(&mut self, value: &str) -> Result<()> {
        let kind = self.active_or_err()?.kind();
        if !kind.is_choice() {
            return Err(anyhow!("This question takes a typed answer"));
        }
        if self.is_revealed(self.index) {
            debug!("Ignoring selection on revealed question {}", self.index);
            return Ok(());
        }

        let answer = self.answers.entry(self.index).or_default();
        if kind == QuestionKind::MultiChoice {
            match answer.iter().position(|a| a == value) {
                Some(position) => {
                    answer.remove(position);
                }
                None => answer.push(value.to_owned()),
            }
        } else {
            *answer = vec![value.to_owned()];
        }
        self.announce_answer();

        if kind.auto_reveals() {
            self.reveal();
        }
        Ok(())
    }

    pub fn set_text(&mut self, value: &str) -> Result<()> {
        if self.active_or_err()?.kind() != QuestionKind::Text {
            return Err(anyhow!("This question is answered by picking options"));
        }
        if self.is_revealed(self.index) {
            debug!("Ignoring text on revealed question {}", self.index);
            return Ok(());
        }
        self.answers.insert(self.index, vec![value.to_owned()]);
        self.announce_answer();
        Ok(())
    }

    /// Reveals the current text question if something was typed. Returns
    /// whether it is now revealed.
    pub fn submit_text(&mut self) -> Result<bool> {
        self.active_or_err()?;
        if self.is_revealed(self.index) {
            return Ok(true);
        }
        let has_content = self
            .answer(self.index)
            .first()
            .map_or(false, |a| !a.trim().is_empty());
        if has_content {
            self.reveal();
        }
        Ok(has_content)
    }

    pub fn toggle_reveal(&mut self) -> Result<()> {
        self.active_or_err()?;
        if self.is_revealed(self.index) {
            self.revealed.insert(self.index, false);
        } else {
            self.reveal();
        }
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        self.active_or_err()?;
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.announce_question();
        } else {
            self.finished = true;
            self.output.say(&Message::Results(self.results()));
        }
        Ok(())
    }

    pub fn previous(&mut self) -> Result<()> {
        self.active_or_err()?;
        if self.index > 0 {
            self.index -= 1;
            self.announce_question();
        }
        Ok(())
    }

    pub fn results(&self) -> Results {
        let mut results = Results::default();
        for index in 0..self.questions.len() {
            match self.grade_at(index) {
                Some(true) => results.correct += 1,
                Some(false) => results.wrong += 1,
                None => results.ungraded += 1,
            }
        }
        results
    }

    /// Restarts on the questions graded wrong, with fresh answers.
    pub fn retry_mistakes(&mut self) -> Result<()> {
        if !self.finished {
            return Err(anyhow!("Finish the quiz before retrying mistakes"));
        }
        let mistakes: Vec<ActiveQuestion> = (0..self.questions.len())
            .filter(|index| self.grade_at(*index) == Some(false))
            .map(|index| self.questions[index].clone())
            .collect();
        if mistakes.is_empty() {
            return Err(anyhow!("There are no mistakes to retry"));
        }

        self.output.say(&Message::RetryBegins(mistakes.len()));
        self.questions = mistakes;
        self.answers.clear();
        self.revealed.clear();
        self.index = 0;
        self.finished = false;
        self.announce_question();
        Ok(())
    }

    pub fn exit(self) {
        self.output.say(&Message::Exited);
    }
}
