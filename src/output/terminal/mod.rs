use crate::answer::kind::judgment_display_text;
use crate::answer::{Classification, QuestionKind};
use crate::bank::QuestionItem;
use crate::output::{Message, QuizOutput};
use crate::scrape::sanitize::html_to_text;

#[cfg(test)]
mod tests;

const LIST_SEPARATOR: &str = " | ";

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_owned()
    } else {
        values.join(LIST_SEPARATOR)
    }
}

fn render_question(
    index: usize,
    total: usize,
    question: &QuestionItem,
    classification: Classification,
) -> String {
    let mut lines = vec![format!(
        "[{}/{}] ({}) {}",
        index + 1,
        total,
        classification.display_name(&question.question_type),
        html_to_text(&question.title)
    )];
    for image in &question.images {
        lines.push(format!("  image: {}", image));
    }
    for (position, option) in question.options.iter().enumerate() {
        let line = if classification.is_judgment {
            format!("  {}. {}", position + 1, judgment_display_text(&option.text))
        } else {
            format!("  {}. {}. {}", position + 1, option.label, option.text)
        };
        lines.push(line);
    }
    let hint = match classification.kind() {
        QuestionKind::MultiChoice => "Pick every correct option, then :check",
        QuestionKind::Text => "Type your answer and press enter",
        _ => "Pick one option",
    };
    lines.push(format!("  > {}", hint));
    lines.join("\n")
}

pub fn render(message: &Message) -> String {
    match message {
        Message::QuestionBegins {
            index,
            total,
            question,
            classification,
        } => render_question(*index, *total, question, *classification),
        Message::AnswerUpdated { answer, .. } => format!("  Your answer: {}", join_or_none(answer)),
        Message::Feedback {
            grade,
            correct_answer,
            ..
        } => match grade {
            Some(true) => "  Correct!".to_owned(),
            Some(false) => format!("  Wrong. Correct answer: {}", join_or_none(correct_answer)),
            None => "  No correct answer is known for this question.".to_owned(),
        },
        Message::Results(results) => {
            let summary = format!(
                "Finished {} questions: {} correct, {} wrong, {} ungraded",
                results.total(),
                results.correct,
                results.wrong,
                results.ungraded
            );
            if results.is_perfect() {
                format!("{}\nNo mistakes!", summary)
            } else {
                format!("{}\nType :retry to practice the {} mistakes.", summary, results.wrong)
            }
        }
        Message::RetryBegins(count) => format!("Retrying {} questions", count),
        Message::Exited => "Bye.".to_owned(),
    }
}

/// Prints every message to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalOutput;

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}", render(message));
    }
}
