use anyhow::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{self, BufRead};
use tracing::debug;

use crate::answer::kind::judgment_display_text;
use crate::answer::{normalize, Classification, QuestionKind};
use crate::bank::groups::select_questions;
use crate::bank::store::BankStore;
use crate::bank::QuestionItem;
use crate::opt::Practice;
use crate::output::terminal::TerminalOutput;
use crate::output::QuizOutput;
use crate::quiz::{Phase, QuizSession, Settings};


lazy_static! {
    static ref LABEL_RUN_REGEX: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();
    static ref NUMBER_LIST_REGEX: Regex = Regex::new(r"^\d+(?:[\s,]+\d+)*$").unwrap();
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Input {
    Pick(Vec<String>),
    Text(String),
    Check,
    Show,
    Next,
    Previous,
    Retry,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(command: &str) -> Input {
    match command {
        "check" | "c" => Input::Check,
        "show" | "s" => Input::Show,
        "next" | "n" => Input::Next,
        "prev" | "p" => Input::Previous,
        "retry" | "r" => Input::Retry,
        "quit" | "q" => Input::Quit,
        _ => Input::Unknown(format!(":{}", command)),
    }
}

/// A run of letters like `AC` picks several options, so it is only read that
/// way on multi-select questions.
fn pick_by_label(question: &QuestionItem, kind: QuestionKind, line: &str) -> Option<Vec<String>> {
    if let Some(option) = question.options.iter().find(|o| o.label.eq_ignore_ascii_case(line)) {
        return Some(vec![option.text.clone()]);
    }
    if kind != QuestionKind::MultiChoice || !LABEL_RUN_REGEX.is_match(line) {
        return None;
    }
    line.chars()
        .map(|letter| {
            question
                .options
                .iter()
                .find(|o| o.label.eq_ignore_ascii_case(&letter.to_string()))
                .map(|o| o.text.clone())
        })
        .collect()
}

fn pick_by_number(question: &QuestionItem, line: &str) -> Option<Vec<String>> {
    if !NUMBER_LIST_REGEX.is_match(line) {
        return None;
    }
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let number: usize = part.parse().ok()?;
            let option = question.options.get(number.checked_sub(1)?)?;
            Some(option.text.clone())
        })
        .collect()
}

fn pick_by_text(question: &QuestionItem, is_judgment: bool, line: &str) -> Option<Vec<String>> {
    let wanted = normalize(line);
    question
        .options
        .iter()
        .find(|o| {
            normalize(&o.text) == wanted
                || (is_judgment
                    && normalize(&judgment_display_text(&o.text)) == wanted)
        })
        .map(|o| vec![o.text.clone()])
}

/// Interprets one line typed while `question` is on screen.
pub(crate) fn parse_input(line: &str, current: Option<(&QuestionItem, Classification)>) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    if let Some(command) = line.strip_prefix(':') {
        return parse_command(command.trim());
    }
    let (question, classification) = match current {
        Some(current) => current,
        None => return Input::Unknown(line.to_owned()),
    };
    let kind = classification.kind();
    if kind == QuestionKind::Text {
        return Input::Text(line.to_owned());
    }
    pick_by_label(question, kind, line)
        .or_else(|| pick_by_number(question, line))
        .or_else(|| pick_by_text(question, classification.is_judgment, line))
        .map(Input::Pick)
        .unwrap_or_else(|| Input::Unknown(line.to_owned()))
}

fn apply<O: QuizOutput>(session: &mut QuizSession<O>, input: Input) -> Result<()> {
    match input {
        Input::Pick(values) => {
            for value in values {
                session.select(&value)?;
            }
        }
        Input::Text(text) => {
            session.set_text(&text)?;
            session.submit_text()?;
        }
        Input::Check => match session.phase() {
            Phase::Answering(_) if session.current_kind() == Some(QuestionKind::Text) => {
                if !session.submit_text()? {
                    return Err(anyhow!("Type an answer first"));
                }
            }
            Phase::Answering(_) => session.toggle_reveal()?,
            Phase::Revealed(_) => (),
            Phase::Finished => return Err(anyhow!("The quiz is over")),
        },
        Input::Show => session.toggle_reveal()?,
        Input::Next => session.next()?,
        Input::Empty => {
            if let Phase::Revealed(_) = session.phase() {
                session.next()?;
            }
        }
        Input::Previous => session.previous()?,
        Input::Retry => session.retry_mistakes()?,
        Input::Quit => (),
        Input::Unknown(line) => {
            return Err(anyhow!(
                "Did not understand `{}`. Commands: :check :show :next :prev :retry :quit",
                line
            ))
        }
    }
    Ok(())
}

/// Feeds input lines to the session until it is quit or the input ends.
pub(crate) fn drive<O: QuizOutput, R: BufRead>(mut session: QuizSession<O>, input: R) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Could not read input")?;
        let parsed = {
            let current = session.current_question().zip(session.current_classification());
            parse_input(&line, current)
        };
        debug!("Practice input {:?}", parsed);
        if parsed == Input::Quit || (parsed == Input::Empty && session.phase() == Phase::Finished) {
            break;
        }
        if let Err(e) = apply(&mut session, parsed) {
            eprintln!("{:#}", e);
        }
    }
    session.exit();
    Ok(())
}

pub(crate) fn practice(store: &BankStore, args: &Practice) -> Result<()> {
    let bank = store.find(&args.bank)?;
    let questions = select_questions(bank, &args.groups)?;
    let settings = Settings {
        shuffle: args.shuffle,
    };
    let session = QuizSession::new(questions, &settings, TerminalOutput)?;
    println!("Practicing `{}` ({} questions)", bank.name, session.len());
    let stdin = io::stdin();
    let input = stdin.lock();
    drive(session, input)
}
