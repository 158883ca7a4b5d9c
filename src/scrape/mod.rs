use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use crate::bank::{Choice, QuestionItem};

pub mod export;
pub mod html;
pub mod resolve;
pub mod sanitize;

pub use self::resolve::resolve;
pub use self::sanitize::sanitize;


lazy_static! {
    static ref HEADER_TITLE_REGEX: Regex =
        Regex::new(r"试卷|期末|复习题|考试|作业|章节|题库$").unwrap();
}

const SCRAPED_TYPES: [&str; 4] = ["单选", "多选", "判断", "填空"];

/// Everything a page exposes about one question, before any cleanup.
/// `selected` and `standard` hold raw fragments (possibly HTML, possibly
/// still carrying answer labels).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawFields {
    pub question_type: String,
    pub title: String,
    pub options: Vec<Choice>,
    pub selected: Vec<String>,
    pub standard: Vec<String>,
    pub images: Vec<String>,
}

/// Read access to a page holding questions.
pub trait PageAccessor {
    type Container<'a>
    where
        Self: 'a;

    fn find_question_containers(&self) -> Vec<Self::Container<'_>>;
    fn extract_raw_fields(&self, container: &Self::Container<'_>) -> RawFields;
    /// Page-level heading texts; questions titled like one of these are dropped.
    fn page_headings(&self) -> HashSet<String>;
}

fn clean_fragments(fragments: &[String]) -> Vec<String> {
    fragments
        .iter()
        .map(|f| sanitize::html_to_text(f))
        .filter(|f| !f.is_empty())
        .unique()
        .map(|f| sanitize(&f))
        .filter(|f| !f.is_empty())
        .unique()
        .collect()
}

fn first_non_empty(candidates: Vec<Vec<String>>) -> Vec<String> {
    candidates
        .into_iter()
        .find(|c| !c.is_empty())
        .unwrap_or_default()
}

pub fn extract_question(index: usize, raw: RawFields) -> QuestionItem {
    let selected = clean_fragments(&raw.selected);
    let standard = clean_fragments(&raw.standard);
    let selected_text = resolve(&raw.options, &selected);
    let standard_text = resolve(&raw.options, &standard);

    if standard_text.is_empty() && !standard.is_empty() {
        debug!(
            "Question {}: standard answer {:?} did not resolve to any option",
            index + 1,
            standard
        );
    }

    let selected_answer = first_non_empty(vec![selected_text.clone(), selected.clone()]);
    let correct_answer = first_non_empty(vec![standard_text, selected_text, standard, selected]);

    QuestionItem {
        id: index as u64 + 1,
        question_type: raw.question_type,
        title: raw.title,
        options: raw.options,
        correct_answer,
        selected_answer,
        images: raw.images,
    }
}

pub fn is_valid_question(question: &QuestionItem, headings: &HashSet<String>) -> bool {
    let has_options = question.options.len() >= 2;
    let has_answer = !question.correct_answer.is_empty();
    let has_selection = !question.selected_answer.is_empty();
    let title = question.title.trim();

    if headings.contains(title) {
        return false;
    }
    let looks_like_header =
        HEADER_TITLE_REGEX.is_match(title) && !has_options && !has_answer && !has_selection;
    if looks_like_header {
        return false;
    }
    if question.question_type == "填空" {
        return has_selection || has_answer || !title.is_empty();
    }
    SCRAPED_TYPES.contains(&question.question_type.as_str())
        && (has_options || has_answer || has_selection)
}

/// Extracts every question on the page, in page order, and drops the
/// containers that turned out not to be questions.
pub fn scan<P: PageAccessor>(page: &P) -> Vec<QuestionItem> {
    let headings = page.page_headings();
    let containers = page.find_question_containers();
    debug!("Found {} candidate question containers", containers.len());
    containers
        .iter()
        .enumerate()
        .map(|(index, container)| extract_question(index, page.extract_raw_fields(container)))
        .filter(|q| {
            let valid = is_valid_question(q, &headings);
            if !valid {
                debug!("Skipping container {}: not a question ({:?})", q.id, q.title);
            }
            valid
        })
        .collect()
}
