use lazy_static::lazy_static;
use regex::Regex;

use crate::bank::{Choice, QuestionItem};


lazy_static! {
    static ref JUDGMENT_OPTION_REGEX: Regex = Regex::new(r"(?i)^(true|false|对|错)").unwrap();
    static ref BOOLEAN_PREFIX_REGEX: Regex = Regex::new(r"(?i)^(true|false)[.\s]*").unwrap();
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Classification {
    pub is_judgment: bool,
    pub is_multi_select: bool,
    pub is_text: bool,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QuestionKind {
    SingleChoice,
    MultiChoice,
    TrueFalse,
    Text,
}

pub fn is_text_type(question_type: &str) -> bool {
    question_type.contains("填空") || question_type.contains("简答")
}

fn looks_like_judgment_options(options: &[Choice]) -> bool {
    options.len() == 2
        && options
            .iter()
            .any(|o| JUDGMENT_OPTION_REGEX.is_match(&o.text))
}

pub fn classify(question: &QuestionItem) -> Classification {
    let question_type = question.question_type.as_str();
    Classification {
        is_judgment: question_type.contains("判断")
            || question.title.contains("判断")
            || looks_like_judgment_options(&question.options),
        is_multi_select: question_type.contains("多选"),
        is_text: is_text_type(question_type),
    }
}

impl Classification {
    /// Collapses the flags into the variant used for grading and input handling.
    /// Multi-select takes precedence over the judgment heuristic.
    pub fn kind(&self) -> QuestionKind {
        if self.is_text {
            QuestionKind::Text
        } else if self.is_multi_select {
            QuestionKind::MultiChoice
        } else if self.is_judgment {
            QuestionKind::TrueFalse
        } else {
            QuestionKind::SingleChoice
        }
    }

    /// Type badge shown for the question. Judgment questions are always
    /// shown as such, whatever their declared type.
    pub fn display_name<'a>(&self, question_type: &'a str) -> &'a str {
        if self.is_judgment {
            "判断"
        } else {
            question_type
        }
    }
}

impl QuestionKind {
    pub fn is_choice(&self) -> bool {
        *self != QuestionKind::Text
    }

    pub fn auto_reveals(&self) -> bool {
        matches!(self, QuestionKind::SingleChoice | QuestionKind::TrueFalse)
    }
}

/// Text shown for an option of a judgment question: a leading `true`/`false`
/// token is dropped, and an option that was nothing but that token becomes
/// `对` or `错`.
pub fn judgment_display_text(text: &str) -> String {
    let stripped = BOOLEAN_PREFIX_REGEX.replace(text, "");
    if !stripped.is_empty() {
        return stripped.into_owned();
    }
    let lower = text.to_lowercase();
    if lower.contains("true") {
        "对".to_owned()
    } else if lower.contains("false") {
        "错".to_owned()
    } else {
        text.to_owned()
    }
}
