use anyhow::*;
use itertools::Itertools;

use crate::bank::{QuestionBank, QuestionItem};


pub const CHUNK_SIZE: usize = 50;
const CHUNKED_TYPE: &str = "单选";
const UNKNOWN_TYPE: &str = "未知";

/// A slice of a bank offered for practice on its own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterGroup {
    pub id: String,
    pub label: String,
    pub count: usize,
    /// Positions in the bank's question list.
    pub questions: Vec<usize>,
}

fn type_name(question: &QuestionItem) -> String {
    let question_type = question.question_type.trim();
    if question_type.is_empty() {
        UNKNOWN_TYPE.to_owned()
    } else {
        question_type.to_owned()
    }
}

pub fn filter_groups(bank: &QuestionBank) -> Vec<FilterGroup> {
    let by_type = bank
        .questions
        .iter()
        .enumerate()
        .map(|(position, question)| (type_name(question), position))
        .into_group_map();

    let mut keyed_groups = vec![];
    for (question_type, positions) in by_type {
        if question_type == CHUNKED_TYPE && positions.len() > CHUNK_SIZE {
            for (index, chunk) in positions.chunks(CHUNK_SIZE).enumerate() {
                let part = index + 1;
                let group = FilterGroup {
                    id: format!("{}_part_{}", question_type, part),
                    label: format!("{} {}", question_type, part),
                    count: chunk.len(),
                    questions: chunk.to_vec(),
                };
                keyed_groups.push((question_type.clone(), part, group));
            }
        } else {
            let group = FilterGroup {
                id: question_type.clone(),
                label: question_type.clone(),
                count: positions.len(),
                questions: positions,
            };
            keyed_groups.push((question_type, 0, group));
        }
    }

    keyed_groups
        .into_iter()
        .sorted_by(|a, b| (&a.0, a.1).cmp(&(&b.0, b.1)))
        .map(|(_, _, group)| group)
        .collect()
}

/// Whether offering groups before practice is worthwhile.
pub fn needs_selection(bank: &QuestionBank) -> bool {
    filter_groups(bank).len() > 1
}

pub fn select_questions(bank: &QuestionBank, group_ids: &[String]) -> Result<Vec<QuestionItem>> {
    if group_ids.is_empty() {
        return Ok(bank.questions.clone());
    }
    let groups = filter_groups(bank);
    let mut positions = vec![];
    for group_id in group_ids {
        let group = groups
            .iter()
            .find(|g| g.id == *group_id)
            .ok_or_else(|| anyhow!("Bank `{}` has no group `{}`", bank.name, group_id))?;
        positions.extend(group.questions.iter().copied());
    }
    Ok(positions
        .into_iter()
        .sorted()
        .dedup()
        .filter_map(|p| bank.questions.get(p).cloned())
        .collect())
}
