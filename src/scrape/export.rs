use anyhow::*;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::bank::{QuestionItem, ScrapedData};


const CSV_HEADERS: [&str; 7] = ["题号", "题型", "题目", "选项", "正确答案", "用户答案", "图片"];
const LIST_SEPARATOR: &str = " | ";

pub fn to_json(data: &ScrapedData) -> Result<String> {
    serde_json::to_string_pretty(data).context("Could not serialize questions to JSON")
}

fn csv_row(question: &QuestionItem) -> Vec<String> {
    let options = question
        .options
        .iter()
        .map(|o| format!("{}.{}", o.label, o.text))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);
    vec![
        question.id.to_string(),
        question.question_type.clone(),
        question.title.clone(),
        options,
        question.correct_answer.join(LIST_SEPARATOR),
        question.selected_answer.join(LIST_SEPARATOR),
        question.images.join(LIST_SEPARATOR),
    ]
}

pub fn to_csv(questions: &[QuestionItem]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);
    writer.write_record(&CSV_HEADERS)?;
    for question in questions {
        writer.write_record(csv_row(question))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Could not flush CSV output: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}
