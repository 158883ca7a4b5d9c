use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

pub mod groups;
pub mod store;


lazy_static! {
    static ref JSON_EXTENSION_REGEX: Regex = Regex::new(r"(?i)\.json$").unwrap();
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default)]
pub struct Choice {
    pub label: String,
    pub text: String,
}

impl Choice {
    pub fn new(label: &str, text: &str) -> Self {
        Choice {
            label: label.to_owned(),
            text: text.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionItem {
    pub id: u64,
    #[serde(rename = "type")]
    pub question_type: String,
    pub title: String,
    pub options: Vec<Choice>,
    pub correct_answer: Vec<String>,
    pub selected_answer: Vec<String>,
    pub images: Vec<String>,
}

/// The interchange document produced by the scraper and consumed by `import`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ScrapedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    pub items: Vec<QuestionItem>,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not parse the import as JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("the import has no `items` array")]
    MissingItems,
    #[error("the import's `items` array is empty")]
    EmptyItems,
    #[error("the import's `items` are not question items: {0}")]
    Malformed(#[source] serde_json::Error),
}

pub fn parse_import(json: &str) -> Result<ScrapedData, ImportError> {
    let value: Value = serde_json::from_str(json).map_err(ImportError::Parse)?;
    match value.get("items") {
        Some(Value::Array(items)) if items.is_empty() => return Err(ImportError::EmptyItems),
        Some(Value::Array(_)) => (),
        _ => return Err(ImportError::MissingItems),
    }
    serde_json::from_value(value).map_err(ImportError::Malformed)
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBank {
    pub id: String,
    pub name: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub questions: Vec<QuestionItem>,
}

impl QuestionBank {
    pub fn from_import(
        data: ScrapedData,
        requested_name: Option<&str>,
        file_name: Option<&str>,
    ) -> QuestionBank {
        let created_at = Utc::now();
        let name = choose_name(&data, requested_name, file_name, created_at);
        QuestionBank {
            id: Uuid::new_v4().to_string(),
            name,
            created_at,
            questions: data.items,
        }
    }
}

fn choose_name(
    data: &ScrapedData,
    requested_name: Option<&str>,
    file_name: Option<&str>,
    created_at: DateTime<Utc>,
) -> String {
    if let Some(name) = requested_name.map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_owned();
    }
    if let Some(file_name) = file_name {
        return JSON_EXTENSION_REGEX.replace(file_name, "").into();
    }
    match &data.source {
        Some(source) => match Url::parse(source).ok().and_then(|u| u.host_str().map(str::to_owned)) {
            Some(host) => format!("Quiz from {}", host),
            None => "Imported Quiz Bank".to_owned(),
        },
        None => format!("Bank {}", created_at.format("%Y-%m-%d")),
    }
}
