use anyhow::*;
use chrono::Utc;
use std::fs;
use tracing::info;

use crate::answer::check_answer;
use crate::bank::ScrapedData;
use crate::commands::write_output;
use crate::opt::{Format, Scrape};
use crate::scrape::export::{to_csv, to_json};
use crate::scrape::html::HtmlPage;
use crate::scrape::scan;

pub(crate) fn scrape(args: &Scrape) -> Result<()> {
    let html = fs::read_to_string(&args.page)
        .with_context(|| format!("Could not read {}", args.page.display()))?;
    let page = HtmlPage::parse(&html);
    let items = scan(&page);
    if items.is_empty() {
        return Err(anyhow!("No questions found in {}", args.page.display()));
    }
    info!("Scraped {} questions from {}", items.len(), args.page.display());
    let answered_correctly = items
        .iter()
        .filter(|q| check_answer(q, &q.selected_answer) == Some(true))
        .count();
    info!(
        "{} of {} recorded answers match the reference answer",
        answered_correctly,
        items.len()
    );

    let content = match args.format {
        Format::Json => to_json(&ScrapedData {
            source: args.source.clone(),
            ts: Some(Utc::now().timestamp_millis()),
            items,
        })?,
        Format::Csv => to_csv(&items)?,
    };
    write_output(args.output.as_deref(), &content)
}
