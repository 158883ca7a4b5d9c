use anyhow::*;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use unidecode::unidecode;

use crate::bank::groups::{filter_groups, needs_selection};
use crate::bank::store::BankStore;
use crate::bank::{parse_import, QuestionBank, ScrapedData};
use crate::commands::write_output;
use crate::opt::{BankArgs, Export, Format, Import};
use crate::scrape::export::{to_csv, to_json};

#[cfg(test)]
mod tests;

const STDIN_PATH: &str = "-";

pub(crate) fn import(store: &mut BankStore, args: &Import) -> Result<()> {
    let (content, file_name) = if args.file == STDIN_PATH {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Could not read stdin")?;
        (content, None)
    } else {
        let path = Path::new(&args.file);
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        (content, file_name)
    };

    let data = parse_import(&content)?;
    let bank = QuestionBank::from_import(data, args.name.as_deref(), file_name.as_deref());
    println!(
        "Imported {} questions as `{}` ({})",
        bank.questions.len(),
        bank.name,
        bank.id
    );
    store.add(bank);
    store.save()
}

pub(crate) fn list(store: &BankStore) -> Result<()> {
    if store.banks().is_empty() {
        println!(
            "No banks in {}. Import one with `quizbank import <file.json>`.",
            store.path().display()
        );
        return Ok(());
    }
    for bank in store.banks() {
        println!(
            "{}  {}  {:>4} questions  {}",
            short_id(&bank.id),
            bank.created_at.format("%Y-%m-%d %H:%M"),
            bank.questions.len(),
            bank.name
        );
    }
    Ok(())
}

pub(crate) fn delete(store: &mut BankStore, args: &BankArgs) -> Result<()> {
    let bank = store.delete(&args.bank)?;
    store.save()?;
    println!("Deleted `{}`", bank.name);
    Ok(())
}

pub(crate) fn groups(store: &BankStore, args: &BankArgs) -> Result<()> {
    let bank = store.find(&args.bank)?;
    for group in filter_groups(bank) {
        println!("{:<16} {:<10} {:>4}", group.id, group.label, group.count);
    }
    if !needs_selection(bank) {
        println!("(a single group: practice uses the whole bank)");
    }
    Ok(())
}

pub(crate) fn export(store: &BankStore, args: &Export) -> Result<()> {
    let bank = store.find(&args.bank)?;
    let content = match args.format {
        Format::Json => to_json(&ScrapedData {
            source: None,
            ts: Some(bank.created_at.timestamp_millis()),
            items: bank.questions.clone(),
        })?,
        Format::Csv => to_csv(&bank.questions)?,
    };
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| export_path(&bank.name, args.format));
    write_output(Some(&path), &content)?;
    println!("Exported {} questions to {}", bank.questions.len(), path.display());
    Ok(())
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn slug(name: &str) -> String {
    let ascii = unidecode(name).to_lowercase();
    let slug = ascii
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "bank".to_owned()
    } else {
        slug
    }
}

fn export_path(name: &str, format: Format) -> PathBuf {
    PathBuf::from(format!("{}.{}", slug(name), format.extension()))
}
