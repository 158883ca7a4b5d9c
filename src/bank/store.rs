use anyhow::*;
use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::bank::QuestionBank;


pub const STORE_VERSION: &str = "1.0.1";
const STORE_FILE: &str = "banks.json";

#[derive(Debug, Deserialize, Serialize)]
struct StoreDocument {
    version: String,
    banks: Vec<QuestionBank>,
}

pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "quizbank")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .context("Could not locate a data directory for this platform")
}

/// Question banks persisted as one JSON document, newest first.
#[derive(Debug)]
pub struct BankStore {
    path: PathBuf,
    banks: Vec<QuestionBank>,
}

impl BankStore {
    pub fn open(data_dir: &Path) -> Result<BankStore> {
        let path = data_dir.join(STORE_FILE);
        if !path.exists() {
            debug!("No bank store at {}, starting empty", path.display());
            return Ok(BankStore {
                path,
                banks: vec![],
            });
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Could not read bank store {}", path.display()))?;
        let document: Value = serde_json::from_str(&content)
            .with_context(|| format!("Bank store {} is corrupt", path.display()))?;

        let version = document.get("version").and_then(Value::as_str);
        if version != Some(STORE_VERSION) {
            let backup = path.with_extension("json.bak");
            fs::copy(&path, &backup)
                .with_context(|| format!("Could not back up bank store to {}", backup.display()))?;
            warn!(
                "Bank store {} has version {:?}, expected {}. Starting empty; the old store was \
                 copied to {} and the next save replaces it",
                path.display(),
                version,
                STORE_VERSION,
                backup.display()
            );
            return Ok(BankStore {
                path,
                banks: vec![],
            });
        }

        let document: StoreDocument = serde_json::from_value(document)
            .with_context(|| format!("Bank store {} is corrupt", path.display()))?;
        Ok(BankStore {
            path,
            banks: document.banks,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn banks(&self) -> &[QuestionBank] {
        &self.banks
    }

    fn position(&self, key: &str) -> Result<usize> {
        if let Some(position) = self.banks.iter().position(|b| b.id == key) {
            return Ok(position);
        }
        if let Some(position) = self.banks.iter().position(|b| b.name == key) {
            return Ok(position);
        }
        let matches: Vec<usize> = self
            .banks
            .iter()
            .enumerate()
            .filter(|(_, b)| !key.is_empty() && b.id.starts_with(key))
            .map(|(position, _)| position)
            .collect();
        match matches.as_slice() {
            [position] => Ok(*position),
            [] => Err(anyhow!("No bank matches `{}`", key)),
            _ => Err(anyhow!("`{}` matches {} banks", key, matches.len())),
        }
    }

    pub fn find(&self, key: &str) -> Result<&QuestionBank> {
        let position = self.position(key)?;
        Ok(&self.banks[position])
    }

    pub fn add(&mut self, bank: QuestionBank) {
        self.banks.insert(0, bank);
    }

    pub fn delete(&mut self, key: &str) -> Result<QuestionBank> {
        let position = self.position(key)?;
        Ok(self.banks.remove(position))
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
        let document = StoreDocument {
            version: STORE_VERSION.to_owned(),
            banks: self.banks.clone(),
        };
        let content = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Could not write bank store {}", self.path.display()))?;
        info!("Saved {} banks to {}", self.banks.len(), self.path.display());
        Ok(())
    }
}
