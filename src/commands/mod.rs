use anyhow::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::bank::store::{default_data_dir, BankStore};
use crate::opt::{Cli, Commands};

mod bank;
mod practice;
mod scrape;

pub(crate) fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Scrape(args) => scrape::scrape(args),
        Commands::Import(args) => bank::import(&mut open_store(&cli)?, args),
        Commands::List => bank::list(&open_store(&cli)?),
        Commands::Delete(args) => bank::delete(&mut open_store(&cli)?, args),
        Commands::Groups(args) => bank::groups(&open_store(&cli)?, args),
        Commands::Export(args) => bank::export(&open_store(&cli)?, args),
        Commands::Practice(args) => practice::practice(&open_store(&cli)?, args),
    }
}

fn open_store(cli: &Cli) -> Result<BankStore> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    BankStore::open(&data_dir)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Could not write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}
