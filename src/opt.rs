use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quizbank", about = "Scrape, store and practice question banks")]
pub(crate) struct Cli {
    /// Directory holding the bank store
    #[arg(long, env = "QUIZBANK_HOME", global = true)]
    pub(crate) data_dir: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Json,
    Csv,
}

impl Format {
    pub(crate) fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Extract the questions of a saved exam or homework page
    Scrape(Scrape),
    /// Add a scraped JSON document to the store
    Import(Import),
    /// List stored banks
    List,
    /// Remove a bank from the store
    Delete(BankArgs),
    /// Show the practice groups of a bank
    Groups(BankArgs),
    /// Write a bank out as JSON or CSV
    Export(Export),
    /// Practice a bank interactively
    Practice(Practice),
}

#[derive(Debug, Parser)]
pub(crate) struct Scrape {
    pub(crate) page: PathBuf,

    /// Address the page was saved from
    #[arg(long)]
    pub(crate) source: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub(crate) format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub(crate) struct Import {
    /// JSON document to import, or `-` for stdin
    pub(crate) file: String,

    #[arg(long)]
    pub(crate) name: Option<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct BankArgs {
    /// Bank id, id prefix or name
    pub(crate) bank: String,
}

#[derive(Debug, Parser)]
pub(crate) struct Export {
    pub(crate) bank: String,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub(crate) format: Format,

    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub(crate) struct Practice {
    pub(crate) bank: String,

    /// Only practice these groups (see `groups`)
    #[arg(long = "group")]
    pub(crate) groups: Vec<String>,

    #[arg(long)]
    pub(crate) shuffle: bool,
}
