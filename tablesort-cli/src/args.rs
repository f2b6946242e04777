use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

/// Sort a tab-separated table and print it as HTML or text.
#[derive(Debug, Parser)]
#[command(name = "tablesort", version)]
pub struct Cli {
    /// Tab-separated input; the first line holds the headers. `-` reads stdin.
    pub input: PathBuf,

    /// 0-based column to sort by. Without it the table keeps its input order.
    #[arg(short, long)]
    pub column: Option<usize>,

    /// Sort in descending order.
    #[arg(short, long)]
    pub descending: bool,

    /// 0-based column whose cells compare as numbers. Repeatable.
    #[arg(short, long = "numeric", value_name = "COLUMN")]
    pub numeric: Vec<usize>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Log level.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The decorated `<table>` element.
    Html,
    /// Aligned plain-text columns.
    Text,
}
