use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Split a plain-text novel into chapters")]
pub struct Options {
    /// Input file to split
    pub file_path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print the chapter at this index instead of the chapter list
    #[arg(short, long)]
    pub chapter: Option<usize>,

    /// Wrap width for chapter text
    #[arg(short, long, default_value_t = 80)]
    pub width: usize,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
