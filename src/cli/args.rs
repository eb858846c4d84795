use clap::Parser;
use std::path::PathBuf;

/// Menu-driven employee records manager backed by a CSV file.
#[derive(Parser, Debug)]
#[command(name = "roster", version)]
pub struct Cli {
    /// Data file to use (defaults to the first *.csv in the working directory)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
