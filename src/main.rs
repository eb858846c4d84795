use clap::Parser;
use colored::Colorize;
use roster::api::RosterApi;
use roster::cli::args::Cli;
use roster::cli::input::Console;
use roster::cli::menu::Menu;
use roster::error::Result;
use roster::store::csv::{CsvBackend, DEFAULT_FILENAME};
use roster::store::Roster;
use std::io;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = match cli.file {
        Some(path) => path,
        None => discover_data_file()?,
    };
    if path.exists() {
        println!("{}", format!("Using data file: {}", path.display()).dimmed());
    } else {
        println!(
            "{}",
            format!("No data file found, creating: {}", path.display()).dimmed()
        );
    }

    let store = Roster::open(CsvBackend::new(path))?;
    let mut api = RosterApi::new(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    Menu::new(&mut api, console).run()
}

/// First `*.csv` in the working directory (lexicographic), falling back to
/// the default filename for a fresh start.
fn discover_data_file() -> Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(".")?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    candidates.sort();
    Ok(candidates
        .into_iter()
        .next()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME)))
}
