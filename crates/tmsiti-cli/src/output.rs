//! Terminal rendering for command results.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// How listings are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    /// Pretty-printed JSON array, for scripts.
    Json,
}

/// Render `rows` as a table or a JSON array.
pub fn print_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(rows) {
            Ok(json) => println!("{json}"),
            Err(e) => print_error(&format!("Could not encode output: {e}")),
        },
        OutputFormat::Table if rows.is_empty() => println!("(none)"),
        OutputFormat::Table => {
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
    }
}

pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

pub fn print_warning(msg: &str) {
    eprintln!("! {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("error: {msg}");
}

/// One aligned `label: value` line.
pub fn print_kv(label: &str, value: &str) {
    println!("{:<20} {value}", format!("{label}:"));
}
