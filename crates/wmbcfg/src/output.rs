use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
    Table,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Print the outbound/inbound frame trace for one exchange.
///
/// Every exchange prints both directions as uppercase hex pairs; this is the
/// observable contract of the tool in the text formats.
pub fn print_trace(tx: &str, rx: &str) {
    println!("-> {tx}");
    println!("<- {rx}");
    println!();
}

/// Serialize one operation report as a single JSON line.
pub fn print_json<T: Serialize>(report: &T) {
    println!(
        "{}",
        serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
    );
}

/// Render decoded fields as a two-column table.
pub fn print_table(rows: &[(&str, String)]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["FIELD", "VALUE"]);
    for (field, value) in rows {
        table.add_row(vec![(*field).to_string(), value.clone()]);
    }
    println!("{table}");
}
