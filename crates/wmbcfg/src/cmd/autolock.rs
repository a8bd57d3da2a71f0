use std::io::{Read, Write};

use serde::Serialize;
use wmbcfg_frame::Command;

use crate::exit::{frame_error, CliResult};
use crate::output::{print_json, print_table, print_trace, OutputFormat};
use crate::session::Session;

#[derive(Serialize)]
struct AutolockReport {
    operation: &'static str,
    tx: String,
    rx: String,
    status: String,
}

/// Get the autolock state, or restart autolock with new key bytes.
///
/// Both operations answer with the same single status byte at offset 3.
pub fn run<T: Read + Write>(
    session: &mut Session<T>,
    command: &Command,
    format: OutputFormat,
) -> CliResult<()> {
    let exchange = session.exchange(command)?;
    let status = exchange
        .response
        .autolock_status()
        .map_err(|err| frame_error(command.name(), err))?;

    match format {
        OutputFormat::Pretty => {
            print_trace(&exchange.tx, &exchange.rx);
            println!("Device status: {status}");
        }
        OutputFormat::Table => {
            print_trace(&exchange.tx, &exchange.rx);
            print_table(&[("Autolock", status.to_string())]);
        }
        OutputFormat::Json => print_json(&AutolockReport {
            operation: command.name(),
            tx: exchange.tx,
            rx: exchange.rx,
            status: status.to_string(),
        }),
    }
    Ok(())
}
