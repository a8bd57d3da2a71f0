use std::io::{Read, Write};

use serde::Serialize;
use wmbcfg_frame::Command;

use crate::exit::{frame_error, CliResult};
use crate::output::{print_json, print_table, print_trace, OutputFormat};
use crate::session::Session;

#[derive(Serialize)]
struct ModeReport {
    operation: &'static str,
    tx: String,
    rx: String,
    input_mode: String,
    output_mode: String,
    frame_format: String,
}

#[derive(Serialize)]
struct SetModeReport {
    operation: &'static str,
    tx: String,
    rx: String,
}

/// Query the configured wM-Bus mode (offsets 3, 4, 5).
pub fn run_get<T: Read + Write>(
    session: &mut Session<T>,
    command: &Command,
    format: OutputFormat,
) -> CliResult<()> {
    let exchange = session.exchange(command)?;
    let mode = exchange
        .response
        .wmbus_mode()
        .map_err(|err| frame_error(command.name(), err))?;

    match format {
        OutputFormat::Pretty => {
            print_trace(&exchange.tx, &exchange.rx);
            println!("WMBus input mode: {}", mode.input);
            println!("WMBus output mode: {}", mode.output);
            println!("WMBus output frame format: {}", mode.frame_format);
        }
        OutputFormat::Table => {
            print_trace(&exchange.tx, &exchange.rx);
            print_table(&[
                ("Input mode", mode.input.to_string()),
                ("Output mode", mode.output.to_string()),
                ("Frame format", mode.frame_format.to_string()),
            ]);
        }
        OutputFormat::Json => print_json(&ModeReport {
            operation: command.name(),
            tx: exchange.tx,
            rx: exchange.rx,
            input_mode: mode.input.to_string(),
            output_mode: mode.output.to_string(),
            frame_format: mode.frame_format.to_string(),
        }),
    }
    Ok(())
}

/// Set the wM-Bus mode from raw configuration bytes.
///
/// Nothing in the answer is decoded; the raw echo is the whole report.
pub fn run_set<T: Read + Write>(
    session: &mut Session<T>,
    command: &Command,
    format: OutputFormat,
) -> CliResult<()> {
    let exchange = session.exchange(command)?;

    match format {
        OutputFormat::Pretty | OutputFormat::Table => {
            print_trace(&exchange.tx, &exchange.rx);
        }
        OutputFormat::Json => print_json(&SetModeReport {
            operation: command.name(),
            tx: exchange.tx,
            rx: exchange.rx,
        }),
    }
    Ok(())
}
