use std::io::{Read, Write};

use serde::Serialize;
use wmbcfg_frame::Command;

use crate::exit::{frame_error, CliResult};
use crate::output::{print_json, print_table, print_trace, OutputFormat};
use crate::session::Session;

#[derive(Serialize)]
struct IntervalReport {
    operation: &'static str,
    tx: String,
    rx: String,
    interval_secs: u16,
}

/// Get or set the transmit interval.
///
/// The module echoes the effective interval in both cases; the two response
/// bytes are little-endian seconds, the same order the set payload uses.
pub fn run<T: Read + Write>(
    session: &mut Session<T>,
    command: &Command,
    format: OutputFormat,
) -> CliResult<()> {
    let exchange = session.exchange(command)?;
    let interval_secs = exchange
        .response
        .tx_interval_secs()
        .map_err(|err| frame_error(command.name(), err))?;

    let setting = matches!(command, Command::SetTxInterval(_));

    match format {
        OutputFormat::Pretty => {
            print_trace(&exchange.tx, &exchange.rx);
            if setting {
                println!("Set TX Interval: {interval_secs} seconds");
            } else {
                println!("TX Interval: {interval_secs} seconds");
            }
        }
        OutputFormat::Table => {
            print_trace(&exchange.tx, &exchange.rx);
            print_table(&[("TX Interval", format!("{interval_secs} seconds"))]);
        }
        OutputFormat::Json => print_json(&IntervalReport {
            operation: command.name(),
            tx: exchange.tx,
            rx: exchange.rx,
            interval_secs,
        }),
    }
    Ok(())
}
