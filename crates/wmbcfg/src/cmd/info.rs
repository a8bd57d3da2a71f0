use std::io::{Read, Write};

use serde::Serialize;
use wmbcfg_frame::Command;

use crate::exit::{frame_error, CliResult};
use crate::output::{print_json, print_table, print_trace, OutputFormat};
use crate::session::Session;

#[derive(Serialize)]
struct InfoReport {
    operation: &'static str,
    tx: String,
    rx: String,
    manufacturer: String,
    id: String,
    version: String,
    device_type: String,
    label: String,
}

/// Read the device identity block: manufacturer, serial ID, firmware
/// version and device type, composed into the `MFR.IDHEX.TYPE.VERSION`
/// label.
pub fn run<T: Read + Write>(
    session: &mut Session<T>,
    command: &Command,
    format: OutputFormat,
) -> CliResult<()> {
    let exchange = session.exchange(command)?;
    let info = exchange
        .response
        .device_info()
        .map_err(|err| frame_error(command.name(), err))?;

    let report = InfoReport {
        operation: command.name(),
        tx: exchange.tx,
        rx: exchange.rx,
        manufacturer: info.manufacturer.clone(),
        id: format!("{:08X}", info.id),
        version: format!("{:02X}", info.version),
        device_type: format!("{:02X}", info.device_type),
        label: info.label(),
    };

    match format {
        OutputFormat::Pretty => {
            print_trace(&report.tx, &report.rx);
            println!("Manufacturer: {}", report.manufacturer);
            println!("ID: {}", report.id);
            println!("Version: {}", report.version);
            println!("DevType: {}", report.device_type);
            println!("Label: {}", report.label);
        }
        OutputFormat::Table => {
            print_trace(&report.tx, &report.rx);
            print_table(&[
                ("Manufacturer", report.manufacturer.clone()),
                ("ID", report.id.clone()),
                ("Version", report.version.clone()),
                ("DevType", report.device_type.clone()),
                ("Label", report.label.clone()),
            ]);
        }
        OutputFormat::Json => print_json(&report),
    }
    Ok(())
}
