use serde::Serialize;

use crate::exit::{transport_error, CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct PortsReport {
    ports: Vec<PortEntry>,
}

#[derive(Serialize)]
struct PortEntry {
    name: String,
    kind: &'static str,
    product: Option<String>,
}

/// List serial ports available on this host. Runs without opening a device.
pub fn run(format: OutputFormat) -> CliResult<i32> {
    let ports = wmbcfg_transport::available_ports()
        .map_err(|err| transport_error("port enumeration failed", err))?;

    let entries: Vec<PortEntry> = ports
        .into_iter()
        .map(|p| PortEntry {
            name: p.name,
            kind: p.kind,
            product: p.product,
        })
        .collect();

    match format {
        OutputFormat::Pretty => {
            if entries.is_empty() {
                println!("no serial ports found");
            }
            for entry in &entries {
                match &entry.product {
                    Some(product) => println!("{} ({}, {})", entry.name, entry.kind, product),
                    None => println!("{} ({})", entry.name, entry.kind),
                }
            }
        }
        OutputFormat::Table => {
            let rows: Vec<(&str, String)> = entries
                .iter()
                .map(|e| {
                    (
                        e.kind,
                        match &e.product {
                            Some(product) => format!("{} ({product})", e.name),
                            None => e.name.clone(),
                        },
                    )
                })
                .collect();
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&PortsReport { ports: entries }),
    }

    Ok(SUCCESS)
}
