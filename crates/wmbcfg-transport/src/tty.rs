use std::path::Path;
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPortType, StopBits};
use tracing::{debug, info};

use crate::error::{Result, TransportError};
use crate::link::SerialLink;

/// Serial line settings for the module link.
///
/// The module speaks 115200 8N1 with no flow control; only the baud rate and
/// the response timeout are worth exposing.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Line speed in baud. Default: 115200.
    pub baud_rate: u32,
    /// Bounded timeout applied to every read and write on the link.
    pub timeout: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            timeout: Duration::from_secs(1),
        }
    }
}

/// Open and configure the serial device at `path`.
///
/// Any bytes already sitting in the port buffers are discarded so the first
/// exchange does not decode leftovers from a previous run.
pub fn open(path: impl AsRef<Path>, config: &LinkConfig) -> Result<SerialLink> {
    let path = path.as_ref();
    let name = path.to_string_lossy();

    let port = serialport::new(name.as_ref(), config.baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(config.timeout)
        .open()
        .map_err(|err| TransportError::Open {
            path: path.to_path_buf(),
            source: err,
        })?;

    let link = SerialLink::from_port(port, path);
    if let Err(err) = link.clear_buffers() {
        debug!(%err, "could not clear port buffers");
    }

    info!(?path, baud = config.baud_rate, "serial link open");
    Ok(link)
}

/// A serial port discovered on this host.
#[derive(Debug, Clone)]
pub struct PortInfo {
    /// Device path, e.g. `/dev/ttyUSB0`.
    pub name: String,
    /// Port kind: "usb", "pci", "bluetooth" or "unknown".
    pub kind: &'static str,
    /// USB product string, when the port advertises one.
    pub product: Option<String>,
}

/// Enumerate serial ports available on this host.
pub fn available_ports() -> Result<Vec<PortInfo>> {
    let ports = serialport::available_ports().map_err(TransportError::Enumerate)?;
    debug!(count = ports.len(), "enumerated serial ports");

    Ok(ports
        .into_iter()
        .map(|p| {
            let (kind, product) = match p.port_type {
                SerialPortType::UsbPort(usb) => ("usb", usb.product),
                SerialPortType::PciPort => ("pci", None),
                SerialPortType::BluetoothPort => ("bluetooth", None),
                SerialPortType::Unknown => ("unknown", None),
            };
            PortInfo {
                name: p.port_name,
                kind,
                product,
            }
        })
        .collect())
}
