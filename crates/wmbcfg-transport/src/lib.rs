//! Serial link transport for wM-Bus module configuration.
//!
//! Opens and configures the UART the radio module hangs off (115200 8N1,
//! bounded read timeout) and exposes it as a plain byte stream. The codec
//! and dispatch layers above only see `std::io::Read + Write`.

pub mod error;
pub mod link;
pub mod tty;

pub use error::{Result, TransportError};
pub use link::SerialLink;
pub use tty::{available_ports, open, LinkConfig, PortInfo};
