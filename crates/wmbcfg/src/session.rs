use std::io::{ErrorKind, Read, Write};

use tracing::debug;
use wmbcfg_frame::{codec, Command, Response, RESPONSE_BUFFER_SIZE};

use crate::exit::{io_error, CliError, CliResult, TIMEOUT};

/// One completed command/response exchange.
#[derive(Debug)]
pub struct Exchange {
    /// Outbound frame as uppercase hex pairs.
    pub tx: String,
    /// Inbound bytes as uppercase hex pairs.
    pub rx: String,
    /// The raw response, ready for typed decoding.
    pub response: Response,
}

/// Drives command/response exchanges over an open byte stream.
///
/// Generic over the stream so exchanges can be tested against in-memory
/// mocks; the real link is a `SerialLink` with a bounded read timeout. The
/// read returns as soon as the module answers, and an exchange where nothing
/// arrives within the timeout window is reported, not decoded.
pub struct Session<T> {
    link: T,
}

impl<T: Read + Write> Session<T> {
    pub fn new(link: T) -> Self {
        Self { link }
    }

    /// Send `command` and capture the module's answer.
    ///
    /// Performs one write and one read. The read may return fewer bytes than
    /// an operation's decoder needs; that surfaces later as a short-response
    /// error from the typed accessors.
    pub fn exchange(&mut self, command: &Command) -> CliResult<Exchange> {
        let frame = command.encode();

        self.link
            .write_all(&frame)
            .and_then(|()| self.link.flush())
            .map_err(|err| io_error("device write failed", err))?;

        let mut buf = [0u8; RESPONSE_BUFFER_SIZE];
        let received = loop {
            match self.link.read(&mut buf) {
                Ok(n) => break n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err)
                    if err.kind() == ErrorKind::TimedOut
                        || err.kind() == ErrorKind::WouldBlock =>
                {
                    break 0
                }
                Err(err) => return Err(io_error("device read failed", err)),
            }
        };

        if received == 0 {
            return Err(CliError::new(
                TIMEOUT,
                format!("no response from device for {}", command.name()),
            ));
        }

        debug!(
            command = command.name(),
            sent = frame.len(),
            received,
            "exchange complete"
        );

        Ok(Exchange {
            tx: codec::hex_str(&frame),
            rx: codec::hex_str(&buf[..received]),
            response: Response::new(buf[..received].to_vec()),
        })
    }

    /// Consume the session and return the underlying link.
    pub fn into_inner(self) -> T {
        self.link
    }
}
