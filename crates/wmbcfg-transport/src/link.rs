use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serialport::SerialPort;

use crate::error::Result;

/// An open, configured serial connection to the radio module.
///
/// Implements `Read + Write`; one instance is shared sequentially by every
/// exchange in a run and the underlying port closes on drop.
pub struct SerialLink {
    inner: Box<dyn SerialPort>,
    path: PathBuf,
}

impl SerialLink {
    pub(crate) fn from_port(inner: Box<dyn SerialPort>, path: impl AsRef<Path>) -> Self {
        Self {
            inner,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The device path this link was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Update the read/write timeout on the open port.
    pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.inner
            .set_timeout(timeout)
            .map_err(|err| std::io::Error::from(err).into())
    }

    /// Discard any bytes already buffered on the port, both directions.
    pub fn clear_buffers(&self) -> Result<()> {
        self.inner
            .clear(serialport::ClearBuffer::All)
            .map_err(|err| std::io::Error::from(err).into())
    }
}

impl Read for SerialLink {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for SerialLink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl std::fmt::Debug for SerialLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialLink")
            .field("path", &self.path)
            .field("baud_rate", &self.inner.baud_rate().ok())
            .finish()
    }
}
