use std::io::{Read, Write};

use wmbcfg_frame::Command;

use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;
use crate::session::Session;

pub mod autolock;
pub mod encryption;
pub mod info;
pub mod interval;
pub mod mode;
pub mod ports;

/// Execute the scheduled operations in order against the shared link.
///
/// Operations are independent; each performs its own exchange and prints its
/// own report before the next one starts.
pub fn run_all<T: Read + Write>(
    session: &mut Session<T>,
    ops: &[Command],
    format: OutputFormat,
) -> CliResult<i32> {
    for command in ops {
        match command {
            Command::GetAutolockStatus | Command::RestartAutolock(_) => {
                autolock::run(session, command, format)?
            }
            Command::GetEncryption | Command::SetEncryption(_) => {
                encryption::run(session, command, format)?
            }
            Command::GetDeviceInfo => info::run(session, command, format)?,
            Command::GetTxInterval | Command::SetTxInterval(_) => {
                interval::run(session, command, format)?
            }
            Command::GetWmbusMode => mode::run_get(session, command, format)?,
            Command::SetWmbusMode(_) => mode::run_set(session, command, format)?,
        }
    }
    Ok(SUCCESS)
}
