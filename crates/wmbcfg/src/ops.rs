use wmbcfg_frame::{hex, Command};

use crate::exit::{frame_error, CliResult};
use crate::Cli;

/// Build the operation schedule from parsed flags.
///
/// Execution order is fixed regardless of flag order on the command line:
/// autolock status, restart autolock, get encryption, set encryption, info,
/// get interval, set interval, get mode, set mode. Hex payload arguments are
/// parsed here, before any device I/O happens.
pub fn schedule(cli: &Cli) -> CliResult<Vec<Command>> {
    let mut ops = Vec::new();

    if cli.autolock_status {
        ops.push(Command::GetAutolockStatus);
    }
    if let Some(hex6) = &cli.restart_autolock {
        let key = hex::parse_payload3(hex6).map_err(|err| frame_error("restart-autolock", err))?;
        ops.push(Command::RestartAutolock(key));
    }
    if cli.get_encryption {
        ops.push(Command::GetEncryption);
    }
    if cli.enable_encryption {
        ops.push(Command::SetEncryption(true));
    }
    if cli.disable_encryption {
        ops.push(Command::SetEncryption(false));
    }
    if cli.info {
        ops.push(Command::GetDeviceInfo);
    }
    if cli.get_interval {
        ops.push(Command::GetTxInterval);
    }
    if let Some(secs) = cli.set_interval {
        ops.push(Command::SetTxInterval(secs));
    }
    if cli.get_mode {
        ops.push(Command::GetWmbusMode);
    }
    if let Some(hex6) = &cli.set_mode {
        let bytes = hex::parse_payload3(hex6).map_err(|err| frame_error("set-mode", err))?;
        ops.push(Command::SetWmbusMode(bytes));
    }

    Ok(ops)
}
