mod cmd;
mod exit;
mod logging;
mod ops;
mod output;
mod session;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::exit::{transport_error, CliError, CliResult, USAGE};
use crate::logging::{init_logging, LogLevel};
use crate::output::OutputFormat;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "wmbcfg",
    version,
    about = "Configuration tool for wM-Bus radio modules on a serial link"
)]
pub(crate) struct Cli {
    /// Serial device path.
    #[arg(short = 'd', long, value_name = "PATH", default_value = "/dev/ttyUSB0")]
    pub device: PathBuf,

    /// Response timeout per exchange (e.g. 1s, 500ms).
    #[arg(long, value_name = "DUR", default_value = "1s")]
    pub timeout: String,

    /// Output format.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Get autolock status.
    #[arg(short = 's', long)]
    pub autolock_status: bool,

    /// Restart autolock with 3 AES key bytes (6 hex digits).
    #[arg(short = 'r', long, value_name = "HEX6")]
    pub restart_autolock: Option<String>,

    /// Get encryption status.
    #[arg(short = 'e', long)]
    pub get_encryption: bool,

    /// Enable encryption.
    #[arg(short = 'E', long, conflicts_with = "disable_encryption")]
    pub enable_encryption: bool,

    /// Disable encryption.
    #[arg(short = 'D', long)]
    pub disable_encryption: bool,

    /// Get the device identity block.
    #[arg(short = 'i', long)]
    pub info: bool,

    /// Get the transmit interval.
    #[arg(short = 't', long)]
    pub get_interval: bool,

    /// Set the transmit interval in seconds.
    #[arg(short = 'T', long, value_name = "SECONDS")]
    pub set_interval: Option<u16>,

    /// Get the wM-Bus mode.
    #[arg(short = 'm', long)]
    pub get_mode: bool,

    /// Set the wM-Bus mode from 3 raw bytes (6 hex digits).
    #[arg(short = 'M', long, value_name = "HEX6")]
    pub set_mode: Option<String>,

    /// List available serial ports and exit.
    #[arg(long)]
    pub ports: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    match run(cli, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

fn run(cli: Cli, format: OutputFormat) -> CliResult<i32> {
    if cli.ports {
        return cmd::ports::run(format);
    }

    let ops = ops::schedule(&cli)?;
    if ops.is_empty() {
        return Err(CliError::new(USAGE, "no operation requested (see --help)"));
    }

    let timeout = parse_timeout(&cli.timeout)?;
    let config = wmbcfg_transport::LinkConfig {
        timeout,
        ..Default::default()
    };
    let link = wmbcfg_transport::open(&cli.device, &config)
        .map_err(|err| transport_error("device open failed", err))?;

    let mut session = Session::new(link);
    cmd::run_all(&mut session, &ops, format)
}

fn parse_timeout(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "timeout must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid timeout value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "timeout must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        _ => Ok(Duration::from_secs(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_combined_operation_flags() {
        let cli = Cli::try_parse_from(["wmbcfg", "-s", "-i", "-d", "/dev/ttyUSB1"])
            .expect("flags should parse");
        assert!(cli.autolock_status);
        assert!(cli.info);
        assert_eq!(cli.device, PathBuf::from("/dev/ttyUSB1"));
    }

    #[test]
    fn rejects_conflicting_encryption_flags() {
        let err = Cli::try_parse_from(["wmbcfg", "-E", "-D"])
            .expect_err("conflicting flags should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn default_device_path() {
        let cli = Cli::try_parse_from(["wmbcfg", "-m"]).expect("flags should parse");
        assert_eq!(cli.device, PathBuf::from("/dev/ttyUSB0"));
    }

    #[test]
    fn parse_timeout_seconds_and_millis() {
        assert_eq!(parse_timeout("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_timeout("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_timeout("3").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn parse_timeout_rejects_invalid_values() {
        assert!(parse_timeout("0s").is_err());
        assert!(parse_timeout("").is_err());
        assert!(parse_timeout("soon").is_err());
    }
}
