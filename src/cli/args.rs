//! Command-line argument parsing.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::{parse_timeout_ms, ClientConfig, ConfigError};

/// Options for an interactive run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// `--api-url <url>`
    pub api_url: Option<String>,
    /// `--route <path>` or `--profile <id>`: screen to open on top of the list.
    /// Kept raw; the app parses it so a bad id lands on the profile error screen.
    pub route: Option<String>,
    /// `--timeout-ms <n>`
    pub request_timeout: Option<Duration>,
    /// `--log <path>`
    pub log_path: Option<PathBuf>,
}

impl RunOptions {
    /// Layer the flags over `config` (usually [`ClientConfig::from_env`]).
    pub fn apply_to(&self, mut config: ClientConfig) -> Result<ClientConfig, ConfigError> {
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url)?;
        }
        if let Some(timeout) = self.request_timeout {
            config = config.with_request_timeout(timeout);
        }
        if let Some(path) = &self.log_path {
            config = config.with_log_path(path.clone());
        }
        Ok(config)
    }

    /// Start path, defaulting to the users list.
    pub fn start_path(&self) -> &str {
        self.route.as_deref().unwrap_or("/")
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the terminal UI (default)
    Run(RunOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("--timeout-ms: '{0}' is not a positive number of milliseconds")]
    InvalidTimeout(String),
    #[error("unknown argument '{0}'")]
    Unknown(String),
}

pub const USAGE: &str = "\
Usage: rolodex [OPTIONS]

Options:
  --api-url <url>     Directory service base URL (env: ROLODEX_API_URL)
  --route <path>      Start at a route: /, /about, /profile/<id>
  --profile <id>      Same as --route /profile/<id>
  --timeout-ms <n>    Give up on a request after n milliseconds (env: ROLODEX_TIMEOUT_MS)
  --log <path>        Write logs to <path>.<timestamp>.<pid> (env: ROLODEX_LOG)
  -V, --version       Print version
  -h, --help          Print this help";

/// Parse command-line arguments, program name first.
///
/// # Examples
///
/// ```
/// use rolodex::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["rolodex".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--api-url" => {
                options.api_url = Some(args.next().ok_or(ArgsError::MissingValue("--api-url"))?);
            }
            "--route" => {
                options.route = Some(args.next().ok_or(ArgsError::MissingValue("--route"))?);
            }
            "--profile" => {
                let raw = args.next().ok_or(ArgsError::MissingValue("--profile"))?;
                options.route = Some(format!("/profile/{}", raw));
            }
            "--timeout-ms" => {
                let raw = args.next().ok_or(ArgsError::MissingValue("--timeout-ms"))?;
                let timeout = parse_timeout_ms(&raw).ok_or(ArgsError::InvalidTimeout(raw))?;
                options.request_timeout = Some(timeout);
            }
            "--log" => {
                let raw = args.next().ok_or(ArgsError::MissingValue("--log"))?;
                options.log_path = Some(PathBuf::from(raw));
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(CliCommand::Run(options))
}
