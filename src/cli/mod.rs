//! Command-line interface.
//!
//! ```ignore
//! use rolodex::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => println!("rolodex {}", VERSION),
//!     CliCommand::Help => println!("{}", USAGE),
//!     CliCommand::Run(options) => { /* start the UI */ }
//! }
//! ```

pub mod args;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions, USAGE};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
