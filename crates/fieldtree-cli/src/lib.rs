#![forbid(unsafe_code)]

//! Command-line front end for the fieldtree viewer.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, OutputFormat, run, run_from_env, run_with_io};
pub use error::{CliError, Result};
