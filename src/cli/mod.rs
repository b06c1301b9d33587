//! Command-line front end: argument parsing, command dispatch, logging setup
//! and cargo-style reporting.

mod args;
mod commands;
mod exit_status;
mod logging;
mod report;
mod run;

pub use args::{Arguments, Command, OutputFormat, ScanCommand};
pub use exit_status::ExitStatus;
pub use logging::init_logging;
pub use report::{SUCCESS_MARK, print_scan_error_to, print_scan_result_to};
pub use run::run_cli;
