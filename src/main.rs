use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use gosift::cli::{Arguments, ExitStatus, init_logging, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{}: {:#}", "error".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
