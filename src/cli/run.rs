use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{init::init, scan::scan},
    exit_status::ExitStatus,
};

/// Dispatch parsed arguments to their command. Without a command, help is
/// printed and the run succeeds.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Scan(cmd)) => scan(&cmd),
        Some(Command::Init) => init(),
        None => Ok(ExitStatus::Success),
    }
}
