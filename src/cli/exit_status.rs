use std::process::ExitCode;

/// Process exit status of a `gosift` invocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command completed; an empty scan is still a success.
    Success,
    /// The scan failed on its input: unreadable, unsupported, or not valid Go.
    Failure,
    /// Internal error such as an invalid configuration file.
    Error,
}

impl ExitStatus {
    pub const fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
