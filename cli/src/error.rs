use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

/// Top-level failure of a `payroll` run.
///
/// Exits with 2 for configuration mistakes and 1 for everything else.
#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        eprintln!("{:?}", self.0);
        match self.0.current_context() {
            KernelError::InvalidArgument => ExitCode::from(2),
            KernelError::Internal => ExitCode::FAILURE,
        }
    }
}
