use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use application::service::RegisterEmployeeService;
use application::transfer::{CreateEmployeeDto, EmployeeDto};
use error_stack::ResultExt;
use kernel::KernelError;

use crate::config::OutputFormat;

pub fn read_records(path: &Path) -> error_stack::Result<Vec<CreateEmployeeDto>, KernelError> {
    let content = std::fs::read_to_string(path)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Failed to read {}", path.display()))?;
    parse_records(&content)
}

pub fn parse_records(content: &str) -> error_stack::Result<Vec<CreateEmployeeDto>, KernelError> {
    serde_json::from_str(content)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable("Failed to decode employee records")
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "accepted={} rejected={}", self.accepted, self.rejected)
    }
}

/// Registers every record, writing one line per accepted employee to `out`.
///
/// Rejected records are logged and counted, they never abort the run.
pub fn register_all<S: RegisterEmployeeService>(
    service: &S,
    records: Vec<CreateEmployeeDto>,
    output: OutputFormat,
    out: &mut impl Write,
) -> error_stack::Result<Summary, KernelError> {
    let mut summary = Summary::default();
    for (index, record) in records.into_iter().enumerate() {
        let employee = match service.register_employee(record) {
            Ok(employee) => employee,
            Err(report) => {
                tracing::warn!(index, "skipped record: {}", report.current_context());
                summary.rejected += 1;
                continue;
            }
        };
        match output {
            OutputFormat::Text => {
                writeln!(out, "{employee}").change_context_lazy(|| KernelError::Internal)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &EmployeeDto::from(employee))
                    .change_context_lazy(|| KernelError::Internal)?;
                writeln!(out).change_context_lazy(|| KernelError::Internal)?;
            }
        }
        summary.accepted += 1;
    }
    Ok(summary)
}
