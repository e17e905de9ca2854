use kernel::prelude::entity::{Employee, EmployeeDraft, Revision};
use kernel::KernelError;

use crate::transfer::CreateEmployeeDto;

pub trait DependOnRevision: 'static + Sync + Send {
    fn revision(&self) -> Revision;
}

impl DependOnRevision for Revision {
    fn revision(&self) -> Revision {
        *self
    }
}

pub trait CheckEmployeeService: 'static + Sync + Send + DependOnRevision {
    fn check_employee(&self, dto: &CreateEmployeeDto) -> bool {
        let revision = self.revision();
        let valid = EmployeeDraft::from(dto.clone()).validate_arguments(revision);
        tracing::debug!(%revision, valid, "checked employee arguments");
        valid
    }
}

impl<T> CheckEmployeeService for T where T: DependOnRevision {}

pub trait RegisterEmployeeService: 'static + Sync + Send + DependOnRevision {
    fn register_employee(
        &self,
        dto: CreateEmployeeDto,
    ) -> error_stack::Result<Employee, KernelError> {
        let revision = self.revision();
        match Employee::new(revision, EmployeeDraft::from(dto)) {
            Ok(employee) => {
                tracing::info!(%revision, "registered {employee}");
                Ok(employee)
            }
            Err(report) => {
                tracing::warn!(%revision, "rejected employee: {report:?}");
                Err(report)
            }
        }
    }
}

impl<T> RegisterEmployeeService for T where T: DependOnRevision {}
