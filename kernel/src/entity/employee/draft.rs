use std::fmt::Display;

use error_stack::Report;

use crate::entity::{
    EmployeeDescription, EmployeeEmail, EmployeeId, FirstName, JobTitle, JobYears, LastName,
    Revision,
};
use crate::KernelError;

/// Unvalidated employee, the staging area before validating construction.
///
/// Every field may be absent and assignments are never checked. Only
/// [`Employee::new`](crate::entity::Employee::new) turns a draft into an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub id: Option<EmployeeId>,
    pub first_name: Option<FirstName>,
    pub last_name: Option<LastName>,
    pub description: Option<EmployeeDescription>,
    pub job_title: Option<JobTitle>,
    pub job_years: Option<JobYears>,
    pub email: Option<EmployeeEmail>,
}

impl EmployeeDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        description: impl Into<String>,
        job_title: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(FirstName::new(first_name)),
            last_name: Some(LastName::new(last_name)),
            description: Some(EmployeeDescription::new(description)),
            job_title: Some(JobTitle::new(job_title)),
            ..Self::default()
        }
    }

    pub fn with_job_years(mut self, years: impl Into<i32>) -> Self {
        self.job_years = Some(JobYears::new(years));
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(EmployeeEmail::new(email));
        self
    }

    /// Whether validating construction under `revision` would succeed.
    pub fn validate_arguments(&self, revision: Revision) -> bool {
        self.violations(revision).is_empty()
    }

    pub(crate) fn violations(&self, revision: Revision) -> Vec<Violation> {
        let mut violations = Vec::new();
        let required = [
            (self.first_name.is_some(), "firstName"),
            (self.last_name.is_some(), "lastName"),
            (self.description.is_some(), "description"),
            (self.job_title.is_some(), "jobTitle"),
        ];
        violations.extend(
            required
                .into_iter()
                .filter(|(present, _)| !present)
                .map(|(_, field)| Violation::Missing(field)),
        );
        if revision.has_job_years() {
            match &self.job_years {
                None => violations.push(Violation::Missing("jobYears")),
                Some(years) if years.is_negative() => {
                    violations.push(Violation::NegativeJobYears(*years.as_ref()))
                }
                Some(_) => {}
            }
        }
        if revision.has_email() && self.email.is_none() {
            violations.push(Violation::Missing("email"));
        }
        violations
    }
}

/// [`KernelError::InvalidArgument`] with one attachment per violated rule.
pub(crate) fn rejection(violations: Vec<Violation>) -> Report<KernelError> {
    violations
        .into_iter()
        .fold(Report::new(KernelError::InvalidArgument), |report, violation| {
            report.attach_printable(violation)
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Violation {
    Missing(&'static str),
    NegativeJobYears(i32),
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Missing(field) => write!(f, "field `{field}` is missing"),
            Violation::NegativeJobYears(years) => {
                write!(f, "jobYears must not be negative (was {years})")
            }
        }
    }
}
