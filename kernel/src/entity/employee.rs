mod description;
mod draft;
mod email;
mod id;
mod job;
mod name;
mod revision;

pub use self::{description::*, draft::*, email::*, id::*, job::*, name::*, revision::*};

use std::fmt::Display;
use std::hash::{Hash, Hasher};

use destructure::Destructure;
use vodca::References;

use self::draft::rejection;
use crate::KernelError;

/// A payroll employee whose fields passed validation for some [`Revision`].
///
/// `id` is assigned externally and takes no part in equality or hashing.
/// Setters write through without re-validation.
#[derive(Debug, Clone, References, Destructure)]
pub struct Employee {
    id: Option<EmployeeId>,
    first_name: FirstName,
    last_name: LastName,
    description: EmployeeDescription,
    job_title: JobTitle,
    job_years: Option<JobYears>,
    email: Option<EmployeeEmail>,
}

impl Employee {
    /// Validating construction.
    ///
    /// Only the fields belonging to `revision` are taken from the draft; the
    /// rest are dropped. The draft's `id`, if any, is carried over.
    pub fn new(revision: Revision, draft: EmployeeDraft) -> error_stack::Result<Self, KernelError> {
        let violations = draft.violations(revision);
        let EmployeeDraft {
            id,
            first_name,
            last_name,
            description,
            job_title,
            job_years,
            email,
        } = draft;
        match (first_name, last_name, description, job_title) {
            (Some(first_name), Some(last_name), Some(description), Some(job_title))
                if violations.is_empty() =>
            {
                Ok(Self {
                    id,
                    first_name,
                    last_name,
                    description,
                    job_title,
                    job_years: job_years.filter(|_| revision.has_job_years()),
                    email: email.filter(|_| revision.has_email()),
                })
            }
            _ => Err(rejection(violations)),
        }
    }

    pub fn set_id(&mut self, id: Option<EmployeeId>) {
        self.id = id;
    }

    pub fn set_first_name(&mut self, first_name: FirstName) {
        self.first_name = first_name;
    }

    pub fn set_last_name(&mut self, last_name: LastName) {
        self.last_name = last_name;
    }

    pub fn set_description(&mut self, description: EmployeeDescription) {
        self.description = description;
    }

    pub fn set_job_title(&mut self, job_title: JobTitle) {
        self.job_title = job_title;
    }

    pub fn set_job_years(&mut self, job_years: Option<JobYears>) {
        self.job_years = job_years;
    }

    pub fn set_email(&mut self, email: Option<EmployeeEmail>) {
        self.email = email;
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.description == other.description
            && self.job_title == other.job_title
            && self.job_years == other.job_years
            && self.email == other.email
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first_name.hash(state);
        self.last_name.hash(state);
        self.description.hash(state);
        self.job_title.hash(state);
        self.job_years.hash(state);
        self.email.hash(state);
    }
}

// Consumers match this layout verbatim.
impl Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Employee{{id=")?;
        match &self.id {
            Some(id) => write!(f, "{}", id.as_ref())?,
            None => write!(f, "null")?,
        }
        write!(
            f,
            ", firstName='{}', lastName='{}', description='{}', jobTitle='{}'",
            self.first_name.as_ref(),
            self.last_name.as_ref(),
            self.description.as_ref(),
            self.job_title.as_ref(),
        )?;
        if let Some(job_years) = &self.job_years {
            write!(f, ", jobYears={}", job_years.as_ref())?;
        }
        if let Some(email) = &self.email {
            write!(f, ", email='{}'", email.as_ref())?;
        }
        write!(f, "}}")
    }
}
