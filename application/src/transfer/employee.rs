use serde::{Deserialize, Serialize};

use kernel::prelude::entity::{
    DestructEmployee, Employee, EmployeeDescription, EmployeeDraft, EmployeeEmail, EmployeeId,
    FirstName, JobTitle, JobYears, LastName,
};

/// Incoming employee record. Every field may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_years: Option<i32>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<CreateEmployeeDto> for EmployeeDraft {
    fn from(value: CreateEmployeeDto) -> Self {
        Self {
            id: value.id.map(EmployeeId::new),
            first_name: value.first_name.map(FirstName::new),
            last_name: value.last_name.map(LastName::new),
            description: value.description.map(EmployeeDescription::new),
            job_title: value.job_title.map(JobTitle::new),
            job_years: value.job_years.map(JobYears::new),
            email: value.email.map(EmployeeEmail::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub job_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_years: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<Employee> for EmployeeDto {
    fn from(value: Employee) -> Self {
        let DestructEmployee {
            id,
            first_name,
            last_name,
            description,
            job_title,
            job_years,
            email,
        } = value.into_destruct();
        Self {
            id: id.map(Into::into),
            first_name: first_name.into(),
            last_name: last_name.into(),
            description: description.into(),
            job_title: job_title.into(),
            job_years: job_years.map(Into::into),
            email: email.map(Into::into),
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{Employee, EmployeeDraft, Revision};
    use kernel::KernelError;

    use super::{CreateEmployeeDto, EmployeeDto};

    #[test]
    fn decode_camel_case_with_nulls() -> Result<(), serde_json::Error> {
        let dto: CreateEmployeeDto = serde_json::from_str(
            r#"{"firstName":"John","lastName":null,"description":"Description","jobTitle":"Developer","jobYears":5}"#,
        )?;
        assert_eq!(dto.first_name.as_deref(), Some("John"));
        assert!(dto.last_name.is_none());
        assert!(dto.email.is_none());
        assert_eq!(dto.job_years, Some(5));
        Ok(())
    }

    #[test]
    fn draft_from_dto() {
        let dto = CreateEmployeeDto {
            id: Some(3),
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            description: Some("Description".into()),
            job_title: Some("Developer".into()),
            job_years: Some(5),
            email: None,
        };
        let draft = EmployeeDraft::from(dto);
        assert!(draft.validate_arguments(Revision::JobYears));
        assert!(!draft.validate_arguments(Revision::Email));
        assert_eq!(draft.id.map(i64::from), Some(3));
    }

    #[test]
    fn encode_skips_fields_outside_revision() -> error_stack::Result<(), KernelError> {
        let employee = Employee::new(
            Revision::Basic,
            EmployeeDraft::new("John", "Doe", "Description", "Developer"),
        )?;
        let dto = EmployeeDto::from(employee);
        assert_eq!(dto.first_name, "John");
        let json = serde_json::to_string(&dto).map_err(|_| KernelError::Internal)?;
        assert_eq!(
            json,
            r#"{"id":null,"firstName":"John","lastName":"Doe","description":"Description","jobTitle":"Developer"}"#
        );
        Ok(())
    }
}
