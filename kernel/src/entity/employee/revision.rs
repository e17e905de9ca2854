use std::fmt::Display;
use std::str::FromStr;

use error_stack::Report;

use crate::KernelError;

/// Field contract an [`Employee`](crate::entity::Employee) is validated against.
///
/// Every revision requires the four descriptive text fields. `JobYears` adds a
/// non-negative `jobYears`, `Email` additionally requires an `email`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Revision {
    Basic,
    JobYears,
    #[default]
    Email,
}

impl Revision {
    pub fn has_job_years(&self) -> bool {
        matches!(self, Revision::JobYears | Revision::Email)
    }

    pub fn has_email(&self) -> bool {
        matches!(self, Revision::Email)
    }
}

impl Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Basic => write!(f, "basic"),
            Revision::JobYears => write!(f, "job-years"),
            Revision::Email => write!(f, "email"),
        }
    }
}

impl FromStr for Revision {
    type Err = Report<KernelError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "1" => Ok(Revision::Basic),
            "job-years" | "2" => Ok(Revision::JobYears),
            "email" | "3" => Ok(Revision::Email),
            other => Err(Report::new(KernelError::InvalidArgument)
                .attach_printable(format!("unknown employee revision `{other}`"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Revision;
    use crate::KernelError;

    #[test]
    fn parse_names_and_numbers() {
        assert_eq!("basic".parse::<Revision>().ok(), Some(Revision::Basic));
        assert_eq!("2".parse::<Revision>().ok(), Some(Revision::JobYears));
        assert_eq!(" Email ".parse::<Revision>().ok(), Some(Revision::Email));
    }

    #[test]
    fn parse_rejects_unknown() {
        let report = "v4".parse::<Revision>().unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidArgument
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for revision in [Revision::Basic, Revision::JobYears, Revision::Email] {
            assert_eq!(revision.to_string().parse::<Revision>().ok(), Some(revision));
        }
    }

    #[test]
    fn later_revisions_carry_more_fields() {
        assert!(!Revision::Basic.has_job_years());
        assert!(Revision::JobYears.has_job_years());
        assert!(!Revision::JobYears.has_email());
        assert!(Revision::Email.has_job_years() && Revision::Email.has_email());
        assert_eq!(Revision::default(), Revision::Email);
    }
}
