use std::path::PathBuf;

use error_stack::{Report, ResultExt};
use kernel::prelude::entity::Revision;
use kernel::KernelError;

static EMPLOYEES: &str = "PAYROLL_EMPLOYEES";
static REVISION: &str = "PAYROLL_REVISION";
static OUTPUT: &str = "PAYROLL_OUTPUT";
static LOG_DIR: &str = "PAYROLL_LOG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub employees: PathBuf,
    pub revision: Revision,
    pub output: OutputFormat,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the process environment, `.env` included. `path` wins over `PAYROLL_EMPLOYEES`.
    pub fn load(path: Option<String>) -> error_stack::Result<Self, KernelError> {
        Self::from_lookup(path, |key| dotenvy::var(key).ok())
    }

    pub fn from_lookup(
        path: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let employees = path.or_else(|| lookup(EMPLOYEES)).ok_or_else(|| {
            Report::new(KernelError::InvalidArgument)
                .attach_printable(format!("pass an input path or set {EMPLOYEES}"))
        })?;
        let revision = match lookup(REVISION) {
            Some(revision) => revision
                .parse::<Revision>()
                .attach_printable_lazy(|| format!("while reading {REVISION}"))?,
            None => Revision::default(),
        };
        let output = match lookup(OUTPUT).as_deref().map(str::trim) {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(Report::new(KernelError::InvalidArgument)
                    .attach_printable(format!("unknown {OUTPUT} `{other}`")))
            }
        };
        Ok(Self {
            employees: PathBuf::from(employees),
            revision,
            output,
            log_dir: lookup(LOG_DIR).map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use kernel::prelude::entity::Revision;
    use kernel::KernelError;

    use super::{Config, OutputFormat};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults() -> error_stack::Result<(), KernelError> {
        let config = Config::from_lookup(None, lookup(&[("PAYROLL_EMPLOYEES", "staff.json")]))?;
        assert_eq!(config.employees, PathBuf::from("staff.json"));
        assert_eq!(config.revision, Revision::Email);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.log_dir.is_none());
        Ok(())
    }

    #[test]
    fn argument_overrides_environment() -> error_stack::Result<(), KernelError> {
        let config = Config::from_lookup(
            Some("cli.json".into()),
            lookup(&[
                ("PAYROLL_EMPLOYEES", "staff.json"),
                ("PAYROLL_REVISION", "basic"),
                ("PAYROLL_OUTPUT", "json"),
                ("PAYROLL_LOG_DIR", "./logs"),
            ]),
        )?;
        assert_eq!(config.employees, PathBuf::from("cli.json"));
        assert_eq!(config.revision, Revision::Basic);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_dir, Some(PathBuf::from("./logs")));
        Ok(())
    }

    #[test]
    fn missing_input_is_rejected() {
        let report = Config::from_lookup(None, lookup(&[])).unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidArgument
        ));
    }

    #[test]
    fn unknown_revision_is_rejected() {
        let report = Config::from_lookup(
            Some("staff.json".into()),
            lookup(&[("PAYROLL_REVISION", "v9")]),
        )
        .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidArgument
        ));
    }
}
