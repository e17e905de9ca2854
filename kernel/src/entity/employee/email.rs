use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct EmployeeEmail(String);

impl EmployeeEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}
