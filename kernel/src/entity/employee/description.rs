use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct EmployeeDescription(String);

impl EmployeeDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}
