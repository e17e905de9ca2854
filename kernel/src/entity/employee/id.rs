use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
