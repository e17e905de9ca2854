use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct JobTitle(String);

impl JobTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}

/// Years spent in the current job.
///
/// Carries no range check of its own; negative values are only rejected by
/// validating construction of an [`Employee`](crate::entity::Employee).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct JobYears(i32);

impl JobYears {
    pub fn new(years: impl Into<i32>) -> Self {
        Self(years.into())
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}
