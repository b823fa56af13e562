use serde::{Deserialize, Serialize};
use validator::Validate;

/// Reference to a team taking part in a fixture
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq, Hash)]
pub struct TeamRef {
    /// Team's ID (format: "team/{key}")
    #[validate(length(
        min = 1,
        max = 128,
        message = "Team ID is required and must be at most 128 characters"
    ))]
    pub id: String,

    /// Team's display name
    #[validate(length(
        min = 1,
        max = 100,
        message = "Team name is required and must be at most 100 characters"
    ))]
    pub name: String,
}

impl TeamRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
