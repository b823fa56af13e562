use crate::error::{LeagueError, Result};
use crate::timezone_cache::get_cached_timezone;
use serde::{Deserialize, Serialize};

/// Default timezone for leagues
fn default_timezone() -> String {
    "UTC".to_string()
}

/// Settings for fixture-list filtering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// League timezone (IANA name) that decides which day is "today"
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Date criterion used when a query does not set one
    #[serde(default)]
    pub default_date: Option<String>,

    /// Fixture-type criterion used when a query does not set one
    #[serde(default)]
    pub default_type: Option<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            default_date: None,
            default_type: None,
        }
    }
}

impl FilterConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the timezone resolves
    pub fn validate(&self) -> Result<()> {
        get_cached_timezone(&self.timezone)
            .map(|_| ())
            .ok_or_else(|| LeagueError::InvalidTimezone(self.timezone.clone()))
    }
}
