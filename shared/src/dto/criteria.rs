use crate::config::FilterConfig;
use crate::error::Result;
use crate::filter::invert::split_negation;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Criteria chosen in the fixture-list filter controls.
///
/// Each value may be wrapped as `not(...)` to invert it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct FilterCriteria {
    /// `past`, `future`, `last+next` or a `YYYY-MM` month
    #[validate(length(max = 64, message = "Date filter must be at most 64 characters"))]
    pub date: Option<String>,

    /// `league`, `knockout`, `friendly`, `tournament` or `all`
    #[serde(rename = "type")]
    #[validate(length(max = 64, message = "Type filter must be at most 64 characters"))]
    pub fixture_type: Option<String>,

    /// Team ID
    #[validate(length(
        min = 1,
        max = 128,
        message = "Team filter must be between 1 and 128 characters"
    ))]
    pub team: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_type(mut self, fixture_type: impl Into<String>) -> Self {
        self.fixture_type = Some(fixture_type.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Parses `date=..&type=..&team=..` from a URL query string.
    ///
    /// Values are percent-decoded; `+` is kept literally since `last+next` is a
    /// bucket name. Unknown keys are ignored, empty values leave the criterion
    /// unset and a repeated key keeps its last value.
    pub fn from_query(query: &str) -> Self {
        let mut criteria = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = match urlencoding::decode(value) {
                Ok(decoded) => decoded.into_owned(),
                Err(e) => {
                    log::warn!("Skipping undecodable filter value for {}: {}", key, e);
                    continue;
                }
            };
            let value = (!value.is_empty()).then_some(value);
            match key {
                "date" => criteria.date = value,
                "type" => criteria.fixture_type = value,
                "team" => criteria.team = value,
                _ => {}
            }
        }
        criteria
    }

    /// Renders the criteria as a query string, percent-encoding values
    pub fn to_query(&self) -> String {
        [
            ("date", &self.date),
            ("type", &self.fixture_type),
            ("team", &self.team),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&")
    }

    /// Fills criteria the caller left unset from the configured defaults
    pub fn with_defaults(mut self, config: &FilterConfig) -> Self {
        if self.date.is_none() {
            self.date = config.default_date.clone();
        }
        if self.fixture_type.is_none() {
            self.fixture_type = config.default_type.clone();
        }
        self
    }

    pub fn validate_fields(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }

    /// Number of criteria set, for the filter badge
    pub fn active_count(&self) -> usize {
        [&self.date, &self.fixture_type, &self.team]
            .iter()
            .filter(|value| value.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Whether a criterion value is wrapped as `not(...)`
    pub fn is_negated(raw: &str) -> bool {
        split_negation(raw).0
    }

    /// The criterion value without its `not(...)` wrapper, for filter chips
    pub fn strip_negation(raw: &str) -> &str {
        split_negation(raw).1
    }
}

impl fmt::Display for FilterCriteria {
    /// Human readable summary, e.g. `date=last+next type!=league`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        for (key, value) in [
            ("date", &self.date),
            ("type", &self.fixture_type),
            ("team", &self.team),
        ] {
            if let Some(raw) = value {
                let (negated, inner) = split_negation(raw);
                let op = if negated { "!=" } else { "=" };
                parts.push(format!("{}{}{}", key, op, inner));
            }
        }
        if parts.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}
