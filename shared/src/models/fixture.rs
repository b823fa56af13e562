use crate::error::{LeagueError, Result};
use crate::models::team::TeamRef;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Competition a fixture belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FixtureType {
    League,
    Knockout,
    Friendly,
    Tournament,
}

impl FixtureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureType::League => "league",
            FixtureType::Knockout => "knockout",
            FixtureType::Friendly => "friendly",
            FixtureType::Tournament => "tournament",
        }
    }
}

impl fmt::Display for FixtureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixtureType {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "league" => Ok(FixtureType::League),
            "knockout" => Ok(FixtureType::Knockout),
            "friendly" => Ok(FixtureType::Friendly),
            "tournament" => Ok(FixtureType::Tournament),
            other => Err(LeagueError::Validation(format!(
                "Unknown fixture type: {}",
                other
            ))),
        }
    }
}

/// Final score of a played fixture
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// A scheduled match between two teams
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// Fixture's ID (format: "fixture/{key}")
    #[validate(length(min = 1, message = "Fixture ID is required"))]
    pub id: String,

    /// Calendar day the fixture is played on, in the league timezone
    pub date: NaiveDate,

    /// Kick-off time, when already scheduled
    #[serde(default)]
    pub kick_off: Option<NaiveTime>,

    pub fixture_type: FixtureType,

    #[validate]
    pub home: TeamRef,

    #[validate]
    pub away: TeamRef,

    /// Venue name
    #[serde(default)]
    #[validate(length(max = 100, message = "Venue must be at most 100 characters"))]
    pub venue: Option<String>,

    #[serde(default)]
    pub score: Option<Score>,
}

impl Fixture {
    /// Creates a new fixture with validation
    pub fn new(
        id: String,
        date: NaiveDate,
        fixture_type: FixtureType,
        home: TeamRef,
        away: TeamRef,
    ) -> Result<Self> {
        let fixture = Self {
            id,
            date,
            kick_off: None,
            fixture_type,
            home,
            away,
            venue: None,
            score: None,
        };
        fixture.validate_fields()?;
        Ok(fixture)
    }

    /// Validates field constraints and that a team does not play itself
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()?;
        if self.fixture_type == FixtureType::Tournament {
            return Err(LeagueError::Validation(
                "Tournament games are stored as tournament fixtures".to_string(),
            ));
        }
        if self.home.id == self.away.id {
            return Err(LeagueError::Validation(format!(
                "Team {} cannot play itself",
                self.home.id
            )));
        }
        Ok(())
    }

    pub fn with_kick_off(mut self, kick_off: NaiveTime) -> Self {
        self.kick_off = Some(kick_off);
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.score = Some(Score { home, away });
        self
    }

    pub fn is_played(&self) -> bool {
        self.score.is_some()
    }
}
