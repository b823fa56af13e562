use crate::error::{LeagueError, Result};
use crate::models::team::TeamRef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A tournament game day involving any number of teams
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentFixture {
    /// Tournament fixture's ID (format: "tournament_fixture/{key}")
    #[validate(length(min = 1, message = "Tournament fixture ID is required"))]
    pub id: String,

    /// ID of the tournament this game day belongs to
    #[validate(length(min = 1, message = "Tournament ID is required"))]
    pub tournament_id: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Name is required and must be at most 200 characters"
    ))]
    pub name: String,

    pub date: NaiveDate,

    /// Participating teams
    #[validate]
    #[serde(default)]
    pub teams: Vec<TeamRef>,
}

impl TournamentFixture {
    /// Creates a new tournament fixture with validation
    pub fn new(
        id: String,
        tournament_id: String,
        name: String,
        date: NaiveDate,
        teams: Vec<TeamRef>,
    ) -> Result<Self> {
        let fixture = Self {
            id,
            tournament_id,
            name,
            date,
            teams,
        };
        fixture.validate_fields()?;
        Ok(fixture)
    }

    /// Validates field constraints and that no team is entered twice
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()?;
        for (index, team) in self.teams.iter().enumerate() {
            if self.teams[..index].iter().any(|t| t.id == team.id) {
                return Err(LeagueError::Validation(format!(
                    "Team {} is entered twice",
                    team.id
                )));
            }
        }
        Ok(())
    }
}
