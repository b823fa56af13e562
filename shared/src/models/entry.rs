use crate::models::fixture::{Fixture, FixtureType};
use crate::models::tournament::TournamentFixture;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What the fixture filters need to know about a candidate item
pub trait FilterableFixture {
    fn date(&self) -> NaiveDate;

    fn fixture_type(&self) -> FixtureType;

    /// Whether the team with this ID takes part
    fn involves_team(&self, team_id: &str) -> bool;
}

impl FilterableFixture for Fixture {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn fixture_type(&self) -> FixtureType {
        self.fixture_type
    }

    fn involves_team(&self, team_id: &str) -> bool {
        self.home.id == team_id || self.away.id == team_id
    }
}

impl FilterableFixture for TournamentFixture {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn fixture_type(&self) -> FixtureType {
        FixtureType::Tournament
    }

    fn involves_team(&self, team_id: &str) -> bool {
        self.teams.iter().any(|team| team.id == team_id)
    }
}

/// One row of the fixture list: either a two-team fixture or a tournament game day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FixtureEntry {
    Fixture(Fixture),
    Tournament(TournamentFixture),
}

impl FixtureEntry {
    pub fn id(&self) -> &str {
        match self {
            FixtureEntry::Fixture(fixture) => &fixture.id,
            FixtureEntry::Tournament(fixture) => &fixture.id,
        }
    }
}

impl FilterableFixture for FixtureEntry {
    fn date(&self) -> NaiveDate {
        match self {
            FixtureEntry::Fixture(fixture) => fixture.date(),
            FixtureEntry::Tournament(fixture) => fixture.date(),
        }
    }

    fn fixture_type(&self) -> FixtureType {
        match self {
            FixtureEntry::Fixture(fixture) => fixture.fixture_type(),
            FixtureEntry::Tournament(fixture) => fixture.fixture_type(),
        }
    }

    fn involves_team(&self, team_id: &str) -> bool {
        match self {
            FixtureEntry::Fixture(fixture) => fixture.involves_team(team_id),
            FixtureEntry::Tournament(fixture) => fixture.involves_team(team_id),
        }
    }
}

impl From<Fixture> for FixtureEntry {
    fn from(fixture: Fixture) -> Self {
        FixtureEntry::Fixture(fixture)
    }
}

impl From<TournamentFixture> for FixtureEntry {
    fn from(fixture: TournamentFixture) -> Self {
        FixtureEntry::Tournament(fixture)
    }
}
