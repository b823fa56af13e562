pub mod models {
    pub mod entry;
    pub mod fixture;
    pub mod team;
    pub mod tournament;
}

pub mod dto {
    pub mod criteria;
}

pub mod config;
pub mod error;
pub mod filter;
pub mod timezone;
pub mod timezone_cache;

// Re-export commonly used items
pub use error::{LeagueError, Result};
pub use config::FilterConfig;

// Re-export models
pub use models::{
    entry::{FilterableFixture, FixtureEntry},
    fixture::{Fixture, FixtureType, Score},
    team::TeamRef,
    tournament::TournamentFixture,
};

// Re-export DTOs
pub use dto::criteria::FilterCriteria;

// Re-export filtering
pub use filter::{
    build_fixture_filter, filter_fixtures, optionally_invert, DateBucket, Filter, FilterContext,
    FixtureFilter,
};
pub use timezone::{Clock, FixedClock, SystemClock};
