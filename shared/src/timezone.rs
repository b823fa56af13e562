use crate::error::{LeagueError, Result};
use crate::timezone_cache::convert_to_timezone_cached;
use chrono::{DateTime, Days, NaiveDate, Utc};

/// Source of the current instant, injectable so filter passes can be pinned to a day
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The league's current calendar day in its own timezone
pub fn league_today(clock: &dyn Clock, timezone_name: &str) -> Result<NaiveDate> {
    convert_to_timezone_cached(clock.now(), timezone_name)
        .map(|local| local.date_naive())
        .ok_or_else(|| LeagueError::InvalidTimezone(timezone_name.to_string()))
}

/// The calendar day after `day`, saturating at the last representable date
pub fn next_day(day: NaiveDate) -> NaiveDate {
    day.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
}
