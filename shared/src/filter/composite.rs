use crate::config::FilterConfig;
use crate::dto::criteria::FilterCriteria;
use crate::error::Result;
use crate::filter::date::build_date_filter;
use crate::filter::fixture_type::build_type_filter;
use crate::filter::invert::optionally_invert;
use crate::filter::team::build_team_filter;
use crate::filter::{Filter, FilterContext};
use crate::models::entry::FilterableFixture;
use crate::timezone::{league_today, Clock, SystemClock};
use chrono::NaiveDate;

/// Combines the date, type and team criteria into one filter.
///
/// Each criterion is built independently (honouring `not(...)`); criteria that
/// are unset or cannot be built contribute `Null`. `ctx` must be the context of
/// the pass that will evaluate the returned filter.
pub fn build_fixture_filter<T>(
    criteria: &FilterCriteria,
    today: NaiveDate,
    ctx: &mut FilterContext,
    items: &[T],
) -> Filter<T>
where
    T: FilterableFixture + 'static,
{
    let date = criteria.date.as_deref().and_then(|raw| {
        optionally_invert(
            |value, ctx, items| build_date_filter(value, today, ctx, items),
            raw,
            ctx,
            items,
        )
    });
    let fixture_type = criteria.fixture_type.as_deref().and_then(|raw| {
        optionally_invert(|value, _, _| build_type_filter(value), raw, ctx, items)
    });
    let team = criteria.team.as_deref().and_then(|raw| {
        optionally_invert(|value, _, _| build_team_filter(value), raw, ctx, items)
    });

    log::debug!(
        "Built fixture filter [{}] for {} over {} fixtures",
        criteria,
        today,
        items.len()
    );
    Filter::and(vec![
        date.unwrap_or_default(),
        fixture_type.unwrap_or_default(),
        team.unwrap_or_default(),
    ])
}

/// Runs one filter pass over `items` in their given order, keeping matches
pub fn filter_fixtures<'a, T>(
    criteria: &FilterCriteria,
    items: &'a [T],
    today: NaiveDate,
) -> Vec<&'a T>
where
    T: FilterableFixture + 'static,
{
    let mut ctx = FilterContext::new();
    let filter = build_fixture_filter(criteria, today, &mut ctx, items);
    let matched: Vec<&T> = items
        .iter()
        .filter(|item| {
            let keep = filter.evaluate(item, &mut ctx);
            let verdict = if keep { "kept" } else { "dropped" };
            log::trace!("Fixture on {} {}", item.date(), verdict);
            keep
        })
        .collect();
    log::debug!("Filter pass kept {} of {} fixtures", matched.len(), items.len());
    matched
}

/// Fixture-list filtering bound to a league's configuration and clock
pub struct FixtureFilter {
    config: FilterConfig,
    clock: Box<dyn Clock>,
}

impl FixtureFilter {
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock: Box::new(SystemClock),
        })
    }

    /// Replaces the wall clock, e.g. to pin "today" in tests
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn today(&self) -> Result<NaiveDate> {
        league_today(&*self.clock, &self.config.timezone)
    }

    /// Applies `criteria`, completed with the configured defaults, to `items`
    pub fn apply<'a, T>(&self, criteria: &FilterCriteria, items: &'a [T]) -> Result<Vec<&'a T>>
    where
        T: FilterableFixture + 'static,
    {
        let criteria = criteria.clone().with_defaults(&self.config);
        criteria.validate_fields()?;
        let today = self.today()?;
        Ok(filter_fixtures(&criteria, items, today))
    }

    /// Applies criteria read from a URL query string
    pub fn apply_query<'a, T>(&self, query: &str, items: &'a [T]) -> Result<Vec<&'a T>>
    where
        T: FilterableFixture + 'static,
    {
        self.apply(&FilterCriteria::from_query(query), items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeagueError;
    use crate::models::entry::FixtureEntry;
    use crate::models::fixture::{Fixture, FixtureType};
    use crate::models::team::TeamRef;
    use crate::models::tournament::TournamentFixture;
    use crate::timezone::FixedClock;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn today() -> NaiveDate {
        day(15)
    }

    fn fixture(
        id: &str,
        date: NaiveDate,
        fixture_type: FixtureType,
        home: &str,
        away: &str,
    ) -> FixtureEntry {
        Fixture::new(
            id.to_string(),
            date,
            fixture_type,
            TeamRef::new(home, home),
            TeamRef::new(away, away),
        )
        .unwrap()
        .into()
    }

    fn schedule() -> Vec<FixtureEntry> {
        vec![
            fixture("fixture/1", day(1), FixtureType::League, "team/rovers", "team/united"),
            fixture("fixture/2", day(8), FixtureType::Knockout, "team/city", "team/rovers"),
            fixture("fixture/3", day(15), FixtureType::League, "team/united", "team/city"),
            TournamentFixture::new(
                "tournament_fixture/1".to_string(),
                "tournament/may".to_string(),
                "May Cup".to_string(),
                day(18),
                vec![
                    TeamRef::new("team/rovers", "Rovers"),
                    TeamRef::new("team/athletic", "Athletic"),
                ],
            )
            .unwrap()
            .into(),
            fixture("fixture/4", day(22), FixtureType::League, "team/rovers", "team/city"),
        ]
    }

    fn ids(items: &[&FixtureEntry]) -> Vec<String> {
        items.iter().map(|item| item.id().to_string()).collect()
    }

    #[test]
    fn test_no_criteria_keeps_everything() {
        let items = schedule();
        let kept = filter_fixtures(&FilterCriteria::new(), &items, today());
        assert_eq!(kept.len(), items.len());
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let items = schedule();
        let criteria = FilterCriteria::new().with_date("future").with_team("team/rovers");
        let kept = filter_fixtures(&criteria, &items, today());
        assert_eq!(ids(&kept), vec!["tournament_fixture/1", "fixture/4"]);
    }

    #[test]
    fn test_last_and_next_over_schedule() {
        let items = schedule();
        let criteria = FilterCriteria::new().with_date("last+next");
        let kept = filter_fixtures(&criteria, &items, today());
        assert_eq!(
            ids(&kept),
            vec!["fixture/2", "fixture/3", "tournament_fixture/1"]
        );
    }

    #[test]
    fn test_negated_type_with_month() {
        let items = schedule();
        let criteria = FilterCriteria::new().with_date("2024-05").with_type("not(league)");
        let kept = filter_fixtures(&criteria, &items, today());
        assert_eq!(ids(&kept), vec!["fixture/2", "tournament_fixture/1"]);
    }

    #[test]
    fn test_unknown_criteria_match_everything() {
        let items = schedule();
        let criteria = FilterCriteria::new().with_date("someday").with_type("cup");
        let kept = filter_fixtures(&criteria, &items, today());
        assert_eq!(kept.len(), items.len());
    }

    #[test]
    fn test_negated_unknown_criterion_matches_nothing() {
        let items = schedule();
        let criteria = FilterCriteria::new().with_date("not(someday)");
        assert!(filter_fixtures(&criteria, &items, today()).is_empty());
    }

    #[test]
    fn test_built_tree_shape() {
        let items = schedule();
        let mut ctx = FilterContext::new();
        let criteria = FilterCriteria::new().with_type("not(friendly)");
        let filter = build_fixture_filter(&criteria, today(), &mut ctx, &items);
        assert_eq!(format!("{:?}", filter), "And([Null, Not(Leaf(..)), Null])");
    }

    #[test]
    fn test_fixture_filter_uses_league_day() {
        let config = FilterConfig {
            timezone: "America/Chicago".to_string(),
            ..FilterConfig::default()
        };
        // 2024-05-16 02:00 UTC is still the 15th in Chicago
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 16, 2, 0, 0).unwrap());
        let filter = FixtureFilter::new(config).unwrap().with_clock(clock);
        let items = schedule();

        assert_eq!(filter.today().unwrap(), today());
        let kept = filter.apply_query("date=past", &items).unwrap();
        assert_eq!(ids(&kept), vec!["fixture/1", "fixture/2"]);
    }

    #[test]
    fn test_fixture_filter_applies_defaults() {
        let config = FilterConfig {
            default_type: Some("knockout".to_string()),
            ..FilterConfig::default()
        };
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap());
        let filter = FixtureFilter::new(config).unwrap().with_clock(clock);
        let items = schedule();

        let kept = filter.apply(&FilterCriteria::new(), &items).unwrap();
        assert_eq!(ids(&kept), vec!["fixture/2"]);
        assert_eq!(filter.config().default_type.as_deref(), Some("knockout"));
    }

    #[test]
    fn test_fixture_filter_rejects_invalid_criteria() {
        let filter = FixtureFilter::new(FilterConfig::default()).unwrap();
        let items = schedule();
        let result = filter.apply(&FilterCriteria::new().with_team(""), &items);
        assert!(matches!(result, Err(LeagueError::Validation(_))));
    }

    #[test]
    fn test_fixture_filter_rejects_bad_timezone() {
        let config = FilterConfig {
            timezone: "Atlantis/Deep".to_string(),
            ..FilterConfig::default()
        };
        assert!(matches!(
            FixtureFilter::new(config),
            Err(LeagueError::InvalidTimezone(_))
        ));
    }
}
