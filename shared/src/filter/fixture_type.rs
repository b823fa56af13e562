use crate::filter::Filter;
use crate::models::entry::FilterableFixture;
use crate::models::fixture::FixtureType;

/// Value of the type criterion that selects every competition
pub const ALL_TYPES: &str = "all";

/// Builds the fixture-type filter, or `None` for `all` and unknown types
pub fn build_type_filter<T>(value: &str) -> Option<Filter<T>>
where
    T: FilterableFixture + 'static,
{
    if value.is_empty() || value == ALL_TYPES {
        return None;
    }
    match value.parse::<FixtureType>() {
        Ok(fixture_type) => Some(Filter::matching(move |item: &T| {
            item.fixture_type() == fixture_type
        })),
        Err(e) => {
            log::warn!("{}, matching all fixtures", e);
            None
        }
    }
}
