use crate::filter::Filter;
use crate::models::entry::FilterableFixture;

/// Builds a filter keeping fixtures the team plays in, or `None` for a blank team
pub fn build_team_filter<T>(team_id: &str) -> Option<Filter<T>>
where
    T: FilterableFixture + 'static,
{
    let team_id = team_id.trim();
    if team_id.is_empty() {
        return None;
    }
    let team_id = team_id.to_string();
    Some(Filter::matching(move |item: &T| item.involves_team(&team_id)))
}
