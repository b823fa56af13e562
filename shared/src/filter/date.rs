use crate::filter::{Filter, FilterContext};
use crate::models::entry::FilterableFixture;
use crate::timezone::next_day;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YEAR_MONTH_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}$").unwrap();
}

/// Date criterion of the fixture list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateBucket {
    /// Before today
    Past,
    /// Tomorrow onwards
    Future,
    /// Today, the latest past fixture day and the next fixture day
    LastAndNext,
    /// A `YYYY-MM` fragment matched against the `YYYY-MM-DD` date
    Month(String),
}

impl DateBucket {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "past" => Some(DateBucket::Past),
            "future" => Some(DateBucket::Future),
            "last+next" => Some(DateBucket::LastAndNext),
            fragment if YEAR_MONTH_REGEX.is_match(fragment) => {
                Some(DateBucket::Month(fragment.to_string()))
            }
            _ => None,
        }
    }
}

/// Latest fixture day strictly before `today`, if any
pub fn latest_past_date<T: FilterableFixture>(items: &[T], today: NaiveDate) -> Option<NaiveDate> {
    items
        .iter()
        .map(FilterableFixture::date)
        .filter(|date| *date < today)
        .max()
}

/// Builds the date filter for `value`, or `None` when the value is not a known bucket.
///
/// `last+next` resolves its past anchor from `items` into `ctx` right away and
/// claims its future anchor lazily during evaluation, so the first future
/// fixture day evaluated in the pass is the one that matches.
pub fn build_date_filter<T>(
    value: &str,
    today: NaiveDate,
    ctx: &mut FilterContext,
    items: &[T],
) -> Option<Filter<T>>
where
    T: FilterableFixture + 'static,
{
    let Some(bucket) = DateBucket::parse(value) else {
        log::warn!("Unrecognized date filter {:?}, matching all fixtures", value);
        return None;
    };
    let tomorrow = next_day(today);

    let filter = match bucket {
        DateBucket::Past => Filter::matching(move |item: &T| item.date() < today),
        DateBucket::Future => Filter::matching(move |item: &T| item.date() >= tomorrow),
        DateBucket::LastAndNext => {
            let last_past = ctx.last_past_date(|| latest_past_date(items, today));
            Filter::leaf(move |item: &T, ctx: &mut FilterContext| {
                let date = item.date();
                if date == today || Some(date) == last_past {
                    return true;
                }
                date >= tomorrow && ctx.claim_next_future(date)
            })
        }
        DateBucket::Month(fragment) => Filter::matching(move |item: &T| {
            item.date()
                .format("%Y-%m-%d")
                .to_string()
                .starts_with(&fragment)
        }),
    };
    Some(filter)
}
