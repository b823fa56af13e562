use crate::filter::{Filter, FilterContext};

const NEGATION_PREFIX: &str = "not(";
const NEGATION_SUFFIX: &str = ")";

/// Splits a criterion into (negated, inner value). `not(league)` gives `(true, "league")`.
pub fn split_negation(raw: &str) -> (bool, &str) {
    match raw
        .strip_prefix(NEGATION_PREFIX)
        .and_then(|rest| rest.strip_suffix(NEGATION_SUFFIX))
    {
        Some(inner) => (true, inner),
        None => (false, raw),
    }
}

/// Wraps a criterion value back into the negation form
pub fn negate_value(value: &str) -> String {
    format!("{}{}{}", NEGATION_PREFIX, value, NEGATION_SUFFIX)
}

/// Builds the filter for `raw`, inverting it when `raw` is negation-wrapped.
///
/// A negated criterion whose positive filter cannot be built negates `Null`
/// instead, so `not(...)` of an unknown value is still a filter (one that
/// matches nothing). Plain values delegate to `build` untouched.
pub fn optionally_invert<T, F>(
    build: F,
    raw: &str,
    ctx: &mut FilterContext,
    items: &[T],
) -> Option<Filter<T>>
where
    F: FnOnce(&str, &mut FilterContext, &[T]) -> Option<Filter<T>>,
{
    match split_negation(raw) {
        (true, inner) => {
            let positive = build(inner, ctx, items).unwrap_or_else(Filter::null);
            Some(Filter::negate(positive))
        }
        (false, value) => build(value, ctx, items),
    }
}
