//! Composable boolean filters over fixture lists.
//!
//! A [`Filter`] is a small expression tree: leaves wrap predicates, `And`/`Or`
//! combine children in order, `Not` inverts one child and `Null` matches
//! everything. Trees are built once per filter pass and evaluated item by item
//! against a shared [`FilterContext`].

pub mod composite;
pub mod context;
pub mod date;
pub mod fixture_type;
pub mod invert;
pub mod team;

use crate::error::{LeagueError, Result};
use std::fmt;

pub use composite::{build_fixture_filter, filter_fixtures, FixtureFilter};
pub use context::FilterContext;
pub use date::{build_date_filter, DateBucket};
pub use fixture_type::build_type_filter;
pub use invert::{optionally_invert, split_negation};
pub use team::build_team_filter;

/// Predicate wrapped by a leaf node
pub type Predicate<T> = Box<dyn Fn(&T, &mut FilterContext) -> bool>;

pub enum Filter<T> {
    Leaf(Predicate<T>),
    And(Vec<Filter<T>>),
    Or(Vec<Filter<T>>),
    Not(Box<Filter<T>>),
    Null,
}

impl<T> Filter<T> {
    /// Wraps a predicate that may consult the pass context
    pub fn leaf<P>(predicate: P) -> Self
    where
        P: Fn(&T, &mut FilterContext) -> bool + 'static,
    {
        Filter::Leaf(Box::new(predicate))
    }

    /// Wraps a predicate that only looks at the item
    pub fn matching<P>(predicate: P) -> Self
    where
        T: 'static,
        P: Fn(&T) -> bool + 'static,
    {
        Filter::Leaf(Box::new(move |item: &T, _: &mut FilterContext| predicate(item)))
    }

    pub fn and(children: Vec<Filter<T>>) -> Self {
        Filter::And(children)
    }

    pub fn or(children: Vec<Filter<T>>) -> Self {
        Filter::Or(children)
    }

    pub fn negate(child: Filter<T>) -> Self {
        Filter::Not(Box::new(child))
    }

    pub fn null() -> Self {
        Filter::Null
    }

    pub fn try_leaf<P>(predicate: Option<P>) -> Result<Self>
    where
        P: Fn(&T, &mut FilterContext) -> bool + 'static,
    {
        predicate
            .map(Self::leaf)
            .ok_or_else(|| LeagueError::invalid_argument("leaf predicate"))
    }

    pub fn try_and(children: Option<Vec<Filter<T>>>) -> Result<Self> {
        children
            .map(Self::and)
            .ok_or_else(|| LeagueError::invalid_argument("and children"))
    }

    pub fn try_or(children: Option<Vec<Filter<T>>>) -> Result<Self> {
        children
            .map(Self::or)
            .ok_or_else(|| LeagueError::invalid_argument("or children"))
    }

    pub fn try_not(child: Option<Filter<T>>) -> Result<Self> {
        child
            .map(Self::negate)
            .ok_or_else(|| LeagueError::invalid_argument("not child"))
    }

    /// Evaluates the tree for one item. `And`/`Or` short-circuit left to right,
    /// so stateful leaves only see the items that reach them.
    pub fn evaluate(&self, item: &T, ctx: &mut FilterContext) -> bool {
        match self {
            Filter::Leaf(predicate) => predicate(item, ctx),
            Filter::And(children) => children.iter().all(|child| child.evaluate(item, ctx)),
            Filter::Or(children) => children.iter().any(|child| child.evaluate(item, ctx)),
            Filter::Not(child) => !child.evaluate(item, ctx),
            Filter::Null => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Filter::Null)
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::Null
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Leaf(_) => f.write_str("Leaf(..)"),
            Filter::And(children) => f.debug_tuple("And").field(children).finish(),
            Filter::Or(children) => f.debug_tuple("Or").field(children).finish(),
            Filter::Not(child) => f.debug_tuple("Not").field(child).finish(),
            Filter::Null => f.write_str("Null"),
        }
    }
}
