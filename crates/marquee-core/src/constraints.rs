//! Filter state applied on top of the free-text query.
//!
//! An absent constraint is modelled as `None` (or an empty member-count
//! selection) rather than a sentinel value, so "no city selected" can never
//! be confused with a city that happens to be called "all".

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A city in the service's token form: lower-case, underscores for spaces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityToken(String);

impl CityToken {
    /// Normalise a user-facing city name (`"North Carolina"`, `"  - Paris"`)
    /// into token form (`north_carolina`, `paris`).
    pub fn new(city: &str) -> Self {
        let cleaned = city
            .trim()
            .trim_start_matches('-')
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        Self(cleaned)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of accepted member counts. Empty means "no member filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCountFilter(BTreeSet<usize>);

impl MemberCountFilter {
    pub fn new<I: IntoIterator<Item = usize>>(counts: I) -> Self {
        Self(counts.into_iter().collect())
    }

    /// Toggle a count the way a checkbox would.
    pub fn set(&mut self, count: usize, checked: bool) {
        if checked {
            self.0.insert(count);
        } else {
            self.0.remove(&count);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn accepts(&self, member_count: usize) -> bool {
        self.0.is_empty() || self.0.contains(&member_count)
    }

    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

/// The structured part of the filter state, passed by value into every
/// filter call alongside the free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    pub member_counts: MemberCountFilter,

    /// Only keep artists that performed in this city.
    pub city: Option<CityToken>,

    /// Only keep artists formed in exactly this year.
    pub year: Option<i32>,
}

impl ConstraintSet {
    #[must_use]
    pub fn with_member_counts<I: IntoIterator<Item = usize>>(mut self, counts: I) -> Self {
        self.member_counts = MemberCountFilter::new(counts);
        self
    }

    #[must_use]
    pub fn with_city(mut self, city: &str) -> Self {
        let token = CityToken::new(city);
        self.city = (!token.is_empty()).then_some(token);
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// True when no member, city, or year constraint is active.
    pub fn is_unconstrained(&self) -> bool {
        self.member_counts.is_empty() && self.city.is_none() && self.year.is_none()
    }

    /// True when constraints beyond the member count are active.
    pub fn narrows_beyond_members(&self) -> bool {
        self.city.is_some() || self.year.is_some()
    }
}
