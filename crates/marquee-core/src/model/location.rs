//! Performance locations attached to an artist.
//!
//! The upstream service reports locations as `city-country` tokens with
//! underscores standing in for spaces (`north_carolina-usa`). Tokens are
//! kept in their raw lower-case form for substring matching and split into
//! city and country parts when the token is well formed.

use serde::{Deserialize, Serialize};

use crate::constraints::CityToken;
use crate::error::{Error, Result};

/// A single `city-country` location token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    raw: String,
    city: Option<String>,
    country: Option<String>,
}

impl Location {
    /// Parse a well-formed `city-country` token.
    ///
    /// # Errors
    /// Returns [`Error::InvalidData`] when the token has no `-` separator or
    /// either side is empty.
    pub fn parse(token: &str) -> Result<Self> {
        let raw = token.trim().to_lowercase();
        let (city, country) = raw
            .rsplit_once('-')
            .filter(|(city, country)| !city.is_empty() && !country.is_empty())
            .ok_or_else(|| Error::InvalidData(format!("malformed location token: {token}")))?;

        Ok(Self {
            city: Some(city.to_string()),
            country: Some(country.to_string()),
            raw,
        })
    }

    /// Build a location from any token, keeping malformed ones as raw text
    /// so they still take part in substring matching.
    pub fn from_raw(token: &str) -> Self {
        Self::parse(token).unwrap_or_else(|_| {
            log::debug!("Keeping malformed location token as raw text: {}", token);
            Self {
                raw: token.trim().to_lowercase(),
                city: None,
                country: None,
            }
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// City part in token form (`north_carolina`).
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Country part in token form (`usa`).
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// City as shown to users: `north_carolina` becomes `North Carolina`.
    pub fn city_display(&self) -> Option<String> {
        self.city.as_deref().map(title_case)
    }

    /// Country as shown to users, upper-cased.
    pub fn country_display(&self) -> Option<String> {
        self.country.as_deref().map(str::to_uppercase)
    }

    /// Case-insensitive substring match against the raw token. Spaces in
    /// the needle also match the underscores the service uses.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.raw.contains(&needle) || self.raw.contains(&needle.replace(' ', "_"))
    }

    /// Whether the whole `city-country` token contains the selected place.
    /// A country (`usa`) or part of a city name (`york`) selects every
    /// location that mentions it.
    pub fn is_in_city(&self, city: &CityToken) -> bool {
        self.raw.contains(city.as_str())
    }
}

fn title_case(token: &str) -> String {
    token
        .split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The performance locations of one artist.
///
/// An artist without a cached `LocationSet` has simply not been enriched
/// yet; an empty set means the service reported no locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSet {
    locations: Vec<Location>,
}

impl LocationSet {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Build a set from raw service tokens, dropping exact duplicates.
    pub fn from_raw<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locations: Vec<Location> = Vec::new();
        for token in tokens {
            let location = Location::from_raw(token.as_ref());
            if !locations.contains(&location) {
                locations.push(location);
            }
        }
        Self { locations }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// True when any location contains `needle` (case-insensitive).
    pub fn matches(&self, needle: &str) -> bool {
        self.locations.iter().any(|location| location.matches(needle))
    }

    pub fn contains_city(&self, city: &CityToken) -> bool {
        self.locations.iter().any(|location| location.is_in_city(city))
    }
}

impl<'a> IntoIterator for &'a LocationSet {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_token() {
        let location = Location::parse("north_carolina-usa").unwrap();
        assert_eq!(location.city(), Some("north_carolina"));
        assert_eq!(location.country(), Some("usa"));
        assert_eq!(location.raw(), "north_carolina-usa");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!(Location::parse("london").is_err());
        assert!(Location::parse("-uk").is_err());
        assert!(Location::parse("london-").is_err());
    }

    #[test]
    fn test_from_raw_keeps_malformed_token() {
        let location = Location::from_raw("Somewhere");
        assert_eq!(location.raw(), "somewhere");
        assert!(location.city().is_none());
        assert!(location.matches("where"));
    }

    #[test]
    fn test_display_forms() {
        let location = Location::parse("north_carolina-usa").unwrap();
        assert_eq!(location.city_display().as_deref(), Some("North Carolina"));
        assert_eq!(location.country_display().as_deref(), Some("USA"));
    }

    #[test]
    fn test_matches_is_case_insensitive_and_space_tolerant() {
        let location = Location::parse("new_york-usa").unwrap();
        assert!(location.matches("NEW"));
        assert!(location.matches("new york"));
        assert!(location.matches("usa"));
        assert!(!location.matches("paris"));
    }

    #[test]
    fn test_is_in_city_matches_anywhere_in_token() {
        let location = Location::parse("new_york-usa").unwrap();
        assert!(location.is_in_city(&CityToken::new("New York")));
        assert!(location.is_in_city(&CityToken::new("york")));
        assert!(location.is_in_city(&CityToken::new("USA")));
        assert!(!location.is_in_city(&CityToken::new("london")));
    }

    #[test]
    fn test_location_set_dedups_tokens() {
        let set = LocationSet::from_raw(["london-uk", "london-uk", "paris-france"]);
        assert_eq!(set.len(), 2);
        assert!(set.matches("paris"));
        assert!(set.contains_city(&CityToken::new("paris")));
        assert!(!set.contains_city(&CityToken::new("berlin")));
    }

    #[test]
    fn test_empty_location_set() {
        let set = LocationSet::default();
        assert!(set.is_empty());
        assert!(!set.matches("anything"));
    }
}
