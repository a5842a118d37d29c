use std::collections::BTreeSet;

use super::data::User;

/// Current filter constraints chosen by the user
///
/// All three fields are independent. An empty string always means
/// "no constraint on this field", never "match the empty string".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text name search, matched case-insensitively as a substring.
    /// Whitespace is significant (no trimming).
    pub search: String,
    /// Exact-match city constraint, case-sensitive
    pub city: String,
    /// Exact-match company name constraint, case-sensitive
    pub company: String,
}

impl FilterState {
    /// Create the all-empty default filter state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any constraint is currently set
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.city.is_empty() || !self.company.is_empty()
    }

    /// Reset all constraints to the all-empty default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Distinct values of the filterable fields, for the selector widgets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facets {
    /// Distinct cities, sorted ascending
    pub cities: Vec<String>,
    /// Distinct company names, sorted ascending
    pub companies: Vec<String>,
}

/// Derive the selector facets from the full record set.
///
/// Duplicates are collapsed by exact string equality and the result is
/// sorted lexicographically ascending, so the selector ordering is
/// stable across recomputations. Empty input yields empty facets.
pub fn derive_facets(users: &[User]) -> Facets {
    let cities: BTreeSet<&str> = users.iter().map(|u| u.address.city.as_str()).collect();
    let companies: BTreeSet<&str> = users.iter().map(|u| u.company.name.as_str()).collect();

    Facets {
        cities: cities.into_iter().map(String::from).collect(),
        companies: companies.into_iter().map(String::from).collect(),
    }
}

/// Apply the current filters to the full record set.
///
/// Pure and total: any combination of filter values is valid. The output
/// preserves the relative order of the input (stable filter, no re-sort).
/// With the all-empty filter state this is the identity.
pub fn apply_filters<'a>(users: &'a [User], filters: &FilterState) -> Vec<&'a User> {
    let search = filters.search.to_lowercase();

    users
        .iter()
        .filter(|user| {
            let matches_search = user.name.to_lowercase().contains(&search);
            let matches_city = filters.city.is_empty() || user.address.city == filters.city;
            let matches_company =
                filters.company.is_empty() || user.company.name == filters.company;

            matches_search && matches_city && matches_company
        })
        .collect()
}
