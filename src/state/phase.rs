use super::data::User;
use super::filters::{derive_facets, Facets};

/// The fetched record set together with its derived facets.
///
/// Facets are computed once when the record set is created, so they are
/// recomputed exactly when the record set changes and never drift from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    /// All fetched users, in server order
    pub users: Vec<User>,
    /// Distinct cities and companies for the selector widgets
    pub facets: Facets,
}

impl Directory {
    /// Wrap a freshly fetched record set and derive its facets
    pub fn new(users: Vec<User>) -> Self {
        let facets = derive_facets(&users);
        Directory { users, facets }
    }
}

/// Lifecycle of the record set, as one tagged variant.
///
/// Modeling the phases this way makes illegal combinations (loading and
/// error at the same time) unrepresentable.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    /// Before the fetch has been issued
    #[default]
    Idle,
    /// The fetch is in flight
    Loading,
    /// The fetch succeeded and the directory is browsable
    Ready(Directory),
    /// The fetch failed; holds the user-facing message
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Address, Company};

    #[test]
    fn test_directory_derives_facets_on_creation() {
        let users = vec![User {
            id: 1,
            name: "Ana Smith".to_string(),
            username: "ana.smith".to_string(),
            email: "ana@example.com".to_string(),
            phone: "555-0100".to_string(),
            website: "ana.example.org".to_string(),
            address: Address {
                city: "New York".to_string(),
            },
            company: Company {
                name: "Acme Corp".to_string(),
            },
        }];

        let directory = Directory::new(users);

        assert_eq!(directory.facets.cities, vec!["New York"]);
        assert_eq!(directory.facets.companies, vec!["Acme Corp"]);
    }

    #[test]
    fn test_default_phase_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }
}
