/// State management module
///
/// This module holds all application state:
/// - The user record data model (data.rs)
/// - Filter state, facet derivation and the filter predicate (filters.rs)
/// - The record-set lifecycle phases (phase.rs)
pub mod data;
pub mod filters;
pub mod phase;
