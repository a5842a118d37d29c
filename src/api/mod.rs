/// Directory endpoint client module
///
/// This module handles the single outbound network call:
/// - Fetching the user list from the configured endpoint
/// - Classifying failures (transport, HTTP status, decode)
pub mod fetch;
