/// Reusable view widgets
///
/// This module holds the widgets the main view composes:
/// - The user card (card.rs)
pub mod card;
