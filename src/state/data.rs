use serde::Deserialize;

/// Represents a single user record fetched from the directory endpoint.
///
/// Records are immutable after fetch: the whole set is replaced on a
/// re-fetch, individual records are never patched. Extra JSON fields
/// sent by the server (street, zipcode, catchPhrase, ...) are ignored
/// during decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    /// Unique ID assigned by the server
    pub id: i64,
    /// Display name (e.g., "Leanne Graham")
    pub name: String,
    /// Handle without the leading '@'
    pub username: String,
    /// Contact email
    pub email: String,
    /// Phone number, free-form
    pub phone: String,
    /// Website, without scheme (e.g., "hildegard.org")
    pub website: String,
    /// Nested address; only the city is used for filtering
    pub address: Address,
    /// Nested company; only the name is used for filtering
    pub company: Company,
}

/// Address subobject of a user record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Address {
    pub city: String,
}

/// Company subobject of a user record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub name: String,
}
