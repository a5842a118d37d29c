use thiserror::Error;

use crate::state::data::User;

/// The one message the UI is allowed to show for a failed fetch.
/// The distinguishing detail is logged at the fetch site instead.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users. Please try again later.";

/// Classified failure of the user list fetch
///
/// Callers never need to distinguish the variants to render correctly;
/// they all collapse into [`FETCH_FAILED_MESSAGE`] at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connection refused,
    /// interrupted body read)
    #[error("network transport failure")]
    Transport,
    /// The server responded with a non-success status
    #[error("server returned HTTP {0}")]
    HttpStatus(u16),
    /// The response body is not a well-formed array of user records
    #[error("response body could not be decoded")]
    Decode,
}

/// Fetch the full user list from the directory endpoint.
///
/// Performs exactly one GET round trip: no retries, no pagination, no
/// caching. On success the records are returned in the order the server
/// sent them. Any malformed record fails the whole decode; there is no
/// partial result.
pub async fn fetch_users(api_url: String) -> Result<Vec<User>, FetchError> {
    let response = reqwest::get(&api_url).await.map_err(|e| {
        eprintln!("⚠️  Network error fetching users: {e}");
        FetchError::Transport
    })?;

    let status = response.status();
    if !status.is_success() {
        eprintln!("⚠️  Directory endpoint returned HTTP {status}");
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await.map_err(|e| {
        eprintln!("⚠️  Failed to read response body: {e}");
        FetchError::Transport
    })?;

    let users: Vec<User> = serde_json::from_str(&body).map_err(|e| {
        eprintln!("⚠️  Failed to decode user list: {e}");
        FetchError::Decode
    })?;

    println!("📇 Fetched {} users from the directory endpoint", users.len());

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a loopback socket and return
    /// the URL to request
    fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has no local addr");

        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n\
             {body}",
            body.len()
        );

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                // Drain the request before responding
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{addr}/users")
    }

    const VALID_BODY: &str = r#"[
        {
            "id": 1,
            "name": "Ana Smith",
            "username": "ana.smith",
            "email": "ana@example.com",
            "phone": "555-0100",
            "website": "ana.example.org",
            "address": { "city": "New York", "zipcode": "10001" },
            "company": { "name": "Acme Corp", "bs": "synergy" }
        },
        {
            "id": 2,
            "name": "Bob Lee",
            "username": "bob.lee",
            "email": "bob@example.com",
            "phone": "555-0101",
            "website": "bob.example.org",
            "address": { "city": "Boston" },
            "company": { "name": "Globex" }
        }
    ]"#;

    #[tokio::test]
    async fn test_successful_fetch_preserves_server_order() {
        let url = serve_once("200 OK", VALID_BODY);

        let users = fetch_users(url).await.expect("fetch should succeed");

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Ana Smith");
        assert_eq!(users[0].address.city, "New York");
        assert_eq!(users[0].company.name, "Acme Corp");
        assert_eq!(users[1].name, "Bob Lee");
    }

    #[tokio::test]
    async fn test_http_error_status_is_classified() {
        let url = serve_once("500 Internal Server Error", "");

        let result = fetch_users(url).await;

        assert_eq!(result, Err(FetchError::HttpStatus(500)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let url = serve_once("200 OK", "this is not json");

        let result = fetch_users(url).await;

        assert_eq!(result, Err(FetchError::Decode));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_a_decode_error() {
        // Well-formed JSON, but the records are missing required fields
        let url = serve_once("200 OK", r#"[{"id": 1}]"#);

        let result = fetch_users(url).await;

        assert_eq!(result, Err(FetchError::Decode));
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_transport_error() {
        // Bind to grab a free port, then drop the listener so nothing
        // is listening when the request goes out
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has no local addr");
        drop(listener);

        let result = fetch_users(format!("http://{addr}/users")).await;

        assert_eq!(result, Err(FetchError::Transport));
    }
}
