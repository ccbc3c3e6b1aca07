//! Authentication header building for API requests.

use super::credentials::Credentials;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization` header for an authenticated call.
///
/// The API expects the `Token <jwt>` scheme rather than `Bearer`.
pub fn build_auth_header(credentials: &Credentials) -> AuthHeader {
    (
        "Authorization".to_string(),
        format!("Token {}", credentials.token.expose()),
    )
}
