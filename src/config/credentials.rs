//! Credentials read from the session store.
//!
//! The token is owned by the session store and never generated or
//! validated here; this module only keeps it out of logs.

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Token and username pair used by authenticated calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: SecureString,
    /// Username of the signed-in user, when the session recorded one.
    pub username: Option<String>,
}

impl Credentials {
    /// Build credentials from raw session values.
    ///
    /// Returns `None` when the token is empty: an empty token is the same
    /// as no token at all.
    pub fn new(token: &str, username: Option<&str>) -> Option<Self> {
        if token.trim().is_empty() {
            return None;
        }
        Some(Self {
            token: SecureString::new(token.to_string()),
            username: username
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_string_never_prints_value() {
        let secret = SecureString::new("jwt.token.value".to_string());
        assert!(!format!("{:?}", secret).contains("jwt"));
        assert!(!format!("{}", secret).contains("jwt"));
        assert_eq!(secret.expose(), "jwt.token.value");
    }

    #[test]
    fn empty_token_is_no_credentials() {
        assert!(Credentials::new("", Some("jake")).is_none());
        assert!(Credentials::new("   ", None).is_none());
    }

    #[test]
    fn empty_username_is_dropped() {
        let creds = Credentials::new("abc", Some("")).unwrap();
        assert_eq!(creds.username, None);
        assert_eq!(creds.token.expose(), "abc");
    }
}
