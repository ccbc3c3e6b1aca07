//! Configuration, credentials and session storage.

mod auth;
mod credentials;
mod loader;
mod session;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{Credentials, SecureString};
pub use loader::ConfigError;
pub use session::{FileSession, MemorySession, Session, SessionError, SessionStore};
pub use types::{ApiConfig, Config, SessionConfig, DEFAULT_BASE_URL};
