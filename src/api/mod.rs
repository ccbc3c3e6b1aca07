//! Typed client for the remote blogging API.
//!
//! The API is external and its schema is fixed: JSON over HTTPS with every
//! resource wrapped in a single-key envelope (`{"article": {...}}`).

mod client;
mod error;
mod models;

pub use client::{articles_from_payload, ApiClient, ArticleQuery};
pub use error::{ApiError, UNEXPECTED_FORMAT};
pub use models::{Article, Comment, NewArticle, Profile, User};
