//! Wire types for the blogging API.
//!
//! Field names follow the server's camelCase JSON. Values are immutable
//! snapshots: nothing here is derived locally.

use serde::{Deserialize, Serialize};

/// A user profile, also embedded as the author summary of articles and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub following: bool,
}

/// An article as returned by the server. `slug` is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub favorites_count: u64,
    pub author: Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
    pub author: Profile,
}

/// The signed-in user returned by login and registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Payload for publishing a new article.
///
/// Carries no author: the server takes it from the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

// Response envelopes. The server wraps every resource in a single-key object.

#[derive(Debug, Deserialize)]
pub(crate) struct ArticleEnvelope {
    pub article: Article,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticlesEnvelope {
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileEnvelope {
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentEnvelope {
    pub comment: Comment,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentsEnvelope {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

// Request envelopes.

#[derive(Debug, Serialize)]
pub(crate) struct NewArticleRequest<'a> {
    pub article: &'a NewArticle,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewCommentBody<'a> {
    pub body: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewCommentRequest<'a> {
    pub comment: NewCommentBody<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub user: LoginBody<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegistrationBody<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegistrationRequest<'a> {
    pub user: RegistrationBody<'a>,
}
