use std::fmt;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, UNEXPECTED_FORMAT};
use crate::api::models::*;
use crate::config::{build_auth_header, ApiConfig, Credentials};

/// Which article collection a profile screen asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleQuery {
    /// `GET /articles/<slug>` (answers with a single `article`).
    Slug(String),
    /// `GET /articles?author=<username>`
    Author(String),
    /// `GET /articles?favorited=<username>`
    FavoritedBy(String),
}

impl fmt::Display for ArticleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleQuery::Slug(slug) => write!(f, "slug={}", slug),
            ArticleQuery::Author(username) => write!(f, "author={}", username),
            ArticleQuery::FavoritedBy(username) => write!(f, "favorited={}", username),
        }
    }
}

/// HTTP client for the blogging API.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|_| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
            });
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ------------------------------------------------------------------
    // Articles
    // ------------------------------------------------------------------

    /// `GET /articles?offset=<n>`
    pub async fn list_articles(&self, offset: usize) -> Result<Vec<Article>, ApiError> {
        let mut url = self.endpoint(&["articles"])?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string());
        let envelope: ArticlesEnvelope = self.send(self.client.get(url)).await?;
        Ok(envelope.articles)
    }

    /// Fetch the articles related to a profile screen.
    ///
    /// Only an `articles` array is accepted. Any other payload, including
    /// the single-article shape of the slug endpoint, is a malformed
    /// response.
    pub async fn related_articles(&self, query: &ArticleQuery) -> Result<Vec<Article>, ApiError> {
        let url = match query {
            ArticleQuery::Slug(slug) => self.endpoint(&["articles", slug])?,
            ArticleQuery::Author(username) => {
                let mut url = self.endpoint(&["articles"])?;
                url.query_pairs_mut().append_pair("author", username);
                url
            }
            ArticleQuery::FavoritedBy(username) => {
                let mut url = self.endpoint(&["articles"])?;
                url.query_pairs_mut().append_pair("favorited", username);
                url
            }
        };

        let payload: serde_json::Value = self.send(self.client.get(url)).await?;
        articles_from_payload(payload)
    }

    /// `GET /articles/<slug>`
    pub async fn get_article(&self, slug: &str) -> Result<Article, ApiError> {
        let url = self.endpoint(&["articles", slug])?;
        let envelope: ArticleEnvelope = self.send(self.client.get(url)).await?;
        Ok(envelope.article)
    }

    /// `POST /articles`
    pub async fn create_article(
        &self,
        credentials: &Credentials,
        article: &NewArticle,
    ) -> Result<Article, ApiError> {
        let url = self.endpoint(&["articles"])?;
        let request = self
            .authorized(self.client.post(url), credentials)
            .json(&NewArticleRequest { article });
        let envelope: ArticleEnvelope = self.send(request).await?;
        Ok(envelope.article)
    }

    /// `POST /articles/<slug>/favorite`
    pub async fn favorite_article(
        &self,
        credentials: &Credentials,
        slug: &str,
    ) -> Result<Article, ApiError> {
        let url = self.endpoint(&["articles", slug, "favorite"])?;
        let request = self.authorized(self.client.post(url), credentials);
        let envelope: ArticleEnvelope = self.send(request).await?;
        Ok(envelope.article)
    }

    /// `DELETE /articles/<slug>/favorite`
    pub async fn unfavorite_article(
        &self,
        credentials: &Credentials,
        slug: &str,
    ) -> Result<Article, ApiError> {
        let url = self.endpoint(&["articles", slug, "favorite"])?;
        let request = self.authorized(self.client.delete(url), credentials);
        let envelope: ArticleEnvelope = self.send(request).await?;
        Ok(envelope.article)
    }

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    /// `GET /articles/<slug>/comments`
    pub async fn list_comments(&self, slug: &str) -> Result<Vec<Comment>, ApiError> {
        let url = self.endpoint(&["articles", slug, "comments"])?;
        let envelope: CommentsEnvelope = self.send(self.client.get(url)).await?;
        Ok(envelope.comments)
    }

    /// `POST /articles/<slug>/comments`
    pub async fn add_comment(
        &self,
        credentials: &Credentials,
        slug: &str,
        body: &str,
    ) -> Result<Comment, ApiError> {
        let url = self.endpoint(&["articles", slug, "comments"])?;
        let request = self
            .authorized(self.client.post(url), credentials)
            .json(&NewCommentRequest {
                comment: NewCommentBody { body },
            });
        let envelope: CommentEnvelope = self.send(request).await?;
        Ok(envelope.comment)
    }

    /// `DELETE /articles/<slug>/comments/<id>`
    ///
    /// Any 2xx counts as success; the body is ignored.
    pub async fn delete_comment(
        &self,
        credentials: &Credentials,
        slug: &str,
        id: u64,
    ) -> Result<(), ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&["articles", slug, "comments", &id])?;
        let request = self.authorized(self.client.delete(url), credentials);
        self.execute(request).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Profiles
    // ------------------------------------------------------------------

    /// `GET /profiles/<username>`
    pub async fn get_profile(&self, username: &str) -> Result<Profile, ApiError> {
        let url = self.endpoint(&["profiles", username])?;
        let envelope: ProfileEnvelope = self.send(self.client.get(url)).await?;
        Ok(envelope.profile)
    }

    /// `POST /profiles/<username>/follow`
    pub async fn follow(&self, credentials: &Credentials, username: &str) -> Result<Profile, ApiError> {
        let url = self.endpoint(&["profiles", username, "follow"])?;
        let request = self.authorized(self.client.post(url), credentials);
        let envelope: ProfileEnvelope = self.send(request).await?;
        Ok(envelope.profile)
    }

    /// `DELETE /profiles/<username>/follow`
    pub async fn unfollow(
        &self,
        credentials: &Credentials,
        username: &str,
    ) -> Result<Profile, ApiError> {
        let url = self.endpoint(&["profiles", username, "follow"])?;
        let request = self.authorized(self.client.delete(url), credentials);
        let envelope: ProfileEnvelope = self.send(request).await?;
        Ok(envelope.profile)
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// `POST /users/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let url = self.endpoint(&["users", "login"])?;
        let request = self.client.post(url).json(&LoginRequest {
            user: LoginBody { email, password },
        });
        let envelope: UserEnvelope = self.send(request).await?;
        Ok(envelope.user)
    }

    /// `POST /users`
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let url = self.endpoint(&["users"])?;
        let request = self.client.post(url).json(&RegistrationRequest {
            user: RegistrationBody {
                username,
                email,
                password,
            },
        });
        let envelope: UserEnvelope = self.send(request).await?;
        Ok(envelope.user)
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, builder: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
        let (name, value) = build_auth_header(credentials);
        builder.header(name, value)
    }

    /// Send a request and return the body of a 2xx response.
    async fn execute(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(
                path = %url,
                status = status.as_u16(),
                "API returned error status"
            );
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        tracing::trace!(path = %url, status = status.as_u16(), bytes = body.len(), "API response");
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.execute(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::MalformedResponse {
            reason: format!("{}: {}", UNEXPECTED_FORMAT, e),
        })
    }
}

/// Extract the `articles` array from a payload of unknown shape.
pub fn articles_from_payload(payload: serde_json::Value) -> Result<Vec<Article>, ApiError> {
    match payload {
        serde_json::Value::Object(mut map) => match map.remove("articles") {
            Some(articles @ serde_json::Value::Array(_)) => {
                serde_json::from_value(articles).map_err(|_| ApiError::unexpected_format())
            }
            _ => Err(ApiError::unexpected_format()),
        },
        _ => Err(ApiError::unexpected_format()),
    }
}
