//! Client-side state store.
//!
//! One `Store` is created by the composition root and handed to every
//! screen. Each operation performs one remote call and then applies one
//! deterministic transition through the reducers. Transitions are applied
//! under a single write lock, so concerns never observe each other's
//! half-applied state.
//!
//! Same-kind operations are not serialized. For fetches, the latest issued
//! request wins: a completion whose request id is no longer current for its
//! concern is discarded. Mutations (favorite, follow) carry no id and the
//! last one to complete wins.

mod app;
pub mod articles;
pub mod mvi;
mod pagination;
pub mod profile;
mod scope;
mod status;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::api::{ApiClient, ApiError, Article, ArticleQuery, NewArticle};
use crate::config::{Credentials, SessionStore};

pub use app::{AppIntent, AppReducer, AppState};
pub use pagination::{append_page, PageOutcome};
pub use scope::ViewScope;
pub use status::{Concern, RequestId, RequestIds, Status};

use articles::ArticlesIntent;
use mvi::Reducer;
use profile::ProfileIntent;

/// Message recorded when a profile fetch fails without a server message.
pub const PROFILE_FETCH_FAILED: &str = "Error fetching profile";

/// Shared handle to the application state and the operations that change it.
///
/// Cloning is cheap and every clone sees the same state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<AppState>,
    api: ApiClient,
    session: Arc<dyn SessionStore>,
    requests: RequestIds,
    /// Revision counter bumped after every applied intent.
    changes: watch::Sender<u64>,
}

impl Store {
    pub fn new(api: ApiClient, session: Arc<dyn SessionStore>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(AppState::default()),
                api,
                session,
                requests: RequestIds::new(),
                changes,
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Read part of the state without cloning all of it.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.state.read())
    }

    /// Receive a notification after every applied transition.
    ///
    /// The value is a revision counter; read the new state with `state()`.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.changes.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.inner.changes.borrow()
    }

    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.inner.session.as_ref()
    }

    /// Credentials from the session store, read on demand.
    pub fn credentials(&self) -> Option<Credentials> {
        self.inner.session.credentials()
    }

    /// Apply an intent and notify subscribers.
    pub fn dispatch(&self, intent: impl Into<AppIntent>) {
        let intent = intent.into();
        tracing::trace!(?intent, "Dispatching intent");
        {
            let mut state = self.inner.state.write();
            let current = std::mem::take(&mut *state);
            *state = AppReducer::reduce(current, intent);
        }
        self.inner.changes.send_modify(|revision| *revision += 1);
    }

    // ------------------------------------------------------------------
    // Articles concern
    // ------------------------------------------------------------------

    /// Fetch one page of articles starting at `offset` and append it.
    pub async fn fetch_articles_page(&self, offset: usize) {
        let pending = PendingRequest::issue(self, Concern::Articles);
        let request = pending.request;
        tracing::debug!(%request, offset, "Fetching articles page");

        match self.inner.api.list_articles(offset).await {
            Ok(articles) => {
                tracing::info!(%request, offset, count = articles.len(), "Articles page loaded");
                pending.settle(ArticlesIntent::PageLoaded { request, articles });
            }
            Err(err) => {
                tracing::warn!(
                    %request,
                    offset,
                    error = %err,
                    error_type = err.error_type(),
                    "Articles page failed"
                );
                pending.settle(ArticlesIntent::PageFailed {
                    request,
                    message: err.to_string(),
                });
            }
        }
    }

    /// Fetch the articles a profile screen shows and append them.
    ///
    /// A payload without an `articles` array is a failure.
    pub async fn fetch_article_related_to_profile(&self, query: &ArticleQuery) {
        let pending = PendingRequest::issue(self, Concern::Articles);
        let request = pending.request;
        tracing::debug!(%request, %query, "Fetching profile articles");

        match self.inner.api.related_articles(query).await {
            Ok(articles) => {
                tracing::info!(%request, %query, count = articles.len(), "Profile articles loaded");
                pending.settle(ArticlesIntent::PageLoaded { request, articles });
            }
            Err(err) => {
                tracing::warn!(
                    %request,
                    %query,
                    error = %err,
                    error_type = err.error_type(),
                    "Profile articles failed"
                );
                pending.settle(ArticlesIntent::PageFailed {
                    request,
                    message: err.to_string(),
                });
            }
        }
    }

    /// Favorite the article, or unfavorite it if the cached copy is already
    /// favorited. The cached entry is replaced with the server's copy; an
    /// article that is not cached is not inserted.
    pub async fn toggle_favorite(&self, slug: &str) {
        let Some(credentials) = self.credentials() else {
            tracing::warn!(slug, "Favorite requires a session token");
            self.dispatch(ArticlesIntent::MutationFailed {
                message: ApiError::MissingCredential.to_string(),
            });
            return;
        };

        let favorited = self
            .read(|s| s.articles.find(slug).map(|a| a.favorited))
            .unwrap_or(false);

        let result = if favorited {
            self.inner.api.unfavorite_article(&credentials, slug).await
        } else {
            self.inner.api.favorite_article(&credentials, slug).await
        };

        match result {
            Ok(article) => {
                tracing::info!(
                    slug,
                    favorited = article.favorited,
                    count = article.favorites_count,
                    "Favorite toggled"
                );
                self.dispatch(ArticlesIntent::ArticleUpdated { article });
            }
            Err(err) => {
                tracing::warn!(slug, error = %err, error_type = err.error_type(), "Favorite failed");
                self.dispatch(ArticlesIntent::MutationFailed {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Start paging at `offset` instead of the current cursor.
    ///
    /// Ignored while a fetch is running.
    pub fn seek_articles(&self, offset: usize) {
        tracing::debug!(offset, "Moving articles cursor");
        self.dispatch(ArticlesIntent::CursorMoved { offset });
    }

    /// Insert an article at the front of the cached sequence.
    pub fn add_article(&self, article: Article) {
        self.dispatch(ArticlesIntent::ArticleAdded { article });
    }

    /// Publish a new article and put the server's copy at the front.
    pub async fn publish_article(&self, draft: &NewArticle) -> Result<Article, ApiError> {
        let Some(credentials) = self.credentials() else {
            tracing::warn!(title = %draft.title, "Publishing requires a session token");
            self.dispatch(ArticlesIntent::MutationFailed {
                message: ApiError::MissingCredential.to_string(),
            });
            return Err(ApiError::MissingCredential);
        };

        match self.inner.api.create_article(&credentials, draft).await {
            Ok(article) => {
                tracing::info!(slug = %article.slug, "Article published");
                self.add_article(article.clone());
                Ok(article)
            }
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Publishing failed");
                self.dispatch(ArticlesIntent::MutationFailed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Profile concern
    // ------------------------------------------------------------------

    /// Fetch a profile and make it the active one.
    pub async fn fetch_profile(&self, username: &str) {
        let pending = PendingRequest::issue(self, Concern::Profile);
        let request = pending.request;
        tracing::debug!(%request, username, "Fetching profile");

        match self.inner.api.get_profile(username).await {
            Ok(profile) => {
                tracing::info!(%request, username, "Profile loaded");
                pending.settle(ProfileIntent::Loaded { request, profile });
            }
            Err(err) => {
                tracing::warn!(
                    %request,
                    username,
                    error = %err,
                    error_type = err.error_type(),
                    "Profile fetch failed"
                );
                let message = err
                    .server_message()
                    .unwrap_or(PROFILE_FETCH_FAILED)
                    .to_string();
                pending.settle(ProfileIntent::Failed { request, message });
            }
        }
    }

    pub async fn follow(&self, username: &str) {
        self.set_following(username, true).await
    }

    pub async fn unfollow(&self, username: &str) {
        self.set_following(username, false).await
    }

    /// Cached article authors keep their old `following` flag; only the
    /// active profile is updated.
    async fn set_following(&self, username: &str, following: bool) {
        let Some(credentials) = self.credentials() else {
            tracing::warn!(username, following, "Follow requires a session token");
            self.dispatch(ProfileIntent::MutationFailed {
                message: ApiError::MissingCredential.to_string(),
            });
            return;
        };

        let result = if following {
            self.inner.api.follow(&credentials, username).await
        } else {
            self.inner.api.unfollow(&credentials, username).await
        };

        match result {
            Ok(_) => {
                tracing::info!(username, following, "Follow state changed");
                self.dispatch(ProfileIntent::FollowChanged {
                    username: username.to_string(),
                    following,
                });
            }
            Err(err) => {
                tracing::warn!(
                    username,
                    following,
                    error = %err,
                    error_type = err.error_type(),
                    "Follow change failed"
                );
                let fallback = if following {
                    "Error following user"
                } else {
                    "Error unfollowing user"
                };
                let message = match &err {
                    ApiError::Status { .. } => err.server_message().unwrap_or(fallback).to_string(),
                    _ => err.to_string(),
                };
                self.dispatch(ProfileIntent::MutationFailed { message });
            }
        }
    }
}

/// A fetch that has been issued but not yet settled.
///
/// Dropping it unsettled (the task was aborted) returns the concern to idle
/// if this request is still the current one.
struct PendingRequest<'a> {
    store: &'a Store,
    concern: Concern,
    request: RequestId,
    settled: bool,
}

impl<'a> PendingRequest<'a> {
    fn issue(store: &'a Store, concern: Concern) -> Self {
        let request = store.inner.requests.next();
        match concern {
            Concern::Articles => store.dispatch(ArticlesIntent::PageRequested { request }),
            Concern::Profile => store.dispatch(ProfileIntent::Requested { request }),
        }
        Self {
            store,
            concern,
            request,
            settled: false,
        }
    }

    fn settle(mut self, intent: impl Into<AppIntent>) {
        self.settled = true;
        self.store.dispatch(intent);
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::debug!(request = %self.request, concern = ?self.concern, "Request abandoned");
        let request = self.request;
        match self.concern {
            Concern::Articles => self.store.dispatch(ArticlesIntent::PageCancelled { request }),
            Concern::Profile => self.store.dispatch(ProfileIntent::Cancelled { request }),
        }
    }
}
