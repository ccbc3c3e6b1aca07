//! Article detail screen.
//!
//! The article itself is loaded into screen-local state, not the store.
//! Follow, unfollow and favorite go through the store.

use crate::api::Article;
use crate::store::Store;

/// Message shown when the article cannot be loaded.
pub const ARTICLE_FETCH_FAILED: &str = "Error fetching article";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Loaded(Article),
    Failed(String),
}

pub struct ArticleDetail {
    store: Store,
    slug: String,
    state: DetailState,
    /// Set by follow/unfollow before the server answers.
    is_followed: Option<bool>,
}

impl ArticleDetail {
    pub fn new(store: Store, slug: impl Into<String>) -> Self {
        Self {
            store,
            slug: slug.into(),
            state: DetailState::Loading,
            is_followed: None,
        }
    }

    /// Create the screen and load its article.
    pub async fn open(store: Store, slug: impl Into<String>) -> Self {
        let mut screen = Self::new(store, slug);
        screen.load().await;
        screen
    }

    pub async fn load(&mut self) {
        self.state = match self.store.api().get_article(&self.slug).await {
            Ok(article) => DetailState::Loaded(article),
            Err(err) => {
                tracing::warn!(slug = %self.slug, error = %err, "Article fetch failed");
                DetailState::Failed(ARTICLE_FETCH_FAILED.to_string())
            }
        };
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn article(&self) -> Option<&Article> {
        match &self.state {
            DetailState::Loaded(article) => Some(article),
            _ => None,
        }
    }

    /// Whether the author is shown as followed: the local override if the
    /// user pressed follow/unfollow, otherwise the article's author flag.
    pub fn is_following_author(&self) -> bool {
        match (self.is_followed, self.article()) {
            (Some(followed), _) => followed,
            (None, Some(article)) => article.author.following,
            (None, None) => false,
        }
    }

    pub async fn follow_author(&mut self) {
        let Some(author) = self.article().map(|a| a.author.username.clone()) else {
            return;
        };
        self.is_followed = Some(true);
        self.store.follow(&author).await;
    }

    pub async fn unfollow_author(&mut self) {
        let Some(author) = self.article().map(|a| a.author.username.clone()) else {
            return;
        };
        self.is_followed = Some(false);
        self.store.unfollow(&author).await;
    }

    /// Toggle the favorite through the store. Only the cached copy in the
    /// store changes; reload to refresh this screen's article.
    pub async fn toggle_favorite(&self) {
        if self.article().is_none() {
            return;
        }
        self.store.toggle_favorite(&self.slug).await;
    }
}
