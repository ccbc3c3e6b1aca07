//! Article list and wishlist screens.

use crate::api::Article;
use crate::store::articles::ArticlesState;
use crate::store::{Status, Store};

/// Offset of the next page to request, or `None` when a fetch is already
/// running or the last page came back empty.
pub fn next_page_offset(state: &ArticlesState) -> Option<usize> {
    if !state.has_more || state.status.is_loading() {
        return None;
    }
    Some(state.offset)
}

/// Infinite-scroll article list over the store's cached sequence.
#[derive(Clone)]
pub struct ArticleList {
    store: Store,
}

impl ArticleList {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Request the next page. Returns whether a request was issued.
    pub async fn load_more(&self) -> bool {
        let Some(offset) = self.store.read(|s| next_page_offset(&s.articles)) else {
            tracing::debug!("No page to load");
            return false;
        };
        self.store.fetch_articles_page(offset).await;
        true
    }

    /// Load up to `pages` pages, stopping early at the end or on failure.
    pub async fn load_pages(&self, pages: usize) -> usize {
        let mut loaded = 0;
        while loaded < pages {
            if !self.load_more().await {
                break;
            }
            loaded += 1;
            if self.store.read(|s| s.articles.status.is_failed()) {
                break;
            }
        }
        loaded
    }

    pub fn articles(&self) -> Vec<Article> {
        self.store.read(|s| s.articles.articles.clone())
    }
}

/// What the wishlist screen renders: only favorited articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistView {
    pub articles: Vec<Article>,
    pub status: Status,
    /// A page is loading below the visible entries.
    pub loading_more: bool,
}

impl WishlistView {
    pub fn from_state(state: &ArticlesState) -> Self {
        Self {
            articles: state.favorited().cloned().collect(),
            status: state.status.clone(),
            loading_more: state.is_loading_more(),
        }
    }
}
