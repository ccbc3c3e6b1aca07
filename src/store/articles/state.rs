//! State for the articles concern.

use serde::Serialize;

use crate::api::Article;
use crate::store::mvi::StoreState;
use crate::store::status::{RequestId, Status};

/// Cached articles in fetch order, plus the pagination cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticlesState {
    /// Insertion order is fetch order. Duplicates across pages are possible.
    pub articles: Vec<Article>,
    /// Number of articles received so far through page fetches.
    pub offset: usize,
    /// Whether another page may exist. Starts true.
    pub has_more: bool,
    pub status: Status,
    /// Latest fetch issued for this concern. Completions for any other
    /// request are discarded.
    #[serde(skip)]
    pub in_flight: Option<RequestId>,
}

impl Default for ArticlesState {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            offset: 0,
            has_more: true,
            status: Status::Idle,
            in_flight: None,
        }
    }
}

impl StoreState for ArticlesState {}

impl ArticlesState {
    /// Find a cached article by slug.
    pub fn find(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// Articles the signed-in user has favorited, in cache order.
    pub fn favorited(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter().filter(|a| a.favorited)
    }

    /// Loading with nothing to show yet.
    pub fn is_initial_loading(&self) -> bool {
        self.status.is_loading() && self.articles.is_empty()
    }

    /// Loading another page below already-visible articles.
    pub fn is_loading_more(&self) -> bool {
        self.status.is_loading() && self.has_more && !self.articles.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }
}
