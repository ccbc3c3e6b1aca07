//! Intents for the articles concern.

use crate::api::Article;
use crate::store::mvi::Intent;
use crate::store::status::RequestId;

/// Intents that can be dispatched to the articles concern.
#[derive(Debug, Clone)]
pub enum ArticlesIntent {
    /// A page (or profile-related collection) fetch was issued.
    PageRequested { request: RequestId },

    /// The fetch completed with a page of articles.
    PageLoaded {
        request: RequestId,
        articles: Vec<Article>,
    },

    /// The fetch failed.
    PageFailed { request: RequestId, message: String },

    /// The fetch was abandoned before completing.
    PageCancelled { request: RequestId },

    /// Move the pagination cursor before any page is requested.
    CursorMoved { offset: usize },

    /// A freshly published article goes to the front of the list.
    ArticleAdded { article: Article },

    /// The server returned a new representation of an article.
    ArticleUpdated { article: Article },

    /// A mutation (favorite, publish) failed.
    MutationFailed { message: String },
}

impl Intent for ArticlesIntent {}
