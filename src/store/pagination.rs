//! Page accumulation for the article list.
//!
//! Pages are appended as received. There is no de-duplication: an article
//! that moves between pages on the server shows up twice locally.

use crate::api::Article;

/// Result of appending one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    pub articles: Vec<Article>,
    pub offset: usize,
    /// False exactly when the page was empty.
    pub has_more: bool,
}

/// Append `page` to `existing` and advance `offset` by the page length.
pub fn append_page(mut existing: Vec<Article>, offset: usize, page: Vec<Article>) -> PageOutcome {
    let received = page.len();
    existing.extend(page);
    PageOutcome {
        articles: existing,
        offset: offset + received,
        has_more: received > 0,
    }
}
