//! Create-article form.

use crate::api::{ApiError, Article, NewArticle};
use crate::store::Store;

/// Raw form input. Tags are one comma-separated field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: String,
}

/// Split a comma-separated tag field, trimming each tag.
pub fn parse_tags(field: &str) -> Vec<String> {
    field.split(',').map(|tag| tag.trim().to_string()).collect()
}

impl ArticleDraft {
    pub fn to_new_article(&self) -> NewArticle {
        NewArticle {
            title: self.title.clone(),
            description: self.description.clone(),
            body: self.body.clone(),
            tag_list: parse_tags(&self.tags),
        }
    }

    /// Publish through the store; the article lands at the front of the list.
    pub async fn publish(&self, store: &Store) -> Result<Article, ApiError> {
        store.publish_article(&self.to_new_article()).await
    }
}
