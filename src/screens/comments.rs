//! Comment panel for one article.
//!
//! Comments live in panel-local state; the store never sees them.

use crate::api::{ApiError, Comment};
use crate::store::Store;

pub struct CommentPanel {
    store: Store,
    slug: String,
    comments: Vec<Comment>,
    draft: String,
}

impl CommentPanel {
    pub fn new(store: Store, slug: impl Into<String>) -> Self {
        Self {
            store,
            slug: slug.into(),
            comments: Vec::new(),
            draft: String::new(),
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Replace the list with the server's comments. On failure the current
    /// list is kept.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        match self.store.api().list_comments(&self.slug).await {
            Ok(comments) => {
                tracing::debug!(slug = %self.slug, count = comments.len(), "Comments loaded");
                self.comments = comments;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(slug = %self.slug, error = %err, "Error fetching comments");
                Err(err)
            }
        }
    }

    /// Post the draft. A blank draft is ignored. On success the comment is
    /// appended and the draft cleared.
    ///
    /// Returns the new comment, or `None` if nothing was sent.
    pub async fn send(&mut self) -> Result<Option<Comment>, ApiError> {
        if self.draft.trim().is_empty() {
            return Ok(None);
        }
        let Some(credentials) = self.store.credentials() else {
            tracing::warn!(slug = %self.slug, "Cannot comment without a session token");
            return Err(ApiError::MissingCredential);
        };

        match self
            .store
            .api()
            .add_comment(&credentials, &self.slug, &self.draft)
            .await
        {
            Ok(comment) => {
                tracing::info!(slug = %self.slug, id = comment.id, "Comment added");
                self.comments.push(comment.clone());
                self.draft.clear();
                Ok(Some(comment))
            }
            Err(err) => {
                tracing::warn!(slug = %self.slug, error = %err, "Error sending comment");
                Err(err)
            }
        }
    }

    /// Delete a comment and drop it from the list.
    pub async fn delete(&mut self, id: u64) -> Result<(), ApiError> {
        let Some(credentials) = self.store.credentials() else {
            tracing::warn!(slug = %self.slug, id, "Cannot delete without a session token");
            return Err(ApiError::MissingCredential);
        };

        match self
            .store
            .api()
            .delete_comment(&credentials, &self.slug, id)
            .await
        {
            Ok(()) => {
                tracing::info!(slug = %self.slug, id, "Comment deleted");
                self.comments.retain(|c| c.id != id);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(slug = %self.slug, id, error = %err, "Error deleting comment");
                Err(err)
            }
        }
    }
}
