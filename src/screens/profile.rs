//! Own-profile and profile-detail screens.

use serde::Serialize;

use crate::api::{Article, ArticleQuery, Profile};
use crate::store::{AppState, Status, Store};

/// Load the signed-in user's profile into the store.
///
/// Does nothing without a session token and username. Returns whether a
/// fetch was issued.
pub async fn open_own_profile(store: &Store) -> bool {
    let Some(username) = store.credentials().and_then(|c| c.username) else {
        tracing::debug!("No signed-in user, skipping profile load");
        return false;
    };
    store.fetch_profile(&username).await;
    true
}

/// Load a profile together with the articles it authored.
///
/// The two fetches touch different concerns and run concurrently.
pub async fn open_profile_detail(store: &Store, username: &str) {
    let query = ArticleQuery::Author(username.to_string());
    tokio::join!(
        store.fetch_profile(username),
        store.fetch_article_related_to_profile(&query),
    );
}

/// What a profile screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub profile: Option<Profile>,
    pub status: Status,
    /// Cached articles listed under the profile.
    pub articles: Vec<Article>,
}

impl ProfileView {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            profile: state.profile.profile.clone(),
            status: state.profile.status.clone(),
            articles: state.articles.articles.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }
}
