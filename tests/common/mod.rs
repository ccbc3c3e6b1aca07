//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use conduit::api::ApiClient;
use conduit::config::{ApiConfig, MemorySession, SessionStore};
use conduit::store::Store;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use mock_api::MockApi;

pub const TOKEN: &str = "jwt.token.here";

pub fn profile_json(username: &str, following: bool) -> Value {
    json!({
        "username": username,
        "bio": null,
        "image": "https://api.realworld.io/images/smiley-cyrus.jpeg",
        "following": following
    })
}

pub fn article_json(slug: &str, favorited: bool, favorites_count: u64) -> Value {
    json!({
        "slug": slug,
        "title": format!("Title of {}", slug),
        "description": "Ever wonder how?",
        "body": "It takes a Jacobian",
        "tagList": ["dragons", "training"],
        "createdAt": "2016-02-18T03:22:56.637Z",
        "updatedAt": "2016-02-18T03:48:35.824Z",
        "favorited": favorited,
        "favoritesCount": favorites_count,
        "author": profile_json("jake", false)
    })
}

/// `{"articles": [...]}` with `count` articles slugged `{prefix}-{i}`.
pub fn articles_page(prefix: &str, count: usize) -> Value {
    let articles: Vec<Value> = (0..count)
        .map(|i| article_json(&format!("{}-{}", prefix, i), false, 0))
        .collect();
    json!({ "articles": articles, "articlesCount": count })
}

pub fn api_client(mock: &MockApi) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: mock.api_url(),
        timeout_seconds: Some(5),
        connect_timeout_seconds: Some(2),
    })
    .expect("Failed to build API client")
}

pub fn signed_in_store(mock: &MockApi) -> Store {
    let session: Arc<dyn SessionStore> = Arc::new(MemorySession::signed_in(TOKEN, "jake"));
    Store::new(api_client(mock), session)
}

pub fn anonymous_store(mock: &MockApi) -> Store {
    let session: Arc<dyn SessionStore> = Arc::new(MemorySession::new());
    Store::new(api_client(mock), session)
}

/// Poll `check` until it holds or `timeout` elapses.
pub async fn wait_until(timeout: Duration, mut check: impl FnMut() -> bool) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    check()
}
