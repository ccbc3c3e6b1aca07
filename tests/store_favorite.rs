//! Favorite toggling, article insertion and publishing.

mod common;

use common::mock_api::{MockApi, MockResponse};
use common::{anonymous_store, article_json, articles_page, signed_in_store, TOKEN};
use conduit::api::{ApiError, NewArticle};
use conduit::config::Session;
use conduit::screens::{ArticleDraft, WishlistView};
use conduit::store::Status;
use serde_json::json;

#[tokio::test]
async fn test_favorite_replaces_article_in_place() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(articles_page("a", 3))).await;
    mock.enqueue(MockResponse::json(json!({ "article": article_json("a-1", true, 7) })))
        .await;

    let store = signed_in_store(&mock);
    store.fetch_articles_page(0).await;
    let before = store.state().articles;

    store.toggle_favorite("a-1").await;

    let after = store.state().articles;
    assert_eq!(after.articles.len(), 3);
    assert_eq!(after.articles[0], before.articles[0]);
    assert_eq!(after.articles[2], before.articles[2]);
    assert_eq!(after.articles[1].slug, "a-1");
    assert!(after.articles[1].favorited);
    assert_eq!(after.articles[1].favorites_count, 7);
    assert_eq!(after.offset, before.offset);

    let requests = mock.captured_requests().await;
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].path, "/api/articles/a-1/favorite");
    assert_eq!(
        requests[1].header("authorization"),
        Some(format!("Token {}", TOKEN).as_str())
    );

    let wishlist = WishlistView::from_state(&after);
    assert_eq!(wishlist.articles.len(), 1);
    assert_eq!(wishlist.articles[0].slug, "a-1");
}

#[tokio::test]
async fn test_favorited_article_is_unfavorited() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(json!({ "article": article_json("loved", false, 0) })))
        .await;

    let store = signed_in_store(&mock);
    let article = serde_json::from_value(article_json("loved", true, 1)).unwrap();
    store.add_article(article);

    store.toggle_favorite("loved").await;

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/articles/loved/favorite");

    let state = store.state().articles;
    assert!(!state.articles[0].favorited);
    assert_eq!(state.favorited().count(), 0);
}

#[tokio::test]
async fn test_favorite_unknown_slug_leaves_sequence_unchanged() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(articles_page("a", 2))).await;
    mock.enqueue(MockResponse::json(json!({ "article": article_json("elsewhere", true, 1) })))
        .await;

    let store = signed_in_store(&mock);
    store.fetch_articles_page(0).await;
    let before = store.state().articles.articles;

    store.toggle_favorite("elsewhere").await;

    assert_eq!(store.state().articles.articles, before);
    assert_eq!(mock.captured_requests().await.len(), 2);
}

#[tokio::test]
async fn test_favorite_without_token_never_reaches_network() {
    let mock = MockApi::start().await;
    let store = anonymous_store(&mock);

    store.toggle_favorite("a-0").await;

    assert!(mock.captured_requests().await.is_empty());
    assert_eq!(
        store.state().articles.status,
        Status::Failed("No token found".into())
    );
}

#[tokio::test]
async fn test_retry_after_sign_in_clears_failure() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(articles_page("a", 1))).await;
    mock.enqueue(MockResponse::json(json!({ "article": article_json("a-0", true, 1) })))
        .await;

    let store = anonymous_store(&mock);
    store.fetch_articles_page(0).await;

    store.toggle_favorite("a-0").await;
    assert_eq!(store.state().articles.error(), Some("No token found"));

    store
        .session()
        .save(&Session {
            token: TOKEN.into(),
            username: "jake".into(),
        })
        .unwrap();
    store.toggle_favorite("a-0").await;

    let state = store.state().articles;
    assert!(state.articles[0].favorited);
    assert_eq!(state.status, Status::Succeeded);
    assert!(state.error().is_none());
    assert_eq!(WishlistView::from_state(&state).status, Status::Succeeded);
}

#[tokio::test]
async fn test_favorite_failure_is_recorded_on_articles() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(articles_page("a", 1))).await;
    mock.enqueue(MockResponse::field_errors(401, "token", "is invalid"))
        .await;

    let store = signed_in_store(&mock);
    store.fetch_articles_page(0).await;
    store.toggle_favorite("a-0").await;

    let state = store.state();
    assert_eq!(state.articles.error(), Some("token is invalid"));
    assert!(!state.articles.articles[0].favorited);
    assert_eq!(state.profile.status, Status::Idle);
}

#[tokio::test]
async fn test_add_article_goes_to_front() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(articles_page("a", 2))).await;

    let store = signed_in_store(&mock);
    store.fetch_articles_page(0).await;
    store.add_article(serde_json::from_value(article_json("fresh", false, 0)).unwrap());

    let state = store.state().articles;
    let slugs: Vec<&str> = state.articles.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["fresh", "a-0", "a-1"]);
    // Local insertion does not move the server cursor.
    assert_eq!(state.offset, 2);
}

#[tokio::test]
async fn test_publish_sends_draft_and_prepends_result() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(json!({ "article": article_json("new-post", false, 0) })))
        .await;

    let store = signed_in_store(&mock);
    let draft = ArticleDraft {
        title: "New post".into(),
        description: "About things".into(),
        body: "Words".into(),
        tags: "rust, web".into(),
    };
    let article = draft.publish(&store).await.unwrap();
    assert_eq!(article.slug, "new-post");
    assert_eq!(store.state().articles.articles[0].slug, "new-post");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/articles");
    assert_eq!(
        requests[0].json(),
        json!({
            "article": {
                "title": "New post",
                "description": "About things",
                "body": "Words",
                "tagList": ["rust", "web"]
            }
        })
    );
}

#[tokio::test]
async fn test_publish_without_token_fails() {
    let mock = MockApi::start().await;
    let store = anonymous_store(&mock);

    let draft = NewArticle {
        title: "t".into(),
        description: "d".into(),
        body: "b".into(),
        tag_list: vec![],
    };
    let err = store.publish_article(&draft).await.unwrap_err();

    assert!(matches!(err, ApiError::MissingCredential));
    assert!(mock.captured_requests().await.is_empty());
    assert!(store.state().articles.articles.is_empty());
}
