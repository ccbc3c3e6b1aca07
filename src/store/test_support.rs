//! Fixtures shared by the store's unit tests.

use crate::api::{Article, Profile};

pub(crate) fn profile(username: &str) -> Profile {
    Profile {
        username: username.to_string(),
        bio: None,
        image: None,
        following: false,
    }
}

pub(crate) fn article(slug: &str) -> Article {
    Article {
        slug: slug.to_string(),
        title: format!("Title of {}", slug),
        description: "description".to_string(),
        body: "body".to_string(),
        tag_list: Vec::new(),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        favorited: false,
        favorites_count: 0,
        author: profile("author"),
    }
}
