use serde::Serialize;
use serde_json::json;

use crate::api::{Article, Comment, Profile};
use crate::screens::ProfileView;

/// Prints command results as text or pretty JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn articles(&self, articles: &[Article]) -> anyhow::Result<()> {
        if self.json {
            return print_json(&json!({ "articles": articles }));
        }
        if articles.is_empty() {
            println!("No articles");
        }
        for article in articles {
            println!("{}", article_line(article));
        }
        Ok(())
    }

    pub fn article(&self, article: &Article, comments: &[Comment]) -> anyhow::Result<()> {
        if self.json {
            return print_json(&json!({ "article": article, "comments": comments }));
        }
        println!("{}", article.title);
        println!("{}", article_line(article));
        if !article.tag_list.is_empty() {
            println!("tags: {}", article.tag_list.join(", "));
        }
        println!();
        println!("{}", article.body);
        if !comments.is_empty() {
            println!();
            for comment in comments {
                println!("{}", comment_line(comment));
            }
        }
        Ok(())
    }

    pub fn comments(&self, comments: &[Comment]) -> anyhow::Result<()> {
        if self.json {
            return print_json(&json!({ "comments": comments }));
        }
        if comments.is_empty() {
            println!("No comments");
        }
        for comment in comments {
            println!("{}", comment_line(comment));
        }
        Ok(())
    }

    pub fn profile(&self, view: &ProfileView) -> anyhow::Result<()> {
        if self.json {
            return print_json(view);
        }
        match &view.profile {
            Some(profile) => println!("{}", profile_line(profile)),
            None => println!("No profile loaded"),
        }
        for article in &view.articles {
            println!("  {}", article_line(article));
        }
        Ok(())
    }

    pub fn message(&self, text: &str) {
        if self.json {
            println!("{}", json!({ "message": text }));
        } else {
            println!("{}", text);
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn article_line(article: &Article) -> String {
    let heart = if article.favorited { "*" } else { " " };
    format!(
        "[{}{}] {} | {} by {}",
        heart, article.favorites_count, article.slug, article.title, article.author.username
    )
}

fn comment_line(comment: &Comment) -> String {
    format!(
        "#{} {}: {}",
        comment.id, comment.author.username, comment.body
    )
}

fn profile_line(profile: &Profile) -> String {
    let mut line = profile.username.clone();
    if profile.following {
        line.push_str(" (following)");
    }
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.is_empty()) {
        line.push_str(" | ");
        line.push_str(bio);
    }
    line
}
