//! Command-line front end.
//!
//! Builds one `Store`, runs a single command against it, and prints the
//! resulting state.

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use crate::api::{ApiClient, ArticleQuery};
use crate::config::{Config, FileSession, Session, SessionStore};
use crate::screens::{
    open_own_profile, open_profile_detail, ArticleDetail, ArticleDraft, ArticleList,
    CommentPanel, DetailState, ProfileView, WishlistView,
};
use crate::store::Store;

pub use render::Output;

#[derive(Debug, Parser)]
#[command(name = "conduit", version, about = "Client for a social blogging API")]
pub struct Cli {
    /// Override the API base URL from config
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file (default: <config dir>/conduit/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Session file holding the token and username
    #[arg(long, global = true, value_name = "PATH")]
    pub session: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List articles page by page
    Articles {
        /// Offset of the first page
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Show one article with its comments
    Article { slug: String },
    /// List articles written or favorited by a user
    Related(RelatedArgs),
    /// Show favorited articles among the loaded pages
    Wishlist {
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Show a profile and its articles (default: the signed-in user)
    Profile { username: Option<String> },
    /// Toggle the favorite on an article
    Favorite { slug: String },
    /// Follow a user
    Follow { username: String },
    /// Stop following a user
    Unfollow { username: String },
    /// Read or write comments
    #[command(subcommand)]
    Comments(CommentAction),
    /// Publish a new article
    Publish(PublishArgs),
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and store the session
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct RelatedArgs {
    /// Articles written by this user
    #[arg(long)]
    pub author: Option<String>,
    /// Articles favorited by this user
    #[arg(long)]
    pub favorited: Option<String>,
}

impl RelatedArgs {
    fn query(&self) -> Option<ArticleQuery> {
        match (&self.author, &self.favorited) {
            (Some(author), _) => Some(ArticleQuery::Author(author.clone())),
            (None, Some(user)) => Some(ArticleQuery::FavoritedBy(user.clone())),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CommentAction {
    /// List the comments on an article
    List { slug: String },
    /// Add a comment
    Add { slug: String, body: String },
    /// Delete a comment by id
    Delete { slug: String, id: u64 },
}

#[derive(Debug, Args)]
pub struct PublishArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub body: String,
    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

/// Load config from `--config` or the default path, then apply `--api-url`.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
        config.validate()?;
    }
    Ok(config)
}

/// Composition root: wire config, session and API into one store.
pub fn build_store(cli: &Cli, config: &Config) -> anyhow::Result<Store> {
    let session_path = cli
        .session
        .clone()
        .unwrap_or_else(|| config.session_path());
    let session: Arc<dyn SessionStore> = Arc::new(FileSession::new(session_path));
    let api = ApiClient::new(&config.api)?;
    tracing::debug!(base_url = %api.base_url(), "Store ready");
    Ok(Store::new(api, session))
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let store = build_store(&cli, &config)?;
    let out = Output::new(cli.json);

    match cli.command {
        Command::Articles { offset, pages } => {
            store.seek_articles(offset);
            ArticleList::new(store.clone()).load_pages(pages).await;
            let state = store.read(|s| s.articles.clone());
            if let Some(err) = state.error() {
                bail!("{}", err);
            }
            out.articles(&state.articles)?;
        }

        Command::Article { slug } => {
            let detail = ArticleDetail::open(store.clone(), slug.as_str()).await;
            let article = match detail.state() {
                DetailState::Loaded(article) => article.clone(),
                DetailState::Failed(message) => bail!("{}", message),
                DetailState::Loading => bail!("Article '{}' did not load", slug),
            };
            let mut panel = CommentPanel::new(store.clone(), slug.as_str());
            if let Err(err) = panel.load().await {
                tracing::warn!(error = %err, "Showing article without comments");
            }
            out.article(&article, panel.comments())?;
        }

        Command::Related(args) => {
            let Some(query) = args.query() else {
                bail!("Pass --author or --favorited");
            };
            store.fetch_article_related_to_profile(&query).await;
            let state = store.read(|s| s.articles.clone());
            if let Some(err) = state.error() {
                bail!("{}", err);
            }
            out.articles(&state.articles)?;
        }

        Command::Wishlist { pages } => {
            ArticleList::new(store.clone()).load_pages(pages).await;
            let view = store.read(|s| WishlistView::from_state(&s.articles));
            if let Some(err) = view.status.error() {
                bail!("{}", err);
            }
            out.articles(&view.articles)?;
        }

        Command::Profile { username } => {
            match username {
                Some(username) => open_profile_detail(&store, &username).await,
                None => {
                    if !open_own_profile(&store).await {
                        bail!("Not signed in: run `conduit login` first");
                    }
                }
            }
            let view = store.read(ProfileView::from_state);
            if let Some(err) = view.status.error() {
                bail!("{}", err);
            }
            out.profile(&view)?;
        }

        Command::Favorite { slug } => {
            // Seed the cache so the server's answer has an entry to replace.
            let article = store
                .api()
                .get_article(&slug)
                .await
                .with_context(|| format!("Loading article '{}'", slug))?;
            store.add_article(article);
            store.toggle_favorite(&slug).await;

            let state = store.read(|s| s.articles.clone());
            if let Some(err) = state.error() {
                bail!("{}", err);
            }
            if let Some(article) = state.find(&slug) {
                out.articles(std::slice::from_ref(article))?;
            }
        }

        Command::Follow { username } => {
            store.fetch_profile(&username).await;
            store.follow(&username).await;
            print_profile(&store, &out)?;
        }

        Command::Unfollow { username } => {
            store.fetch_profile(&username).await;
            store.unfollow(&username).await;
            print_profile(&store, &out)?;
        }

        Command::Comments(action) => run_comments(&store, &out, action).await?,

        Command::Publish(args) => {
            let draft = ArticleDraft {
                title: args.title,
                description: args.description,
                body: args.body,
                tags: args.tags,
            };
            let article = draft.publish(&store).await?;
            out.article(&article, &[])?;
        }

        Command::Login { email, password } => {
            let user = store.api().login(&email, &password).await?;
            save_session(&store, &user.token, &user.username)?;
            out.message(&format!("Signed in as {}", user.username));
        }

        Command::Register {
            username,
            email,
            password,
        } => {
            let user = store.api().register(&username, &email, &password).await?;
            save_session(&store, &user.token, &user.username)?;
            out.message(&format!("Registered and signed in as {}", user.username));
        }

        Command::Logout => {
            store.session().clear()?;
            out.message("Signed out");
        }
    }

    Ok(())
}

async fn run_comments(store: &Store, out: &Output, action: CommentAction) -> anyhow::Result<()> {
    match action {
        CommentAction::List { slug } => {
            let mut panel = CommentPanel::new(store.clone(), slug);
            panel.load().await?;
            out.comments(panel.comments())?;
        }
        CommentAction::Add { slug, body } => {
            let mut panel = CommentPanel::new(store.clone(), slug);
            panel.set_draft(body);
            match panel.send().await? {
                Some(comment) => out.comments(std::slice::from_ref(&comment))?,
                None => bail!("Comment body is empty"),
            }
        }
        CommentAction::Delete { slug, id } => {
            let mut panel = CommentPanel::new(store.clone(), slug);
            panel.delete(id).await?;
            out.message(&format!("Deleted comment {}", id));
        }
    }
    Ok(())
}

fn print_profile(store: &Store, out: &Output) -> anyhow::Result<()> {
    let view = store.read(ProfileView::from_state);
    if let Some(err) = view.status.error() {
        bail!("{}", err);
    }
    out.profile(&view)
}

fn save_session(store: &Store, token: &str, username: &str) -> anyhow::Result<()> {
    store.session().save(&Session {
        token: token.to_string(),
        username: username.to_string(),
    })?;
    Ok(())
}
