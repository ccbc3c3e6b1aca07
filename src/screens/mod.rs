//! Screen models.
//!
//! Each screen reads from and dispatches into the shared [`Store`], and
//! keeps only its own local state. Screens never read each other.
//!
//! [`Store`]: crate::store::Store

mod article_detail;
mod articles;
mod comments;
mod compose;
mod profile;

pub use article_detail::{ArticleDetail, DetailState, ARTICLE_FETCH_FAILED};
pub use articles::{next_page_offset, ArticleList, WishlistView};
pub use comments::CommentPanel;
pub use compose::{parse_tags, ArticleDraft};
pub use profile::{open_own_profile, open_profile_detail, ProfileView};
