//! Articles concern: the cached article sequence and its pagination.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Sequence, cursor and status
//! - `intent.rs` - Request lifecycle and article edits
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::ArticlesIntent;
pub use reducer::ArticlesReducer;
pub use state::ArticlesState;
