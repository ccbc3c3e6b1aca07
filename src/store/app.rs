//! Root state: one slice per concern.

use serde::Serialize;

use crate::store::articles::{ArticlesIntent, ArticlesReducer, ArticlesState};
use crate::store::mvi::{Intent, Reducer, StoreState};
use crate::store::profile::{ProfileIntent, ProfileReducer, ProfileState};

/// Everything the store holds. Concerns never read each other's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub articles: ArticlesState,
    pub profile: ProfileState,
}

impl StoreState for AppState {}

/// Intent routed to the concern it belongs to.
#[derive(Debug, Clone)]
pub enum AppIntent {
    Articles(ArticlesIntent),
    Profile(ProfileIntent),
}

impl Intent for AppIntent {}

impl From<ArticlesIntent> for AppIntent {
    fn from(intent: ArticlesIntent) -> Self {
        AppIntent::Articles(intent)
    }
}

impl From<ProfileIntent> for AppIntent {
    fn from(intent: ProfileIntent) -> Self {
        AppIntent::Profile(intent)
    }
}

/// Delegates to the per-concern reducers.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::Articles(intent) => AppState {
                articles: ArticlesReducer::reduce(state.articles, intent),
                ..state
            },
            AppIntent::Profile(intent) => AppState {
                profile: ProfileReducer::reduce(state.profile, intent),
                ..state
            },
        }
    }
}
