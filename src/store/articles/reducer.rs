//! Reducer for the articles concern.

use crate::store::mvi::Reducer;
use crate::store::pagination::append_page;
use crate::store::status::Status;

use super::intent::ArticlesIntent;
use super::state::ArticlesState;

/// Reducer for articles state transitions.
pub struct ArticlesReducer;

impl Reducer for ArticlesReducer {
    type State = ArticlesState;
    type Intent = ArticlesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticlesIntent::PageRequested { request } => ArticlesState {
                status: Status::Loading(request),
                in_flight: Some(request),
                ..state
            },

            ArticlesIntent::PageLoaded { request, articles } => {
                if state.in_flight != Some(request) {
                    return state;
                }
                let outcome = append_page(state.articles, state.offset, articles);
                ArticlesState {
                    articles: outcome.articles,
                    offset: outcome.offset,
                    has_more: outcome.has_more,
                    status: Status::Succeeded,
                    in_flight: None,
                }
            }

            ArticlesIntent::PageFailed { request, message } => {
                if state.in_flight != Some(request) {
                    return state;
                }
                ArticlesState {
                    status: Status::Failed(message),
                    in_flight: None,
                    ..state
                }
            }

            ArticlesIntent::PageCancelled { request } => {
                if state.in_flight != Some(request) {
                    return state;
                }
                ArticlesState {
                    status: Status::Idle,
                    in_flight: None,
                    ..state
                }
            }

            ArticlesIntent::CursorMoved { offset } => {
                // The running fetch still appends at the old cursor.
                if state.in_flight.is_some() {
                    return state;
                }
                ArticlesState {
                    offset,
                    has_more: true,
                    ..state
                }
            }

            ArticlesIntent::ArticleAdded { article } => {
                let mut articles = state.articles;
                articles.insert(0, article);
                ArticlesState {
                    articles,
                    status: Status::after_mutation(state.in_flight),
                    ..state
                }
            }

            ArticlesIntent::ArticleUpdated { article } => {
                let mut articles = state.articles;
                // Unknown slugs are dropped: the update only refreshes what is cached.
                if let Some(slot) = articles.iter_mut().find(|a| a.slug == article.slug) {
                    *slot = article;
                }
                ArticlesState {
                    articles,
                    status: Status::after_mutation(state.in_flight),
                    ..state
                }
            }

            ArticlesIntent::MutationFailed { message } => ArticlesState {
                status: Status::Failed(message),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::status::RequestId;
    use crate::store::test_support::article;

    fn loading(request: u64) -> ArticlesState {
        ArticlesReducer::reduce(
            ArticlesState::default(),
            ArticlesIntent::PageRequested {
                request: RequestId(request),
            },
        )
    }

    #[test]
    fn request_transitions_to_loading() {
        let state = loading(1);
        assert_eq!(state.status, Status::Loading(RequestId(1)));
        assert_eq!(state.in_flight, Some(RequestId(1)));
    }

    #[test]
    fn loaded_page_appends_and_advances() {
        let state = ArticlesReducer::reduce(
            loading(1),
            ArticlesIntent::PageLoaded {
                request: RequestId(1),
                articles: vec![article("a"), article("b")],
            },
        );
        assert_eq!(state.articles.len(), 2);
        assert_eq!(state.offset, 2);
        assert!(state.has_more);
        assert_eq!(state.status, Status::Succeeded);
        assert_eq!(state.in_flight, None);
    }

    #[test]
    fn superseded_completion_is_discarded() {
        let state = ArticlesReducer::reduce(
            loading(1),
            ArticlesIntent::PageRequested {
                request: RequestId(2),
            },
        );
        let state = ArticlesReducer::reduce(
            state,
            ArticlesIntent::PageLoaded {
                request: RequestId(1),
                articles: vec![article("stale")],
            },
        );
        assert!(state.articles.is_empty());
        assert_eq!(state.status, Status::Loading(RequestId(2)));
    }

    #[test]
    fn failure_keeps_sequence() {
        let mut state = loading(3);
        state.articles = vec![article("a")];
        state.offset = 1;
        let state = ArticlesReducer::reduce(
            state,
            ArticlesIntent::PageFailed {
                request: RequestId(3),
                message: "HTTP error! status: 500".into(),
            },
        );
        assert_eq!(state.articles.len(), 1);
        assert_eq!(state.offset, 1);
        assert_eq!(state.error(), Some("HTTP error! status: 500"));
    }

    #[test]
    fn cancelled_request_returns_to_idle() {
        let state = ArticlesReducer::reduce(
            loading(4),
            ArticlesIntent::PageCancelled {
                request: RequestId(4),
            },
        );
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.in_flight, None);
    }

    #[test]
    fn added_article_goes_first_without_moving_offset() {
        let state = ArticlesState {
            articles: vec![article("old")],
            offset: 1,
            ..ArticlesState::default()
        };
        let state = ArticlesReducer::reduce(
            state,
            ArticlesIntent::ArticleAdded {
                article: article("new"),
            },
        );
        assert_eq!(state.articles[0].slug, "new");
        assert_eq!(state.articles[1].slug, "old");
        assert_eq!(state.offset, 1);
    }

    #[test]
    fn update_replaces_in_place() {
        let state = ArticlesState {
            articles: vec![article("a"), article("b"), article("c")],
            ..ArticlesState::default()
        };
        let mut updated = article("b");
        updated.favorited = true;
        updated.favorites_count = 1;

        let next = ArticlesReducer::reduce(
            state.clone(),
            ArticlesIntent::ArticleUpdated {
                article: updated.clone(),
            },
        );
        assert_eq!(next.articles[0], state.articles[0]);
        assert_eq!(next.articles[1], updated);
        assert_eq!(next.articles[2], state.articles[2]);
    }

    #[test]
    fn update_for_unknown_slug_is_dropped() {
        let state = ArticlesState {
            articles: vec![article("a")],
            ..ArticlesState::default()
        };
        let next = ArticlesReducer::reduce(
            state.clone(),
            ArticlesIntent::ArticleUpdated {
                article: article("zzz"),
            },
        );
        assert_eq!(next.articles, state.articles);
        assert_eq!(next.offset, state.offset);
    }

    #[test]
    fn mutation_failure_keeps_in_flight_fetch() {
        let state = ArticlesReducer::reduce(
            loading(5),
            ArticlesIntent::MutationFailed {
                message: "No token found".into(),
            },
        );
        assert_eq!(state.error(), Some("No token found"));
        assert_eq!(state.in_flight, Some(RequestId(5)));

        let state = ArticlesReducer::reduce(
            state,
            ArticlesIntent::PageLoaded {
                request: RequestId(5),
                articles: vec![article("a")],
            },
        );
        assert_eq!(state.status, Status::Succeeded);
        assert_eq!(state.articles.len(), 1);
    }

    #[test]
    fn successful_update_clears_earlier_mutation_failure() {
        let state = ArticlesState {
            articles: vec![article("a")],
            status: Status::Failed("No token found".into()),
            ..ArticlesState::default()
        };
        let mut favorited = article("a");
        favorited.favorited = true;

        let state = ArticlesReducer::reduce(
            state,
            ArticlesIntent::ArticleUpdated { article: favorited },
        );
        assert_eq!(state.status, Status::Succeeded);
        assert!(state.articles[0].favorited);
    }

    #[test]
    fn successful_mutation_keeps_running_fetch_loading() {
        let mut state = loading(6);
        state.status = Status::Failed("No token found".into());

        let state = ArticlesReducer::reduce(
            state,
            ArticlesIntent::ArticleAdded {
                article: article("new"),
            },
        );
        assert_eq!(state.status, Status::Loading(RequestId(6)));
        assert_eq!(state.in_flight, Some(RequestId(6)));
    }

    #[test]
    fn cursor_moves_when_idle() {
        let state = ArticlesState {
            has_more: false,
            ..ArticlesState::default()
        };
        let state = ArticlesReducer::reduce(state, ArticlesIntent::CursorMoved { offset: 10 });
        assert_eq!(state.offset, 10);
        assert!(state.has_more);

        let state = ArticlesReducer::reduce(
            state,
            ArticlesIntent::PageRequested {
                request: RequestId(1),
            },
        );
        let state = ArticlesReducer::reduce(
            state,
            ArticlesIntent::PageLoaded {
                request: RequestId(1),
                articles: vec![article("a"), article("b")],
            },
        );
        assert_eq!(state.offset, 12);
    }

    #[test]
    fn cursor_stays_while_fetch_runs() {
        let state = ArticlesReducer::reduce(loading(8), ArticlesIntent::CursorMoved { offset: 10 });
        assert_eq!(state.offset, 0);
        assert_eq!(state.in_flight, Some(RequestId(8)));
    }
}
