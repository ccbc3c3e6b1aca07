//! Reducer for the profile concern.

use crate::store::mvi::Reducer;
use crate::store::status::Status;

use super::intent::ProfileIntent;
use super::state::ProfileState;

/// Reducer for profile state transitions.
pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Requested { request } => ProfileState {
                status: Status::Loading(request),
                in_flight: Some(request),
                ..state
            },

            ProfileIntent::Loaded { request, profile } => {
                if state.in_flight != Some(request) {
                    return state;
                }
                ProfileState {
                    profile: Some(profile),
                    status: Status::Succeeded,
                    in_flight: None,
                }
            }

            ProfileIntent::Failed { request, message } => {
                if state.in_flight != Some(request) {
                    return state;
                }
                // The previous profile stays visible.
                ProfileState {
                    status: Status::Failed(message),
                    in_flight: None,
                    ..state
                }
            }

            ProfileIntent::Cancelled { request } => {
                if state.in_flight != Some(request) {
                    return state;
                }
                ProfileState {
                    status: Status::Idle,
                    in_flight: None,
                    ..state
                }
            }

            ProfileIntent::FollowChanged {
                username,
                following,
            } => {
                let mut state = state;
                if let Some(profile) = state.profile.as_mut() {
                    if profile.username == username {
                        profile.following = following;
                    }
                }
                state.status = Status::after_mutation(state.in_flight);
                state
            }

            ProfileIntent::MutationFailed { message } => ProfileState {
                status: Status::Failed(message),
                ..state
            },
        }
    }
}
