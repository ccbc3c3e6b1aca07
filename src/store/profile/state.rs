//! State for the profile concern.

use serde::Serialize;

use crate::api::Profile;
use crate::store::mvi::StoreState;
use crate::store::status::{RequestId, Status};

/// The active profile and the status of its fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub status: Status,
    /// Latest profile fetch issued. Completions for any other request are
    /// discarded.
    #[serde(skip)]
    pub in_flight: Option<RequestId>,
}

impl StoreState for ProfileState {}

impl ProfileState {
    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    /// Whether the active profile belongs to `username`.
    pub fn is_active(&self, username: &str) -> bool {
        self.profile
            .as_ref()
            .is_some_and(|p| p.username == username)
    }
}
