//! Intents for the profile concern.

use crate::api::Profile;
use crate::store::mvi::Intent;
use crate::store::status::RequestId;

/// Intents that can be dispatched to the profile concern.
#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// A profile fetch was issued.
    Requested { request: RequestId },

    /// The fetch completed; the profile replaces the active one.
    Loaded { request: RequestId, profile: Profile },

    /// The fetch failed.
    Failed { request: RequestId, message: String },

    /// The fetch was abandoned before completing.
    Cancelled { request: RequestId },

    /// A follow or unfollow call succeeded for `username`.
    FollowChanged { username: String, following: bool },

    /// A follow or unfollow call failed.
    MutationFailed { message: String },
}

impl Intent for ProfileIntent {}
