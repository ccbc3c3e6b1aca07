//! Model-View-Intent (MVI) primitives for the store.
//!
//! # Architecture
//!
//! ```text
//! Operation ──→ Intent ──→ Reducer ──→ State ──→ Screen
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain data, cloned out to readers
//! - **Intent**: a request starting or a network call completing
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
