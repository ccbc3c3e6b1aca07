//! Profile concern: the single active profile.

mod intent;
mod reducer;
mod state;

pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use state::ProfileState;
