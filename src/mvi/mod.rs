//! Reducer plumbing shared by the posts slice and per-request status.
//!
//! Remote calls and user actions are described as intents. A reducer folds
//! each intent into the previous state value and hands back the next one;
//! selectors only ever read the result.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
