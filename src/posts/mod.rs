//! The posts slice: normalized post cache, its reducer, remote operations
//! and selectors.

mod controller;
mod draft;
mod entity;
mod error;
mod intent;
mod model;
pub mod normalize;
mod operation;
mod reducer;
pub mod selectors;
mod state;
pub mod thunks;

pub use controller::PostsController;
pub use draft::{PostDraft, PostEdit};
pub use entity::EntityStore;
pub use error::{EntityError, PostsError};
pub use intent::PostsIntent;
pub use model::{Post, PostId, ReactionKind, Reactions, UnknownReaction, UserId};
pub use operation::{OperationIntent, OperationReducer, OperationStatus};
pub use reducer::PostsReducer;
pub use selectors::PostsByUser;
pub use state::{FetchStatus, PostsState};
pub use thunks::UpdateOutcome;
