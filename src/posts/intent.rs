//! Intents for the posts slice.

use crate::mvi::Intent;

use super::model::{Post, PostId, ReactionKind};

/// Intents that can be dispatched to the posts slice.
///
/// The `Fetch*`, `Created`, `Updated` and `Deleted` variants are produced by
/// [`super::thunks`] when a remote call completes; posts they carry are
/// already normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsIntent {
    /// Bulk fetch issued.
    FetchStarted,

    /// Bulk fetch returned.
    FetchSucceeded { posts: Vec<Post> },

    /// Bulk fetch failed.
    FetchFailed { message: String },

    /// A new post was accepted by the server.
    Created { post: Post },

    /// An edit completed; `None` means there is nothing to merge.
    Updated { post: Option<Post> },

    /// The server confirmed a delete.
    Deleted { id: PostId },

    /// User clicked a reaction button.
    ReactionAdded { post_id: PostId, reaction: ReactionKind },

    /// Bump the UI counter.
    CountIncreased,
}

impl Intent for PostsIntent {}
