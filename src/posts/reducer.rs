//! Reducer for the posts slice.

use crate::mvi::Reducer;

use super::intent::PostsIntent;
use super::state::{FetchStatus, PostsState};

/// Reducer for posts state transitions.
pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::FetchStarted => {
                state.status = FetchStatus::Loading;
            }

            PostsIntent::FetchSucceeded { posts } => {
                state.status = FetchStatus::Succeeded;
                state.posts.upsert_many(posts);
            }

            PostsIntent::FetchFailed { message } => {
                state.status = FetchStatus::Failed;
                state.error = Some(message);
            }

            PostsIntent::Created { post } => {
                if let Err(e) = state.posts.add_one(post) {
                    tracing::warn!(error = %e, "Dropping created post");
                }
            }

            PostsIntent::Updated { post } => match post {
                Some(post) => state.posts.upsert_one(post),
                None => tracing::warn!("Could not update post: nothing to merge"),
            },

            PostsIntent::Deleted { id } => {
                if state.posts.remove_one(id).is_none() {
                    tracing::debug!(post_id = id, "Deleted post was not in the store");
                }
            }

            PostsIntent::ReactionAdded { post_id, reaction } => {
                if !state.posts.increment_reaction(post_id, reaction) {
                    tracing::warn!(post_id, %reaction, "Reaction dropped: post not in store");
                }
            }

            PostsIntent::CountIncreased => {
                state.count = state.count.saturating_add(1);
            }
        }
        state
    }
}
