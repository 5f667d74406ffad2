//! Owner of the posts state and driver of remote operations.

use std::mem;

use chrono::TimeDelta;

use crate::api::PostApi;
use crate::config::LoadConfig;
use crate::mvi::Reducer;

use super::draft::{PostDraft, PostEdit};
use super::error::PostsError;
use super::intent::PostsIntent;
use super::model::{PostId, ReactionKind};
use super::reducer::PostsReducer;
use super::state::{FetchStatus, PostsState};
use super::thunks;

/// Holds the single [`PostsState`] value and applies every change to it.
///
/// Operations hold `&mut self` across the remote call, so one controller
/// never has two of its own calls in flight. Callers that want overlapping
/// requests can use [`thunks`] directly and [`PostsController::dispatch`]
/// the results as they arrive.
pub struct PostsController<A> {
    api: A,
    state: PostsState,
    backdate_step: TimeDelta,
}

impl<A: PostApi> PostsController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: PostsState::default(),
            backdate_step: LoadConfig::default().backdate_step(),
        }
    }

    pub fn with_load_config(mut self, load: &LoadConfig) -> Self {
        self.backdate_step = load.backdate_step();
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &PostsState {
        &self.state
    }

    /// Run the reducer on the current state.
    pub fn dispatch(&mut self, intent: PostsIntent) {
        let state = mem::take(&mut self.state);
        self.state = PostsReducer::reduce(state, intent);
    }

    /// Load every post. The outcome lands in the state's status and error;
    /// the final status is also returned.
    pub async fn fetch_posts(&mut self) -> FetchStatus {
        self.dispatch(PostsIntent::FetchStarted);
        let intent = thunks::fetch_posts(&self.api, self.backdate_step).await;
        self.dispatch(intent);
        self.state.status
    }

    /// Create a post and add it to the store. Returns the server-assigned id.
    pub async fn create_post(&mut self, draft: &PostDraft) -> Result<PostId, PostsError> {
        let post = thunks::create_post(&self.api, draft).await?;

        let id = post.id;
        if self.state.posts.contains(id) {
            tracing::warn!(post_id = id, "Server returned an id already in the store");
            return Err(PostsError::DuplicateId { id });
        }
        self.dispatch(PostsIntent::Created { post });
        Ok(id)
    }

    /// Replace a post's title, body and author.
    ///
    /// On failure the pre-edit post is merged back and the error returned.
    pub async fn update_post(&mut self, id: PostId, edit: &PostEdit) -> Result<(), PostsError> {
        if !edit.can_save() {
            return Err(PostsError::IncompleteDraft);
        }
        let original = self
            .state
            .posts
            .get(id)
            .cloned()
            .ok_or(PostsError::NotFound { id })?;

        let outcome = thunks::update_post(&self.api, &original, edit).await;
        self.dispatch(outcome.intent);

        match outcome.error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Delete a post. The store is only touched once the server confirms.
    pub async fn delete_post(&mut self, id: PostId) -> Result<(), PostsError> {
        let intent = thunks::delete_post(&self.api, id).await?;
        self.dispatch(intent);
        Ok(())
    }

    pub fn add_reaction(&mut self, post_id: PostId, reaction: ReactionKind) {
        self.dispatch(PostsIntent::ReactionAdded { post_id, reaction });
    }

    pub fn increase_count(&mut self) {
        self.dispatch(PostsIntent::CountIncreased);
    }
}
